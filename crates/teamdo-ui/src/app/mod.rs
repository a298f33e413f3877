//! Application root: localization gate, shared services and routing.

use crate::components::notice_host::NoticeHost;
use crate::components::shell::AppShell;
use crate::config::ClientConfig;
use crate::core::host::Services;
use crate::core::inflight::InFlight;
use crate::core::notice::NoticeQueue;
use crate::core::store::AppStore;
use crate::features::profile::view::ProfilePage;
use crate::features::session::view::{LoginPage, RegisterPage};
use crate::features::session::workflow::SessionWorkflow;
use crate::features::teams::view::TeamsPage;
use crate::features::todos::view::TodosPage;
use crate::i18n::{LocaleCatalog, LocaleCode, LocalizationGate, Translator, initialize};
use crate::services::api::ApiClient;
use crate::services::browser::{
    DialogConfirm, HttpBundleSource, LocalCredentialStore, RouterNavigation,
};
use preferences::{client_config, load_locale, persist_locale};
pub(crate) use routes::Route;
use std::rc::Rc;
use teamdo_telemetry::{LoggingConfig, init_logging};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

mod preferences;
mod routes;

const FATAL_TITLE: &str = "Teamdo could not start";
const FATAL_BODY: &str = "The language files failed to load. Check your connection and reload the page.";

#[function_component(TeamdoApp)]
fn teamdo_app() -> Html {
    html! {
        <BrowserRouter>
            <LocalizedRoot />
        </BrowserRouter>
    }
}

/// Holds rendering back until the default bundle has loaded.
#[function_component(LocalizedRoot)]
fn localized_root() -> Html {
    let config = use_memo(|_| client_config(), ());
    let gate = use_state(|| LocalizationGate::Pending);
    {
        let gate = gate.clone();
        let config = (*config).clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let source = HttpBundleSource::new(config);
                    let result = initialize(&source, load_locale()).await;
                    gate.set(LocalizationGate::from_result(result));
                });
                || ()
            },
            (),
        );
    }

    let on_locale = {
        let gate = gate.clone();
        let config = (*config).clone();
        Callback::from(move |locale: LocaleCode| {
            let LocalizationGate::Ready(catalog) = (*gate).clone() else {
                return;
            };
            if catalog.active() == locale {
                return;
            }
            let gate = gate.clone();
            let source = HttpBundleSource::new(config.clone());
            spawn_local(async move {
                match catalog.switch_locale(&source, locale).await {
                    Ok(next) => {
                        persist_locale(locale);
                        gate.set(LocalizationGate::Ready(next));
                    }
                    Err(err) => {
                        tracing::warn!(locale = locale.code(), error = %err, "language switch failed");
                    }
                }
            });
        })
    };

    match &*gate {
        LocalizationGate::Pending => html! { <div class="app-loading" aria-busy="true"></div> },
        LocalizationGate::Failed(_) => html! {
            <main class="fatal-screen" role="alert">
                <h1>{FATAL_TITLE}</h1>
                <p>{FATAL_BODY}</p>
            </main>
        },
        LocalizationGate::Ready(catalog) => html! {
            <ReadyApp config={(*config).clone()} catalog={catalog.clone()} {on_locale} />
        },
    }
}

#[derive(Properties, PartialEq)]
struct ReadyAppProps {
    config: ClientConfig,
    catalog: LocaleCatalog,
    on_locale: Callback<LocaleCode>,
}

#[function_component(ReadyApp)]
fn ready_app(props: &ReadyAppProps) -> Html {
    let navigator = use_navigator();
    let services = {
        let config = props.config.clone();
        use_memo(
            move |_| {
                let credentials = Rc::new(LocalCredentialStore);
                Services {
                    api: Rc::new(ApiClient::new(config, credentials.clone())),
                    credentials,
                    navigation: Rc::new(RouterNavigation::new(navigator)),
                    confirm: Rc::new(DialogConfirm),
                    inflight: InFlight::default(),
                }
            },
            (),
        )
    };
    let translator = use_memo(LocaleCatalog::translator, props.catalog.clone());
    {
        let cap = props.config.max_notices;
        use_effect_with_deps(
            move |_| {
                Dispatch::<AppStore>::new().reduce_mut(|store| {
                    if store.notices.items().is_empty() {
                        store.notices = NoticeQueue::with_cap(cap);
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_logout = {
        let services = services.clone();
        Callback::from(move |()| SessionWorkflow::new(&services).logout())
    };
    let render = {
        let services = (*services).clone();
        let translator = (*translator).clone();
        move |route: Route| {
            let services = services.clone();
            let translator = translator.clone();
            match route {
                Route::Home => html! { <Redirect<Route> to={Route::Todos} /> },
                Route::Login => html! { <LoginPage {services} {translator} /> },
                Route::Register => html! { <RegisterPage {services} {translator} /> },
                Route::Todos => html! { <TodosPage {services} {translator} /> },
                Route::Teams => html! { <TeamsPage {services} {translator} /> },
                Route::Profile => html! { <ProfilePage {services} {translator} /> },
                Route::NotFound => html! {
                    <section class="panel not-found">
                        <h2>{translator.text("app.notFound")}</h2>
                        <Link<Route> to={Route::Todos}>{translator.text("nav.todos")}</Link<Route>>
                    </section>
                },
            }
        }
    };

    html! {
        <ContextProvider<Translator> context={(*translator).clone()}>
            <AppShell
                locale={props.catalog.active()}
                available={props.catalog.available()}
                on_locale={props.on_locale.clone()}
                {on_logout}
            >
                <Switch<Route> {render} />
            </AppShell>
            <NoticeHost dismiss_ms={props.config.notice_dismiss_ms} />
        </ContextProvider<Translator>>
    }
}

/// Entry point used by the wasm binary.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let logging = LoggingConfig {
        build_sha: option_env!("TEAMDO_BUILD_SHA").unwrap_or("dev"),
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        gloo::console::error!(format!("logging init failed: {err:#}"));
    }
    tracing::info!(build = teamdo_telemetry::build_sha(), "teamdo starting");
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TeamdoApp>::with_root(root).render();
    } else {
        yew::Renderer::<TeamdoApp>::new().render();
    }
}
