use crate::app::Route;
use crate::components::locale_menu::LocaleMenu;
use crate::i18n::{LocaleCode, Translator};
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) locale: LocaleCode,
    pub(crate) available: Vec<LocaleCode>,
    pub(crate) on_locale: Callback<LocaleCode>,
    pub(crate) on_logout: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let t = use_context::<Translator>().unwrap_or_default();
    let active = use_route::<Route>().unwrap_or(Route::Todos);
    let signed_out_view = matches!(active, Route::Login | Route::Register);
    let logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="app-shell">
            <header class="topbar">
                <strong class="brand">{t.text("app.title")}</strong>
                {if signed_out_view { html! {} } else { html! {
                    <nav>
                        {nav_item(Route::Todos, t.text("nav.todos"), &active)}
                        {nav_item(Route::Teams, t.text("nav.teams"), &active)}
                        {nav_item(Route::Profile, t.text("nav.profile"), &active)}
                    </nav>
                }}}
                <div class="topbar-actions">
                    <LocaleMenu
                        locale={props.locale}
                        available={props.available.clone()}
                        label={t.text("nav.language")}
                        on_select={props.on_locale.clone()}
                    />
                    {if signed_out_view { html! {} } else { html! {
                        <button class="ghost" onclick={logout}>{t.text("nav.logout")}</button>
                    }}}
                </div>
            </header>
            <main class="content">
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(route: Route, label: String, active: &Route) -> Html {
    let class = if &route == active { "active" } else { "" };
    html! {
        <Link<Route> to={route} classes={classes!("nav-item", class)}>
            {label}
        </Link<Route>>
    }
}
