//! Login and registration pages.

use crate::app::Route;
use crate::components::{PageProps, surface};
use crate::features::session::state::{LoginForm, RegisterForm};
use crate::features::session::workflow::SessionWorkflow;
use crate::i18n::Translator;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

fn bind(field: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            field.set(input.value());
        }
    })
}

fn field(t: &Translator, key: &str, kind: &'static str, value: &UseStateHandle<String>) -> Html {
    html! {
        <label class="form-field">
            <span>{t.text(key)}</span>
            <input type={kind} value={(**value).clone()} oninput={bind(value.clone())} />
        </label>
    }
}

#[function_component(LoginPage)]
pub(crate) fn login_page(props: &PageProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);
    let onsubmit = {
        let services = props.services.clone();
        let username = username.clone();
        let password = password.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let form = LoginForm {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let services = services.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let outcome = SessionWorkflow::new(&services).login(&form).await;
                busy.set(false);
                surface(outcome);
            });
        })
    };

    let t = &props.translator;
    html! {
        <section class="panel auth-page">
            <h2>{t.text("auth.loginTitle")}</h2>
            <form class="auth-form" {onsubmit}>
                {field(t, "auth.username", "text", &username)}
                {field(t, "auth.password", "password", &password)}
                <button type="submit" class="solid" disabled={*busy}>{t.text("auth.login")}</button>
            </form>
            <Link<Route> to={Route::Register}>{t.text("auth.noAccount")}</Link<Route>>
        </section>
    }
}

#[function_component(RegisterPage)]
pub(crate) fn register_page(props: &PageProps) -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let busy = use_state(|| false);
    let onsubmit = {
        let services = props.services.clone();
        let (username, email, password, confirm) =
            (username.clone(), email.clone(), password.clone(), confirm.clone());
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let form = RegisterForm {
                username: (*username).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm).clone(),
            };
            let services = services.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let outcome = SessionWorkflow::new(&services).register(&form).await;
                busy.set(false);
                surface(outcome);
            });
        })
    };

    let t = &props.translator;
    html! {
        <section class="panel auth-page">
            <h2>{t.text("auth.registerTitle")}</h2>
            <form class="auth-form" {onsubmit}>
                {field(t, "auth.username", "text", &username)}
                {field(t, "auth.email", "email", &email)}
                {field(t, "auth.password", "password", &password)}
                {field(t, "auth.confirmPassword", "password", &confirm)}
                <button type="submit" class="solid" disabled={*busy}>{t.text("auth.register")}</button>
            </form>
            <Link<Route> to={Route::Login}>{t.text("auth.haveAccount")}</Link<Route>>
        </section>
    }
}
