use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_session, use_toast};
use crate::models::Notification;
use crate::routes::Route;
use crate::viewmodels::auth_viewmodel::demo_credentials;
use crate::viewmodels::AuthViewModel;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let login = session.login.clone();
        let notify = toast.notify.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let email_val = email.trim().to_string();
            let password_val = (*password).clone();
            if email_val.is_empty() || password_val.is_empty() {
                notify.emit(Notification::error("Missing fields", "Please enter your email and password."));
                return;
            }

            loading.set(true);
            let loading = loading.clone();
            let login = login.clone();
            let notify = notify.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match AuthViewModel::new().login(&email_val, &password_val).await {
                    Ok((user, token)) => {
                        log::info!("✅ Login OK: {}", user.email);
                        login.emit((user, token));
                        notify.emit(Notification::info("Welcome back!", "You have successfully logged in."));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Login falló: {}", e);
                        notify.emit(Notification::error("Login failed", e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_demo = {
        let login = session.login.clone();
        let notify = toast.notify.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("🎭 Entrando con cuenta demo");
            login.emit(demo_credentials());
            notify.emit(Notification::info("Demo mode", "You are exploring SafeTravel with sample data."));
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Dashboard);
            }
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    <span class="brand-icon">{"🛡️"}</span>
                    <span class="brand-name">{"SafeTravel AI"}</span>
                </Link<Route>>
                <h1>{"Welcome back"}</h1>
                <p class="auth-subtitle">{"Sign in to continue your safe journey"}</p>

                <form onsubmit={on_submit} class="auth-form">
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={on_email_change}
                        autocomplete="email"
                        required=true
                    />

                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        value={(*password).clone()}
                        oninput={on_password_change}
                        autocomplete="current-password"
                        required=true
                    />

                    <button type="submit" class="btn-primary" disabled={*loading}>
                        { if *loading { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>

                <div class="auth-divider"><span>{"or"}</span></div>
                <button type="button" class="btn-outline" onclick={on_demo}>{"Try demo account"}</button>

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register}>{"Create one"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
