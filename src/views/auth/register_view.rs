use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_toast;
use crate::models::Notification;
use crate::routes::Route;
use crate::viewmodels::{AuthViewModel, PasswordChecks, RegisterError};

fn check_row(ok: bool, label: &'static str) -> Html {
    html! {
        <li class={classes!("password-check", ok.then_some("ok"))}>
            <span>{ if ok { "✓" } else { "○" } }</span>
            {label}
        </li>
    }
}

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let toast = use_toast();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirmation = use_state(String::new);
    let loading = use_state(|| false);

    let checks = PasswordChecks::evaluate(&password, &confirmation);

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let confirmation = confirmation.clone();
        let loading = loading.clone();
        let notify = toast.notify.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let email_val = email.trim().to_string();
            let password_val = (*password).clone();
            let confirmation_val = (*confirmation).clone();

            loading.set(true);
            let loading = loading.clone();
            let notify = notify.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match AuthViewModel::new().register(&email_val, &password_val, &confirmation_val).await {
                    Ok(user) => {
                        log::info!("✅ Cuenta creada: {}", user.email);
                        notify.emit(Notification::info("Account created!", "Please sign in with your new account."));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(RegisterError::Password(e)) => {
                        notify.emit(Notification::error(e.title(), e.to_string()));
                    }
                    Err(RegisterError::Api(e)) => {
                        log::error!("❌ Registro falló: {}", e);
                        notify.emit(Notification::error("Registration failed", e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    <span class="brand-icon">{"🛡️"}</span>
                    <span class="brand-name">{"SafeTravel AI"}</span>
                </Link<Route>>
                <h1>{"Create account"}</h1>
                <p class="auth-subtitle">{"Start traveling with confidence"}</p>

                <form onsubmit={on_submit} class="auth-form">
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={bind(&email)}
                        autocomplete="email"
                        required=true
                    />

                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                        autocomplete="new-password"
                        required=true
                    />

                    <label for="confirm-password">{"Confirm password"}</label>
                    <input
                        id="confirm-password"
                        type="password"
                        value={(*confirmation).clone()}
                        oninput={bind(&confirmation)}
                        autocomplete="new-password"
                        required=true
                    />

                    <ul class="password-checks">
                        { check_row(checks.min_length, "At least 6 characters") }
                        { check_row(checks.has_number, "Contains a number") }
                        { check_row(checks.matches, "Passwords match") }
                    </ul>

                    <button type="submit" class="btn-primary" disabled={*loading}>
                        { if *loading { "Creating account..." } else { "Create account" } }
                    </button>
                </form>

                <p class="auth-switch">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
