use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::Route;

const FEATURES: [(&str, &str, &str); 4] = [
    ("🧠", "AI Location Prediction", "Anticipate where you're heading and check safety before you arrive."),
    ("💬", "Safety Assistant", "Ask about neighbourhoods, transport and local emergency numbers."),
    ("🏨", "Safe Stays", "Accommodation ranked by a safety score around your next stop."),
    ("🆘", "One-tap SOS", "Alert your emergency contacts with your exact coordinates."),
];

#[function_component(LandingView)]
pub fn landing_view() -> Html {
    let session = use_session();

    let actions = if session.is_authenticated() {
        html! {
            <Link<Route> to={Route::Dashboard} classes={classes!("btn-primary")}>{"Open dashboard"}</Link<Route>>
        }
    } else {
        html! {
            <>
                <Link<Route> to={Route::Register} classes={classes!("btn-primary")}>{"Get started"}</Link<Route>>
                <Link<Route> to={Route::Login} classes={classes!("btn-outline")}>{"Sign in"}</Link<Route>>
            </>
        }
    };

    html! {
        <div class="landing">
            <header class="landing-header">
                <span class="brand">
                    <span class="brand-icon">{"🛡️"}</span>
                    <span class="brand-name">{"SafeTravel AI"}</span>
                </span>
            </header>

            <section class="hero">
                <h1>{"Travel smarter. Stay safer."}</h1>
                <p class="hero-subtitle">
                    {"Real-time location awareness, AI predictions and emergency tools in one place."}
                </p>
                <div class="hero-actions">{actions}</div>
            </section>

            <section class="feature-grid">
                { for FEATURES.iter().map(|(icon, title, text)| html! {
                    <div class="feature-card">
                        <span class="feature-icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>
        </div>
    }
}
