use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{DashboardLayout, MapView};
use crate::hooks::{use_location, use_session};
use crate::models::MapMarker;
use crate::routes::Route;
use crate::utils::{display_name, format_confidence, format_coordinates, greeting_for_hour};

const FEATURE_CARDS: [(Route, &str, &str, &str); 5] = [
    (Route::Location, "📍", "Location Tracking", "See where you are and where you've been"),
    (Route::Predict, "🧠", "AI Prediction", "Predict your next destination"),
    (Route::Assistant, "💬", "Safety Assistant", "Ask anything about travel safety"),
    (Route::Stays, "🏨", "Safe Stays", "Find accommodation with high safety scores"),
    (Route::EmergencyContacts, "📞", "Emergency Contacts", "Who gets alerted when you press SOS"),
];

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let session = use_session();
    let location = use_location();

    {
        let locate = location.locate.clone();
        let known = location.state.current.is_some();
        use_effect_with((), move |_| {
            if !known {
                log::info!("📍 Sin ubicación, solicitando al navegador");
                locate.emit(Callback::noop());
            }
            || ()
        });
    }

    let hour = js_sys::Date::new_0().get_hours();
    let email = session.state.user().map(|u| u.email.clone()).unwrap_or_default();

    let current = location.state.current;
    let predicted = location.state.predicted;
    let markers = MapMarker::collect(current.as_ref(), predicted.as_ref(), &[]);

    let on_locate = {
        let locate = location.locate.clone();
        Callback::from(move |_: MouseEvent| locate.emit(Callback::noop()))
    };

    html! {
        <DashboardLayout>
            <section class="page-header">
                <h1>{format!("{}, {}", greeting_for_hour(hour), display_name(&email))}</h1>
                <p class="muted">{"Here's your travel safety overview."}</p>
            </section>

            <section class="stat-grid">
                <div class="card stat-card">
                    <span class="stat-label">{"Current location"}</span>
                    { match current {
                        Some(c) => html! { <span class="stat-value mono">{format_coordinates(c.latitude, c.longitude)}</span> },
                        None => html! {
                            <button class="btn-outline small" onclick={on_locate}>{"Enable location"}</button>
                        },
                    } }
                </div>
                <div class="card stat-card">
                    <span class="stat-label">{"Next predicted stop"}</span>
                    { match predicted {
                        Some(p) => html! {
                            <span class="stat-value">
                                <span class="mono">{format_coordinates(p.latitude, p.longitude)}</span>
                                <span class="badge">{format_confidence(p.confidence)}</span>
                            </span>
                        },
                        None => html! {
                            <Link<Route> to={Route::Predict} classes={classes!("btn-outline", "small")}>{"Run prediction"}</Link<Route>>
                        },
                    } }
                </div>
            </section>

            <section class="card">
                <h2>{"Your map"}</h2>
                <MapView center={location.state.search_location()} markers={markers} height="320px" />
            </section>

            <section class="feature-grid">
                { for FEATURE_CARDS.iter().map(|(route, icon, title, text)| html! {
                    <Link<Route> to={*route} classes={classes!("feature-card")}>
                        <span class="feature-icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </Link<Route>>
                }) }
            </section>

            <section class="card sos-banner">
                <div>
                    <h2>{"In danger?"}</h2>
                    <p class="muted">{"Alert your emergency contacts with your location."}</p>
                </div>
                <Link<Route> to={Route::Sos} classes={classes!("btn-danger")}>{"🆘 SOS"}</Link<Route>>
            </section>
        </DashboardLayout>
    }
}
