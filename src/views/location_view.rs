use chrono::Utc;
use yew::prelude::*;

use crate::components::{DashboardLayout, MapView, SkeletonList};
use crate::hooks::{use_location, use_session, use_toast};
use crate::models::{LocationFix, LocationRecord, MapMarker, Notification};
use crate::utils::{format_coordinates, format_relative_time};
use crate::viewmodels::LocationViewModel;

async fn load_history(
    token: Option<String>,
    set_history: Callback<Vec<LocationRecord>>,
    notify: Callback<Notification>,
) {
    match LocationViewModel::new().history(token.as_deref()).await {
        Some(Ok(history)) => {
            log::info!("📜 {} ubicaciones en historial", history.len());
            set_history.emit(history);
        }
        Some(Err(e)) => {
            log::error!("❌ Error cargando historial: {}", e);
            notify.emit(Notification::error("History unavailable", e.to_string()));
        }
        None => {}
    }
}

fn relative_time(record: &LocationRecord) -> String {
    match record.parsed_timestamp() {
        Some(ts) => format_relative_time(&ts, &Utc::now()),
        None => record.timestamp.clone(),
    }
}

#[function_component(LocationView)]
pub fn location_view() -> Html {
    let session = use_session();
    let location = use_location();
    let toast = use_toast();
    let loading_history = use_state(|| true);
    let refreshing = use_state(|| false);

    {
        let token = session.token();
        let set_history = location.set_history.clone();
        let notify = toast.notify.clone();
        let loading_history = loading_history.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                load_history(token, set_history, notify).await;
                loading_history.set(false);
            });
            || ()
        });
    }

    let on_refresh = {
        let token = session.token();
        let locate = location.locate.clone();
        let set_history = location.set_history.clone();
        let notify = toast.notify.clone();
        let refreshing = refreshing.clone();

        Callback::from(move |_: MouseEvent| {
            if *refreshing {
                return;
            }
            refreshing.set(true);

            let token = token.clone();
            let set_history = set_history.clone();
            let notify = notify.clone();
            let refreshing = refreshing.clone();
            locate.emit(Callback::from(move |fix: Option<LocationFix>| {
                let Some(fix) = fix else {
                    refreshing.set(false);
                    return;
                };
                let token = token.clone();
                let set_history = set_history.clone();
                let notify = notify.clone();
                let refreshing = refreshing.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Some(notification) = LocationViewModel::new().record(&fix, token.as_deref()).await {
                        notify.emit(notification);
                    }
                    load_history(token, set_history, notify).await;
                    refreshing.set(false);
                });
            }));
        })
    };

    let state = &location.state;
    let markers = MapMarker::collect(state.current.as_ref(), None, &state.history);

    html! {
        <DashboardLayout>
            <section class="page-header row">
                <div>
                    <h1>{"Location"}</h1>
                    <p class="muted">{"Your current position and recent places."}</p>
                </div>
                <button class="btn-primary" onclick={on_refresh} disabled={*refreshing}>
                    { if *refreshing { "Locating..." } else { "📍 Update location" } }
                </button>
            </section>

            <section class="card">
                <h2>{"Current location"}</h2>
                { match state.current {
                    Some(c) => html! { <p class="mono">{format_coordinates(c.latitude, c.longitude)}</p> },
                    None => html! { <p class="muted">{"Location not available yet."}</p> },
                } }
                <MapView center={state.current} markers={markers} height="360px" />
            </section>

            <section class="card">
                <h2>{"Location history"}</h2>
                { if *loading_history {
                    html! { <SkeletonList rows={3} /> }
                } else if state.history.is_empty() {
                    html! { <p class="muted">{"No location history yet."}</p> }
                } else {
                    html! {
                        <ul class="history-list">
                            { for state.history.iter().map(|record| html! {
                                <li key={record.id.clone()} class="history-item">
                                    <div>
                                        <p class="history-address">
                                            { record.address.clone().unwrap_or_else(|| "Unknown place".to_string()) }
                                        </p>
                                        <p class="mono small">{format_coordinates(record.latitude, record.longitude)}</p>
                                    </div>
                                    <span class="muted small">{relative_time(record)}</span>
                                </li>
                            }) }
                        </ul>
                    }
                } }
            </section>
        </DashboardLayout>
    }
}
