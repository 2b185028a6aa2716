use yew::prelude::*;

use crate::components::{DashboardLayout, SkeletonList};
use crate::hooks::{use_location, use_session, use_toast};
use crate::models::Accommodation;
use crate::utils::format_coordinates;
use crate::viewmodels::StaysViewModel;

fn stay_card(stay: &Accommodation) -> Html {
    let tier = stay.safety_tier();
    html! {
        <div key={stay.id.clone()} class="card stay-card">
            if let Some(url) = &stay.image_url {
                <img class="stay-image" src={url.clone()} alt={stay.name.clone()} loading="lazy" />
            }
            <div class="stay-body">
                <div class="row">
                    <h3>{stay.name.clone()}</h3>
                    <span class={classes!("safety-badge", tier.css_class())}>
                        {format!("🛡️ {}", stay.safety_score)}
                    </span>
                </div>
                <p class="muted small">
                    {format!("{} · {} · ⭐ {:.1}", stay.kind, stay.price_range, stay.rating)}
                    if !stay.distance.is_empty() {
                        {format!(" · {}", stay.distance)}
                    }
                </p>
                if !stay.safety_notes.is_empty() {
                    <p class="stay-notes">{stay.safety_notes.clone()}</p>
                }
            </div>
        </div>
    }
}

#[function_component(StaysView)]
pub fn stays_view() -> Html {
    let session = use_session();
    let location = use_location();
    let toast = use_toast();
    let stays = use_state(Vec::<Accommodation>::new);
    let demo = use_state(|| false);
    let searching = use_state(|| false);

    let search_from = location.state.search_location();

    let on_search = {
        let token = session.token();
        let notify = toast.notify.clone();
        let stays = stays.clone();
        let demo = demo.clone();
        let searching = searching.clone();

        Callback::from(move |_: MouseEvent| {
            if *searching {
                return;
            }
            searching.set(true);

            let token = token.clone();
            let notify = notify.clone();
            let stays = stays.clone();
            let demo = demo.clone();
            let searching = searching.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match StaysViewModel::new().search(search_from, token.as_deref()).await {
                    Ok(report) => {
                        log::info!("🏨 {} alojamientos (demo: {})", report.stays.len(), report.demo);
                        demo.set(report.demo);
                        stays.set(report.stays);
                        notify.emit(report.notification);
                    }
                    Err(notification) => notify.emit(notification),
                }
                searching.set(false);
            });
        })
    };

    html! {
        <DashboardLayout>
            <section class="page-header row">
                <div>
                    <h1>{"Safe Stays"}</h1>
                    <p class="muted">
                        { match (location.state.predicted, search_from) {
                            (Some(_), Some(c)) => format!("Around your predicted stop: {}", format_coordinates(c.latitude, c.longitude)),
                            (None, Some(c)) => format!("Around you: {}", format_coordinates(c.latitude, c.longitude)),
                            _ => "Enable location or run a prediction to search nearby.".to_string(),
                        } }
                    </p>
                </div>
                <button class="btn-primary" onclick={on_search} disabled={*searching}>
                    { if *searching { "Searching..." } else { "🔍 Find safe stays" } }
                </button>
            </section>

            if *demo && !stays.is_empty() {
                <p class="badge demo">{"Demonstration data"}</p>
            }

            { if *searching {
                html! { <SkeletonList rows={4} /> }
            } else if stays.is_empty() {
                html! { <p class="muted empty-state">{"No results yet. Start a search to see recommendations."}</p> }
            } else {
                html! {
                    <section class="stay-grid">
                        { for stays.iter().map(stay_card) }
                    </section>
                }
            } }
        </DashboardLayout>
    }
}
