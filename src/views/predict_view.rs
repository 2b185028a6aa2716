use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{DashboardLayout, MapView, Spinner};
use crate::hooks::{use_location, use_session, use_toast};
use crate::models::MapMarker;
use crate::routes::Route;
use crate::utils::{format_confidence, format_coordinates};
use crate::viewmodels::PredictionViewModel;

#[function_component(PredictView)]
pub fn predict_view() -> Html {
    let session = use_session();
    let location = use_location();
    let toast = use_toast();
    let predicting = use_state(|| false);
    let training = use_state(|| false);
    let simulated = use_state(|| false);

    let on_predict = {
        let token = session.token();
        let current = location.state.current;
        let set_predicted = location.set_predicted.clone();
        let notify = toast.notify.clone();
        let predicting = predicting.clone();
        let simulated = simulated.clone();

        Callback::from(move |_: MouseEvent| {
            if *predicting {
                return;
            }
            predicting.set(true);

            let token = token.clone();
            let set_predicted = set_predicted.clone();
            let notify = notify.clone();
            let predicting = predicting.clone();
            let simulated = simulated.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let report = PredictionViewModel::new()
                    .predict(current, token.as_deref(), js_sys::Math::random)
                    .await;
                if report.prediction.is_some() {
                    simulated.set(report.simulated);
                    set_predicted.emit(report.prediction);
                }
                notify.emit(report.notification);
                predicting.set(false);
            });
        })
    };

    let on_improve = {
        let token = session.token();
        let notify = toast.notify.clone();
        let training = training.clone();

        Callback::from(move |_: MouseEvent| {
            if *training {
                return;
            }
            training.set(true);

            let token = token.clone();
            let notify = notify.clone();
            let training = training.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let notification = PredictionViewModel::new().improve_model(token.as_deref()).await;
                notify.emit(notification);
                training.set(false);
            });
        })
    };

    let on_clear = {
        let clear = location.clear_prediction.clone();
        Callback::from(move |_: MouseEvent| clear.emit(()))
    };

    let state = &location.state;
    let markers = MapMarker::collect(state.current.as_ref(), state.predicted.as_ref(), &[]);

    html! {
        <DashboardLayout>
            <section class="page-header">
                <h1>{"AI Prediction"}</h1>
                <p class="muted">{"Predict where you're heading next from your travel patterns."}</p>
            </section>

            <section class="card">
                <h2>{"Current location"}</h2>
                { match state.current {
                    Some(c) => html! { <p class="mono">{format_coordinates(c.latitude, c.longitude)}</p> },
                    None => html! {
                        <p class="muted">
                            {"No location yet. "}
                            <Link<Route> to={Route::Location}>{"Enable location"}</Link<Route>>
                            {" to get a prediction."}
                        </p>
                    },
                } }
                <div class="button-row">
                    <button class="btn-primary" onclick={on_predict} disabled={*predicting}>
                        { if *predicting { "Analyzing..." } else { "🧠 Predict next location" } }
                    </button>
                    <button class="btn-outline" onclick={on_improve} disabled={*training}>
                        { if *training { "Updating model..." } else { "Improve model" } }
                    </button>
                </div>
                if *predicting {
                    <Spinner label={AttrValue::from("Running the model...")} />
                }
            </section>

            if let Some(prediction) = state.predicted {
                <section class="card prediction-card">
                    <div class="row">
                        <h2>{"Predicted next location"}</h2>
                        if *simulated {
                            <span class="badge demo">{"Demonstration data"}</span>
                        }
                    </div>
                    <p class="mono">{format_coordinates(prediction.latitude, prediction.longitude)}</p>
                    <div class="confidence">
                        <span>{"Confidence"}</span>
                        <div class="progress">
                            <div class="progress-bar" style={format!("width: {}", format_confidence(prediction.confidence))}></div>
                        </div>
                        <span class="badge">{format_confidence(prediction.confidence)}</span>
                    </div>
                    <button class="btn-ghost" onclick={on_clear}>{"Clear prediction"}</button>
                </section>
            }

            <section class="card">
                <MapView center={state.search_location()} markers={markers} height="360px" />
            </section>
        </DashboardLayout>
    }
}
