// ============================================================================
// USE LOCATION HOOK - posición actual, historial y predicción
// ============================================================================

use yew::prelude::*;

use crate::models::{Coordinates, LocationFix, LocationRecord, Notification, PredictedLocation};
use crate::services::{current_position, GeolocationError};
use crate::stores::{LocationAction, LocationStore};
use super::app_context::use_app_context;
use super::use_toast::use_toast;

#[derive(Clone)]
pub struct UseLocationHandle {
    pub state: UseReducerHandle<LocationStore>,
    pub set_current: Callback<Coordinates>,
    pub set_history: Callback<Vec<LocationRecord>>,
    pub set_predicted: Callback<Option<PredictedLocation>>,
    pub clear_prediction: Callback<()>,
    /// Ask the browser for a position; the fix (if any) is stored and passed on.
    pub locate: Callback<Callback<Option<LocationFix>>>,
}

pub fn geolocation_notification(error: &GeolocationError) -> Notification {
    match error {
        GeolocationError::Unsupported => Notification::error("Not supported", error.to_string()),
        GeolocationError::PermissionDenied => Notification::error(
            "Location access denied",
            "Please enable location access for better experience.",
        ),
        _ => Notification::error("Location error", "Unable to get your current location."),
    }
}

#[hook]
pub fn use_location() -> UseLocationHandle {
    let state = use_app_context().location;
    let toast = use_toast();

    let set_current = {
        let state = state.clone();
        Callback::from(move |c: Coordinates| state.dispatch(LocationAction::SetCurrent(c)))
    };

    let set_history = {
        let state = state.clone();
        Callback::from(move |h: Vec<LocationRecord>| state.dispatch(LocationAction::SetHistory(h)))
    };

    let set_predicted = {
        let state = state.clone();
        Callback::from(move |p: Option<PredictedLocation>| state.dispatch(LocationAction::SetPredicted(p)))
    };

    let clear_prediction = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(LocationAction::ClearPrediction))
    };

    let locate = {
        let state = state.clone();
        let notify = toast.notify.clone();
        Callback::from(move |done: Callback<Option<LocationFix>>| {
            let state = state.clone();
            let notify = notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match current_position().await {
                    Ok(fix) => {
                        state.dispatch(LocationAction::SetCurrent(fix.coordinates()));
                        done.emit(Some(fix));
                    }
                    Err(e) => {
                        log::error!("❌ Geolocalización: {}", e);
                        notify.emit(geolocation_notification(&e));
                        done.emit(None);
                    }
                }
            });
        })
    };

    UseLocationHandle {
        state,
        set_current,
        set_history,
        set_predicted,
        clear_prediction,
        locate,
    }
}
