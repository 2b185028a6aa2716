// ============================================================================
// GEOLOCATION - navigator.geolocation como future
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use js_sys::{Function, Object, Reflect};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PositionOptions;

use crate::models::LocationFix;

const TIMEOUT_MS: f64 = 15_000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported by this browser.")]
    Unsupported,
    #[error("Location permission was denied.")]
    PermissionDenied,
    #[error("Your position could not be determined.")]
    Unavailable,
    #[error("Timed out while locating you.")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

impl GeolocationError {
    /// `GeolocationPositionError.code`
    fn from_code(code: u32, message: String) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::Unavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Other(message),
        }
    }
}

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<LocationFix, GeolocationError>>>>>;

/// One high-accuracy reading
pub async fn current_position() -> Result<LocationFix, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let reply = reply.clone();
        Closure::once_into_js(move |position: JsValue| {
            if let Some(tx) = reply.borrow_mut().take() {
                let _ = tx.send(fix_from_position(&position));
            }
        })
    };
    let on_error = {
        let reply = reply.clone();
        Closure::once_into_js(move |error: JsValue| {
            let code = number_field(&error, "code").unwrap_or(0.0) as u32;
            let message = Reflect::get(&error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
                .unwrap_or_default();
            if let Some(tx) = reply.borrow_mut().take() {
                let _ = tx.send(Err(GeolocationError::from_code(code, message)));
            }
        })
    };

    let options = Object::new();
    let _ = Reflect::set(&options, &JsValue::from_str("enableHighAccuracy"), &JsValue::TRUE);
    let _ = Reflect::set(&options, &JsValue::from_str("timeout"), &JsValue::from_f64(TIMEOUT_MS));
    let _ = Reflect::set(&options, &JsValue::from_str("maximumAge"), &JsValue::from_f64(0.0));

    log::debug!("📍 Solicitando posición (alta precisión)...");
    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref::<Function>(),
            Some(on_error.unchecked_ref::<Function>()),
            options.unchecked_ref::<PositionOptions>(),
        )
        .map_err(|e| GeolocationError::Other(format!("{:?}", e)))?;

    rx.await
        .map_err(|_| GeolocationError::Other("no answer from the browser".to_string()))?
}

fn fix_from_position(position: &JsValue) -> Result<LocationFix, GeolocationError> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|_| GeolocationError::Unavailable)?;
    let latitude = number_field(&coords, "latitude").ok_or(GeolocationError::Unavailable)?;
    let longitude = number_field(&coords, "longitude").ok_or(GeolocationError::Unavailable)?;
    log::info!("📍 Posición: {:.6}, {:.6}", latitude, longitude);
    Ok(LocationFix {
        latitude,
        longitude,
        accuracy: number_field(&coords, "accuracy"),
    })
}

fn number_field(target: &JsValue, name: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(name)).ok()?.as_f64()
}
