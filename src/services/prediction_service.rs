use serde_json::Value;

use crate::models::PredictedLocation;
use crate::utils::{DEFAULT_PREDICTION_CONFIDENCE, PATH_PREDICT_NEXT};
use super::api_client::{ApiClient, ApiError, ApiRequest};

/// Ask the model for the next destination.
///
/// `Ok(None)` means the backend answered but without a usable coordinate.
pub async fn predict_next_location(
    client: &ApiClient,
    token: Option<&str>,
) -> Result<Option<PredictedLocation>, ApiError> {
    log::info!("🧠 Solicitando predicción de próxima ubicación...");
    let request = ApiRequest::post(PATH_PREDICT_NEXT).token(token);
    let value: Value = client.call(request).await?;
    let prediction = prediction_from_value(&value);
    if prediction.is_none() {
        log::warn!("⚠️ Respuesta de predicción sin coordenadas: {}", value);
    }
    Ok(prediction)
}

fn prediction_from_value(value: &Value) -> Option<PredictedLocation> {
    let latitude = value.get("latitude")?.as_f64()?;
    let longitude = value.get("longitude")?.as_f64()?;
    let confidence = value
        .get("confidence")
        .and_then(Value::as_f64)
        .filter(|c| (0.0..=1.0).contains(c))
        .unwrap_or(DEFAULT_PREDICTION_CONFIDENCE);

    Some(PredictedLocation {
        latitude,
        longitude,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn confidence_defaults_when_missing_or_out_of_range() {
        let full = serde_json::json!({"latitude": 1.0, "longitude": 2.0, "confidence": 0.7});
        assert_eq!(prediction_from_value(&full).unwrap().confidence, 0.7);

        let bare = serde_json::json!({"latitude": 1.0, "longitude": 2.0});
        assert_eq!(prediction_from_value(&bare).unwrap().confidence, DEFAULT_PREDICTION_CONFIDENCE);

        let silly = serde_json::json!({"latitude": 1.0, "longitude": 2.0, "confidence": 42});
        assert_eq!(prediction_from_value(&silly).unwrap().confidence, DEFAULT_PREDICTION_CONFIDENCE);
    }

    #[test]
    fn string_wrapped_prediction_is_understood() {
        let transport = FakeTransport::new();
        transport.respond(200, r#""{\"latitude\": 48.85, \"longitude\": 2.35, \"confidence\": 0.91}""#);
        transport.respond(200, r#""Not enough history to predict""#);
        let client = ApiClient::with_transport("http://api.test", transport);

        let prediction = block_on(predict_next_location(&client, Some("t"))).unwrap().unwrap();
        assert_eq!(prediction.latitude, 48.85);
        assert_eq!(prediction.confidence, 0.91);

        assert_eq!(block_on(predict_next_location(&client, Some("t"))).unwrap(), None);
    }
}
