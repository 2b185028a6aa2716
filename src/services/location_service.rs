use serde::Deserialize;

use crate::models::{LocationFix, LocationRecord};
use crate::utils::{PATH_LOCATIONS, PATH_LOCATION_HISTORY};
use super::api_client::{ApiClient, ApiError, ApiRequest};

/// History comes back either as a bare list or wrapped in `{ "locations": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum HistoryPayload {
    List(Vec<LocationRecord>),
    Wrapped { locations: Vec<LocationRecord> },
}

/// Guardar ubicación actual
pub async fn save_location(
    client: &ApiClient,
    fix: &LocationFix,
    token: Option<&str>,
) -> Result<LocationRecord, ApiError> {
    log::info!("📍 Guardando ubicación ({:.5}, {:.5})", fix.latitude, fix.longitude);
    let request = ApiRequest::post(PATH_LOCATIONS)
        .token(token)
        .json(&serde_json::json!({
            "latitude": fix.latitude,
            "longitude": fix.longitude,
            "accuracy": fix.accuracy.unwrap_or(0.0),
        }))?;
    client.call(request).await
}

pub async fn location_history(
    client: &ApiClient,
    token: Option<&str>,
    limit: u32,
) -> Result<Vec<LocationRecord>, ApiError> {
    let request = ApiRequest::get(PATH_LOCATION_HISTORY)
        .token(token)
        .param("limit", limit);
    let history = match client.call::<HistoryPayload>(request).await? {
        HistoryPayload::List(records) => records,
        HistoryPayload::Wrapped { locations } => locations,
    };
    log::info!("🕒 Historial recibido: {} ubicaciones", history.len());
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn history_sends_limit_and_accepts_both_shapes() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"[{"id":1,"latitude":1.0,"longitude":2.0,"accuracy":5.0,"created_at":"2025-01-01T00:00:00"}]"#,
        );
        transport.respond(
            200,
            r#"{"locations":[{"id":"9","latitude":3.0,"longitude":4.0,"timestamp":"2025-01-01T00:00:00Z"}]}"#,
        );
        let client = ApiClient::with_transport("http://api.test", transport.clone());

        let bare = block_on(location_history(&client, Some("t"), 50)).unwrap();
        assert_eq!(bare[0].id, "1");
        assert_eq!(
            transport.last_request().url,
            "http://api.test/api/v1/locations/history?limit=50"
        );

        let wrapped = block_on(location_history(&client, Some("t"), 10)).unwrap();
        assert_eq!(wrapped[0].id, "9");
    }

    #[test]
    fn save_sends_accuracy_zero_when_unknown() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"id":3,"latitude":1.0,"longitude":2.0,"accuracy":0.0,"created_at":"2025-01-01T00:00:00"}"#,
        );
        let client = ApiClient::with_transport("http://api.test", transport.clone());
        let fix = LocationFix { latitude: 1.0, longitude: 2.0, accuracy: None };

        let saved = block_on(save_location(&client, &fix, Some("tok"))).unwrap();
        assert_eq!(saved.id, "3");

        let sent = transport.last_request();
        assert_eq!(sent.header("Authorization"), Some("Bearer tok"));
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["accuracy"], 0.0);
    }
}
