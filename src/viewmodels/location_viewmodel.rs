// ============================================================================
// LOCATION VIEWMODEL - historial y guardado de posición
// ============================================================================

use chrono::Utc;

use crate::config::CONFIG;
use crate::models::demo;
use crate::models::{LocationFix, LocationRecord, Notification};
use crate::services::{location_service, ApiClient, ApiError};

pub struct LocationViewModel {
    api_client: ApiClient,
    history_limit: u32,
    demo_fallbacks: bool,
}

impl Default for LocationViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self {
            api_client,
            history_limit: CONFIG.history_limit,
            demo_fallbacks: CONFIG.demo_fallbacks,
        }
    }

    /// `None` without a token (nothing to show). A failed request shows the demo
    /// history when demo fallbacks are enabled.
    pub async fn history(&self, token: Option<&str>) -> Option<Result<Vec<LocationRecord>, ApiError>> {
        let token = token?;
        let result = location_service::location_history(&self.api_client, Some(token), self.history_limit).await;
        Some(match result {
            Err(e) if self.demo_fallbacks => {
                log::warn!("⚠️ Historial no disponible, usando demo: {}", e);
                Ok(demo::location_history(Utc::now()))
            }
            other => other,
        })
    }

    /// Persist a fresh reading. Without a token nothing is sent.
    pub async fn record(&self, fix: &LocationFix, token: Option<&str>) -> Option<Notification> {
        let token = token?;
        match location_service::save_location(&self.api_client, fix, Some(token)).await {
            Ok(_) => Some(Notification::info("Location updated", "Your current location has been saved.")),
            Err(e) => {
                log::error!("❌ Error guardando ubicación: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    fn vm(transport: &std::rc::Rc<FakeTransport>) -> LocationViewModel {
        LocationViewModel::with_client(ApiClient::with_transport("http://api.test", transport.clone()))
    }

    #[test]
    fn no_token_no_request() {
        let transport = FakeTransport::new();
        assert!(block_on(vm(&transport).history(None)).is_none());
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn failed_history_uses_demo_entries() {
        let transport = FakeTransport::new();
        transport.respond(503, "");
        let history = block_on(vm(&transport).history(Some("t"))).unwrap().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].address.as_deref(), Some("New York, NY"));
    }

    #[test]
    fn record_then_notification() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"id":4,"latitude":1.0,"longitude":2.0,"accuracy":5.0,"created_at":"2025-01-01T00:00:00"}"#,
        );
        let fix = LocationFix {
            latitude: 1.0,
            longitude: 2.0,
            accuracy: Some(5.0),
        };
        let notification = block_on(vm(&transport).record(&fix, Some("t"))).unwrap();
        assert_eq!(notification.title, "Location updated");
        assert!(transport.last_request().url.ends_with("/api/v1/locations/"));
    }
}
