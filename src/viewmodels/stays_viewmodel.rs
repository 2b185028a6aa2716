use crate::config::CONFIG;
use crate::models::demo;
use crate::models::{Accommodation, Coordinates, Notification};
use crate::services::{recommendation_service, ApiClient};

#[derive(Debug, Clone, PartialEq)]
pub struct StaysReport {
    pub stays: Vec<Accommodation>,
    /// Sample list rather than backend results
    pub demo: bool,
    pub notification: Notification,
}

pub struct StaysViewModel {
    api_client: ApiClient,
    demo_fallbacks: bool,
}

impl Default for StaysViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StaysViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self {
            api_client,
            demo_fallbacks: CONFIG.demo_fallbacks,
        }
    }

    /// `search_from` is the prediction if there is one, else the current position.
    /// Errs with a notification when there is nowhere to search around, or when the
    /// backend fails and demo fallbacks are off.
    pub async fn search(&self, search_from: Option<Coordinates>, token: Option<&str>) -> Result<StaysReport, Notification> {
        let Some(origin) = search_from else {
            return Err(Notification::error(
                "Location required",
                "Please enable location or run AI prediction first.",
            ));
        };
        log::info!("🏨 Buscando alojamientos cerca de {:.4}, {:.4}", origin.latitude, origin.longitude);

        let found = match token {
            Some(token) => recommendation_service::accommodations(&self.api_client, Some(token)).await,
            None => Ok(None),
        };

        if let (Err(e), false) = (&found, self.demo_fallbacks) {
            log::error!("❌ Error buscando alojamientos: {}", e);
            return Err(Notification::error("Search failed", e.to_string()));
        }

        Ok(match found {
            Ok(Some(stays)) => StaysReport {
                stays,
                demo: false,
                notification: Notification::info("Recommendations found!", "Found safe stays near you."),
            },
            Ok(None) => StaysReport {
                stays: demo::accommodations(),
                demo: true,
                notification: Notification::info("Recommendations found!", "Found safe stays near you."),
            },
            Err(e) => {
                log::warn!("⚠️ Recomendaciones no disponibles: {}", e);
                StaysReport {
                    stays: demo::accommodations(),
                    demo: true,
                    notification: Notification::info("Using demo data", "Showing sample accommodations."),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    fn vm(transport: &std::rc::Rc<FakeTransport>) -> StaysViewModel {
        StaysViewModel::with_client(ApiClient::with_transport("http://api.test", transport.clone()))
    }

    #[test]
    fn no_location_no_search() {
        let transport = FakeTransport::new();
        let err = block_on(vm(&transport).search(None, Some("t"))).unwrap_err();
        assert_eq!(err.title, "Location required");
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn backend_list_is_shown() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"[{"id":"9","name":"Harbour Inn","safety_score":72}]"#);
        let report = block_on(vm(&transport).search(Some(Coordinates::new(1.0, 1.0)), Some("t"))).unwrap();
        assert!(!report.demo);
        assert_eq!(report.stays[0].name, "Harbour Inn");
    }

    #[test]
    fn failure_falls_back_to_four_demo_stays() {
        let transport = FakeTransport::new();
        transport.fail("offline");
        let report = block_on(vm(&transport).search(Some(Coordinates::new(1.0, 1.0)), Some("t"))).unwrap();
        assert!(report.demo);
        assert_eq!(report.stays.len(), 4);
        assert_eq!(report.notification.title, "Using demo data");
    }

    #[test]
    fn failure_without_demo_fallbacks_is_an_error() {
        let transport = FakeTransport::new();
        transport.respond(503, r#"{"detail":"recommender offline"}"#);
        let mut vm = vm(&transport);
        vm.demo_fallbacks = false;

        let err = block_on(vm.search(Some(Coordinates::new(1.0, 1.0)), Some("t"))).unwrap_err();
        assert_eq!(err.title, "Search failed");
        assert!(err.description.contains("recommender offline"));
    }
}
