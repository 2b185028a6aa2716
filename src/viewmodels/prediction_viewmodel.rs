// ============================================================================
// PREDICTION VIEWMODEL - próxima ubicación + entrenamiento federado
// ============================================================================

use crate::models::{Coordinates, Notification, PredictedLocation};
use crate::services::{federated_service, prediction_service, ApiClient, ApiError};

/// Half-width, in degrees, of the box a simulated prediction is drawn from
const SIMULATION_SPREAD: f64 = 0.025;

/// `random` yields values in `[0, 1)`; called for latitude, longitude, confidence in that order.
pub fn simulated_prediction(current: Coordinates, mut random: impl FnMut() -> f64) -> PredictedLocation {
    let latitude = current.latitude + (random() - 0.5) * SIMULATION_SPREAD * 2.0;
    let longitude = current.longitude + (random() - 0.5) * SIMULATION_SPREAD * 2.0;
    let confidence = 0.85 + random() * 0.1;
    PredictedLocation {
        latitude,
        longitude,
        confidence,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub prediction: Option<PredictedLocation>,
    /// Drawn locally instead of coming from the model
    pub simulated: bool,
    pub notification: Notification,
}

pub struct PredictionViewModel {
    api_client: ApiClient,
}

impl Default for PredictionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    pub async fn predict(
        &self,
        current: Option<Coordinates>,
        token: Option<&str>,
        random: impl FnMut() -> f64,
    ) -> PredictionReport {
        let Some(current) = current else {
            return PredictionReport {
                prediction: None,
                simulated: false,
                notification: Notification::error("Location required", "Please enable location access first."),
            };
        };

        let from_model = match token {
            Some(token) => match prediction_service::predict_next_location(&self.api_client, Some(token)).await {
                Ok(prediction) => prediction,
                Err(ApiError::Decode(reason)) => {
                    log::warn!("⚠️ Predicción ilegible: {}", reason);
                    None
                }
                Err(e) => {
                    log::error!("❌ Error de predicción: {}", e);
                    return PredictionReport {
                        prediction: None,
                        simulated: false,
                        notification: Notification::error(
                            "Prediction failed",
                            "Unable to generate prediction. Please try again.",
                        ),
                    };
                }
            },
            None => None,
        };

        let simulated = from_model.is_none();
        let prediction = from_model.unwrap_or_else(|| simulated_prediction(current, random));
        log::info!(
            "🧠 Predicción {}: {:.6}, {:.6} ({:.0}%)",
            if simulated { "simulada" } else { "del modelo" },
            prediction.latitude,
            prediction.longitude,
            prediction.confidence * 100.0
        );

        PredictionReport {
            prediction: Some(prediction),
            simulated,
            notification: Notification::info("Prediction complete!", "AI has analyzed your travel patterns."),
        }
    }

    /// Train on this user's history, then fold it into the shared model
    pub async fn improve_model(&self, token: Option<&str>) -> Notification {
        let result = async {
            let trained = federated_service::train_local(&self.api_client, token).await?;
            let aggregated = federated_service::aggregate(&self.api_client, token).await?;
            Ok::<_, ApiError>(format!("{} · {}", trained, aggregated))
        }
        .await;

        match result {
            Ok(status) => Notification::info("Model updated", status),
            Err(e) => Notification::error("Model update failed", e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    fn vm(transport: &std::rc::Rc<FakeTransport>) -> PredictionViewModel {
        PredictionViewModel::with_client(ApiClient::with_transport("http://api.test", transport.clone()))
    }

    #[test]
    fn simulation_stays_within_bounds() {
        let current = Coordinates::new(40.0, -74.0);
        let low = simulated_prediction(current, || 0.0);
        assert!((low.latitude - 39.975).abs() < 1e-9);
        assert!((low.longitude + 74.025).abs() < 1e-9);
        assert!((low.confidence - 0.85).abs() < 1e-9);

        let high = simulated_prediction(current, || 0.999_999);
        assert!(high.latitude < 40.025);
        assert!(high.confidence < 0.95);
    }

    #[test]
    fn requires_current_location() {
        let transport = FakeTransport::new();
        let report = block_on(vm(&transport).predict(None, Some("t"), || 0.5));
        assert_eq!(report.prediction, None);
        assert_eq!(report.notification.title, "Location required");
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn model_answer_is_used_as_is() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"latitude":10.0,"longitude":20.0,"confidence":0.66}"#);
        let report = block_on(vm(&transport).predict(Some(Coordinates::new(0.0, 0.0)), Some("t"), || 0.5));
        assert!(!report.simulated);
        assert_eq!(report.prediction.unwrap().confidence, 0.66);
    }

    #[test]
    fn no_coordinates_means_simulation() {
        let transport = FakeTransport::new();
        transport.respond(200, r#""model warming up""#);
        let report = block_on(vm(&transport).predict(Some(Coordinates::new(1.0, 1.0)), Some("t"), || 0.5));
        assert!(report.simulated);
        assert_eq!(report.prediction.unwrap().latitude, 1.0);
    }

    #[test]
    fn http_failure_reports_error() {
        let transport = FakeTransport::new();
        transport.respond(500, r#"{"detail":"boom"}"#);
        let report = block_on(vm(&transport).predict(Some(Coordinates::new(1.0, 1.0)), Some("t"), || 0.5));
        assert_eq!(report.prediction, None);
        assert_eq!(report.notification.title, "Prediction failed");
    }

    #[test]
    fn improve_model_stops_at_first_failure() {
        let transport = FakeTransport::new();
        transport.respond(401, r#"{"detail":"Not authenticated"}"#);
        let notification = block_on(vm(&transport).improve_model(Some("t")));
        assert!(notification.is_error());
        assert_eq!(notification.description, "Not authenticated");
        assert_eq!(transport.requests().len(), 1);
    }
}
