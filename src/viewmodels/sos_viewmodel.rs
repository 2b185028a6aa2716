// ============================================================================
// SOS VIEWMODEL - disparo de emergencia
// ============================================================================
// Un solo intento contra el backend; haya éxito o fallo hay resultado con contactos:
// los del backend, si no los guardados, si no servicios de emergencia.
// ============================================================================

use crate::models::demo::emergency_services;
use crate::models::{Coordinates, EmergencyContact, Notification, NotifiedContact, SosOutcome, SosResponse};
use crate::services::{sos_service, ApiClient, ApiError};

const DEFAULT_MESSAGE: &str = "Emergency SOS triggered successfully!";
/// Shown on the local result when the backend could not be reached
const FAILED_MESSAGE: &str = "The SOS service could not be reached. Contact the people below directly.";
const PLACEHOLDER_LATITUDE: &str = "40.7128";
const PLACEHOLDER_LONGITUDE: &str = "-74.0060";

/// What the SOS screen shows after a trigger attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SosReport {
    pub outcome: Option<SosOutcome>,
    pub notifications: Vec<Notification>,
}

pub fn alert_text(location: Option<&Coordinates>) -> String {
    let (latitude, longitude) = match location {
        Some(c) => (format!("{:.6}", c.latitude), format!("{:.6}", c.longitude)),
        None => (PLACEHOLDER_LATITUDE.to_string(), PLACEHOLDER_LONGITUDE.to_string()),
    };
    format!(
        "🆘 EMERGENCY ALERT\n\nI need help! My current location:\nLat: {}\nLong: {}\n\nSent via SafeTravel AI",
        latitude, longitude
    )
}

/// Merge a backend reply (if any) with the locally stored contacts.
///
/// `response == None` means nothing usable came back and the outcome is marked simulated.
pub fn build_outcome(
    response: Option<SosResponse>,
    location: Option<&Coordinates>,
    stored: &[EmergencyContact],
) -> SosOutcome {
    let simulated = response.is_none();
    let response = response.unwrap_or_default();

    let emergency_contacts = response
        .emergency_contacts
        .filter(|contacts| !contacts.is_empty())
        .unwrap_or_else(|| stored_or_placeholder(stored));

    SosOutcome {
        message: response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        emergency_contacts,
        sms_content: response
            .sms_content
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| alert_text(location)),
        simulated,
    }
}

fn stored_or_placeholder(stored: &[EmergencyContact]) -> Vec<NotifiedContact> {
    let reachable: Vec<NotifiedContact> = stored
        .iter()
        .filter(|c| c.has_phone())
        .map(|c| NotifiedContact {
            name: if c.name.trim().is_empty() {
                "Emergency contact".to_string()
            } else {
                c.name.trim().to_string()
            },
            phone: c.phone.trim().to_string(),
        })
        .collect();

    if reachable.is_empty() {
        vec![emergency_services()]
    } else {
        reachable
    }
}

pub struct SosViewModel {
    api_client: ApiClient,
}

impl Default for SosViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SosViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    pub async fn trigger(
        &self,
        location: Option<Coordinates>,
        stored: &[EmergencyContact],
        token: Option<&str>,
    ) -> SosReport {
        let mut failed = false;
        let response = match (token, location.as_ref()) {
            (Some(token), Some(location)) => {
                match sos_service::trigger_sos(&self.api_client, location, Some(token)).await {
                    Ok(response) => Some(response),
                    Err(ApiError::Decode(reason)) => {
                        log::warn!("⚠️ Respuesta SOS ilegible, usando resultado local: {}", reason);
                        None
                    }
                    Err(e) => {
                        log::error!("❌ SOS falló, mostrando resultado local: {}", e);
                        failed = true;
                        None
                    }
                }
            }
            _ => {
                log::warn!("⚠️ SOS sin token o sin ubicación, resultado simulado");
                None
            }
        };

        let no_stored_contacts = !stored.iter().any(EmergencyContact::has_phone);
        let mut outcome = build_outcome(response, location.as_ref(), stored);
        if failed {
            outcome.message = FAILED_MESSAGE.to_string();
        }

        let mut notifications = vec![if failed {
            Notification::error(
                "SOS Failed",
                "Unable to reach the SOS service. Please call emergency services directly.",
            )
        } else {
            Notification::info("SOS Triggered!", "Emergency contacts have been notified.")
        }];
        if no_stored_contacts {
            notifications.push(Notification::error(
                "No emergency contacts",
                "Only emergency services were included. Add contacts so people you trust are alerted too.",
            ));
        }

        SosReport {
            outcome: Some(outcome),
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    fn contact(name: &str, phone: &str) -> EmergencyContact {
        EmergencyContact {
            id: name.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    fn vm(transport: &std::rc::Rc<FakeTransport>) -> SosViewModel {
        SosViewModel::with_client(ApiClient::with_transport("http://api.test", transport.clone()))
    }

    #[test]
    fn backend_contacts_win() {
        let response = SosResponse {
            message: Some("Help is coming".into()),
            emergency_contacts: Some(vec![NotifiedContact {
                name: "Desk".into(),
                phone: "112".into(),
            }]),
            sms_content: None,
        };
        let here = Coordinates::new(48.8566, 2.3522);
        let outcome = build_outcome(Some(response), Some(&here), &[contact("Mum", "555")]);

        assert!(!outcome.simulated);
        assert_eq!(outcome.message, "Help is coming");
        assert_eq!(outcome.emergency_contacts[0].phone, "112");
        assert!(outcome.sms_content.contains("Lat: 48.856600"));
        assert!(outcome.sms_content.contains("Long: 2.352200"));
    }

    #[test]
    fn stored_contacts_then_placeholder() {
        let outcome = build_outcome(None, None, &[contact("", "555"), contact("Blank", " ")]);
        assert!(outcome.simulated);
        assert_eq!(outcome.message, DEFAULT_MESSAGE);
        assert_eq!(
            outcome.emergency_contacts,
            vec![NotifiedContact {
                name: "Emergency contact".into(),
                phone: "555".into()
            }]
        );
        assert!(outcome.sms_content.contains("Lat: 40.7128"));
        assert!(outcome.sms_content.contains("Long: -74.0060"));

        let fallback = build_outcome(None, None, &[]);
        assert_eq!(fallback.emergency_contacts, vec![emergency_services()]);
    }

    #[test]
    fn zero_contacts_still_yields_outcome_and_warning() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"message":"sent"}"#);
        let report = block_on(vm(&transport).trigger(Some(Coordinates::new(1.0, 2.0)), &[], Some("t")));

        let outcome = report.outcome.unwrap();
        assert_eq!(outcome.emergency_contacts, vec![emergency_services()]);
        assert!(!outcome.simulated);
        assert_eq!(report.notifications.len(), 2);
        assert_eq!(report.notifications[1].title, "No emergency contacts");

        let sent: serde_json::Value = serde_json::from_str(transport.last_request().body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, serde_json::json!({"latitude": 1.0, "longitude": 2.0}));
    }

    #[test]
    fn network_failure_still_shows_local_outcome() {
        let transport = FakeTransport::new();
        transport.fail("offline");
        let report = block_on(vm(&transport).trigger(
            Some(Coordinates::new(1.0, 2.0)),
            &[contact("Mum", "555")],
            Some("t"),
        ));

        let outcome = report.outcome.unwrap();
        assert!(outcome.simulated);
        assert_eq!(outcome.message, FAILED_MESSAGE);
        assert_eq!(outcome.emergency_contacts[0].name, "Mum");
        assert!(outcome.sms_content.contains("Lat: 1.000000"));
        assert_eq!(report.notifications.len(), 1);
        assert_eq!(report.notifications[0].title, "SOS Failed");
        assert!(report.notifications[0].is_error());
    }

    #[test]
    fn http_error_without_contacts_warns_twice() {
        let transport = FakeTransport::new();
        transport.respond(500, r#"{"detail":"notifier down"}"#);
        let report = block_on(vm(&transport).trigger(Some(Coordinates::new(1.0, 2.0)), &[], Some("t")));

        let outcome = report.outcome.unwrap();
        assert!(outcome.simulated);
        assert_eq!(outcome.emergency_contacts, vec![emergency_services()]);
        let titles: Vec<&str> = report.notifications.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["SOS Failed", "No emergency contacts"]);
    }

    #[test]
    fn without_token_nothing_is_sent() {
        let transport = FakeTransport::new();
        let report = block_on(vm(&transport).trigger(Some(Coordinates::new(1.0, 2.0)), &[contact("Mum", "555")], None));
        assert!(transport.requests().is_empty());
        let outcome = report.outcome.unwrap();
        assert!(outcome.simulated);
        assert_eq!(outcome.emergency_contacts[0].name, "Mum");
        assert_eq!(report.notifications.len(), 1);
    }

    #[test]
    fn unreadable_reply_falls_back_to_simulation() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"emergency_contacts": "nobody"}"#);
        let report = block_on(vm(&transport).trigger(Some(Coordinates::new(1.0, 2.0)), &[contact("Mum", "555")], Some("t")));
        assert!(report.outcome.unwrap().simulated);
    }
}
