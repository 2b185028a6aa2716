use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifiedContact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SosRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the trigger endpoint may return; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SosResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub emergency_contacts: Option<Vec<NotifiedContact>>,
    #[serde(default)]
    pub sms_content: Option<String>,
}

/// Result shown once an SOS has been raised
#[derive(Debug, Clone, PartialEq)]
pub struct SosOutcome {
    pub message: String,
    pub emergency_contacts: Vec<NotifiedContact>,
    pub sms_content: String,
    /// Built locally because the backend was skipped or answered with something unreadable
    pub simulated: bool,
}
