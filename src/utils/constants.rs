// Durable storage keys

/// Persisted session blob (user + token). Only authoritative copy of the token.
pub const STORAGE_KEY_AUTH: &str = "auth-storage";
/// Bare token written by older builds, migrated into `STORAGE_KEY_AUTH` on restore
pub const STORAGE_KEY_LEGACY_TOKEN: &str = "token";
pub const STORAGE_KEY_THEME: &str = "theme-storage";
pub const STORAGE_KEY_EMERGENCY_CONTACTS: &str = "emergency-contacts";

// API paths

pub const PATH_AUTH_LOGIN: &str = "/api/v1/auth/login";
pub const PATH_AUTH_REGISTER: &str = "/api/v1/auth/register";
pub const PATH_LOCATIONS: &str = "/api/v1/locations/";
pub const PATH_LOCATION_HISTORY: &str = "/api/v1/locations/history";
pub const PATH_PREDICT_NEXT: &str = "/api/v1/prediction/next-location";
pub const PATH_ASSISTANT_CHAT: &str = "/api/v1/assistant/chat";
pub const PATH_RECOMMEND_ACCOMMODATION: &str = "/api/v1/recommendations/accommodation";
pub const PATH_SOS_TRIGGER: &str = "/api/v1/sos/trigger";
pub const PATH_FEDERATED_TRAIN: &str = "/api/v1/federated/train-local";
pub const PATH_FEDERATED_AGGREGATE: &str = "/api/v1/federated/aggregate";
pub const PATH_EMERGENCY_CONTACTS: &str = "/api/v1/users/emergency-contacts";

// Limits

pub const MAX_EMERGENCY_CONTACTS: usize = 5;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_PREDICTION_CONFIDENCE: f64 = 0.85;

/// DOM id of the map container used by the Leaflet bridge
pub const MAP_CONTAINER_PREFIX: &str = "safetravel-map";
