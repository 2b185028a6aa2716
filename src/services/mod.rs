pub mod api_client;
pub mod assistant_service;
pub mod auth_service;
pub mod federated_service;
pub mod geolocation;
pub mod location_service;
pub mod prediction_service;
pub mod recommendation_service;
pub mod sos_service;
pub mod speech;
pub mod users_service;

#[cfg(test)]
pub mod testing;

pub use api_client::{ApiClient, ApiError, ApiRequest, HttpTransport, Method};
pub use geolocation::{current_position, GeolocationError};
pub use speech::{SpeechError, SpeechRecognizer};
