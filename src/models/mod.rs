pub mod accommodation;
pub mod assistant;
pub mod auth;
pub mod contact;
pub mod demo;
pub mod location;
pub mod notification;
pub mod sos;

mod serde_ext;

pub use accommodation::{Accommodation, SafetyTier};
pub use assistant::{ChatMessage, ChatRole};
pub use auth::{Credentials, TokenResponse, User};
pub use contact::{ContactField, ContactsPayload, EmergencyContact};
pub use location::{
    Coordinates, LocationFix, LocationRecord, MapMarker, MarkerKind, PredictedLocation,
};
pub use notification::{Notification, NotificationVariant};
pub use sos::{NotifiedContact, SosOutcome, SosRequest, SosResponse};
