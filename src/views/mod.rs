// ============================================================================
// VIEWS - una pantalla por ruta
// ============================================================================
// Las vistas leen estado de los hooks, delegan en los viewmodels y
// convierten cada resultado en una notificación.
// ============================================================================

pub mod assistant_view;
pub mod auth;
pub mod contacts_view;
pub mod dashboard;
pub mod landing;
pub mod location_view;
pub mod not_found;
pub mod predict_view;
pub mod sos_view;
pub mod stays_view;

pub use assistant_view::AssistantView;
pub use auth::{LoginView, RegisterView};
pub use contacts_view::ContactsView;
pub use dashboard::DashboardView;
pub use landing::LandingView;
pub use location_view::LocationView;
pub use not_found::NotFoundView;
pub use predict_view::PredictView;
pub use sos_view::SosView;
pub use stays_view::StaysView;
