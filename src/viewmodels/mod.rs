// ============================================================================
// VIEWMODELS - lógica de cada pantalla
// ============================================================================
// Devuelven valores (reportes + notificaciones); las vistas actualizan el estado.
// ============================================================================

pub mod assistant_viewmodel;
pub mod auth_viewmodel;
pub mod contacts_viewmodel;
pub mod location_viewmodel;
pub mod prediction_viewmodel;
pub mod sos_viewmodel;
pub mod stays_viewmodel;

pub use assistant_viewmodel::{AssistantViewModel, ChatAction, ChatLog};
pub use auth_viewmodel::{AuthViewModel, PasswordChecks, PasswordError, RegisterError};
pub use contacts_viewmodel::ContactsViewModel;
pub use location_viewmodel::LocationViewModel;
pub use prediction_viewmodel::{PredictionReport, PredictionViewModel};
pub use sos_viewmodel::{SosReport, SosViewModel};
pub use stays_viewmodel::{StaysReport, StaysViewModel};
