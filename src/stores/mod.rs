// ============================================================================
// STORES - estado compartido de la app
// ============================================================================
// Contenedores puros con comandos; los hooks los envuelven con use_reducer
// y los publican por ContextProvider.
// ============================================================================

pub mod contacts_store;
pub mod location_store;
pub mod notification_store;
pub mod session_store;
pub mod theme_store;

pub use contacts_store::{ContactAction, ContactBook, ContactError};
pub use location_store::{LocationAction, LocationStore};
pub use notification_store::{Toast, ToastAction, ToastQueue};
pub use session_store::{stored_token, Session, SessionAction, SessionStore};
pub use theme_store::{ThemeAction, ThemeStore};

use serde::{Deserialize, Serialize};

/// Envelope used for persisted stores: `{"state": ..., "version": 0}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Persisted<T> {
    pub state: T,
    #[serde(default)]
    pub version: u32,
}

impl<T> Persisted<T> {
    pub fn new(state: T) -> Self {
        Self { state, version: 0 }
    }
}
