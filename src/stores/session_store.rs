// ============================================================================
// SESSION STORE - usuario + token persistidos en `auth-storage`
// ============================================================================

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::models::User;
use crate::utils::{BrowserStorage, KeyValueStorage, STORAGE_KEY_AUTH, STORAGE_KEY_LEGACY_TOKEN};
use super::Persisted;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// Derived, never stored: a session is authenticated iff it has both a user and a token.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}

pub enum SessionAction {
    Login { user: User, token: String },
    LoginWithToken { token: String, email: String },
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore<S: KeyValueStorage = BrowserStorage> {
    storage: S,
    session: Session,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Rebuild the session from storage, migrating a bare legacy `token` key if that is all there is.
    pub fn restore(storage: S) -> Self {
        if let Some(persisted) = storage.load::<Persisted<Session>>(STORAGE_KEY_AUTH) {
            log::info!("🔑 Sesión restaurada desde storage");
            return Self {
                storage,
                session: persisted.state,
            };
        }

        let mut store = Self {
            storage,
            session: Session::default(),
        };

        if let Some(token) = legacy_token(&store.storage) {
            log::info!("🔁 Migrando token antiguo a `{}`", STORAGE_KEY_AUTH);
            store.session = Session {
                user: Some(User::from_email("")),
                token: Some(token),
            };
            store.persist();
            if let Err(e) = store.storage.remove(STORAGE_KEY_LEGACY_TOKEN) {
                log::warn!("⚠️ No se pudo borrar el token antiguo: {}", e);
            }
        }

        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn login(&mut self, user: User, token: String) {
        log::info!("✅ Login: {}", user.email);
        self.session = Session {
            user: Some(user),
            token: Some(token),
        };
        self.persist();
    }

    /// For backends that only hand back a token
    pub fn login_with_token(&mut self, token: String, email: &str) {
        self.login(User::from_email(email), token);
    }

    pub fn logout(&mut self) {
        log::info!("🚪 Logout");
        self.session = Session::default();
        for key in [STORAGE_KEY_AUTH, STORAGE_KEY_LEGACY_TOKEN] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("⚠️ No se pudo borrar `{}`: {}", key, e);
            }
        }
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Login { user, token } => self.login(user, token),
            SessionAction::LoginWithToken { token, email } => self.login_with_token(token, &email),
            SessionAction::Logout => self.logout(),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(STORAGE_KEY_AUTH, &Persisted::new(&self.session)) {
            log::error!("❌ Error guardando sesión: {}", e);
        }
    }
}

impl<S: KeyValueStorage + Clone + 'static> Reducible for SessionStore<S> {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Token as persisted right now; what the API client attaches by default.
pub fn stored_token<S: KeyValueStorage>(storage: &S) -> Option<String> {
    storage
        .load::<Persisted<Session>>(STORAGE_KEY_AUTH)
        .and_then(|persisted| persisted.state.token)
        .or_else(|| legacy_token(storage))
        .filter(|token| !token.is_empty())
}

/// Older builds stored the token raw, not JSON encoded.
fn legacy_token<S: KeyValueStorage>(storage: &S) -> Option<String> {
    let raw = storage.get_raw(STORAGE_KEY_LEGACY_TOKEN)?;
    let token = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    Some(token).filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    fn user(email: &str) -> User {
        User {
            id: 3,
            email: email.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn login_persists_and_survives_restore() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());
        assert!(!store.is_authenticated());

        store.login(user("ana@example.com"), "tok-1".to_string());
        assert!(store.is_authenticated());
        assert_eq!(stored_token(&storage).as_deref(), Some("tok-1"));

        let restored = SessionStore::restore(storage);
        assert!(restored.is_authenticated());
        assert_eq!(restored.user().map(|u| u.id), Some(3));
        assert_eq!(restored.token(), Some("tok-1"));
    }

    #[test]
    fn persisted_blob_uses_state_envelope() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());
        store.login_with_token("abc".to_string(), "demo@safetravel.ai");

        let blob: serde_json::Value = serde_json::from_str(&storage.get_raw(STORAGE_KEY_AUTH).unwrap()).unwrap();
        assert_eq!(blob["state"]["token"], "abc");
        assert_eq!(blob["state"]["user"]["id"], 0);
        assert_eq!(blob["state"]["user"]["email"], "demo@safetravel.ai");
        assert_eq!(blob["version"], 0);
    }

    #[test]
    fn logout_clears_state_and_both_keys() {
        let storage = MemoryStorage::new();
        storage.set_raw(STORAGE_KEY_LEGACY_TOKEN, "old").unwrap();
        let mut store = SessionStore::restore(storage.clone());
        store.login(user("a@b.c"), "tok".to_string());

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert!(!storage.contains(STORAGE_KEY_AUTH));
        assert!(!storage.contains(STORAGE_KEY_LEGACY_TOKEN));
        assert_eq!(stored_token(&storage), None);
    }

    #[test]
    fn legacy_token_is_migrated_once() {
        let storage = MemoryStorage::new();
        storage.set_raw(STORAGE_KEY_LEGACY_TOKEN, "legacy-token").unwrap();

        let store = SessionStore::restore(storage.clone());
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("legacy-token"));
        assert!(!storage.contains(STORAGE_KEY_LEGACY_TOKEN));
        assert!(storage.contains(STORAGE_KEY_AUTH));
    }

    #[test]
    fn user_without_token_is_not_authenticated() {
        let session = Session {
            user: Some(user("x@y.z")),
            token: Some(String::new()),
        };
        assert!(!session.is_authenticated());
    }

    #[test]
    fn reducer_produces_new_state() {
        let store = Rc::new(SessionStore::restore(MemoryStorage::new()));
        let next = store.clone().reduce(SessionAction::LoginWithToken {
            token: "t".to_string(),
            email: "e@x.io".to_string(),
        });
        assert!(!store.is_authenticated());
        assert!(next.is_authenticated());
        assert!(!next.reduce(SessionAction::Logout).is_authenticated());
    }
}
