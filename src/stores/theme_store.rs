use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::utils::{BrowserStorage, KeyValueStorage, STORAGE_KEY_THEME};
use super::Persisted;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeState {
    is_dark: bool,
}

pub enum ThemeAction {
    Toggle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStore<S: KeyValueStorage = BrowserStorage> {
    storage: S,
    is_dark: bool,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    /// Light unless a dark preference was saved
    pub fn restore(storage: S) -> Self {
        let is_dark = storage
            .load::<Persisted<ThemeState>>(STORAGE_KEY_THEME)
            .map(|p| p.state.is_dark)
            .unwrap_or(false);
        Self { storage, is_dark }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
        log::debug!("🎨 Tema: {}", if self.is_dark { "oscuro" } else { "claro" });
        let state = ThemeState { is_dark: self.is_dark };
        if let Err(e) = self.storage.save(STORAGE_KEY_THEME, &Persisted::new(state)) {
            log::error!("❌ Error guardando tema: {}", e);
        }
    }
}

impl<S: KeyValueStorage + Clone + 'static> Reducible for ThemeStore<S> {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ThemeAction::Toggle => next.toggle(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    fn persisted_flag(storage: &MemoryStorage) -> bool {
        let blob: serde_json::Value =
            serde_json::from_str(&storage.get_raw(STORAGE_KEY_THEME).unwrap()).unwrap();
        blob["state"]["isDark"].as_bool().unwrap()
    }

    #[test]
    fn two_toggles_round_trip_and_storage_follows() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::restore(storage.clone());
        assert!(!store.is_dark());

        store.toggle();
        assert!(store.is_dark());
        assert!(persisted_flag(&storage));

        store.toggle();
        assert!(!store.is_dark());
        assert!(!persisted_flag(&storage));
    }

    #[test]
    fn restores_saved_preference() {
        let storage = MemoryStorage::new();
        storage
            .set_raw(STORAGE_KEY_THEME, r#"{"state":{"isDark":true},"version":0}"#)
            .unwrap();
        assert!(ThemeStore::restore(storage).is_dark());
    }
}
