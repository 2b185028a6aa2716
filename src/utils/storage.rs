use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write key `{0}`")]
    Write(String),
}

/// Durable key/value storage holding JSON strings.
///
/// The browser implementation is [`BrowserStorage`]; tests run against `MemoryStorage`.
pub trait KeyValueStorage {
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Missing and corrupt entries both read as `None`.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let json = self.get_raw(key)?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("⚠️ Ignoring unreadable `{}` in storage: {}", key, e);
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json)
    }
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStorage for BrowserStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::{KeyValueStorage, StorageError};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Shared in-memory storage; clones see the same entries, like two tabs on one origin.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contains(&self, key: &str) -> bool {
            self.entries.borrow().contains_key(key)
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get_raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_entries_read_as_none() {
        let storage = MemoryStorage::new();
        storage.set_raw("broken", "{not json").unwrap();
        assert_eq!(storage.load::<Vec<String>>("broken"), None);
    }

    #[test]
    fn save_then_load_through_shared_handle() {
        let storage = MemoryStorage::new();
        let other_tab = storage.clone();
        storage.save("numbers", &vec![1, 2, 3]).unwrap();
        assert_eq!(other_tab.load::<Vec<i32>>("numbers"), Some(vec![1, 2, 3]));

        other_tab.remove("numbers").unwrap();
        assert!(!storage.contains("numbers"));
    }
}
