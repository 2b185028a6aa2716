// ============================================================================
// CONTACTS STORE - contactos de emergencia (máx. 5, mín. 1 fila)
// ============================================================================

use std::collections::HashSet;
use std::rc::Rc;

use thiserror::Error;
use yew::Reducible;

use crate::models::{ContactField, ContactsPayload, EmergencyContact};
use crate::utils::{
    sanitize_phone, BrowserStorage, KeyValueStorage, StorageError, MAX_EMERGENCY_CONTACTS,
    STORAGE_KEY_EMERGENCY_CONTACTS,
};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("You can add up to 5 emergency contacts.")]
    LimitReached,
    #[error("You must have at least one emergency contact.")]
    LastContact,
    #[error("Please add at least one phone number.")]
    NoPhoneNumbers,
    #[error("Each emergency contact needs a different phone number.")]
    Duplicate,
    #[error("Could not save contacts: {0}")]
    Storage(#[from] StorageError),
}

impl ContactError {
    /// Toast title for this rejection
    pub fn title(&self) -> &'static str {
        match self {
            ContactError::LimitReached => "Maximum reached",
            ContactError::LastContact => "Cannot remove",
            ContactError::NoPhoneNumbers => "No contacts",
            ContactError::Duplicate => "Duplicate contact",
            ContactError::Storage(_) => "Save failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactBook<S: KeyValueStorage = BrowserStorage> {
    storage: S,
    contacts: Vec<EmergencyContact>,
}

impl<S: KeyValueStorage> ContactBook<S> {
    /// Saved list, or a single blank row when nothing usable is stored.
    pub fn load(storage: S) -> Self {
        let contacts = storage
            .load::<Vec<EmergencyContact>>(STORAGE_KEY_EMERGENCY_CONTACTS)
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| vec![EmergencyContact::blank()]);
        Self { storage, contacts }
    }

    pub fn contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    /// Contacts an SOS can actually reach
    pub fn reachable(&self) -> Vec<EmergencyContact> {
        self.contacts.iter().filter(|c| c.has_phone()).cloned().collect()
    }

    pub fn is_full(&self) -> bool {
        self.contacts.len() >= MAX_EMERGENCY_CONTACTS
    }

    pub fn add(&mut self) -> Result<(), ContactError> {
        if self.is_full() {
            return Err(ContactError::LimitReached);
        }
        self.contacts.push(EmergencyContact::blank());
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<(), ContactError> {
        if self.contacts.len() <= 1 {
            return Err(ContactError::LastContact);
        }
        self.contacts.retain(|c| c.id != id);
        Ok(())
    }

    /// Unknown ids are ignored. Phone input keeps only digits and `+`.
    pub fn update(&mut self, id: &str, field: ContactField, value: &str) {
        if let Some(contact) = self.contacts.iter_mut().find(|c| c.id == id) {
            match field {
                ContactField::Name => contact.name = value.to_string(),
                ContactField::Phone => contact.phone = sanitize_phone(value),
            }
        }
    }

    /// Validate and persist every row locally; returns the payload to mirror to the backend.
    pub fn save_local(&self) -> Result<ContactsPayload, ContactError> {
        if !self.contacts.iter().any(EmergencyContact::has_phone) {
            return Err(ContactError::NoPhoneNumbers);
        }
        let mut seen = HashSet::new();
        if !self.reachable().iter().all(|c| seen.insert(c.phone.trim().to_string())) {
            return Err(ContactError::Duplicate);
        }
        self.storage.save(STORAGE_KEY_EMERGENCY_CONTACTS, &self.contacts)?;
        log::info!("💾 {} contactos guardados localmente", self.contacts.len());
        Ok(ContactsPayload::from_contacts(&self.contacts))
    }
}

pub enum ContactAction {
    Add,
    Remove(String),
    Update(String, ContactField, String),
}

/// Rejected actions leave the book unchanged.
impl<S: KeyValueStorage + Clone + 'static> Reducible for ContactBook<S> {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let result = match action {
            ContactAction::Add => next.add(),
            ContactAction::Remove(id) => next.remove(&id),
            ContactAction::Update(id, field, value) => {
                next.update(&id, field, &value);
                Ok(())
            }
        };
        match result {
            Ok(()) => Rc::new(next),
            Err(e) => {
                log::warn!("⚠️ {}", e);
                self
            }
        }
    }
}
