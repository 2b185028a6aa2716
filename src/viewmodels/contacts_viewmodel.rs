use crate::models::Notification;
use crate::services::{users_service, ApiClient};
use crate::stores::{ContactBook, ContactError};
use crate::utils::KeyValueStorage;

pub struct ContactsViewModel {
    api_client: ApiClient,
}

impl Default for ContactsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactsViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// Local save first; the backend copy is best effort and its failure still
    /// counts as saved.
    pub async fn save<S: KeyValueStorage>(
        &self,
        book: &ContactBook<S>,
        token: Option<&str>,
    ) -> Result<Notification, ContactError> {
        let payload = book.save_local()?;

        let Some(token) = token else {
            return Ok(Notification::info("Contacts saved!", "Your emergency contacts have been updated."));
        };

        Ok(
            match users_service::update_emergency_contacts(&self.api_client, &payload, Some(token)).await {
                Ok(()) => Notification::info("Contacts saved!", "Your emergency contacts have been updated."),
                Err(e) => {
                    log::warn!("⚠️ Contactos guardados solo en local: {}", e);
                    Notification::info("Saved locally", "Backend sync failed; contacts are stored on this device.")
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactField;
    use crate::services::testing::FakeTransport;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;

    fn book_with_phone(storage: MemoryStorage, phone: &str) -> ContactBook<MemoryStorage> {
        let mut book = ContactBook::load(storage);
        let id = book.contacts()[0].id.clone();
        book.update(&id, ContactField::Phone, phone);
        book
    }

    #[test]
    fn backend_receives_numbered_phones() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"status":"ok"}"#);
        let vm = ContactsViewModel::with_client(ApiClient::with_transport("http://api.test", transport.clone()));

        let book = book_with_phone(MemoryStorage::new(), "+4471");
        let notification = block_on(vm.save(&book, Some("t"))).unwrap();
        assert_eq!(notification.title, "Contacts saved!");

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"contact1": "+4471"}));
    }

    #[test]
    fn backend_failure_still_saves_locally() {
        let transport = FakeTransport::new();
        transport.fail("offline");
        let vm = ContactsViewModel::with_client(ApiClient::with_transport("http://api.test", transport));

        let storage = MemoryStorage::new();
        let book = book_with_phone(storage.clone(), "123");
        let notification = block_on(vm.save(&book, Some("t"))).unwrap();
        assert_eq!(notification.title, "Saved locally");
        assert_eq!(notification.description, "Backend sync failed; contacts are stored on this device.");
        assert_eq!(ContactBook::load(storage).reachable().len(), 1);
    }

    #[test]
    fn nothing_to_save_is_rejected_before_any_request() {
        let transport = FakeTransport::new();
        let vm = ContactsViewModel::with_client(ApiClient::with_transport("http://api.test", transport.clone()));
        let book = ContactBook::load(MemoryStorage::new());
        assert!(matches!(block_on(vm.save(&book, Some("t"))), Err(ContactError::NoPhoneNumbers)));
        assert!(transport.requests().is_empty());
    }
}
