use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub phone: String,
}

impl EmergencyContact {
    /// Empty row for the contacts form
    pub fn blank() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            phone: String::new(),
        }
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
}

/// Body of `/users/emergency-contacts`: numbered slots holding phone numbers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactsPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact5: Option<String>,
}

impl ContactsPayload {
    /// Fills slots in order with contacts that have a phone; extras beyond five are dropped.
    pub fn from_contacts<'a>(contacts: impl IntoIterator<Item = &'a EmergencyContact>) -> Self {
        let mut payload = Self::default();
        let mut phones = contacts
            .into_iter()
            .filter(|c| c.has_phone())
            .map(|c| c.phone.trim().to_string());
        for slot in [
            &mut payload.contact1,
            &mut payload.contact2,
            &mut payload.contact3,
            &mut payload.contact4,
            &mut payload.contact5,
        ] {
            *slot = phones.next();
        }
        payload
    }

    pub fn is_empty(&self) -> bool {
        self.contact1.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, phone: &str) -> EmergencyContact {
        EmergencyContact { id: id.into(), name: format!("Contact {}", id), phone: phone.into() }
    }

    #[test]
    fn payload_skips_blank_phones_and_numbers_from_one() {
        let contacts = vec![contact("1", "  "), contact("2", "+111"), contact("3", "222")];
        let payload = ContactsPayload::from_contacts(&contacts);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "contact1": "+111", "contact2": "222" })
        );
    }

    #[test]
    fn blank_rows_get_distinct_ids() {
        let a = EmergencyContact::blank();
        let b = EmergencyContact::blank();
        assert_ne!(a.id, b.id);
        assert!(!a.has_phone());
        assert!(ContactsPayload::from_contacts([&a, &b]).is_empty());
    }
}
