//! Customer aggregate and its owned sub-collections.
//!
//! A [`Customer`] is stored as a single document. Contacts and addresses have
//! no identity outside their parent; every mutation of either collection is
//! written back as a whole (see [`CollectionReplacement`]).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier received from a caller or the store.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Borrow the identifier text.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id! {
    /// Identifier of a customer document. Immutable once assigned.
    CustomerId
}

define_id! {
    /// Identifier of a contact, unique within its customer.
    ContactId
}

define_id! {
    /// Identifier of an address, unique within its customer.
    AddressId
}

/// A way to reach the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// System-assigned identifier.
    pub id: ContactId,
    /// Email address, stored verbatim.
    pub email: String,
    /// Phone number, stored verbatim.
    pub phone: String,
    /// Whether this is the customer's primary contact.
    pub main: bool,
}

/// A postal address in free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// System-assigned identifier.
    pub id: AddressId,
    /// Free-form address line.
    pub line: String,
}

/// Customer aggregate root.
///
/// ## Invariants
/// - `contacts` is non-empty after creation.
/// - Exactly one contact has `main = true` after any operation that affects
///   the main contact.
///
/// # Examples
/// ```
/// use customers::domain::{ContactDraft, CustomerDraft};
///
/// let customer = CustomerDraft {
///     full_name: "Ada Lovelace".to_owned(),
///     birthdate: "1815-12-10".to_owned(),
///     active: true,
///     contacts: vec![ContactDraft {
///         email: "ada@example.com".to_owned(),
///         phone: "1".to_owned(),
///         main: true,
///     }],
///     addresses: Vec::new(),
/// }
/// .into_customer();
///
/// assert_eq!(customer.main_contact_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Document identifier.
    pub id: CustomerId,
    /// Full name as supplied.
    pub full_name: String,
    /// Birth date; opaque text, usually an ISO date.
    pub birthdate: String,
    /// Whether the customer is active.
    pub active: bool,
    /// Owned contacts, in insertion order.
    pub contacts: Vec<Contact>,
    /// Owned addresses, in insertion order.
    pub addresses: Vec<Address>,
}

impl Customer {
    /// Number of contacts flagged as main.
    pub fn main_contact_count(&self) -> usize {
        self.contacts.iter().filter(|contact| contact.main).count()
    }

    /// Locate a contact by identifier.
    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    /// Locate an address by identifier.
    pub fn address(&self, id: &AddressId) -> Option<&Address> {
        self.addresses.iter().find(|address| &address.id == id)
    }

    /// Apply a basic-data patch in place. Absent fields keep their value.
    pub fn apply_patch(&mut self, patch: &CustomerPatch) {
        if let Some(full_name) = &patch.full_name {
            self.full_name.clone_from(full_name);
        }
        if let Some(birthdate) = &patch.birthdate {
            self.birthdate.clone_from(birthdate);
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }

    /// Swap one owned collection for a recomputed one.
    pub fn apply_replacement(&mut self, replacement: CollectionReplacement) {
        match replacement {
            CollectionReplacement::Contacts(contacts) => self.contacts = contacts,
            CollectionReplacement::Addresses(addresses) => self.addresses = addresses,
        }
    }
}

/// Validated contact fields awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Main flag.
    pub main: bool,
}

impl ContactDraft {
    /// Assign a fresh identifier.
    pub fn into_contact(self) -> Contact {
        Contact {
            id: ContactId::random(),
            email: self.email,
            phone: self.phone,
            main: self.main,
        }
    }
}

/// Validated address fields awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDraft {
    /// Free-form address line.
    pub line: String,
}

impl AddressDraft {
    /// Assign a fresh identifier.
    pub fn into_address(self) -> Address {
        Address {
            id: AddressId::random(),
            line: self.line,
        }
    }
}

/// Validated creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    /// Full name.
    pub full_name: String,
    /// Birth date text.
    pub birthdate: String,
    /// Active flag.
    pub active: bool,
    /// Initial contacts.
    pub contacts: Vec<ContactDraft>,
    /// Initial addresses.
    pub addresses: Vec<AddressDraft>,
}

impl CustomerDraft {
    /// Build the aggregate, assigning fresh identifiers to the customer and
    /// to every contact and address.
    pub fn into_customer(self) -> Customer {
        Customer {
            id: CustomerId::random(),
            full_name: self.full_name,
            birthdate: self.birthdate,
            active: self.active,
            contacts: self
                .contacts
                .into_iter()
                .map(ContactDraft::into_contact)
                .collect(),
            addresses: self
                .addresses
                .into_iter()
                .map(AddressDraft::into_address)
                .collect(),
        }
    }
}

/// Field-level merge applied by the repository `update` primitive.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    /// Replacement full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Replacement birth date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    /// Replacement active flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Whole-collection write used by sub-resource mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionReplacement {
    /// Replace the `contacts` collection.
    Contacts(Vec<Contact>),
    /// Replace the `addresses` collection.
    Addresses(Vec<Address>),
}

impl CollectionReplacement {
    /// Document field name the replacement targets.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Contacts(_) => "contacts",
            Self::Addresses(_) => "addresses",
        }
    }

    /// Number of elements written.
    pub fn len(&self) -> usize {
        match self {
            Self::Contacts(contacts) => contacts.len(),
            Self::Addresses(addresses) => addresses.len(),
        }
    }

    /// Whether the replacement empties the collection.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn draft() -> CustomerDraft {
        CustomerDraft {
            full_name: "Test Da Silva".to_owned(),
            birthdate: "2020-01-01".to_owned(),
            active: true,
            contacts: vec![
                ContactDraft {
                    email: "test@test.com".to_owned(),
                    phone: "19 9999999999".to_owned(),
                    main: true,
                },
                ContactDraft {
                    email: "test2@test.com".to_owned(),
                    phone: "19 9999999999".to_owned(),
                    main: false,
                },
            ],
            addresses: vec![AddressDraft {
                line: "test".to_owned(),
            }],
        }
    }

    #[rstest]
    fn into_customer_assigns_distinct_ids(draft: CustomerDraft) {
        let customer = draft.into_customer();

        assert_ne!(customer.contacts[0].id, customer.contacts[1].id);
        assert_ne!(customer.id.as_str(), customer.contacts[0].id.as_str());
        assert!(!customer.addresses[0].id.as_str().is_empty());
        assert_eq!(customer.main_contact_count(), 1);
    }

    #[rstest]
    fn serialises_with_camel_case_fields(draft: CustomerDraft) {
        let customer = draft.into_customer();
        let value = serde_json::to_value(&customer).expect("serialise customer");

        assert_eq!(value["fullName"], json!("Test Da Silva"));
        assert_eq!(value["birthdate"], json!("2020-01-01"));
        assert_eq!(value["contacts"][0]["main"], json!(true));
        assert_eq!(value["id"], json!(customer.id.as_str()));
    }

    #[rstest]
    fn apply_patch_keeps_absent_fields(draft: CustomerDraft) {
        let mut customer = draft.into_customer();
        customer.apply_patch(&CustomerPatch {
            active: Some(false),
            ..CustomerPatch::default()
        });

        assert!(!customer.active);
        assert_eq!(customer.full_name, "Test Da Silva");
        assert_eq!(customer.birthdate, "2020-01-01");
    }

    #[rstest]
    fn apply_replacement_targets_one_collection(draft: CustomerDraft) {
        let mut customer = draft.into_customer();
        let contacts = customer.contacts.clone();
        let replacement = CollectionReplacement::Addresses(Vec::new());
        assert_eq!(replacement.field_name(), "addresses");
        assert!(replacement.is_empty());

        customer.apply_replacement(replacement);

        assert!(customer.addresses.is_empty());
        assert_eq!(customer.contacts, contacts);
    }

    #[rstest]
    fn lookups_find_elements_by_id(draft: CustomerDraft) {
        let customer = draft.into_customer();
        let contact_id = customer.contacts[1].id.clone();
        let address_id = customer.addresses[0].id.clone();

        assert_eq!(
            customer.contact(&contact_id).map(|c| c.email.as_str()),
            Some("test2@test.com")
        );
        assert!(customer.address(&address_id).is_some());
        assert!(customer.contact(&ContactId::new("missing")).is_none());
    }
}
