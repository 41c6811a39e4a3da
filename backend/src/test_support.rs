//! Shared fixtures for unit tests across the crate.

use serde_json::{Value, json};

use crate::domain::{Address, AddressId, Contact, ContactId, Customer, CustomerId};

/// Customer "1" with main contact "1", secondary contact "2" and address "1".
pub(crate) fn sample_customer() -> Customer {
    Customer {
        id: CustomerId::new("1"),
        full_name: "Test Da Silva".to_owned(),
        birthdate: "2020-01-01".to_owned(),
        active: true,
        contacts: vec![
            Contact {
                id: ContactId::new("1"),
                email: "test@test.com".to_owned(),
                phone: "19 9999999999".to_owned(),
                main: true,
            },
            Contact {
                id: ContactId::new("2"),
                email: "test2@test.com".to_owned(),
                phone: "19 8888888888".to_owned(),
                main: false,
            },
        ],
        addresses: vec![Address {
            id: AddressId::new("1"),
            line: "test".to_owned(),
        }],
    }
}

/// A creation body that passes validation, carrying client ids that must be
/// ignored.
pub(crate) fn valid_customer_body() -> Value {
    json!({
        "id": "client-chosen",
        "active": true,
        "fullName": "Test Da Silva",
        "birthdate": "2020-01-01",
        "contacts": [
            { "id": "x", "email": "test@test.com", "phone": "19 9999999999", "main": true },
            { "email": "test2@test.com", "phone": "19 8888888888", "main": false },
        ],
        "addresses": [{ "id": "y", "line": "test" }],
    })
}

/// Main flag of each contact, in order.
pub(crate) fn main_flags(customer: &Customer) -> Vec<(&str, bool)> {
    customer
        .contacts
        .iter()
        .map(|contact| (contact.id.as_str(), contact.main))
        .collect()
}
