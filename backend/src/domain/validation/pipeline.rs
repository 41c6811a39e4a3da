//! Full-document validation and the single-element entry points used by the
//! sub-resource services.

use crate::domain::{
    AddressDraft, AddressPayload, ContactDraft, ContactPayload, CustomerDraft, CustomerPatch,
    CustomerPayload, Error, Field,
};

use super::collections::{CollectionOptions, validate_addresses, validate_contacts};
use super::field::validate_field;

/// Fields accepted by [`validate_customer_payload`].
///
/// In partial-update mode absent scalars stay `None` and both collections
/// are always `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedCustomer {
    /// Accepted full name.
    pub full_name: Option<String>,
    /// Accepted birth date.
    pub birthdate: Option<String>,
    /// Accepted active flag.
    pub active: Option<bool>,
    /// Accepted contacts.
    pub contacts: Option<Vec<ContactDraft>>,
    /// Accepted addresses.
    pub addresses: Option<Vec<AddressDraft>>,
}

impl ValidatedCustomer {
    /// Creation draft, available once every field was accepted.
    pub fn into_draft(self) -> Option<CustomerDraft> {
        Some(CustomerDraft {
            full_name: self.full_name?,
            birthdate: self.birthdate?,
            active: self.active?,
            contacts: self.contacts?,
            addresses: self.addresses?,
        })
    }

    /// Basic-data projection; collections are dropped.
    pub fn into_basic_data(self) -> CustomerPatch {
        CustomerPatch {
            full_name: self.full_name,
            birthdate: self.birthdate,
            active: self.active,
        }
    }
}

fn keep<T>(result: Result<Option<T>, String>, errors: &mut Vec<String>) -> Option<T> {
    result.unwrap_or_else(|reason| {
        errors.push(reason);
        None
    })
}

/// Run every field and collection validator, collecting all reasons.
///
/// Reasons are ordered `active`, `fullName`, `birthdate`, `contacts`,
/// `addresses`.
///
/// # Examples
/// ```
/// use customers::domain::CustomerPayload;
/// use customers::domain::validation::validate_customer_payload;
///
/// let errors = validate_customer_payload(CustomerPayload::default(), false)
///     .expect_err("empty payload is rejected");
/// assert_eq!(
///     errors,
///     [
///         "active is required",
///         "fullName is required",
///         "birthdate is required",
///         "contacts is required",
///         "addresses is required",
///     ]
/// );
/// assert!(validate_customer_payload(CustomerPayload::default(), true).is_ok());
/// ```
pub fn validate_customer_payload(
    payload: CustomerPayload,
    partial_update_mode: bool,
) -> Result<ValidatedCustomer, Vec<String>> {
    let CustomerPayload {
        full_name,
        birthdate,
        active,
        contacts,
        addresses,
    } = payload;
    let options = CollectionOptions {
        partial_update_mode,
        ignore_main_invariant: false,
    };
    let mut errors = Vec::new();

    let active = keep(
        validate_field("active", active, partial_update_mode),
        &mut errors,
    );
    let full_name = keep(
        validate_field("fullName", full_name, partial_update_mode),
        &mut errors,
    );
    let birthdate = keep(
        validate_field("birthdate", birthdate, partial_update_mode),
        &mut errors,
    );
    let contacts = keep(validate_contacts(contacts, options), &mut errors);
    let addresses = keep(validate_addresses(addresses, options), &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedCustomer {
        full_name,
        birthdate,
        active,
        contacts,
        addresses,
    })
}

/// Validate a creation payload.
pub fn validate_new_customer(payload: CustomerPayload) -> Result<CustomerDraft, Error> {
    validate_customer_payload(payload, false)
        .map_err(Error::validation)?
        .into_draft()
        .ok_or_else(|| Error::internal("validated customer payload is incomplete"))
}

/// Validate a basic-data update payload.
pub fn validate_basic_data(payload: CustomerPayload) -> Result<CustomerPatch, Error> {
    validate_customer_payload(payload, true)
        .map(ValidatedCustomer::into_basic_data)
        .map_err(Error::validation)
}

/// Validate one incoming contact without the global main-contact rules.
pub fn validate_contact(payload: ContactPayload) -> Result<ContactDraft, Error> {
    validate_contacts(
        Field::Present(vec![Field::Present(payload)]),
        CollectionOptions::single_element(),
    )
    .map_err(|reason| Error::validation(vec![reason]))?
    .and_then(|drafts| drafts.into_iter().next())
    .ok_or_else(|| Error::internal("validated contact payload is empty"))
}

/// Validate one incoming address.
pub fn validate_address(payload: AddressPayload) -> Result<AddressDraft, Error> {
    validate_addresses(
        Field::Present(vec![Field::Present(payload)]),
        CollectionOptions::single_element(),
    )
    .map_err(|reason| Error::validation(vec![reason]))?
    .and_then(|drafts| drafts.into_iter().next())
    .ok_or_else(|| Error::internal("validated address payload is empty"))
}
