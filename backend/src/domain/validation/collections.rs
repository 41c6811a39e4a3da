//! Collection validators for contacts and addresses.
//!
//! Rules run in a fixed order and stop at the first failure:
//! partial-mode bypass, presence, array shape, main cardinality (contacts),
//! non-emptiness, main presence (contacts), element shape.

use crate::domain::{AddressDraft, AddressPayload, ContactDraft, ContactPayload, Field};

use super::field::required;

/// Reason reported when more or fewer than one contact is main.
pub const ONLY_ONE_MAIN_CONTACT: &str = "contacts must have only one main contact";
/// Reason reported when no contact is main.
pub const MAIN_CONTACT_REQUIRED: &str = "contacts must have a main contact";
/// Reason reported when a contact element is malformed.
pub const CONTACT_FIELDS_REQUIRED: &str = "contacts must have email, phone and main fields";
/// Reason reported when an address element is malformed.
pub const ADDRESS_FIELDS_REQUIRED: &str = "addresses must be an array of line fields";

/// Switches controlling which collection rules apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionOptions {
    /// Skip every collection rule; basic-data updates never touch collections.
    pub partial_update_mode: bool,
    /// Skip the main-contact cardinality rules. Single-contact mutations set
    /// this because the owning service checks the recomputed collection.
    pub ignore_main_invariant: bool,
}

impl CollectionOptions {
    /// Every rule applies.
    pub const fn full_document() -> Self {
        Self {
            partial_update_mode: false,
            ignore_main_invariant: false,
        }
    }

    /// Collections are ignored.
    pub const fn basic_data_update() -> Self {
        Self {
            partial_update_mode: true,
            ignore_main_invariant: false,
        }
    }

    /// One incoming element, validated without the global main-contact rule.
    pub const fn single_element() -> Self {
        Self {
            partial_update_mode: false,
            ignore_main_invariant: true,
        }
    }
}

fn not_an_array(name: &str) -> String {
    format!("{name} must be an array")
}

fn not_empty(name: &str) -> String {
    format!("{name} must not be empty")
}

fn present_sequence<T>(name: &str, field: Field<Vec<T>>) -> Result<Vec<T>, String> {
    match field {
        Field::Present(elements) => Ok(elements),
        Field::Mismatched => Err(not_an_array(name)),
        Field::Missing => Err(required(name)),
    }
}

fn is_main(contact: &Field<ContactPayload>) -> bool {
    contact
        .as_present()
        .is_some_and(|payload| payload.main == Field::Present(true))
}

fn contact_draft(contact: Field<ContactPayload>) -> Option<ContactDraft> {
    let ContactPayload { email, phone, main } = contact.into_present()?;
    Some(ContactDraft {
        email: email.into_present()?,
        phone: phone.into_present()?,
        main: main.into_present()?,
    })
}

fn address_draft(address: Field<AddressPayload>) -> Option<AddressDraft> {
    let AddressPayload { line } = address.into_present()?;
    Some(AddressDraft {
        line: line.into_present()?,
    })
}

/// Validate a contacts collection.
///
/// Returns the accepted contacts, or `None` in partial-update mode.
///
/// # Examples
/// ```
/// use customers::domain::validation::{CollectionOptions, validate_contacts};
/// use customers::domain::{ContactPayload, Field};
///
/// let secondary = ContactPayload {
///     email: Field::Present("a@a.com".to_owned()),
///     phone: Field::Present("1".to_owned()),
///     main: Field::Present(false),
/// };
/// let contacts = Field::Present(vec![Field::Present(secondary)]);
///
/// assert_eq!(
///     validate_contacts(contacts.clone(), CollectionOptions::full_document()),
///     Err("contacts must have only one main contact".to_owned())
/// );
/// assert!(validate_contacts(contacts, CollectionOptions::single_element()).is_ok());
/// ```
pub fn validate_contacts(
    contacts: Field<Vec<Field<ContactPayload>>>,
    options: CollectionOptions,
) -> Result<Option<Vec<ContactDraft>>, String> {
    if options.partial_update_mode {
        return Ok(None);
    }

    let contacts = present_sequence("contacts", contacts)?;
    let main_count = contacts.iter().filter(|contact| is_main(contact)).count();

    if !options.ignore_main_invariant && main_count != 1 {
        return Err(ONLY_ONE_MAIN_CONTACT.to_owned());
    }
    if contacts.is_empty() {
        return Err(not_empty("contacts"));
    }
    if !options.ignore_main_invariant && main_count == 0 {
        return Err(MAIN_CONTACT_REQUIRED.to_owned());
    }

    contacts
        .into_iter()
        .map(contact_draft)
        .collect::<Option<Vec<_>>>()
        .map(Some)
        .ok_or_else(|| CONTACT_FIELDS_REQUIRED.to_owned())
}

/// Validate an addresses collection.
///
/// Returns the accepted addresses, or `None` in partial-update mode.
/// `ignore_main_invariant` has no effect on addresses.
pub fn validate_addresses(
    addresses: Field<Vec<Field<AddressPayload>>>,
    options: CollectionOptions,
) -> Result<Option<Vec<AddressDraft>>, String> {
    if options.partial_update_mode {
        return Ok(None);
    }

    let addresses = present_sequence("addresses", addresses)?;
    if addresses.is_empty() {
        return Err(not_empty("addresses"));
    }

    addresses
        .into_iter()
        .map(address_draft)
        .collect::<Option<Vec<_>>>()
        .map(Some)
        .ok_or_else(|| ADDRESS_FIELDS_REQUIRED.to_owned())
}
