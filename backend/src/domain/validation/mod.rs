//! Customer payload validation.
//!
//! Field validators check required-ness and kind; collection validators add
//! ordering-sensitive rules for contacts and addresses; the pipeline composes
//! them. Full-document validation collects every reason, while single-element
//! validation stops at the first.

mod collections;
mod field;
mod pipeline;

pub use collections::{
    ADDRESS_FIELDS_REQUIRED, CONTACT_FIELDS_REQUIRED, CollectionOptions, MAIN_CONTACT_REQUIRED,
    ONLY_ONE_MAIN_CONTACT, validate_addresses, validate_contacts,
};
pub use field::validate_field;
pub use pipeline::{
    ValidatedCustomer, validate_address, validate_basic_data, validate_contact,
    validate_customer_payload, validate_new_customer,
};

#[cfg(test)]
mod tests;
