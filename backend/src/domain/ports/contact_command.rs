//! Driving port for the contacts sub-resource.

use async_trait::async_trait;

use crate::domain::{ContactId, ContactPayload, Customer, CustomerId, Error};

/// Single-contact mutations that keep exactly one contact main.
///
/// Every operation returns the whole persisted customer document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Append a contact. A main contact demotes every existing one.
    async fn create_contact(
        &self,
        customer_id: &CustomerId,
        payload: ContactPayload,
    ) -> Result<Customer, Error>;

    /// Replace a contact's fields in place, keeping its id and position.
    ///
    /// # Errors
    ///
    /// - `invariant_violation` when the result would have no main contact.
    async fn update_contact(
        &self,
        customer_id: &CustomerId,
        contact_id: &ContactId,
        payload: ContactPayload,
    ) -> Result<Customer, Error>;

    /// Remove a secondary contact.
    ///
    /// # Errors
    ///
    /// - `invariant_violation` when the contact is the main one.
    async fn delete_contact(
        &self,
        customer_id: &CustomerId,
        contact_id: &ContactId,
    ) -> Result<Customer, Error>;
}
