//! Driving ports for the customer document.
//!
//! [`CustomerCommand`] covers creation, basic-data updates and deletion;
//! [`CustomerQuery`] covers reads. Inbound adapters decode request bodies into
//! payloads and leave every rule to the implementation.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerId, CustomerPayload, Error};

/// Mutations of the customer document as a whole.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerCommand: Send + Sync {
    /// Validate a full document and persist it under fresh identifiers.
    ///
    /// # Errors
    ///
    /// - `invalid_request` listing every validation reason.
    /// - `service_unavailable` or `internal_error` when the store fails.
    async fn create(&self, payload: CustomerPayload) -> Result<Customer, Error>;

    /// Merge `fullName`, `birthdate` and `active` into a stored document.
    ///
    /// Collections in the payload are ignored.
    ///
    /// # Errors
    ///
    /// - `invalid_request` when a supplied field has the wrong kind.
    /// - `not_found` when the customer does not exist.
    async fn update_basic_data(
        &self,
        id: &CustomerId,
        payload: CustomerPayload,
    ) -> Result<Customer, Error>;

    /// Delete a stored document.
    ///
    /// # Errors
    ///
    /// - `not_found` when the customer does not exist.
    async fn delete(&self, id: &CustomerId) -> Result<(), Error>;
}

/// Reads of customer documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerQuery: Send + Sync {
    /// Return the stored document verbatim.
    async fn get(&self, id: &CustomerId) -> Result<Customer, Error>;

    /// Return every stored document, unfiltered.
    async fn list(&self) -> Result<Vec<Customer>, Error>;
}
