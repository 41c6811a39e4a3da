//! Port for customer document persistence.
//!
//! The [`CustomerRepository`] trait is the only shared state the services
//! touch. Adapters store each customer as one document, contacts and
//! addresses included.

use async_trait::async_trait;

use crate::domain::{CollectionReplacement, Customer, CustomerId, CustomerPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by customer repository adapters.
    pub enum CustomerRepositoryError {
        /// The backing store could not be reached. Only adapters over a
        /// networked document store raise this; the in-memory store never
        /// does.
        Connection { message: String } =>
            "customer repository connection failed: {message}",
        /// A read or write failed during execution.
        Query { message: String } =>
            "customer repository query failed: {message}",
        /// A write targeted a document that no longer exists.
        Missing { id: String } =>
            "customer document {id} does not exist",
    }
}

/// Port for customer document storage.
///
/// # Concurrency
///
/// Services follow a read, compute, write pattern: they [`get`] the document,
/// recompute a collection in memory, and write it back with
/// [`replace_collection`]. No version token is carried, so two concurrent
/// mutations of the same customer race and the last write wins. Adapters
/// only guarantee that each individual call is atomic.
///
/// [`get`]: CustomerRepository::get
/// [`replace_collection`]: CustomerRepository::replace_collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fetch one document, or `None` when it does not exist.
    async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerRepositoryError>;

    /// Insert a new document and return the stored representation.
    async fn create(&self, customer: &Customer) -> Result<Customer, CustomerRepositoryError>;

    /// Merge the supplied scalar fields into an existing document.
    ///
    /// Fields left `None` in the patch are untouched. Returns
    /// [`CustomerRepositoryError::Missing`] if the document is absent.
    async fn update(
        &self,
        id: &CustomerId,
        patch: &CustomerPatch,
    ) -> Result<Customer, CustomerRepositoryError>;

    /// Overwrite one owned collection with a recomputed one.
    ///
    /// Returns [`CustomerRepositoryError::Missing`] if the document is
    /// absent.
    async fn replace_collection(
        &self,
        id: &CustomerId,
        replacement: CollectionReplacement,
    ) -> Result<Customer, CustomerRepositoryError>;

    /// Remove a document. Deleting an absent document is not an error.
    async fn delete(&self, id: &CustomerId) -> Result<(), CustomerRepositoryError>;

    /// Enumerate every stored document.
    async fn scan(&self) -> Result<Vec<Customer>, CustomerRepositoryError>;
}
