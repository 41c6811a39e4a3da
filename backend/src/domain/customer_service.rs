//! Customer document services.
//!
//! [`CustomerService`] implements the customer driving ports on top of a
//! [`CustomerRepository`]. Creation validates the whole document; basic-data
//! updates validate first, then confirm the customer exists, then merge.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    CustomerCommand, CustomerQuery, CustomerRepository, CustomerRepositoryError,
};
use crate::domain::validation::{validate_basic_data, validate_new_customer};
use crate::domain::{CUSTOMER_NOT_FOUND, Customer, CustomerId, CustomerPayload, Error};

pub(crate) fn map_repository_error(error: CustomerRepositoryError) -> Error {
    match error {
        CustomerRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("customer repository unavailable: {message}"))
        }
        CustomerRepositoryError::Query { message } => {
            Error::internal(format!("customer repository error: {message}"))
        }
        CustomerRepositoryError::Missing { .. } => Error::not_found(CUSTOMER_NOT_FOUND),
    }
}

/// Load a customer or fail with "Customer not found".
pub(crate) async fn fetch_existing<R>(repo: &R, id: &CustomerId) -> Result<Customer, Error>
where
    R: CustomerRepository + ?Sized,
{
    repo.get(id)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(|| Error::not_found(CUSTOMER_NOT_FOUND))
}

/// Customer service implementing [`CustomerCommand`] and [`CustomerQuery`].
#[derive(Clone)]
pub struct CustomerService<R> {
    customer_repo: Arc<R>,
}

impl<R> CustomerService<R> {
    /// Create a new service with the customer repository.
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }
}

#[async_trait]
impl<R> CustomerCommand for CustomerService<R>
where
    R: CustomerRepository,
{
    async fn create(&self, payload: CustomerPayload) -> Result<Customer, Error> {
        let draft = validate_new_customer(payload).inspect_err(|err| {
            debug!(reasons = ?err.errors(), "customer payload rejected");
        })?;
        let customer = draft.into_customer();

        let stored = self
            .customer_repo
            .create(&customer)
            .await
            .map_err(map_repository_error)?;

        info!(customer_id = %stored.id, contacts = stored.contacts.len(), "customer created");
        Ok(stored)
    }

    async fn update_basic_data(
        &self,
        id: &CustomerId,
        payload: CustomerPayload,
    ) -> Result<Customer, Error> {
        debug!(customer_id = %id, "updating customer basic data");
        let patch = validate_basic_data(payload)?;
        fetch_existing(self.customer_repo.as_ref(), id).await?;

        let stored = self
            .customer_repo
            .update(id, &patch)
            .await
            .map_err(map_repository_error)?;

        info!(customer_id = %id, "customer basic data updated");
        Ok(stored)
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), Error> {
        debug!(customer_id = %id, "deleting customer");
        fetch_existing(self.customer_repo.as_ref(), id).await?;

        self.customer_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;

        info!(customer_id = %id, "customer deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> CustomerQuery for CustomerService<R>
where
    R: CustomerRepository,
{
    async fn get(&self, id: &CustomerId) -> Result<Customer, Error> {
        debug!(customer_id = %id, "fetching customer");
        fetch_existing(self.customer_repo.as_ref(), id).await
    }

    async fn list(&self) -> Result<Vec<Customer>, Error> {
        debug!("listing customers");
        self.customer_repo
            .scan()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "customer_service_tests.rs"]
mod tests;
