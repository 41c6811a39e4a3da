//! Address sub-resource service.
//!
//! Same read, recompute, write cycle as contacts, without a main invariant.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::customer_service::{fetch_existing, map_repository_error};
use crate::domain::ports::{AddressCommand, CustomerRepository};
use crate::domain::validation::validate_address;
use crate::domain::{
    Address, AddressId, AddressPayload, CollectionReplacement, Customer, CustomerId, Error,
};

/// Message reported when the address id is unknown within its customer.
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

fn position_of(customer: &Customer, address_id: &AddressId) -> Result<usize, Error> {
    customer
        .addresses
        .iter()
        .position(|address| &address.id == address_id)
        .ok_or_else(|| Error::not_found(ADDRESS_NOT_FOUND))
}

/// Address service implementing [`AddressCommand`].
#[derive(Clone)]
pub struct AddressService<R> {
    customer_repo: Arc<R>,
}

impl<R> AddressService<R> {
    /// Create a new service with the customer repository.
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }
}

impl<R> AddressService<R>
where
    R: CustomerRepository,
{
    async fn persist(
        &self,
        customer_id: &CustomerId,
        addresses: Vec<Address>,
    ) -> Result<Customer, Error> {
        self.customer_repo
            .replace_collection(customer_id, CollectionReplacement::Addresses(addresses))
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> AddressCommand for AddressService<R>
where
    R: CustomerRepository,
{
    async fn create_address(
        &self,
        customer_id: &CustomerId,
        payload: AddressPayload,
    ) -> Result<Customer, Error> {
        debug!(customer_id = %customer_id, "creating address");
        let address = validate_address(payload)?.into_address();
        let mut customer = fetch_existing(self.customer_repo.as_ref(), customer_id).await?;

        let address_id = address.id.clone();
        customer.addresses.push(address);

        let stored = self.persist(customer_id, customer.addresses).await?;
        info!(customer_id = %customer_id, address_id = %address_id, "address created");
        Ok(stored)
    }

    async fn update_address(
        &self,
        customer_id: &CustomerId,
        address_id: &AddressId,
        payload: AddressPayload,
    ) -> Result<Customer, Error> {
        debug!(customer_id = %customer_id, address_id = %address_id, "updating address");
        let draft = validate_address(payload)?;
        let mut customer = fetch_existing(self.customer_repo.as_ref(), customer_id).await?;
        let position = position_of(&customer, address_id)?;

        customer.addresses[position].line = draft.line;

        let stored = self.persist(customer_id, customer.addresses).await?;
        info!(customer_id = %customer_id, address_id = %address_id, "address updated");
        Ok(stored)
    }

    async fn delete_address(
        &self,
        customer_id: &CustomerId,
        address_id: &AddressId,
    ) -> Result<Customer, Error> {
        debug!(customer_id = %customer_id, address_id = %address_id, "deleting address");
        let mut customer = fetch_existing(self.customer_repo.as_ref(), customer_id).await?;
        let position = position_of(&customer, address_id)?;

        customer.addresses.remove(position);

        let stored = self.persist(customer_id, customer.addresses).await?;
        info!(customer_id = %customer_id, address_id = %address_id, "address deleted");
        Ok(stored)
    }
}

#[cfg(test)]
#[path = "address_service_tests.rs"]
mod tests;
