//! Driving port for the addresses sub-resource.

use async_trait::async_trait;

use crate::domain::{AddressId, AddressPayload, Customer, CustomerId, Error};

/// Single-address mutations. Every operation returns the whole persisted
/// customer document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressCommand: Send + Sync {
    /// Append an address under a fresh id.
    async fn create_address(
        &self,
        customer_id: &CustomerId,
        payload: AddressPayload,
    ) -> Result<Customer, Error>;

    /// Replace the `line` of an existing address.
    async fn update_address(
        &self,
        customer_id: &CustomerId,
        address_id: &AddressId,
        payload: AddressPayload,
    ) -> Result<Customer, Error>;

    /// Remove an address.
    async fn delete_address(
        &self,
        customer_id: &CustomerId,
        address_id: &AddressId,
    ) -> Result<Customer, Error>;
}
