//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a store.

use std::sync::Arc;

use crate::domain::ports::{
    AddressCommand, ContactCommand, CustomerCommand, CustomerQuery, CustomerRepository,
};
use crate::domain::{AddressService, ContactService, CustomerService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub customers: Arc<dyn CustomerCommand>,
    pub customers_query: Arc<dyn CustomerQuery>,
    pub contacts: Arc<dyn ContactCommand>,
    pub addresses: Arc<dyn AddressCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        customers: Arc<dyn CustomerCommand>,
        customers_query: Arc<dyn CustomerQuery>,
        contacts: Arc<dyn ContactCommand>,
        addresses: Arc<dyn AddressCommand>,
    ) -> Self {
        Self {
            customers,
            customers_query,
            contacts,
            addresses,
        }
    }

    /// Wire every service over one shared repository.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: CustomerRepository + 'static,
    {
        let customers = Arc::new(CustomerService::new(Arc::clone(&repo)));
        Self::new(
            customers.clone(),
            customers,
            Arc::new(ContactService::new(Arc::clone(&repo))),
            Arc::new(AddressService::new(repo)),
        )
    }
}
