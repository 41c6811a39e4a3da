//! Customer document persistence adapters.
//!
//! [`InMemoryCustomerRepository`] is the reference implementation of the
//! [`CustomerRepository`](crate::domain::ports::CustomerRepository) contract.
//! It keeps documents in insertion order and makes each call atomic; it does
//! not serialise read, compute, write cycles across calls.

mod in_memory_customer_repository;

pub use in_memory_customer_repository::InMemoryCustomerRepository;
