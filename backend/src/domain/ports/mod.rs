//! Domain ports for the hexagonal boundary.
//!
//! Driven port: [`CustomerRepository`]. Driving ports: [`CustomerCommand`],
//! [`CustomerQuery`], [`ContactCommand`], [`AddressCommand`].

mod macros;
pub(crate) use macros::define_port_error;

mod address_command;
mod contact_command;
mod customer_command;
mod customer_repository;

#[cfg(test)]
pub use address_command::MockAddressCommand;
pub use address_command::AddressCommand;
#[cfg(test)]
pub use contact_command::MockContactCommand;
pub use contact_command::ContactCommand;
#[cfg(test)]
pub use customer_command::{MockCustomerCommand, MockCustomerQuery};
pub use customer_command::{CustomerCommand, CustomerQuery};
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{CustomerRepository, CustomerRepositoryError};
