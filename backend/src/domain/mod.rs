//! Domain primitives, validation, and services for the customer aggregate.
//!
//! Purpose: define the customer document, decode and validate incoming
//! payloads, and enforce the main-contact invariants on every mutation.
//! Services depend only on the driven ports in [`ports`]; adapters live in
//! `inbound` and `outbound`.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Customer, Contact, Address: the stored document and its collections.
//! - CustomerPayload, ContactPayload, AddressPayload: decoded request bodies.
//! - CustomerService, ContactService, AddressService: driving port
//!   implementations.

pub mod address_service;
pub mod contact_service;
pub mod customer;
pub mod customer_service;
pub mod error;
pub mod payload;
pub mod ports;
pub mod validation;

pub use self::address_service::AddressService;
pub use self::contact_service::ContactService;
pub use self::customer::{
    Address, AddressDraft, AddressId, CollectionReplacement, Contact, ContactDraft, ContactId,
    Customer, CustomerDraft, CustomerId, CustomerPatch,
};
pub use self::customer_service::CustomerService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, VALIDATION_ERROR_MESSAGE};
pub use self::payload::{
    AddressPayload, BODY_NOT_OBJECT, ContactPayload, CustomerPayload, Field, FieldKind,
};

/// Message reported when the customer document does not exist.
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use customers::domain::{CUSTOMER_NOT_FOUND, DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found(CUSTOMER_NOT_FOUND))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
