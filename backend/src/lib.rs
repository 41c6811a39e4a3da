//! Customer aggregate backend.
//!
//! Customers are stored as single documents owning their contacts and
//! addresses. The [`domain`] validates payloads and enforces the
//! main-contact invariants; [`inbound`] exposes the REST adapter and
//! [`outbound`] the document store.

pub mod domain;
pub mod inbound;
pub mod outbound;

#[cfg(test)]
pub(crate) mod test_support;
