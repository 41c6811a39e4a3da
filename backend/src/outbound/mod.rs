//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: customer document stores.
//!
//! Adapters are thin translators between domain types and the store. They
//! contain no business logic.

pub mod persistence;
