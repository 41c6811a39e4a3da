//! Contact sub-resource service.
//!
//! Every mutation reads the customer, recomputes the whole contacts
//! collection in memory, and writes it back. The service owns the
//! main-contact rules: the incoming contact is validated on its own, and the
//! recomputed collection is checked before anything is persisted.
//!
//! ## Invariants
//! - A new or updated contact with `main = true` demotes every other contact.
//! - An update that would leave no main contact is rejected.
//! - The main contact cannot be deleted.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::customer_service::{fetch_existing, map_repository_error};
use crate::domain::ports::{ContactCommand, CustomerRepository};
use crate::domain::validation::validate_contact;
use crate::domain::{
    CollectionReplacement, Contact, ContactId, ContactPayload, Customer, CustomerId, Error,
};

/// Message reported when the contact id is unknown within its customer.
pub const CONTACT_NOT_FOUND: &str = "Contact not found";
/// Message reported when an update would leave no main contact.
pub const MAIN_CONTACT_MISSING: &str = "at least one contact must be main";
/// Message reported when deleting the main contact.
pub const MAIN_CONTACT_NOT_DELETABLE: &str = "main contact cannot be deleted";

fn demote_all(contacts: &mut [Contact]) {
    for contact in contacts {
        contact.main = false;
    }
}

fn position_of(customer: &Customer, contact_id: &ContactId) -> Result<usize, Error> {
    customer
        .contacts
        .iter()
        .position(|contact| &contact.id == contact_id)
        .ok_or_else(|| Error::not_found(CONTACT_NOT_FOUND))
}

/// Contact service implementing [`ContactCommand`].
#[derive(Clone)]
pub struct ContactService<R> {
    customer_repo: Arc<R>,
}

impl<R> ContactService<R> {
    /// Create a new service with the customer repository.
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }
}

impl<R> ContactService<R>
where
    R: CustomerRepository,
{
    async fn persist(
        &self,
        customer_id: &CustomerId,
        contacts: Vec<Contact>,
    ) -> Result<Customer, Error> {
        self.customer_repo
            .replace_collection(customer_id, CollectionReplacement::Contacts(contacts))
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> ContactCommand for ContactService<R>
where
    R: CustomerRepository,
{
    async fn create_contact(
        &self,
        customer_id: &CustomerId,
        payload: ContactPayload,
    ) -> Result<Customer, Error> {
        debug!(customer_id = %customer_id, "creating contact");
        let contact = validate_contact(payload)?.into_contact();
        let mut customer = fetch_existing(self.customer_repo.as_ref(), customer_id).await?;

        if contact.main {
            demote_all(&mut customer.contacts);
        }
        let contact_id = contact.id.clone();
        customer.contacts.push(contact);

        let stored = self.persist(customer_id, customer.contacts).await?;
        info!(customer_id = %customer_id, contact_id = %contact_id, "contact created");
        Ok(stored)
    }

    async fn update_contact(
        &self,
        customer_id: &CustomerId,
        contact_id: &ContactId,
        payload: ContactPayload,
    ) -> Result<Customer, Error> {
        debug!(customer_id = %customer_id, contact_id = %contact_id, "updating contact");
        let draft = validate_contact(payload)?;
        let mut customer = fetch_existing(self.customer_repo.as_ref(), customer_id).await?;
        let position = position_of(&customer, contact_id)?;

        if draft.main {
            demote_all(&mut customer.contacts);
        }
        let target = &mut customer.contacts[position];
        target.email = draft.email;
        target.phone = draft.phone;
        target.main = draft.main;

        if customer.main_contact_count() == 0 {
            warn!(
                customer_id = %customer_id,
                contact_id = %contact_id,
                "contact update rejected: no main contact would remain"
            );
            return Err(Error::invariant(MAIN_CONTACT_MISSING));
        }

        let stored = self.persist(customer_id, customer.contacts).await?;
        info!(customer_id = %customer_id, contact_id = %contact_id, "contact updated");
        Ok(stored)
    }

    async fn delete_contact(
        &self,
        customer_id: &CustomerId,
        contact_id: &ContactId,
    ) -> Result<Customer, Error> {
        debug!(customer_id = %customer_id, contact_id = %contact_id, "deleting contact");
        let mut customer = fetch_existing(self.customer_repo.as_ref(), customer_id).await?;
        let position = position_of(&customer, contact_id)?;

        if customer.contacts[position].main {
            warn!(
                customer_id = %customer_id,
                contact_id = %contact_id,
                "contact delete rejected: contact is main"
            );
            return Err(Error::invariant(MAIN_CONTACT_NOT_DELETABLE));
        }
        customer.contacts.remove(position);

        let stored = self.persist(customer_id, customer.contacts).await?;
        info!(customer_id = %customer_id, contact_id = %contact_id, "contact deleted");
        Ok(stored)
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
