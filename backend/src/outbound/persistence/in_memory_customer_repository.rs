//! In-process customer document store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{CustomerRepository, CustomerRepositoryError};
use crate::domain::{CollectionReplacement, Customer, CustomerId, CustomerPatch};

/// Customer documents held in memory, in insertion order.
///
/// # Examples
/// ```
/// use customers::domain::ports::CustomerRepository;
/// use customers::domain::{CustomerId, CustomerPatch};
/// use customers::outbound::persistence::InMemoryCustomerRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryCustomerRepository::new();
/// let result = repo
///     .update(&CustomerId::new("missing"), &CustomerPatch::default())
///     .await;
/// assert!(result.is_err());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    documents: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with documents.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            documents: RwLock::new(customers),
        }
    }

    async fn modify<F>(&self, id: &CustomerId, apply: F) -> Result<Customer, CustomerRepositoryError>
    where
        F: FnOnce(&mut Customer) + Send,
    {
        let mut documents = self.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|customer| &customer.id == id)
            .ok_or_else(|| CustomerRepositoryError::missing(id.as_str()))?;
        apply(document);
        Ok(document.clone())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerRepositoryError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|customer| &customer.id == id).cloned())
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, CustomerRepositoryError> {
        let mut documents = self.documents.write().await;
        if documents.iter().any(|stored| stored.id == customer.id) {
            return Err(CustomerRepositoryError::query(format!(
                "customer {} already exists",
                customer.id
            )));
        }
        documents.push(customer.clone());
        debug!(customer_id = %customer.id, total = documents.len(), "customer document stored");
        Ok(customer.clone())
    }

    async fn update(
        &self,
        id: &CustomerId,
        patch: &CustomerPatch,
    ) -> Result<Customer, CustomerRepositoryError> {
        self.modify(id, |customer| customer.apply_patch(patch)).await
    }

    async fn replace_collection(
        &self,
        id: &CustomerId,
        replacement: CollectionReplacement,
    ) -> Result<Customer, CustomerRepositoryError> {
        debug!(
            customer_id = %id,
            field = replacement.field_name(),
            len = replacement.len(),
            "replacing customer collection"
        );
        self.modify(id, |customer| customer.apply_replacement(replacement))
            .await
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), CustomerRepositoryError> {
        let mut documents = self.documents.write().await;
        documents.retain(|customer| &customer.id != id);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Customer>, CustomerRepositoryError> {
        Ok(self.documents.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, AddressId, Contact, ContactId};
    use crate::test_support::sample_customer;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryCustomerRepository {
        InMemoryCustomerRepository::with_customers(vec![sample_customer()])
    }

    #[rstest]
    #[tokio::test]
    async fn get_returns_stored_document(repo: InMemoryCustomerRepository) {
        let found = repo.get(&CustomerId::new("1")).await.expect("read succeeds");
        assert_eq!(found, Some(sample_customer()));

        let missing = repo.get(&CustomerId::new("2")).await.expect("read succeeds");
        assert!(missing.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_ids(repo: InMemoryCustomerRepository) {
        let error = repo
            .create(&sample_customer())
            .await
            .expect_err("duplicate id");
        assert!(matches!(error, CustomerRepositoryError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn scan_preserves_insertion_order(repo: InMemoryCustomerRepository) {
        let mut second = sample_customer();
        second.id = CustomerId::new("2");
        repo.create(&second).await.expect("create succeeds");

        let ids: Vec<String> = repo
            .scan()
            .await
            .expect("scan succeeds")
            .into_iter()
            .map(|customer| customer.id.to_string())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_merges_supplied_fields_only(repo: InMemoryCustomerRepository) {
        let patch = CustomerPatch {
            full_name: Some("Renamed".to_owned()),
            ..CustomerPatch::default()
        };

        let updated = repo
            .update(&CustomerId::new("1"), &patch)
            .await
            .expect("update succeeds");

        assert_eq!(updated.full_name, "Renamed");
        assert!(updated.active);
        assert_eq!(updated.contacts, sample_customer().contacts);
    }

    #[rstest]
    #[tokio::test]
    async fn replace_collection_swaps_one_field(repo: InMemoryCustomerRepository) {
        let contacts = vec![Contact {
            id: ContactId::new("9"),
            email: "only@test.com".to_owned(),
            phone: "0".to_owned(),
            main: true,
        }];

        let updated = repo
            .replace_collection(
                &CustomerId::new("1"),
                CollectionReplacement::Contacts(contacts.clone()),
            )
            .await
            .expect("replace succeeds");

        assert_eq!(updated.contacts, contacts);
        assert_eq!(
            updated.addresses,
            vec![Address {
                id: AddressId::new("1"),
                line: "test".to_owned(),
            }]
        );
        let stored = repo
            .get(&CustomerId::new("1"))
            .await
            .expect("read succeeds")
            .expect("document exists");
        assert_eq!(stored, updated);
    }

    #[rstest]
    #[tokio::test]
    async fn writes_to_absent_documents_report_missing(repo: InMemoryCustomerRepository) {
        let error = repo
            .replace_collection(
                &CustomerId::new("404"),
                CollectionReplacement::Addresses(Vec::new()),
            )
            .await
            .expect_err("absent document");

        assert_eq!(error, CustomerRepositoryError::missing("404"));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_is_idempotent(repo: InMemoryCustomerRepository) {
        repo.delete(&CustomerId::new("1")).await.expect("delete succeeds");
        repo.delete(&CustomerId::new("1")).await.expect("repeat succeeds");

        assert!(repo.scan().await.expect("scan succeeds").is_empty());
    }
}
