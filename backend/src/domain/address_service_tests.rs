//! Tests for the address service.

use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockCustomerRepository;
use crate::test_support::sample_customer;

fn make_service(repo: MockCustomerRepository) -> AddressService<MockCustomerRepository> {
    AddressService::new(Arc::new(repo))
}

fn payload(body: serde_json::Value) -> AddressPayload {
    AddressPayload::from_json(body).expect("object body")
}

fn expect_existing(repo: &mut MockCustomerRepository) {
    repo.expect_get()
        .times(1)
        .return_once(|_| Ok(Some(sample_customer())));
}

fn expect_replacement(repo: &mut MockCustomerRepository) {
    repo.expect_replace_collection()
        .withf(|_, replacement| replacement.field_name() == "addresses")
        .times(1)
        .returning(|_, replacement| {
            let mut customer = sample_customer();
            customer.apply_replacement(replacement);
            Ok(customer)
        });
}

fn lines(customer: &Customer) -> Vec<&str> {
    customer
        .addresses
        .iter()
        .map(|address| address.line.as_str())
        .collect()
}

#[tokio::test]
async fn create_appends_with_fresh_id() {
    let mut repo = MockCustomerRepository::new();
    expect_existing(&mut repo);
    expect_replacement(&mut repo);

    let customer = make_service(repo)
        .create_address(
            &CustomerId::new("1"),
            payload(json!({ "id": "1", "line": "second" })),
        )
        .await
        .expect("create succeeds");

    assert_eq!(lines(&customer), ["test", "second"]);
    assert_ne!(customer.addresses[1].id.as_str(), "1");
    assert_eq!(customer.contacts, sample_customer().contacts);
}

#[tokio::test]
async fn create_rejects_missing_line_without_fetching() {
    let mut repo = MockCustomerRepository::new();
    repo.expect_get().times(0);
    repo.expect_replace_collection().times(0);

    let error = make_service(repo)
        .create_address(&CustomerId::new("1"), payload(json!({ "line": 3 })))
        .await
        .expect_err("line must be a string");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.errors(), ["addresses must be an array of line fields"]);
}

#[tokio::test]
async fn update_replaces_line_in_place() {
    let mut repo = MockCustomerRepository::new();
    expect_existing(&mut repo);
    expect_replacement(&mut repo);

    let customer = make_service(repo)
        .update_address(
            &CustomerId::new("1"),
            &AddressId::new("1"),
            payload(json!({ "line": "moved" })),
        )
        .await
        .expect("update succeeds");

    assert_eq!(lines(&customer), ["moved"]);
    assert_eq!(customer.addresses[0].id.as_str(), "1");
}

#[tokio::test]
async fn update_reports_unknown_address() {
    let mut repo = MockCustomerRepository::new();
    expect_existing(&mut repo);
    repo.expect_replace_collection().times(0);

    let error = make_service(repo)
        .update_address(
            &CustomerId::new("1"),
            &AddressId::new("2"),
            payload(json!({ "line": "moved" })),
        )
        .await
        .expect_err("unknown address");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), ADDRESS_NOT_FOUND);
}

#[tokio::test]
async fn delete_may_empty_the_collection() {
    let mut repo = MockCustomerRepository::new();
    expect_existing(&mut repo);
    expect_replacement(&mut repo);

    let customer = make_service(repo)
        .delete_address(&CustomerId::new("1"), &AddressId::new("1"))
        .await
        .expect("delete succeeds");

    assert!(customer.addresses.is_empty());
}

#[tokio::test]
async fn delete_reports_missing_customer() {
    let mut repo = MockCustomerRepository::new();
    repo.expect_get().times(1).return_once(|_| Ok(None));
    repo.expect_replace_collection().times(0);

    let error = make_service(repo)
        .delete_address(&CustomerId::new("9"), &AddressId::new("1"))
        .await
        .expect_err("missing customer");

    assert_eq!(error.message(), "Customer not found");
}
