//! Tests for field, collection, and pipeline validation.

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::{AddressPayload, ContactPayload, CustomerPayload, ErrorCode, Field};

fn contacts(value: Value) -> Field<Vec<Field<ContactPayload>>> {
    serde_json::from_value(value).expect("contacts decode")
}

fn addresses(value: Value) -> Field<Vec<Field<AddressPayload>>> {
    serde_json::from_value(value).expect("addresses decode")
}

fn payload(value: Value) -> CustomerPayload {
    CustomerPayload::from_json(value).expect("payload decodes")
}

#[fixture]
fn valid_customer() -> Value {
    json!({
        "active": true,
        "fullName": "Test Da Silva",
        "birthdate": "2020-01-01",
        "contacts": [{ "email": "test@test.com", "phone": "19 9999999999", "main": true }],
        "addresses": [{ "line": "test" }],
    })
}

#[rstest]
#[case(Field::Present(true), false, Ok(Some(true)))]
#[case(Field::Missing, false, Err("active is required"))]
#[case(Field::Missing, true, Ok(None))]
#[case(Field::Mismatched, false, Err("active must be of type boolean"))]
#[case(Field::Mismatched, true, Err("active must be of type boolean"))]
fn field_validator_contract(
    #[case] field: Field<bool>,
    #[case] partial: bool,
    #[case] expected: Result<Option<bool>, &str>,
) {
    let result = validate_field("active", field, partial);
    assert_eq!(result, expected.map_err(str::to_owned));
}

#[rstest]
fn partial_mode_skips_collection_rules() {
    let options = CollectionOptions::basic_data_update();
    assert_eq!(validate_contacts(Field::Mismatched, options), Ok(None));
    assert_eq!(validate_addresses(Field::Missing, options), Ok(None));
}

#[rstest]
#[case(json!(null), "contacts must be an array")]
#[case(json!("x"), "contacts must be an array")]
#[case(json!([]), ONLY_ONE_MAIN_CONTACT)]
#[case(
    json!([
        { "email": "a", "phone": "1", "main": true },
        { "email": "b", "phone": "2", "main": true },
    ]),
    ONLY_ONE_MAIN_CONTACT
)]
#[case(json!([{ "email": "a", "phone": "1", "main": false }]), ONLY_ONE_MAIN_CONTACT)]
#[case(json!([{ "email": 1, "phone": "1", "main": true }]), CONTACT_FIELDS_REQUIRED)]
#[case(json!([{ "email": "a", "phone": "1", "main": true }, 4]), CONTACT_FIELDS_REQUIRED)]
#[case(json!([["a@a.com", "1", true]]), ONLY_ONE_MAIN_CONTACT)]
#[case(
    json!([{ "email": "a", "phone": "1", "main": true }, ["b", "2", false]]),
    CONTACT_FIELDS_REQUIRED
)]
#[case(json!([{ "email": "a", "phone": "1", "main": true }, null]), CONTACT_FIELDS_REQUIRED)]
fn contact_rules_fail_in_order(#[case] value: Value, #[case] reason: &str) {
    let result = validate_contacts(contacts(value), CollectionOptions::full_document());
    assert_eq!(result, Err(reason.to_owned()));
}

#[rstest]
fn missing_contacts_are_required() {
    let result = validate_contacts(Field::Missing, CollectionOptions::full_document());
    assert_eq!(result, Err("contacts is required".to_owned()));
}

#[rstest]
#[case(json!([]), Err("contacts must not be empty".to_owned()))]
#[case(json!([{ "email": "a", "phone": "1", "main": false }]), Ok(1))]
#[case(
    json!([
        { "email": "a", "phone": "1", "main": true },
        { "email": "b", "phone": "2", "main": true },
    ]),
    Ok(2)
)]
fn ignoring_main_invariant_relaxes_cardinality(
    #[case] value: Value,
    #[case] expected: Result<usize, String>,
) {
    let result = validate_contacts(contacts(value), CollectionOptions::single_element())
        .map(|drafts| drafts.map_or(0, |drafts| drafts.len()));
    assert_eq!(result, expected);
}

#[rstest]
#[case(json!(1), "addresses must be an array")]
#[case(json!([]), "addresses must not be empty")]
#[case(json!([{ "line": 1 }]), ADDRESS_FIELDS_REQUIRED)]
#[case(json!([{}]), ADDRESS_FIELDS_REQUIRED)]
#[case(json!([["x"]]), ADDRESS_FIELDS_REQUIRED)]
#[case(json!([null]), ADDRESS_FIELDS_REQUIRED)]
fn address_rules_fail_in_order(#[case] value: Value, #[case] reason: &str) {
    let result = validate_addresses(addresses(value), CollectionOptions::full_document());
    assert_eq!(result, Err(reason.to_owned()));
}

#[rstest]
fn positional_contact_is_rejected_for_single_element() {
    let result = validate_contacts(
        contacts(json!([["a@a.com", "1", true]])),
        CollectionOptions::single_element(),
    );
    assert_eq!(result, Err(CONTACT_FIELDS_REQUIRED.to_owned()));
}

#[rstest]
fn pipeline_rejects_array_shaped_elements(mut valid_customer: Value) {
    valid_customer["contacts"] = json!([["a@a.com", "1", true]]);
    valid_customer["addresses"] = json!([["x"]]);

    let errors = validate_customer_payload(payload(valid_customer), false)
        .expect_err("array elements are not objects");

    assert_eq!(errors, [ONLY_ONE_MAIN_CONTACT, ADDRESS_FIELDS_REQUIRED]);
}

#[rstest]
fn accepted_contacts_preserve_order() {
    let drafts = validate_contacts(
        contacts(json!([
            { "email": "a", "phone": "1", "main": false },
            { "email": "b", "phone": "2", "main": true },
        ])),
        CollectionOptions::full_document(),
    )
    .expect("valid contacts")
    .expect("full mode returns drafts");

    let emails: Vec<_> = drafts.iter().map(|draft| draft.email.as_str()).collect();
    assert_eq!(emails, ["a", "b"]);
}

#[rstest]
fn pipeline_accepts_valid_customer(valid_customer: Value) {
    let draft = validate_new_customer(payload(valid_customer)).expect("valid payload");

    assert_eq!(draft.full_name, "Test Da Silva");
    assert!(draft.active);
    assert_eq!(draft.contacts.len(), 1);
    assert_eq!(draft.addresses.len(), 1);
}

#[rstest]
fn pipeline_collects_every_failure(mut valid_customer: Value) {
    valid_customer["birthdate"] = json!(1);
    valid_customer["active"] = json!("yes");
    valid_customer["addresses"] = json!([]);

    let errors = validate_customer_payload(payload(valid_customer), false)
        .expect_err("invalid payload");

    assert_eq!(
        errors,
        [
            "active must be of type boolean",
            "birthdate must be of type string",
            "addresses must not be empty",
        ]
    );
}

#[rstest]
fn creation_failure_maps_to_validation_error(mut valid_customer: Value) {
    valid_customer["birthdate"] = json!(1);

    let error = validate_new_customer(payload(valid_customer)).expect_err("invalid payload");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.errors(), ["birthdate must be of type string"]);
}

#[rstest]
fn basic_data_projects_scalars_only(valid_customer: Value) {
    let patch = validate_basic_data(payload(valid_customer)).expect("valid payload");

    assert_eq!(patch.full_name.as_deref(), Some("Test Da Silva"));
    assert_eq!(patch.birthdate.as_deref(), Some("2020-01-01"));
    assert_eq!(patch.active, Some(true));
}

#[rstest]
fn basic_data_tolerates_missing_fields_and_bad_collections() {
    let patch = validate_basic_data(payload(json!({ "active": false, "contacts": "x" })))
        .expect("collections are ignored");

    assert_eq!(patch.active, Some(false));
    assert!(patch.full_name.is_none());
    assert!(patch.birthdate.is_none());
}

#[rstest]
fn basic_data_still_checks_kinds() {
    let error = validate_basic_data(payload(json!({ "fullName": 3, "birthdate": 1 })))
        .expect_err("wrong kinds");

    assert_eq!(
        error.errors(),
        [
            "fullName must be of type string",
            "birthdate must be of type string"
        ]
    );
}

#[rstest]
fn single_contact_may_be_secondary() {
    let draft = validate_contact(ContactPayload {
        email: Field::Present("e".to_owned()),
        phone: Field::Present("p".to_owned()),
        main: Field::Present(false),
    })
    .expect("secondary contact is valid on its own");

    assert!(!draft.main);
}

#[rstest]
fn single_contact_reports_shape_failure() {
    let error = validate_contact(ContactPayload {
        email: Field::Mismatched,
        phone: Field::Present("p".to_owned()),
        main: Field::Present(true),
    })
    .expect_err("email must be a string");

    assert_eq!(error.errors(), [CONTACT_FIELDS_REQUIRED]);
}

#[rstest]
fn single_address_reports_shape_failure() {
    let error = validate_address(AddressPayload::default()).expect_err("line is required");
    assert_eq!(error.errors(), [ADDRESS_FIELDS_REQUIRED]);
}
