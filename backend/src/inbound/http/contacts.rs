//! Contact sub-resource HTTP handlers.
//!
//! ```text
//! POST   /customers/{id}/contacts
//! PUT    /customers/{id}/contacts/{contactId}
//! DELETE /customers/{id}/contacts/{contactId}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, post, put, web};
use serde_json::Value;

use crate::domain::{ContactId, ContactPayload, CustomerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::descriptor::ResultDescriptor;
use crate::inbound::http::state::HttpState;

/// Add a contact to a customer.
#[post("/customers/{id}/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let customer_id = CustomerId::new(path.into_inner());
    let outcome = match ContactPayload::from_json(body.into_inner()) {
        Ok(payload) => state.contacts.create_contact(&customer_id, payload).await,
        Err(err) => Err(err),
    };
    ResultDescriptor::from_outcome(outcome, StatusCode::CREATED)
        .map(ResultDescriptor::into_response)
}

/// Replace a contact's fields.
#[put("/customers/{id}/contacts/{contact_id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let (customer_id, contact_id) = path.into_inner();
    let (customer_id, contact_id) = (CustomerId::new(customer_id), ContactId::new(contact_id));
    let outcome = match ContactPayload::from_json(body.into_inner()) {
        Ok(payload) => {
            state
                .contacts
                .update_contact(&customer_id, &contact_id, payload)
                .await
        }
        Err(err) => Err(err),
    };
    ResultDescriptor::from_outcome(outcome, StatusCode::OK).map(ResultDescriptor::into_response)
}

/// Remove a secondary contact.
#[delete("/customers/{id}/contacts/{contact_id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (customer_id, contact_id) = path.into_inner();
    let outcome = state
        .contacts
        .delete_contact(&CustomerId::new(customer_id), &ContactId::new(contact_id))
        .await;
    ResultDescriptor::from_deletion(outcome).map(ResultDescriptor::into_response)
}
