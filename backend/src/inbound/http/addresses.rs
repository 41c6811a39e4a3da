//! Address sub-resource HTTP handlers.
//!
//! ```text
//! POST   /customers/{id}/addresses
//! PUT    /customers/{id}/addresses/{addressId}
//! DELETE /customers/{id}/addresses/{addressId}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, post, put, web};
use serde_json::Value;

use crate::domain::{AddressId, AddressPayload, CustomerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::descriptor::ResultDescriptor;
use crate::inbound::http::state::HttpState;

/// Add an address to a customer.
#[post("/customers/{id}/addresses")]
pub async fn create_address(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let customer_id = CustomerId::new(path.into_inner());
    let outcome = match AddressPayload::from_json(body.into_inner()) {
        Ok(payload) => state.addresses.create_address(&customer_id, payload).await,
        Err(err) => Err(err),
    };
    ResultDescriptor::from_outcome(outcome, StatusCode::CREATED)
        .map(ResultDescriptor::into_response)
}

/// Replace an address line.
#[put("/customers/{id}/addresses/{address_id}")]
pub async fn update_address(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let (customer_id, address_id) = path.into_inner();
    let (customer_id, address_id) = (CustomerId::new(customer_id), AddressId::new(address_id));
    let outcome = match AddressPayload::from_json(body.into_inner()) {
        Ok(payload) => {
            state
                .addresses
                .update_address(&customer_id, &address_id, payload)
                .await
        }
        Err(err) => Err(err),
    };
    ResultDescriptor::from_outcome(outcome, StatusCode::OK).map(ResultDescriptor::into_response)
}

/// Remove an address.
#[delete("/customers/{id}/addresses/{address_id}")]
pub async fn delete_address(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (customer_id, address_id) = path.into_inner();
    let outcome = state
        .addresses
        .delete_address(&CustomerId::new(customer_id), &AddressId::new(address_id))
        .await;
    ResultDescriptor::from_deletion(outcome).map(ResultDescriptor::into_response)
}
