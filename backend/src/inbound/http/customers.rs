//! Customer document HTTP handlers.
//!
//! ```text
//! POST   /customers
//! GET    /customers
//! GET    /customers/{id}
//! PATCH  /customers/{id}
//! DELETE /customers/{id}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde_json::Value;

use crate::domain::{CustomerId, CustomerPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::descriptor::ResultDescriptor;
use crate::inbound::http::state::HttpState;

/// Create a customer from a full document.
#[post("/customers")]
pub async fn create_customer(
    state: web::Data<HttpState>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let outcome = match CustomerPayload::from_json(body.into_inner()) {
        Ok(payload) => state.customers.create(payload).await,
        Err(err) => Err(err),
    };
    ResultDescriptor::from_outcome(outcome, StatusCode::CREATED)
        .map(ResultDescriptor::into_response)
}

/// List every customer.
#[get("/customers")]
pub async fn list_customers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let outcome = state.customers_query.list().await;
    ResultDescriptor::from_outcome(outcome, StatusCode::OK).map(ResultDescriptor::into_response)
}

/// Fetch one customer.
#[get("/customers/{id}")]
pub async fn get_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = CustomerId::new(path.into_inner());
    let outcome = state.customers_query.get(&id).await;
    ResultDescriptor::from_outcome(outcome, StatusCode::OK).map(ResultDescriptor::into_response)
}

/// Update `fullName`, `birthdate` and `active`.
#[patch("/customers/{id}")]
pub async fn update_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let id = CustomerId::new(path.into_inner());
    let outcome = match CustomerPayload::from_json(body.into_inner()) {
        Ok(payload) => state.customers.update_basic_data(&id, payload).await,
        Err(err) => Err(err),
    };
    ResultDescriptor::from_outcome(outcome, StatusCode::OK).map(ResultDescriptor::into_response)
}

/// Delete a customer.
#[delete("/customers/{id}")]
pub async fn delete_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = CustomerId::new(path.into_inner());
    let outcome = state.customers.delete(&id).await;
    ResultDescriptor::from_deletion(outcome).map(ResultDescriptor::into_response)
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod tests;
