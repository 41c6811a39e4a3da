//! HTTP inbound adapter exposing the customer REST endpoints.

pub mod addresses;
pub mod contacts;
pub mod customers;
pub mod descriptor;
pub mod error;
pub mod state;

pub use descriptor::ResultDescriptor;
pub use error::ApiResult;

use actix_web::web;

/// Register every customer route together with the JSON body configuration.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use customers::inbound::http::{configure, state::HttpState};
/// use customers::outbound::persistence::InMemoryCustomerRepository;
///
/// let state = HttpState::from_repository(Arc::new(InMemoryCustomerRepository::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(customers::create_customer)
        .service(customers::list_customers)
        .service(customers::get_customer)
        .service(customers::update_customer)
        .service(customers::delete_customer)
        .service(contacts::create_contact)
        .service(contacts::update_contact)
        .service(contacts::delete_contact)
        .service(addresses::create_address)
        .service(addresses::update_address)
        .service(addresses::delete_address);
}
