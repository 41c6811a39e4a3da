//! Server construction and wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing::info;

use customers::domain::{Address, AddressId, Contact, ContactId, Customer, CustomerId};
use customers::inbound::http::configure;
use customers::inbound::http::state::HttpState;
use customers::outbound::persistence::InMemoryCustomerRepository;

fn demo_customer() -> Customer {
    Customer {
        id: CustomerId::new("1"),
        full_name: "Test Da Silva".to_owned(),
        birthdate: "2020-01-01".to_owned(),
        active: true,
        contacts: vec![
            Contact {
                id: ContactId::new("1"),
                email: "test@test.com".to_owned(),
                phone: "19 9999999999".to_owned(),
                main: true,
            },
            Contact {
                id: ContactId::new("2"),
                email: "test2@test.com".to_owned(),
                phone: "19 9999999999".to_owned(),
                main: false,
            },
        ],
        addresses: vec![Address {
            id: AddressId::new("1"),
            line: "test".to_owned(),
        }],
    }
}

fn build_repository(settings: &ServerSettings) -> InMemoryCustomerRepository {
    if settings.seed_demo_customer {
        info!(customer_id = "1", "seeding demo customer");
        return InMemoryCustomerRepository::with_customers(vec![demo_customer()]);
    }
    InMemoryCustomerRepository::new()
}

/// Construct the Actix HTTP server from loaded settings.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let repo = Arc::new(build_repository(settings));
    let http_state = web::Data::new(HttpState::from_repository(repo));
    let host = settings.host().to_owned();
    let port = settings.port();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run();

    info!(%host, port, "customer service listening");
    Ok(server)
}
