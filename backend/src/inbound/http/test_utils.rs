//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use super::error::json_error_handler;
use super::state::HttpState;
use super::{employees, project_assignments, projects};
use crate::domain::RecordsService;
use crate::outbound::memory::InMemoryRecordRepository;

/// Build HTTP state backed by a fresh in-memory store.
pub fn memory_state() -> HttpState {
    let service = Arc::new(RecordsService::new(Arc::new(
        InMemoryRecordRepository::default(),
    )));
    HttpState::new(service.clone(), service)
}

/// Build an app exposing the record endpoints under `/api` with the given
/// state and the production JSON error handler.
pub fn test_app_with_state(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(employees::create_employee)
                .service(projects::create_project)
                .service(project_assignments::create_project_assignment)
                .service(project_assignments::list_project_assignments),
        )
}

/// [`test_app_with_state`] over a fresh in-memory store.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with_state(memory_state())
}

/// Read a response body as JSON.
pub async fn read_json<B>(response: ServiceResponse<B>) -> Value
where
    B: MessageBody,
{
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON response body")
}
