//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};

use staffing::trace_requests;
#[cfg(debug_assertions)]
use staffing::doc::ApiDoc;
use staffing::inbound::http::employees::create_employee;
use staffing::inbound::http::health::{HealthState, live, ready};
use staffing::inbound::http::json_error_handler;
use staffing::inbound::http::project_assignments::{
    create_project_assignment, list_project_assignments,
};
use staffing::inbound::http::projects::create_project;
use staffing::inbound::http::state::HttpState;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(create_employee)
        .service(create_project)
        .service(create_project_assignment)
        .service(list_project_assignments);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(from_fn(trace_requests))
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness is not set here; the caller marks the health state ready once
/// the returned server is about to be driven.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .disable_signals()
        .bind(bind_addr)?
        .run();

    Ok(server)
}

/// Wait for `signal`, fail both health endpoints, then stop the server
/// gracefully so in-flight requests finish.
///
/// Actix's own signal handling is disabled in [`create_server`]; this is the
/// only shutdown path.
pub async fn drain_on_signal(
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    signal: impl Future<Output = ()>,
) {
    signal.await;
    info!("shutdown requested; draining");
    health_state.begin_draining();
    handle.stop(true).await;
}
