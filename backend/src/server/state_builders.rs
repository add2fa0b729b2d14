//! Builders for the HTTP state from the configured record store.

use std::sync::Arc;

use actix_web::web;

use staffing::domain::RecordsService;
use staffing::domain::ports::{AssignmentsQuery, RecordRepository, RecordsCommand};
use staffing::inbound::http::state::HttpState;
use staffing::outbound::memory::InMemoryRecordRepository;
use staffing::outbound::persistence::DieselRecordRepository;

use super::ServerConfig;

/// Wrap a repository in the records service and expose it through both
/// driving ports.
fn build_records_pair<R>(repository: R) -> (Arc<dyn RecordsCommand>, Arc<dyn AssignmentsQuery>)
where
    R: RecordRepository + 'static,
{
    let service = Arc::new(RecordsService::new(Arc::new(repository)));
    (
        service.clone() as Arc<dyn RecordsCommand>,
        service as Arc<dyn AssignmentsQuery>,
    )
}

/// Build the shared HTTP state, selecting the Diesel repository when a pool
/// is configured and the in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (records, assignments) = match &config.db_pool {
        Some(pool) => build_records_pair(DieselRecordRepository::new(pool.clone())),
        None => build_records_pair(InMemoryRecordRepository::default()),
    };
    web::Data::new(HttpState::new(records, assignments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use staffing::domain::{EmployeeId, NewEmployee};
    use std::net::SocketAddr;

    #[rstest]
    #[tokio::test]
    async fn missing_pool_selects_memory_store() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let state = build_http_state(&config);

        let employee = NewEmployee {
            employee_id: EmployeeId::new("E1").expect("employee id"),
            full_name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            hashed_password: "x".to_owned(),
        };
        state
            .records
            .create_employee(employee.clone())
            .await
            .expect("first insert succeeds");
        assert!(state.records.create_employee(employee).await.is_err());

        let rows = state
            .assignments
            .list_assignment_rows()
            .await
            .expect("listing succeeds");
        assert!(rows.is_empty());
    }
}
