//! Tests for the record service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockRecordRepository;
use rstest::{fixture, rstest};

fn make_service(repo: MockRecordRepository) -> RecordsService<MockRecordRepository> {
    RecordsService::new(Arc::new(repo))
}

fn employee_id(value: &str) -> EmployeeId {
    EmployeeId::new(value).expect("employee id")
}

fn project_code(value: &str) -> ProjectCode {
    ProjectCode::new(value).expect("project code")
}

fn assignment(key: &str, code: &str, date: &str) -> ProjectAssignment {
    ProjectAssignment {
        id: RecordId::random(),
        employee_id: employee_id(key),
        project_code: project_code(code),
        start_date: date.parse().expect("start date"),
    }
}

#[fixture]
fn new_employee() -> NewEmployee {
    NewEmployee {
        employee_id: employee_id("E1"),
        full_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        hashed_password: "hash".to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn create_employee_persists_record_with_fresh_identity(new_employee: NewEmployee) {
    let mut repo = MockRecordRepository::new();
    repo.expect_insert_employee()
        .withf(|employee| employee.employee_id.as_ref() == "E1" && employee.full_name == "Alice")
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(repo);
    let created = service
        .create_employee(new_employee.clone())
        .await
        .expect("employee created");

    assert_eq!(created.employee_id, new_employee.employee_id);
    assert_eq!(created.email, new_employee.email);
    assert_eq!(created.hashed_password, "hash");
}

#[rstest]
#[tokio::test]
async fn duplicate_key_becomes_invalid_request(new_employee: NewEmployee) {
    let mut repo = MockRecordRepository::new();
    repo.expect_insert_employee()
        .times(1)
        .return_once(|_| Err(RecordRepositoryError::duplicate_key("employee_id", "E1")));

    let service = make_service(repo);
    let error = service
        .create_employee(new_employee)
        .await
        .expect_err("duplicate rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details present");
    assert_eq!(details["code"], "duplicate_key");
    assert_eq!(details["field"], "employee_id");
    assert_eq!(details["value"], "E1");
}

#[rstest]
#[case(RecordRepositoryError::connection("refused"), "store_unavailable")]
#[case(RecordRepositoryError::query("syntax error"), "store_error")]
#[tokio::test]
async fn write_store_failures_are_client_errors(
    #[case] failure: RecordRepositoryError,
    #[case] expected_code: &str,
) {
    let mut repo = MockRecordRepository::new();
    repo.expect_insert_project()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = make_service(repo);
    let error = service
        .create_project(NewProject {
            project_code: project_code("P1"),
            project_name: "Alpha".to_owned(),
            project_description: String::new(),
        })
        .await
        .expect_err("store failure surfaces");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().expect("details present")["code"],
        expected_code
    );
}

#[rstest]
#[tokio::test]
async fn create_assignment_does_not_check_references() {
    let mut repo = MockRecordRepository::new();
    repo.expect_insert_assignment()
        .times(1)
        .return_once(|_| Ok(()));
    repo.expect_find_employees().never();
    repo.expect_find_projects().never();

    let service = make_service(repo);
    let created = service
        .create_assignment(NewProjectAssignment {
            employee_id: employee_id("nobody"),
            project_code: project_code("nothing"),
            start_date: "2024-01-01".parse().expect("start date"),
        })
        .await
        .expect("assignment created");

    assert_eq!(created.start_date.to_string(), "2024-01-01");
}

#[rstest]
#[tokio::test]
async fn listing_without_assignments_skips_lookups() {
    let mut repo = MockRecordRepository::new();
    repo.expect_list_assignments()
        .times(1)
        .return_once(|| Ok(Vec::new()));
    repo.expect_find_employees().never();
    repo.expect_find_projects().never();

    let rows = make_service(repo)
        .list_assignment_rows()
        .await
        .expect("listing succeeds");

    assert!(rows.is_empty());
}

#[rstest]
#[tokio::test]
async fn listing_fetches_only_referenced_keys_once() {
    let stored = vec![
        assignment("E1", "P1", "2024-01-01"),
        assignment("E1", "P2", "2024-02-01"),
    ];
    let mut repo = MockRecordRepository::new();
    repo.expect_list_assignments()
        .times(1)
        .return_once(move || Ok(stored));
    repo.expect_find_employees()
        .withf(|ids| ids.iter().map(ToString::to_string).collect::<Vec<_>>() == ["E1"])
        .times(1)
        .return_once(|_| {
            Ok(vec![Employee {
                id: RecordId::random(),
                employee_id: employee_id("E1"),
                full_name: "Alice".to_owned(),
                email: "alice@example.com".to_owned(),
                hashed_password: "hash".to_owned(),
            }])
        });
    repo.expect_find_projects()
        .withf(|codes| codes.iter().map(ToString::to_string).collect::<Vec<_>>() == ["P1", "P2"])
        .times(1)
        .return_once(|_| {
            Ok(vec![Project {
                id: RecordId::random(),
                project_code: project_code("P1"),
                project_name: "Alpha".to_owned(),
                project_description: String::new(),
            }])
        });

    let rows = make_service(repo)
        .list_assignment_rows()
        .await
        .expect("listing succeeds");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].full_name, "Alice");
    assert_eq!(rows[0].project_name, "Alpha");
    assert_eq!(rows[0].start_date.to_string(), "2024-01-01");
}

#[rstest]
#[tokio::test]
async fn listing_failure_is_internal_error() {
    let mut repo = MockRecordRepository::new();
    repo.expect_list_assignments()
        .times(1)
        .return_once(|| Err(RecordRepositoryError::connection("refused")));

    let error = make_service(repo)
        .list_assignment_rows()
        .await
        .expect_err("listing fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn lookup_failure_discards_partial_results() {
    let mut repo = MockRecordRepository::new();
    repo.expect_list_assignments()
        .times(1)
        .return_once(|| Ok(vec![assignment("E1", "P1", "2024-01-01")]));
    repo.expect_find_employees()
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    repo.expect_find_projects()
        .times(1)
        .return_once(|_| Err(RecordRepositoryError::query("relation missing")));

    let error = make_service(repo)
        .list_assignment_rows()
        .await
        .expect_err("listing fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
