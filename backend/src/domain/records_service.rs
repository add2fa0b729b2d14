//! Staffing record services.
//!
//! [`RecordsService`] implements both driving ports on top of a
//! [`RecordRepository`]. Writes surface every store failure as a client error
//! carrying a machine-readable detail code; the listing surfaces store
//! failures as internal errors.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{
    AssignmentsQuery, RecordRepository, RecordRepositoryError, RecordsCommand,
};
use crate::domain::{
    AssignmentRow, Employee, EmployeeId, Error, NewEmployee, NewProject, NewProjectAssignment,
    Project, ProjectAssignment, ProjectCode, RecordId, join_assignments,
};

/// Record service implementing the driving ports.
#[derive(Clone)]
pub struct RecordsService<R> {
    repository: Arc<R>,
}

impl<R> RecordsService<R> {
    /// Create a new service over the given store.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> RecordsService<R>
where
    R: RecordRepository,
{
    fn map_write_error(record: &'static str, error: RecordRepositoryError) -> Error {
        warn!(record, error = %error, "record write rejected");
        match error {
            RecordRepositoryError::DuplicateKey { field, value } => {
                Error::invalid_request(format!("{field} {value:?} already exists")).with_details(
                    json!({ "code": "duplicate_key", "field": field, "value": value }),
                )
            }
            RecordRepositoryError::Connection { message } => {
                Error::invalid_request(format!("record store unavailable: {message}"))
                    .with_details(json!({ "code": "store_unavailable" }))
            }
            RecordRepositoryError::Query { message } => {
                Error::invalid_request(format!("record store rejected the {record}: {message}"))
                    .with_details(json!({ "code": "store_error" }))
            }
        }
    }

    fn map_read_error(error: RecordRepositoryError) -> Error {
        error!(error = %error, "assignment listing failed");
        Error::internal(format!("failed to list assignments: {error}"))
    }

    fn referenced_keys(
        assignments: &[ProjectAssignment],
    ) -> (Vec<EmployeeId>, Vec<ProjectCode>) {
        let employee_ids: BTreeSet<&EmployeeId> =
            assignments.iter().map(|a| &a.employee_id).collect();
        let project_codes: BTreeSet<&ProjectCode> =
            assignments.iter().map(|a| &a.project_code).collect();
        (
            employee_ids.into_iter().cloned().collect(),
            project_codes.into_iter().cloned().collect(),
        )
    }
}

#[async_trait]
impl<R> RecordsCommand for RecordsService<R>
where
    R: RecordRepository,
{
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, Error> {
        let employee = Employee::from_new(RecordId::random(), employee);
        self.repository
            .insert_employee(&employee)
            .await
            .map_err(|err| Self::map_write_error("employee", err))?;
        info!(id = %employee.id, employee_id = %employee.employee_id, "employee created");
        Ok(employee)
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, Error> {
        let project = Project::from_new(RecordId::random(), project);
        self.repository
            .insert_project(&project)
            .await
            .map_err(|err| Self::map_write_error("project", err))?;
        info!(id = %project.id, project_code = %project.project_code, "project created");
        Ok(project)
    }

    async fn create_assignment(
        &self,
        assignment: NewProjectAssignment,
    ) -> Result<ProjectAssignment, Error> {
        let assignment = ProjectAssignment::from_new(RecordId::random(), assignment);
        self.repository
            .insert_assignment(&assignment)
            .await
            .map_err(|err| Self::map_write_error("assignment", err))?;
        info!(id = %assignment.id, "project assignment created");
        Ok(assignment)
    }
}

#[async_trait]
impl<R> AssignmentsQuery for RecordsService<R>
where
    R: RecordRepository,
{
    async fn list_assignment_rows(&self) -> Result<Vec<AssignmentRow>, Error> {
        let assignments = self
            .repository
            .list_assignments()
            .await
            .map_err(Self::map_read_error)?;
        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let (employee_ids, project_codes) = Self::referenced_keys(&assignments);
        let employees = self
            .repository
            .find_employees(&employee_ids)
            .await
            .map_err(Self::map_read_error)?;
        let projects = self
            .repository
            .find_projects(&project_codes)
            .await
            .map_err(Self::map_read_error)?;

        Ok(join_assignments(&assignments, &employees, &projects))
    }
}

#[cfg(test)]
#[path = "records_service_tests.rs"]
mod tests;
