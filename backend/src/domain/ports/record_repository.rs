//! Driven port for the staffing record store.
//!
//! The store persists employees, projects and assignments and enforces
//! uniqueness of the natural keys (`employee_id`, `project_code`). It does not
//! check that assignments reference existing records.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Project, ProjectAssignment, ProjectCode};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record store adapters.
    pub enum RecordRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "record store connection failed: {message}",
        /// A query or insert failed during execution.
        Query { message: String } =>
            "record store query failed: {message}",
        /// A natural key already exists in its collection.
        DuplicateKey { field: String, value: String } =>
            "{field} {value:?} already exists",
    }
}

/// Port for record persistence and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persist a new employee.
    ///
    /// Fails with [`RecordRepositoryError::DuplicateKey`] when the
    /// `employee_id` is taken.
    async fn insert_employee(&self, employee: &Employee) -> Result<(), RecordRepositoryError>;

    /// Persist a new project.
    ///
    /// Fails with [`RecordRepositoryError::DuplicateKey`] when the
    /// `project_code` is taken.
    async fn insert_project(&self, project: &Project) -> Result<(), RecordRepositoryError>;

    /// Persist a new assignment. Referenced records need not exist.
    async fn insert_assignment(
        &self,
        assignment: &ProjectAssignment,
    ) -> Result<(), RecordRepositoryError>;

    /// Load every stored assignment.
    async fn list_assignments(&self) -> Result<Vec<ProjectAssignment>, RecordRepositoryError>;

    /// Load the employees whose `employee_id` is in `employee_ids`.
    async fn find_employees(
        &self,
        employee_ids: &[EmployeeId],
    ) -> Result<Vec<Employee>, RecordRepositoryError>;

    /// Load the projects whose `project_code` is in `project_codes`.
    async fn find_projects(
        &self,
        project_codes: &[ProjectCode],
    ) -> Result<Vec<Project>, RecordRepositoryError>;
}
