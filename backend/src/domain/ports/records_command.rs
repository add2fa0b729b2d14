//! Driving port for creating staffing records.
//!
//! HTTP handlers call this port with already-validated input; the
//! implementation assigns identities and persists the records.

use async_trait::async_trait;

use crate::domain::{
    Employee, Error, NewEmployee, NewProject, NewProjectAssignment, Project, ProjectAssignment,
};

/// Domain use-case port for record creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordsCommand: Send + Sync {
    /// Create an employee and return the stored record.
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, Error>;

    /// Create a project and return the stored record.
    async fn create_project(&self, project: NewProject) -> Result<Project, Error>;

    /// Create an assignment and return the stored record.
    async fn create_assignment(
        &self,
        assignment: NewProjectAssignment,
    ) -> Result<ProjectAssignment, Error>;
}
