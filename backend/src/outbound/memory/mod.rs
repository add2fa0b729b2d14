//! In-process record store.
//!
//! Used when no database connection string is configured and by HTTP tests.
//! Enforces the same natural-key uniqueness as the PostgreSQL schema. Data
//! lives only as long as the process.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{RecordRepository, RecordRepositoryError};
use crate::domain::{Employee, EmployeeId, Project, ProjectAssignment, ProjectCode};

#[derive(Debug, Default)]
struct Collections {
    employees: Vec<Employee>,
    projects: Vec<Project>,
    assignments: Vec<ProjectAssignment>,
}

/// Mutex-guarded record store keeping insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    collections: Mutex<Collections>,
}

impl InMemoryRecordRepository {
    fn lock(&self) -> MutexGuard<'_, Collections> {
        // A panic while holding the lock cannot leave a half-written record,
        // so the data is still usable.
        self.collections
            .lock()
            .unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn insert_employee(&self, employee: &Employee) -> Result<(), RecordRepositoryError> {
        let mut guard = self.lock();
        if guard
            .employees
            .iter()
            .any(|existing| existing.employee_id == employee.employee_id)
        {
            return Err(RecordRepositoryError::duplicate_key(
                "employee_id",
                employee.employee_id.as_ref(),
            ));
        }
        guard.employees.push(employee.clone());
        Ok(())
    }

    async fn insert_project(&self, project: &Project) -> Result<(), RecordRepositoryError> {
        let mut guard = self.lock();
        if guard
            .projects
            .iter()
            .any(|existing| existing.project_code == project.project_code)
        {
            return Err(RecordRepositoryError::duplicate_key(
                "project_code",
                project.project_code.as_ref(),
            ));
        }
        guard.projects.push(project.clone());
        Ok(())
    }

    async fn insert_assignment(
        &self,
        assignment: &ProjectAssignment,
    ) -> Result<(), RecordRepositoryError> {
        self.lock().assignments.push(assignment.clone());
        Ok(())
    }

    async fn list_assignments(&self) -> Result<Vec<ProjectAssignment>, RecordRepositoryError> {
        Ok(self.lock().assignments.clone())
    }

    async fn find_employees(
        &self,
        employee_ids: &[EmployeeId],
    ) -> Result<Vec<Employee>, RecordRepositoryError> {
        Ok(self
            .lock()
            .employees
            .iter()
            .filter(|employee| employee_ids.contains(&employee.employee_id))
            .cloned()
            .collect())
    }

    async fn find_projects(
        &self,
        project_codes: &[ProjectCode],
    ) -> Result<Vec<Project>, RecordRepositoryError> {
        Ok(self
            .lock()
            .projects
            .iter()
            .filter(|project| project_codes.contains(&project.project_code))
            .cloned()
            .collect())
    }
}
