//! PostgreSQL-backed `RecordRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecordRepository, RecordRepositoryError};
use crate::domain::{
    Employee, EmployeeId, Project, ProjectAssignment, ProjectCode, RecordId, StartDate,
};

use super::diesel_error_mapping::{map_diesel_error, map_insert_error, map_pool_error};
use super::models::{
    EmployeeRow, NewEmployeeRow, NewProjectAssignmentRow, NewProjectRow, ProjectAssignmentRow,
    ProjectRow,
};
use super::pool::DbPool;
use super::schema::{employees, project_assignments, projects};

/// Diesel-backed implementation of the `RecordRepository` port.
///
/// Uniqueness of natural keys is enforced by the database constraints; the
/// adapter only translates violations into typed errors.
#[derive(Clone)]
pub struct DieselRecordRepository {
    pool: DbPool,
}

impl DieselRecordRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn corrupt_row(table: &str, err: impl std::fmt::Display) -> RecordRepositoryError {
    RecordRepositoryError::query(format!("invalid row in {table}: {err}"))
}

fn row_to_employee(row: EmployeeRow) -> Result<Employee, RecordRepositoryError> {
    Ok(Employee {
        id: RecordId::from_uuid(row.id),
        employee_id: EmployeeId::new(row.employee_id).map_err(|err| corrupt_row("employees", err))?,
        full_name: row.full_name,
        email: row.email,
        hashed_password: row.hashed_password,
    })
}

fn row_to_project(row: ProjectRow) -> Result<Project, RecordRepositoryError> {
    Ok(Project {
        id: RecordId::from_uuid(row.id),
        project_code: ProjectCode::new(row.project_code)
            .map_err(|err| corrupt_row("projects", err))?,
        project_name: row.project_name,
        project_description: row.project_description,
    })
}

fn row_to_assignment(row: ProjectAssignmentRow) -> Result<ProjectAssignment, RecordRepositoryError> {
    Ok(ProjectAssignment {
        id: RecordId::from_uuid(row.id),
        employee_id: EmployeeId::new(row.employee_id)
            .map_err(|err| corrupt_row("project_assignments", err))?,
        project_code: ProjectCode::new(row.project_code)
            .map_err(|err| corrupt_row("project_assignments", err))?,
        start_date: StartDate::from_date(row.start_date),
    })
}

#[async_trait]
impl RecordRepository for DieselRecordRepository {
    async fn insert_employee(&self, employee: &Employee) -> Result<(), RecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewEmployeeRow {
            id: *employee.id.as_uuid(),
            employee_id: employee.employee_id.as_ref(),
            full_name: &employee.full_name,
            email: &employee.email,
            hashed_password: &employee.hashed_password,
        };

        diesel::insert_into(employees::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, "employee_id", employee.employee_id.as_ref()))
    }

    async fn insert_project(&self, project: &Project) -> Result<(), RecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewProjectRow {
            id: *project.id.as_uuid(),
            project_code: project.project_code.as_ref(),
            project_name: &project.project_name,
            project_description: &project.project_description,
        };

        diesel::insert_into(projects::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, "project_code", project.project_code.as_ref()))
    }

    async fn insert_assignment(
        &self,
        assignment: &ProjectAssignment,
    ) -> Result<(), RecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewProjectAssignmentRow {
            id: *assignment.id.as_uuid(),
            employee_id: assignment.employee_id.as_ref(),
            project_code: assignment.project_code.as_ref(),
            start_date: assignment.start_date.date(),
        };

        diesel::insert_into(project_assignments::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_assignments(&self) -> Result<Vec<ProjectAssignment>, RecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProjectAssignmentRow> = project_assignments::table
            .select(ProjectAssignmentRow::as_select())
            .order((project_assignments::start_date.asc(), project_assignments::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_assignment).collect()
    }

    async fn find_employees(
        &self,
        employee_ids: &[EmployeeId],
    ) -> Result<Vec<Employee>, RecordRepositoryError> {
        if employee_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let keys: Vec<&str> = employee_ids.iter().map(AsRef::as_ref).collect();

        let rows: Vec<EmployeeRow> = employees::table
            .filter(employees::employee_id.eq_any(keys))
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_employee).collect()
    }

    async fn find_projects(
        &self,
        project_codes: &[ProjectCode],
    ) -> Result<Vec<Project>, RecordRepositoryError> {
        if project_codes.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let codes: Vec<&str> = project_codes.iter().map(AsRef::as_ref).collect();

        let rows: Vec<ProjectRow> = projects::table
            .filter(projects::project_code.eq_any(codes))
            .select(ProjectRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_project).collect()
    }
}
