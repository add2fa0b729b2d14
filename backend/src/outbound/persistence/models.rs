//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{employees, project_assignments, projects};

/// Row struct for reading from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub hashed_password: String,
}

/// Insertable struct for creating employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: Uuid,
    pub employee_id: &'a str,
    pub full_name: &'a str,
    pub email: &'a str,
    pub hashed_password: &'a str,
}

// ---------------------------------------------------------------------------
// Project models
// ---------------------------------------------------------------------------

/// Row struct for reading from the projects table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectRow {
    pub id: Uuid,
    pub project_code: String,
    pub project_name: String,
    pub project_description: String,
}

/// Insertable struct for creating project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub(crate) struct NewProjectRow<'a> {
    pub id: Uuid,
    pub project_code: &'a str,
    pub project_name: &'a str,
    pub project_description: &'a str,
}

// ---------------------------------------------------------------------------
// Assignment models
// ---------------------------------------------------------------------------

/// Row struct for reading from the project_assignments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = project_assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectAssignmentRow {
    pub id: Uuid,
    pub employee_id: String,
    pub project_code: String,
    pub start_date: NaiveDate,
}

/// Insertable struct for creating assignment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_assignments)]
pub(crate) struct NewProjectAssignmentRow<'a> {
    pub id: Uuid,
    pub employee_id: &'a str,
    pub project_code: &'a str,
    pub start_date: NaiveDate,
}
