//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Employee records. `employee_id` carries a unique constraint.
    employees (id) {
        id -> Uuid,
        employee_id -> Text,
        full_name -> Text,
        email -> Text,
        hashed_password -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Project records. `project_code` carries a unique constraint.
    projects (id) {
        id -> Uuid,
        project_code -> Text,
        project_name -> Text,
        project_description -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Assignments referencing employees and projects by natural key.
    ///
    /// No foreign keys: dangling references are allowed.
    project_assignments (id) {
        id -> Uuid,
        employee_id -> Text,
        project_code -> Text,
        start_date -> Date,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(employees, projects, project_assignments);
