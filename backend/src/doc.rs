//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the record, join row and error schemas. Swagger UI serves it in debug
//! builds.

use crate::domain::{
    AssignmentRow, Employee, EmployeeId, Error, ErrorCode, Project, ProjectAssignment,
    ProjectCode, RecordId, StartDate,
};
use crate::inbound::http::employees::EmployeeRequest;
use crate::inbound::http::project_assignments::ProjectAssignmentRequest;
use crate::inbound::http::projects::ProjectRequest;
use crate::inbound::http::validation::StartDateInput;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staffing records API",
        description = "Create employees, projects and assignments, and list assignments joined with names."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::projects::create_project,
        crate::inbound::http::project_assignments::create_project_assignment,
        crate::inbound::http::project_assignments::list_project_assignments,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        RecordId,
        EmployeeId,
        ProjectCode,
        StartDate,
        Employee,
        Project,
        ProjectAssignment,
        AssignmentRow,
        EmployeeRequest,
        ProjectRequest,
        ProjectAssignmentRequest,
        StartDateInput
    )),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "projects", description = "Project records"),
        (name = "project_assignments", description = "Assignments and the joined listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
