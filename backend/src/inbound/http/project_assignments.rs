//! Project assignment HTTP handlers.
//!
//! ```text
//! POST /api/project_assignments {"employee_id":"E1","project_code":"P1","start_date":"2024-01-01"}
//! GET /api/project_assignments
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AssignmentRow, Error, NewProjectAssignment, ProjectAssignment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, StartDateInput, parse_employee_id, parse_project_code, parse_start_date, require,
};

const EMPLOYEE_ID: FieldName = FieldName::new("employee_id");
const PROJECT_CODE: FieldName = FieldName::new("project_code");
const START_DATE: FieldName = FieldName::new("start_date");

/// Request body for `POST /api/project_assignments`. Every field is required.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ProjectAssignmentRequest {
    #[schema(example = "E1")]
    pub employee_id: Option<String>,
    #[schema(example = "P1")]
    pub project_code: Option<String>,
    /// `YYYY-MM-DD`, a timestamp with or without offset, or epoch
    /// milliseconds.
    pub start_date: Option<StartDateInput>,
}

impl TryFrom<ProjectAssignmentRequest> for NewProjectAssignment {
    type Error = Error;

    fn try_from(value: ProjectAssignmentRequest) -> Result<Self, Self::Error> {
        let employee_id = require(value.employee_id, EMPLOYEE_ID)?;
        let project_code = require(value.project_code, PROJECT_CODE)?;
        let start_date = require(value.start_date, START_DATE)?;
        Ok(Self {
            employee_id: parse_employee_id(employee_id, EMPLOYEE_ID)?,
            project_code: parse_project_code(project_code, PROJECT_CODE)?,
            start_date: parse_start_date(start_date, START_DATE)?,
        })
    }
}

/// Create a project assignment. The referenced employee and project are not
/// required to exist.
#[utoipa::path(
    post,
    path = "/api/project_assignments",
    request_body = ProjectAssignmentRequest,
    responses(
        (status = 201, description = "Assignment created", body = ProjectAssignment),
        (status = 400, description = "Invalid request or store failure", body = Error)
    ),
    tags = ["project_assignments"],
    operation_id = "createProjectAssignment"
)]
#[post("/project_assignments")]
pub async fn create_project_assignment(
    state: web::Data<HttpState>,
    payload: web::Json<ProjectAssignmentRequest>,
) -> ApiResult<HttpResponse> {
    let assignment = NewProjectAssignment::try_from(payload.into_inner())?;
    let created = state.records.create_assignment(assignment).await?;
    Ok(HttpResponse::Created().json(created))
}

/// List assignments joined with employee and project names.
///
/// Assignments referencing a missing employee or project are omitted.
#[utoipa::path(
    get,
    path = "/api/project_assignments",
    responses(
        (status = 200, description = "Joined assignment rows", body = [AssignmentRow]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["project_assignments"],
    operation_id = "listProjectAssignments"
)]
#[get("/project_assignments")]
pub async fn list_project_assignments(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AssignmentRow>>> {
    let rows = state.assignments.list_assignment_rows().await?;
    Ok(web::Json(rows))
}

#[cfg(test)]
#[path = "project_assignments_tests.rs"]
mod tests;
