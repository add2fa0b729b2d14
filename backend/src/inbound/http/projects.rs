//! Project HTTP handlers.
//!
//! ```text
//! POST /api/projects {"project_code":"P1","project_name":"Alpha","project_description":"..."}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewProject, Project};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_project_code, require};

const PROJECT_CODE: FieldName = FieldName::new("project_code");
const PROJECT_NAME: FieldName = FieldName::new("project_name");
const PROJECT_DESCRIPTION: FieldName = FieldName::new("project_description");

/// Request body for `POST /api/projects`. Every field is required.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ProjectRequest {
    #[schema(example = "P1")]
    pub project_code: Option<String>,
    #[schema(example = "Alpha")]
    pub project_name: Option<String>,
    pub project_description: Option<String>,
}

impl TryFrom<ProjectRequest> for NewProject {
    type Error = Error;

    fn try_from(value: ProjectRequest) -> Result<Self, Self::Error> {
        let project_code = require(value.project_code, PROJECT_CODE)?;
        Ok(Self {
            project_code: parse_project_code(project_code, PROJECT_CODE)?,
            project_name: require(value.project_name, PROJECT_NAME)?,
            project_description: require(value.project_description, PROJECT_DESCRIPTION)?,
        })
    }
}

/// Create a project.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Invalid request or store failure", body = Error)
    ),
    tags = ["projects"],
    operation_id = "createProject"
)]
#[post("/projects")]
pub async fn create_project(
    state: web::Data<HttpState>,
    payload: web::Json<ProjectRequest>,
) -> ApiResult<HttpResponse> {
    let project = NewProject::try_from(payload.into_inner())?;
    let created = state.records.create_project(project).await?;
    Ok(HttpResponse::Created().json(created))
}
