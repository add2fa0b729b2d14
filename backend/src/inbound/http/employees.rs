//! Employee HTTP handlers.
//!
//! ```text
//! POST /api/employees {"employee_id":"E1","full_name":"Alice","email":"a@example.com","hashed_password":"..."}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Employee, Error, NewEmployee};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_employee_id, require};

const EMPLOYEE_ID: FieldName = FieldName::new("employee_id");
const FULL_NAME: FieldName = FieldName::new("full_name");
const EMAIL: FieldName = FieldName::new("email");
const HASHED_PASSWORD: FieldName = FieldName::new("hashed_password");

/// Request body for `POST /api/employees`. Every field is required.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EmployeeRequest {
    #[schema(example = "E1")]
    pub employee_id: Option<String>,
    #[schema(example = "Alice Example")]
    pub full_name: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    pub hashed_password: Option<String>,
}

impl TryFrom<EmployeeRequest> for NewEmployee {
    type Error = Error;

    fn try_from(value: EmployeeRequest) -> Result<Self, Self::Error> {
        let employee_id = require(value.employee_id, EMPLOYEE_ID)?;
        Ok(Self {
            employee_id: parse_employee_id(employee_id, EMPLOYEE_ID)?,
            full_name: require(value.full_name, FULL_NAME)?,
            email: require(value.email, EMAIL)?,
            hashed_password: require(value.hashed_password, HASHED_PASSWORD)?,
        })
    }
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid request or store failure", body = Error)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let employee = NewEmployee::try_from(payload.into_inner())?;
    let created = state.records.create_employee(employee).await?;
    Ok(HttpResponse::Created().json(created))
}
