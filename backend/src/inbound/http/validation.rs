//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies deserialise into all-optional DTOs so a missing field can be
//! reported by name instead of as a generic JSON error.

use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{EmployeeId, Error, ProjectCode, RecordValidationError, StartDate};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankNaturalKey,
    InvalidDate,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::BlankNaturalKey => "blank_natural_key",
            ErrorCode::InvalidDate => "invalid_date",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Unwrap a required field or report it as missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

fn map_record_validation_error(field: FieldName, err: RecordValidationError) -> Error {
    match err {
        RecordValidationError::BlankNaturalKey { .. } => {
            field_error(field, ErrorCode::BlankNaturalKey, err.to_string())
        }
        RecordValidationError::InvalidStartDate { ref value } => {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": field.as_str(),
                "value": value,
                "code": ErrorCode::InvalidDate.as_str(),
            }))
        }
    }
}

pub(crate) fn parse_employee_id(value: String, field: FieldName) -> Result<EmployeeId, Error> {
    EmployeeId::new(value).map_err(|err| map_record_validation_error(field, err))
}

pub(crate) fn parse_project_code(value: String, field: FieldName) -> Result<ProjectCode, Error> {
    ProjectCode::new(value).map_err(|err| map_record_validation_error(field, err))
}

/// Wire form of a start date: a date or timestamp string, or Unix epoch
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum StartDateInput {
    Text(String),
    EpochMillis(i64),
}

pub(crate) fn parse_start_date(
    value: StartDateInput,
    field: FieldName,
) -> Result<StartDate, Error> {
    let parsed = match value {
        StartDateInput::Text(raw) => raw.parse(),
        StartDateInput::EpochMillis(millis) => StartDate::from_epoch_millis(millis),
    };
    parsed.map_err(|err| map_record_validation_error(field, err))
}
