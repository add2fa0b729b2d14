//! Validation failures raised while constructing record values.

use std::fmt;

/// Errors returned by the record value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// A natural key (`employee_id`, `project_code`) was empty or whitespace.
    BlankNaturalKey { field: &'static str },
    /// `start_date` was neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    InvalidStartDate { value: String },
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankNaturalKey { field } => write!(f, "{field} must not be blank"),
            Self::InvalidStartDate { value } => write!(
                f,
                "start_date must be a YYYY-MM-DD date or RFC 3339 timestamp, got {value:?}"
            ),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// Reject empty or whitespace-only natural keys. The raw value is kept as is.
pub(crate) fn require_natural_key(
    field: &'static str,
    value: String,
) -> Result<String, RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::BlankNaturalKey { field });
    }
    Ok(value)
}
