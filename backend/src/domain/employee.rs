//! Employee records.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{RecordValidationError, require_natural_key};
use super::RecordId;

/// Business identifier of an employee. Unique across the employee collection.
///
/// # Examples
/// ```
/// use staffing::domain::EmployeeId;
///
/// let id = EmployeeId::new("E1").expect("valid employee id");
/// assert_eq!(id.as_ref(), "E1");
/// assert!(EmployeeId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "E1")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Validate and construct an employee identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, RecordValidationError> {
        require_natural_key("employee_id", value.into()).map(Self)
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = RecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Employee fields supplied by a client, before an identity is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub email: String,
    /// Stored as given. Nothing authenticates against it.
    pub hashed_password: String,
}

/// Persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    pub id: RecordId,
    pub employee_id: EmployeeId,
    #[schema(example = "Alice Example")]
    pub full_name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub hashed_password: String,
}

impl Employee {
    /// Attach an identity to client-supplied fields.
    pub fn from_new(id: RecordId, new: NewEmployee) -> Self {
        let NewEmployee {
            employee_id,
            full_name,
            email,
            hashed_password,
        } = new;
        Self {
            id,
            employee_id,
            full_name,
            email,
            hashed_password,
        }
    }
}
