//! Project records.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{RecordValidationError, require_natural_key};
use super::RecordId;

/// Business identifier of a project. Unique across the project collection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "P1")]
pub struct ProjectCode(String);

impl ProjectCode {
    /// Validate and construct a project code.
    pub fn new(value: impl Into<String>) -> Result<Self, RecordValidationError> {
        require_natural_key("project_code", value.into()).map(Self)
    }
}

impl AsRef<str> for ProjectCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ProjectCode> for String {
    fn from(value: ProjectCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for ProjectCode {
    type Error = RecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Project fields supplied by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub project_code: ProjectCode,
    pub project_name: String,
    pub project_description: String,
}

/// Persisted project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: RecordId,
    pub project_code: ProjectCode,
    #[schema(example = "Alpha")]
    pub project_name: String,
    pub project_description: String,
}

impl Project {
    /// Attach an identity to client-supplied fields.
    pub fn from_new(id: RecordId, new: NewProject) -> Self {
        let NewProject {
            project_code,
            project_name,
            project_description,
        } = new;
        Self {
            id,
            project_code,
            project_name,
            project_description,
        }
    }
}
