//! System-assigned record identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity assigned to every record at creation. Never changes afterwards.
///
/// # Examples
/// ```
/// use staffing::domain::RecordId;
///
/// let id = RecordId::random();
/// assert_eq!(RecordId::from_uuid(*id.as_uuid()), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identity.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identity read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
