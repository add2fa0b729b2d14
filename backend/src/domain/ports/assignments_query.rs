//! Driving port for the joined assignment listing.

use async_trait::async_trait;

use crate::domain::{AssignmentRow, Error};

/// Domain use-case port for reading assignments with names attached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentsQuery: Send + Sync {
    /// Return every assignment whose employee and project both exist,
    /// enriched with their names. Any store failure aborts the listing.
    async fn list_assignment_rows(&self) -> Result<Vec<AssignmentRow>, Error>;
}
