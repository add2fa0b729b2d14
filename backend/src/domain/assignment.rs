//! Project assignments and the joined rows read back by clients.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::RecordValidationError;
use super::{EmployeeId, ProjectCode, RecordId};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar date an assignment starts on.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a date and time without an
/// offset (`T` or space separated) on input. A timestamp with an offset keeps
/// its calendar date in UTC; one without an offset is read as UTC. Epoch
/// milliseconds go through [`StartDate::from_epoch_millis`]. Always renders
/// as `YYYY-MM-DD`.
///
/// # Examples
/// ```
/// use staffing::domain::StartDate;
///
/// let plain: StartDate = "2024-01-01".parse().expect("plain date");
/// let stamped: StartDate = "2024-01-01T09:30:00Z".parse().expect("timestamp");
/// assert_eq!(plain, stamped);
/// assert_eq!(plain.to_string(), "2024-01-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, format = Date, example = "2024-01-01")]
pub struct StartDate(NaiveDate);

impl StartDate {
    /// Wrap a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Take the UTC calendar date of a Unix timestamp in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`RecordValidationError::InvalidStartDate`] when the instant is
    /// outside the representable range.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, RecordValidationError> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|stamp| Self(stamp.date_naive()))
            .ok_or_else(|| RecordValidationError::InvalidStartDate {
                value: millis.to_string(),
            })
    }

    /// Access the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for StartDate {
    type Err = RecordValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(stamp.with_timezone(&Utc).date_naive()));
        }
        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(|stamp| Self(stamp.date()))
            .ok_or_else(|| RecordValidationError::InvalidStartDate {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for StartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl From<StartDate> for String {
    fn from(value: StartDate) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for StartDate {
    type Error = RecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Assignment fields supplied by a client.
///
/// The referenced employee and project need not exist; unmatched assignments
/// are stored and simply never appear in the joined listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectAssignment {
    pub employee_id: EmployeeId,
    pub project_code: ProjectCode,
    pub start_date: StartDate,
}

/// Persisted assignment linking an employee to a project by natural keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectAssignment {
    pub id: RecordId,
    pub employee_id: EmployeeId,
    pub project_code: ProjectCode,
    pub start_date: StartDate,
}

impl ProjectAssignment {
    /// Attach an identity to client-supplied fields.
    pub fn from_new(id: RecordId, new: NewProjectAssignment) -> Self {
        let NewProjectAssignment {
            employee_id,
            project_code,
            start_date,
        } = new;
        Self {
            id,
            employee_id,
            project_code,
            start_date,
        }
    }
}

/// One row of the assignment listing: an assignment enriched with the
/// employee's name and the project's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssignmentRow {
    /// Identity of the underlying assignment.
    pub id: RecordId,
    pub employee_id: EmployeeId,
    #[schema(example = "Alice Example")]
    pub full_name: String,
    #[schema(example = "Alpha")]
    pub project_name: String,
    pub start_date: StartDate,
}
