//! Domain primitives, ports and services.
//!
//! Purpose: define strongly typed staffing records used by the HTTP and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error response payload and stable identifier.
//! - Employee, Project, ProjectAssignment: persisted records.
//! - AssignmentRow: joined listing row built by [`join_assignments`].
//! - RecordsService: implementation of the driving ports.

mod assignment;
mod assignment_join;
mod employee;
pub mod error;
pub mod ports;
mod project;
mod record_id;
mod records_service;
mod trace_id;
mod validation;

pub use self::assignment::{AssignmentRow, NewProjectAssignment, ProjectAssignment, StartDate};
pub use self::assignment_join::join_assignments;
pub use self::employee::{Employee, EmployeeId, NewEmployee};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::project::{NewProject, Project, ProjectCode};
pub use self::record_id::RecordId;
pub use self::records_service::RecordsService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::RecordValidationError;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use staffing::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
