//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`RecordsCommand`], [`AssignmentsQuery`]) are consumed by
//! inbound adapters. The driven port ([`RecordRepository`]) is implemented by
//! the store adapters and exposes a typed error so adapters map their failures
//! into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod assignments_query;
mod record_repository;
mod records_command;

#[cfg(test)]
pub use assignments_query::MockAssignmentsQuery;
pub use assignments_query::AssignmentsQuery;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
pub use record_repository::{RecordRepository, RecordRepositoryError};
#[cfg(test)]
pub use records_command::MockRecordsCommand;
pub use records_command::RecordsCommand;
