//! Diesel and pool error mapping for the record repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RecordRepositoryError;

use super::pool::PoolError;

/// Map pool failures to connection errors.
pub(super) fn map_pool_error(error: PoolError) -> RecordRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RecordRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors raised by reads or by inserts without a natural key.
pub(super) fn map_diesel_error(error: DieselError) -> RecordRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::QueryBuilderError(_) => RecordRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RecordRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => RecordRepositoryError::query(info.message()),
        other => RecordRepositoryError::query(other.to_string()),
    }
}

/// Map an insert failure, reporting unique violations on the natural key
/// `field` as [`RecordRepositoryError::DuplicateKey`].
///
/// Violations of the primary key fall through to a query error.
pub(super) fn map_insert_error(
    error: DieselError,
    field: &str,
    value: &str,
) -> RecordRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        let on_natural_key = info
            .constraint_name()
            .is_none_or(|constraint| !constraint.ends_with("_pkey"));
        if on_natural_key {
            debug!(field, constraint = ?info.constraint_name(), "unique violation on insert");
            return RecordRepositoryError::duplicate_key(field, value);
        }
    }
    map_diesel_error(error)
}
