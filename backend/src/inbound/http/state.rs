//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AssignmentsQuery, RecordsCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub records: Arc<dyn RecordsCommand>,
    pub assignments: Arc<dyn AssignmentsQuery>,
}

impl HttpState {
    /// Construct state from the driving port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use staffing::domain::RecordsService;
    /// use staffing::inbound::http::state::HttpState;
    /// use staffing::outbound::memory::InMemoryRecordRepository;
    ///
    /// let service = Arc::new(RecordsService::new(Arc::new(
    ///     InMemoryRecordRepository::default(),
    /// )));
    /// let state = HttpState::new(service.clone(), service);
    /// let _ = state.records.clone();
    /// ```
    pub fn new(records: Arc<dyn RecordsCommand>, assignments: Arc<dyn AssignmentsQuery>) -> Self {
        Self {
            records,
            assignments,
        }
    }
}
