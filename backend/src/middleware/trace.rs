//! Per-request trace identifiers.
//!
//! [`trace_requests`] runs every request inside [`TraceId::scope`], so an
//! [`Error`](crate::domain::Error) built by a handler or a service picks the
//! identifier up. The same identifier goes back to the client in the
//! `trace-id` header and onto the `http_request` span.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::middleware::Next;
use tracing::{Instrument, error, info, info_span};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware function tagging each request with a fresh [`TraceId`].
///
/// # Examples
/// ```
/// use actix_web::{App, middleware::from_fn};
/// use staffing::trace_requests;
///
/// let app = App::new().wrap(from_fn(trace_requests));
/// ```
///
/// # Errors
///
/// Propagates errors from the wrapped service unchanged.
pub async fn trace_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, actix_web::Error> {
    let trace_id = TraceId::generate();
    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.path(),
    );

    let mut res = TraceId::scope(trace_id, next.call(req).instrument(span.clone())).await?;
    span.in_scope(|| info!(status = res.status().as_u16(), "request completed"));
    stamp(res.headers_mut(), trace_id);
    Ok(res.map_into_boxed_body())
}

fn stamp(headers: &mut HeaderMap, trace_id: TraceId) {
    match HeaderValue::from_str(&trace_id.to_string()) {
        Ok(value) => {
            headers.insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(e) => error!(error = %e, "trace identifier is not a valid header value"),
    }
}
