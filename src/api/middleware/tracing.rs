//! Per-request tracing spans and response logging.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Tracing layer type produced by [`layer`].
pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Creates the request tracing layer.
///
/// - one `INFO` span per request carrying method, URI, and HTTP version
/// - a `DEBUG` event when the request starts
/// - an `INFO` event with status and latency in milliseconds on response
/// - an `ERROR` event for 5xx responses
///
/// Request headers are not recorded, so `Authorization` values and request
/// bodies with passwords never reach the log.
///
/// ```text
/// INFO request{method=PATCH uri=/users/abc123 version=HTTP/1.1}: finished processing request latency=1 ms status=204
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
