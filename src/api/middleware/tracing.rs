//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the request tracing layer applied to the whole router.
///
/// Opens an `INFO` span per request carrying the method, URI, and HTTP
/// version. When the response is ready, the status code and latency in
/// milliseconds are logged inside that span:
///
/// ```text
/// INFO request{method=POST uri=/token version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
