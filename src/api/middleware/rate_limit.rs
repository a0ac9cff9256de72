//! Rate limiting middleware using token bucket algorithm.

use axum::http::Request;
use axum::response::{IntoResponse, Response};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::error::AppError;

/// Picks the client IP either from the socket peer or from proxy headers.
///
/// Proxy headers (`X-Forwarded-For`, `X-Real-IP`, `Forwarded`) are only
/// trusted when `behind_proxy` is set; otherwise any client could spoof them.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl ClientIpKeyExtractor {
    pub fn new(behind_proxy: bool) -> Self {
        Self { behind_proxy }
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

/// Creates the rate limiter for to-do endpoints.
///
/// # Limits
///
/// - **Rate**: one token replenished every 2 seconds
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests` with a
/// `{"detail": ...}` body and the governor's `retry-after` headers.
///
/// # Key Extraction
///
/// Limits are applied per client IP, see [`ClientIpKeyExtractor`].
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/todo", post(create_todo_handler))
///     .layer(rate_limit::layer(false));
/// ```
pub fn layer(
    behind_proxy: bool,
) -> GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(ClientIpKeyExtractor::new(behind_proxy))
            .per_second(2)
            .burst_size(100)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf).error_handler(rejection_response)
}

fn rejection_response(err: GovernorError) -> Response {
    match err {
        GovernorError::TooManyRequests { wait_time, headers } => {
            let mut response =
                AppError::too_many_requests(format!("Too Many Requests! Wait for {wait_time}s"))
                    .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => {
            tracing::error!("Rate limiter could not determine the client IP");
            AppError::internal("Internal server error").into_response()
        }
        GovernorError::Other { code, msg, headers } => {
            tracing::error!(status = %code, msg = ?msg, "Rate limiter error");
            let mut response = AppError::internal("Internal server error").into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
    }
}
