use crate::shared::errors::{AppError, AppResult};
use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Common HTTP handling for all provider clients.
/// Eliminates duplicate client construction and status handling code.
pub struct HttpHandler;

impl HttpHandler {
    /// Create an HTTP client with consistent configuration
    pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    /// Send a request and map non-success statuses to errors. List search
    /// issues exactly one request per call, so there is no retry layer here;
    /// callers recover by degrading to an empty result set.
    pub async fn execute(
        request: RequestBuilder,
        provider_name: &str,
        operation_name: &str,
    ) -> AppResult<Response> {
        debug!("{} {}: issuing request", provider_name, operation_name);

        let response = request.send().await.map_err(AppError::from)?;
        Self::handle_response_status(response.status(), provider_name)?;
        Ok(response)
    }

    /// Handle HTTP response status codes consistently across all providers
    pub fn handle_response_status(status: StatusCode, provider_name: &str) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(format!(
                "{} rate limit exceeded",
                provider_name
            ))),
            StatusCode::NOT_FOUND => Err(AppError::NotFound("Resource not found".to_string())),
            StatusCode::BAD_REQUEST => Err(AppError::ApiError(format!(
                "Bad request to {} API",
                provider_name
            ))),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Unauthorized(
                format!("Not authorized to access {} API", provider_name),
            )),
            _ if status.is_server_error() => Err(AppError::ExternalServiceError(format!(
                "{} service unavailable ({})",
                provider_name, status
            ))),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                provider_name, status
            ))),
        }
    }
}
