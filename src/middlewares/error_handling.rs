use crate::{
    common::{
        INTERNAL_CORRELATION_ID_HEADER, MESSAGE_REQUEST_UNSUCCESSFUL,
        MESSAGE_UNPROCESSABLE_ERROR_RESPONSE,
    },
    error::{ApiError, ApiErrorKind, Error, PaysafeError},
};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates unsuccessful responses of the Paysafe APIs
/// into [`Error::ApiError`](crate::error::Error)s, and transport failures into
/// [`Error::ApiConnection`](crate::error::Error).
///
/// Only `200 OK` and `201 Created` are considered successful.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let uri = req.url().to_string();

        // Capture the response
        let response = match next.run(req, extensions).await {
            Ok(response) => response,
            Err(reqwest_middleware::Error::Reqwest(e)) => {
                return Err(Error::ApiConnection {
                    uri,
                    reason: e.to_string(),
                }
                .into())
            }
            Err(e) => return Err(e),
        };

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            return Ok(response);
        }

        let internal_correlation_id = response
            .headers()
            .get(INTERNAL_CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;

        tracing::debug!(
            "Failed HTTP request. Status code: {}, internal correlation id: {:?}",
            status,
            internal_correlation_id
        );

        let api_error = match serde_json::from_slice::<ErrorResponse>(&bytes) {
            Ok(error_response) => {
                let kind = ApiErrorKind::from_status(status.as_u16());
                ApiError {
                    kind,
                    message: MESSAGE_REQUEST_UNSUCCESSFUL.to_string(),
                    status: status.as_u16(),
                    internal_correlation_id,
                    error: error_response.error,
                    api_response: if kind == ApiErrorKind::RequestDeclined {
                        serde_json::from_slice(&bytes).ok()
                    } else {
                        None
                    },
                }
            }
            Err(_) => ApiError {
                kind: ApiErrorKind::Unsuccessful,
                message: MESSAGE_UNPROCESSABLE_ERROR_RESPONSE.to_string(),
                status: status.as_u16(),
                internal_correlation_id,
                error: None,
                api_response: None,
            },
        };

        Err(Error::ApiError(api_error).into())
    }
}

/// Body of an unsuccessful response.
///
/// Declined transactions return the whole resource alongside the `error` field,
/// so every other key is ignored here.
#[derive(serde::Deserialize, Debug)]
struct ErrorResponse {
    error: Option<PaysafeError>,
}
