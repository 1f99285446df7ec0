//! Standard errors used by all functions in the crate.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt;

/// Error collecting all possible failures of the Paysafe client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error, including failures to decode a successful response body.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Non-successful response returned by a Paysafe API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// No response was received from the Paysafe API, even after automatic retries.
    #[error("Error connecting to {uri}, reason: {reason}")]
    ApiConnection { uri: String, reason: String },
    /// Invalid client configuration or request options.
    #[error("{0}")]
    InvalidConfiguration(String),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// HTTP status code of the failed call, if a response was received.
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::ApiError(api_error) => Some(api_error.status),
            Error::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Value of the `X-INTERNAL-CORRELATION-ID` header of the failed response, if any.
    pub fn internal_correlation_id(&self) -> Option<&str> {
        match self {
            Error::ApiError(api_error) => api_error.internal_correlation_id.as_deref(),
            _ => None,
        }
    }

    /// Structured error returned by the Paysafe API, if any.
    pub fn error(&self) -> Option<&PaysafeError> {
        match self {
            Error::ApiError(api_error) => api_error.error.as_ref(),
            _ => None,
        }
    }

    /// Kind of the API error, if this is an [`Error::ApiError`].
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::ApiError(api_error) => Some(api_error.kind),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Classification of a non-successful Paysafe API response.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub enum ApiErrorKind {
    /// `400 Bad Request`.
    InvalidRequest,
    /// `401 Unauthorized`: the API key was rejected.
    InvalidCredentials,
    /// `402 Payment Required`: the transaction was declined.
    RequestDeclined,
    /// `403 Forbidden`.
    Unauthorized,
    /// `409 Conflict`.
    RequestConflict,
    /// Any `5xx` status.
    ServerError,
    /// Any other non-successful status, `404 Not Found` included.
    Unsuccessful,
}

impl ApiErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorKind::InvalidRequest,
            401 => ApiErrorKind::InvalidCredentials,
            402 => ApiErrorKind::RequestDeclined,
            403 => ApiErrorKind::Unauthorized,
            409 => ApiErrorKind::RequestConflict,
            s if s >= 500 => ApiErrorKind::ServerError,
            _ => ApiErrorKind::Unsuccessful,
        }
    }
}

/// Paysafe HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone)]
pub struct ApiError {
    /// What went wrong, derived from the HTTP status.
    pub kind: ApiErrorKind,
    /// Short description of the failure.
    pub message: String,
    /// HTTP status returned by the server.
    pub status: u16,
    /// Paysafe correlation identifier for the request.
    pub internal_correlation_id: Option<String>,
    /// Structured error from the response body.
    ///
    /// `None` when the body was empty or could not be parsed.
    pub error: Option<PaysafeError>,
    /// Entire response body of a declined request ([`ApiErrorKind::RequestDeclined`]).
    ///
    /// Declined transactions return the full resource, which can be recovered with
    /// [`ApiError::declined_response`].
    pub api_response: Option<serde_json::Value>,
}

impl ApiError {
    /// Deserializes the body of a declined request into the resource type of the call,
    /// e.g. a [`PaymentHandle`](crate::apis::payment_handles::PaymentHandle).
    pub fn declined_response<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.api_response
            .as_ref()
            .map(|body| serde_json::from_value(body.clone()))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paysafe HTTP error {}: {}", self.status, self.message)?;

        if let Some(ref error) = self.error {
            if let Some(ref code) = error.code {
                write!(f, "\nError code: {}", code)?;
            }
            if let Some(ref message) = error.message {
                write!(f, "\nError message: {}", message)?;
            }
            if let Some(ref details) = error.details {
                for detail in details {
                    write!(f, "\n- {}", detail)?;
                }
            }
            if let Some(ref field_errors) = error.field_errors {
                write!(f, "\nField errors:")?;
                for field_error in field_errors {
                    write!(
                        f,
                        "\n- {}: {}",
                        field_error.field.as_deref().unwrap_or_default(),
                        field_error.error.as_deref().unwrap_or_default()
                    )?;
                }
            }
        }

        if let Some(ref internal_correlation_id) = self.internal_correlation_id {
            write!(f, "\nInternal correlation ID: {}", internal_correlation_id)?;
        }

        Ok(())
    }
}

/// Error object returned in the body of failed Paysafe API calls.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaysafeError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<Vec<String>>,
    pub field_errors: Option<Vec<FieldError>>,
    pub additional_details: Option<Vec<AdditionalDetail>>,
}

/// Validation failure of a single request field.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct FieldError {
    pub field: Option<String>,
    pub error: Option<String>,
}

/// Sub-error attached to a [`PaysafeError`], e.g. on `409 Conflict`.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct AdditionalDetail {
    pub r#type: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}
