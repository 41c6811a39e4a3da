//! Result descriptors returned to the request dispatcher.
//!
//! A [`ResultDescriptor`] is the `{ statusCode, body }` pair every operation
//! resolves to. Validation, invariant and not-found errors are regular
//! outcomes and become descriptors; storage failures stay `Err` and surface
//! through [`ResponseError`](actix_web::ResponseError).

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use serde::Serialize;
use tracing::error;

use crate::domain::Error;

use super::error::status_for;

/// Status code plus serialized JSON body.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use customers::domain::Error;
/// use customers::inbound::http::ResultDescriptor;
///
/// let found = ResultDescriptor::from_outcome(
///     Err::<(), _>(Error::not_found("Customer not found")),
///     StatusCode::OK,
/// )
/// .expect("not found is a regular outcome");
/// assert_eq!(found.status_code, 404);
/// assert_eq!(found.body, r#"{"code":"not_found","message":"Customer not found"}"#);
///
/// let deleted = ResultDescriptor::no_content();
/// assert_eq!(deleted.status_code, 204);
/// assert!(deleted.body.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDescriptor {
    /// HTTP status code.
    pub status_code: u16,
    /// JSON text, empty for `204`.
    pub body: String,
}

impl ResultDescriptor {
    /// Serialize `value` under `status`.
    pub fn json<T>(status: StatusCode, value: &T) -> Result<Self, Error>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(value)
            .map_err(|err| Error::internal(format!("failed to serialize response: {err}")))?;
        Ok(Self {
            status_code: status.as_u16(),
            body,
        })
    }

    /// Empty `204` descriptor for deletions.
    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT.as_u16(),
            body: String::new(),
        }
    }

    /// Describe a recoverable error.
    pub fn from_error(error: &Error) -> Result<Self, Error> {
        Self::json(status_for(error.code()), error)
    }

    /// Translate a service outcome.
    ///
    /// Successes serialize under `success`; recoverable errors become their
    /// descriptor; anything else is returned as `Err` and logged.
    pub fn from_outcome<T>(outcome: Result<T, Error>, success: StatusCode) -> Result<Self, Error>
    where
        T: Serialize,
    {
        match outcome {
            Ok(value) => Self::json(success, &value),
            Err(err) => Self::recover(err),
        }
    }

    /// Translate a deletion outcome: `204` on success.
    pub fn from_deletion<T>(outcome: Result<T, Error>) -> Result<Self, Error> {
        match outcome {
            Ok(_) => Ok(Self::no_content()),
            Err(err) => Self::recover(err),
        }
    }

    fn recover(err: Error) -> Result<Self, Error> {
        if err.code().is_recoverable() {
            return Self::from_error(&err);
        }
        error!(code = ?err.code(), message = err.message(), "customer operation failed");
        Err(err)
    }

    /// Render as an actix response.
    pub fn into_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        let mut builder = HttpResponse::build(status);
        if self.body.is_empty() {
            return builder.finish();
        }
        builder.content_type(ContentType::json()).body(self.body)
    }
}
