//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to result
//! descriptors, HTTP responses, or any other protocol-specific envelope.

use serde::{Deserialize, Serialize};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The payload failed one or more validation rules.
    InvalidRequest,
    /// The operation would leave the aggregate in an invalid state.
    InvariantViolation,
    /// The referenced customer, contact, or address does not exist.
    NotFound,
    /// A backing store is temporarily unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

impl ErrorCode {
    /// Whether adapters should report this failure to the caller as a
    /// regular outcome rather than treat it as fatal.
    ///
    /// # Examples
    /// ```
    /// use customers::domain::ErrorCode;
    ///
    /// assert!(ErrorCode::NotFound.is_recoverable());
    /// assert!(!ErrorCode::InternalError.is_recoverable());
    /// ```
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            Self::InvalidRequest | Self::InvariantViolation | Self::NotFound
        )
    }
}

/// Message used for every validation failure; the reasons travel in
/// [`Error::errors`].
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation Error";

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use customers::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Customer not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Customer not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    errors: Vec<String>,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty or whitespace only.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create a new error, panicking if validation fails.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            errors: Vec::new(),
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Ordered validation reasons; empty for every other category.
    pub fn errors(&self) -> &[String] {
        self.errors.as_slice()
    }

    /// Attach validation reasons to the error.
    ///
    /// # Examples
    /// ```
    /// use customers::domain::Error;
    ///
    /// let err = Error::invariant("bad").with_errors(vec!["x is required".to_owned()]);
    /// assert_eq!(err.errors(), ["x is required"]);
    /// ```
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// Validation failure enumerating every reason.
    ///
    /// # Examples
    /// ```
    /// use customers::domain::{Error, ErrorCode};
    ///
    /// let err = Error::validation(vec!["fullName is required".to_owned()]);
    /// assert_eq!(err.code(), ErrorCode::InvalidRequest);
    /// assert_eq!(err.message(), "Validation Error");
    /// assert_eq!(err.errors().len(), 1);
    /// ```
    pub fn validation(errors: Vec<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, VALIDATION_ERROR_MESSAGE).with_errors(errors)
    }

    /// Convenience constructor for [`ErrorCode::InvariantViolation`].
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvariantViolation, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            errors: value.errors,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            errors,
        } = value;

        Ok(Error::try_new(code, message)?.with_errors(errors))
    }
}
