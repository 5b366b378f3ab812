//! Error types for correios.

use thiserror::Error;

/// Result type alias for correios operations.
pub type Result<T> = std::result::Result<T, CorreiosError>;

/// Errors that can abort a quote request.
///
/// Per-service carrier errors are not represented here; they are reported
/// through [`crate::QuoteResult::error_code`].
#[derive(Error, Debug)]
pub enum CorreiosError {
    /// The request never got a successful HTTP response.
    #[error("Remote service error: {0}")]
    RemoteService(String),

    /// The response body did not have the documented shape.
    #[error("Response parse error: {0}")]
    ResponseParse(String),

    /// The request was rejected before being sent.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Error for quote requests rejected by local validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Postal code is not eight digits.
    #[error("Invalid {field} postal code: '{value}'")]
    InvalidPostalCode {
        /// Which side of the shipment (`origin` or `destination`).
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A package dimension is negative or not finite.
    #[error("Invalid {name}: {value}")]
    InvalidDimension {
        /// The dimension name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Declared value is negative or not finite.
    #[error("Invalid declared value: {0}")]
    InvalidDeclaredValue(f64),

    /// No services were requested but the client requires at least one.
    #[error("No services requested")]
    EmptyServiceList,
}

/// Error returned for an unknown service code or name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown service code: '{0}'")]
pub struct ServiceCodeError(pub String);
