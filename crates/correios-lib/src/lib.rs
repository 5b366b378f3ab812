//! Rust client for the Correios price and deadline calculator.
//!
//! This is a facade crate that re-exports functionality from the correios
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use correios_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = FareClient::with_defaults()?;
//!     let request = QuoteRequest::new()
//!         .with_route("01001000", "20040002")
//!         .with_dimensions(Dimensions::new(1.0, 20.0, 10.0, 15.0))
//!         .with_services([ServiceCode::SedexRetail, ServiceCode::PacRetail]);
//!
//!     for quote in client.get_fare(&request).await? {
//!         if quote.is_ok() {
//!             let arrives = Estimator::for_quote(&quote).estimate();
//!             println!("{quote}, arriving {arrives}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use correios_types::*;

// Re-export the HTTP client
#[cfg(feature = "fetch")]
pub use correios_fetch::{
    ClientConfig, Credentials, DEFAULT_ENDPOINT, FareClient, RemoteServiceError, RequestPayload,
    ResponseParseError, build_request, parse_decimal, parse_fare_response,
};

// Re-export delivery estimation
#[cfg(feature = "estimate")]
pub use correios_estimate::{Estimator, estimate_delivery_date, estimate_delivery_date_from};

/// Prelude module for convenient imports.
///
/// ```
/// use correios_lib::prelude::*;
/// ```
pub mod prelude {
    pub use correios_types::{
        ConfigurationError, CorreiosError, Dimensions, Extras, PackageFormat, QuoteRequest,
        QuoteResult, Result, ServiceCode,
    };

    #[cfg(feature = "fetch")]
    pub use correios_fetch::{ClientConfig, Credentials, FareClient, build_request};

    #[cfg(feature = "estimate")]
    pub use correios_estimate::{Estimator, estimate_delivery_date};
}
