//! HTTP client and response parsing for the correios shipping quote client.
//!
//! This crate provides the quote pipeline:
//!
//! - [`build_request`] - Turns a quote request into the calculator's form payload
//! - [`FareClient`] - HTTP client that submits the payload and parses the reply
//! - [`parse_fare_response`] - XML response decoding
//! - [`parse_decimal`] - Carrier (pt-BR) decimal parsing
//!
//! # Example
//!
//! ```no_run
//! use correios_fetch::FareClient;
//! use correios_types::{Dimensions, QuoteRequest, ServiceCode};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FareClient::with_defaults()?;
//! let request = QuoteRequest::new()
//!     .with_route("01001000", "20040002")
//!     .with_dimensions(Dimensions::new(1.0, 20.0, 10.0, 15.0))
//!     .with_services([ServiceCode::SedexRetail, ServiceCode::PacRetail]);
//!
//! for quote in client.get_fare(&request).await? {
//!     println!("{quote}");
//! }
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod payload;

pub use client::{ClientConfig, DEFAULT_ENDPOINT, FareClient, RemoteServiceError};
pub use parse::{ResponseParseError, parse_decimal, parse_fare_response};
pub use payload::{Credentials, RequestPayload, build_request};
