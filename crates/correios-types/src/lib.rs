//! Core types for the correios shipping quote client.
//!
//! This crate provides the data structures shared by every correios crate:
//!
//! - [`ServiceCode`] - Carrier service identifiers and their wire codes
//! - [`PackageFormat`] - Package shape codes
//! - [`QuoteRequest`] - Package, route and options to quote
//! - [`QuoteResult`] - One parsed per-service quote
//! - [`CorreiosError`] - Errors that abort a quote request

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod package;
mod quote;
mod request;
mod service;

pub use error::{ConfigurationError, CorreiosError, Result, ServiceCodeError};
pub use package::{PackageFormat, PackageFormatParseError};
pub use quote::QuoteResult;
pub use request::{Dimensions, Extras, QuoteRequest};
pub use service::{ServiceCode, join_wire_codes};
