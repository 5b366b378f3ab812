//! Delivery date estimation for the correios shipping quote client.
//!
//! This crate is independent of the HTTP client and performs no I/O:
//!
//! - [`estimate_delivery_date`] - Estimate from today's local date
//! - [`estimate_delivery_date_from`] - Same computation from an explicit date
//! - [`Estimator`] - Reusable estimate parameters, buildable from a quote

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;

pub use estimator::{Estimator, estimate_delivery_date, estimate_delivery_date_from};
