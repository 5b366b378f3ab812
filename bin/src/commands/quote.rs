//! Quote command implementation.
//!
//! This module builds a quote request from command-line flags, submits it to
//! the calculator and prints one row per service.

use crate::display::{QuoteRow, print_quotes};
use anyhow::{Context, Result};
use clap::Args;
use correios_lib::prelude::*;
use std::time::Duration;
use tracing::info;

/// Flags for the quote command.
#[derive(Args)]
pub(crate) struct QuoteArgs {
    /// Origin postal code (CEP)
    #[arg(long)]
    from: String,

    /// Destination postal code (CEP)
    #[arg(long)]
    to: String,

    /// Service to quote, by code (40010) or name (sedex-retail). Repeatable.
    #[arg(short, long = "service", value_name = "SERVICE")]
    services: Vec<ServiceCode>,

    /// Weight in kilograms
    #[arg(long, default_value_t = 0.0)]
    weight: f64,

    /// Length in centimeters
    #[arg(long, default_value_t = 0.0)]
    length: f64,

    /// Height in centimeters
    #[arg(long, default_value_t = 0.0)]
    height: f64,

    /// Width in centimeters
    #[arg(long, default_value_t = 0.0)]
    width: f64,

    /// Diameter in centimeters
    #[arg(long, default_value_t = 0.0)]
    diameter: f64,

    /// Package format (box, roll, letter)
    #[arg(short, long, default_value = "box")]
    format: PackageFormat,

    /// Declared value of the contents, in BRL
    #[arg(long, default_value_t = 0.0)]
    declared_value: f64,

    /// Deliver only to the named recipient
    #[arg(long)]
    own_hand: bool,

    /// Send a receipt notice back to the sender
    #[arg(long)]
    receipt_warning: bool,

    /// Validate postal codes and dimensions before sending
    #[arg(long)]
    validate: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Calculator endpoint override
    #[arg(long)]
    endpoint: Option<String>,

    /// Contract code
    #[arg(long, env = "CORREIOS_COMPANY_ID")]
    company_id: Option<String>,

    /// Contract password
    #[arg(long, env = "CORREIOS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Days until the package is posted, for delivery estimates
    #[arg(long, default_value = "0")]
    ship_offset: u32,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

impl QuoteArgs {
    fn request(&self) -> QuoteRequest {
        let mut request = QuoteRequest::new();
        request.configure(
            Dimensions::new(self.weight, self.length, self.height, self.width)
                .with_diameter(self.diameter),
            &self.from,
            &self.to,
            self.declared_value,
            Extras {
                receipt_warning: self.receipt_warning,
                own_hand: self.own_hand,
            },
            self.format,
            self.services.clone(),
        );
        request
    }

    fn client_config(&self) -> ClientConfig {
        let credentials = match (&self.company_id, &self.password) {
            (Some(company_id), password) => Some(Credentials::new(
                company_id.as_str(),
                password.as_deref().unwrap_or_default(),
            )),
            (None, _) => None,
        };

        let mut config = ClientConfig {
            timeout: Duration::from_secs(self.timeout),
            credentials,
            validate_requests: self.validate,
            ..Default::default()
        };
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        config
    }
}

/// Quote the requested services and print the results.
pub(crate) async fn quote(args: QuoteArgs) -> Result<()> {
    let request = args.request();
    let client = FareClient::new(args.client_config()).context("Failed to create HTTP client")?;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        services = request.services.len(),
        "quoting"
    );

    let quotes = client
        .get_fare(&request)
        .await
        .context("Failed to get fare")?;

    let rows: Vec<QuoteRow<'_>> = quotes
        .iter()
        .map(|quote| QuoteRow::new(quote, args.ship_offset))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_quotes(&rows);
    }

    Ok(())
}
