//! Display utilities and output formatting for the correios CLI.

use chrono::NaiveDate;
use correios_lib::prelude::*;
use serde::Serialize;

/// A quote with its estimated delivery date, as printed by the CLI.
#[derive(Serialize)]
pub(crate) struct QuoteRow<'a> {
    #[serde(flatten)]
    quote: &'a QuoteResult,
    estimated_delivery: Option<NaiveDate>,
}

impl<'a> QuoteRow<'a> {
    /// Pairs a quote with its delivery estimate; failed quotes get none.
    pub(crate) fn new(quote: &'a QuoteResult, ship_offset_days: u32) -> Self {
        let estimated_delivery = quote.is_ok().then(|| {
            Estimator::for_quote(quote)
                .with_ship_offset(ship_offset_days)
                .estimate()
        });
        Self {
            quote,
            estimated_delivery,
        }
    }
}

/// Print quotes as a table.
pub(crate) fn print_quotes(rows: &[QuoteRow<'_>]) {
    if rows.is_empty() {
        println!("No quotes returned.");
        return;
    }

    println!(
        "{:<26} {:>5} {:>12} {:>12} {:>4} {:>12}  {}",
        "SERVICE", "DAYS", "PRICE", "EXTRAS", "SAT", "DELIVERY", "STATUS"
    );
    println!("{}", "-".repeat(90));

    for row in rows {
        let quote = row.quote;
        let status = if quote.is_ok() {
            "ok".to_string()
        } else {
            format!("error {}: {}", quote.error_code, quote.error_message)
        };
        println!(
            "{:<26} {:>5} {:>12} {:>12} {:>4} {:>12}  {}",
            quote.service.name(),
            quote.delivery_time,
            format_price(quote.price),
            format_price(quote.surcharges()),
            if quote.saturday_delivery { "yes" } else { "no" },
            row.estimated_delivery
                .map_or_else(|| "-".to_string(), |date| date.to_string()),
            status,
        );
    }

    let failed = rows.iter().filter(|row| !row.quote.is_ok()).count();
    if failed > 0 {
        println!("\n{failed} of {} services could not be quoted.", rows.len());
    }
}

/// Format a BRL amount (e.g., "R$ 1234.50").
pub(crate) fn format_price(value: f64) -> String {
    format!("R$ {value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(26.5), "R$ 26.50");
        assert_eq!(format_price(0.0), "R$ 0.00");
        assert_eq!(format_price(1234.567), "R$ 1234.57");
    }
}
