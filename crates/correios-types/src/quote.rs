//! Parsed per-service quotes.

use serde::{Deserialize, Serialize};

use crate::ServiceCode;

/// One service's quote from the calculator.
///
/// A nonzero [`error_code`](Self::error_code) means the carrier could not
/// quote this service (bad postal code for the tier, oversized package, ...).
/// The other services in the same response are unaffected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// The quoted service.
    pub service: ServiceCode,
    /// Transit time in business days.
    pub delivery_time: u32,
    /// Total price in BRL.
    pub price: f64,
    /// Own-hand surcharge in BRL.
    pub own_hand_price: f64,
    /// Receipt-warning surcharge in BRL.
    pub receipt_warning_price: f64,
    /// Declared-value surcharge in BRL.
    pub declared_value_price: f64,
    /// Price without any surcharge, when the carrier reports it.
    pub price_without_extras: Option<f64>,
    /// Home-delivery indicator, as returned by the carrier.
    pub home_delivery: String,
    /// Whether the service delivers on Saturdays.
    pub saturday_delivery: bool,
    /// Carrier error code; `0` on success.
    pub error_code: i32,
    /// Carrier error message; empty on success.
    pub error_message: String,
    /// Carrier closing note, when present.
    pub note: Option<String>,
}

impl QuoteResult {
    /// Returns true if the carrier quoted this service without error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error_code == 0
    }

    /// Returns the sum of the requested surcharges.
    #[must_use]
    pub fn surcharges(&self) -> f64 {
        self.own_hand_price + self.receipt_warning_price + self.declared_value_price
    }
}

impl std::fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_ok() {
            write!(
                f,
                "{}: R$ {:.2} in {} day(s)",
                self.service, self.price, self.delivery_time
            )
        } else {
            write!(
                f,
                "{}: error {} ({})",
                self.service, self.error_code, self.error_message
            )
        }
    }
}
