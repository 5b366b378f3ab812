//! Carrier service codes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ServiceCodeError;

/// Carrier service identifier.
///
/// Each variant names one delivery tier. The wire code returned by
/// [`ServiceCode::as_str`] is the exact value the calculator expects in
/// `nCdServico` and echoes back in `Codigo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCode {
    /// SEDEX, retail contract.
    SedexRetail,
    /// SEDEX, charged to the recipient.
    SedexToCharge,
    /// SEDEX 10, retail contract.
    #[serde(rename = "SEDEX_10_RETAIL")]
    Sedex10Retail,
    /// SEDEX Hoje (same day), retail contract.
    SedexTodayRetail,
    /// SEDEX, cash contract.
    SedexCash,
    /// SEDEX, payment on delivery.
    SedexPaymentOnDelivery,
    /// PAC, retail contract.
    PacRetail,
    /// PAC, cash contract.
    PacCash,
    /// PAC, payment on delivery.
    PacPaymentOnDelivery,
    /// SEDEX 12.
    #[serde(rename = "SEDEX_12")]
    Sedex12,
}

impl ServiceCode {
    /// Returns the carrier wire code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SedexRetail => "40010",
            Self::SedexToCharge => "40045",
            Self::Sedex10Retail => "40215",
            Self::SedexTodayRetail => "40290",
            Self::SedexCash => "4014",
            Self::SedexPaymentOnDelivery => "4065",
            Self::PacRetail => "41106",
            Self::PacCash => "4510",
            Self::PacPaymentOnDelivery => "4707",
            Self::Sedex12 => "40169",
        }
    }

    /// Returns the symbolic name (e.g. `SEDEX_RETAIL`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SedexRetail => "SEDEX_RETAIL",
            Self::SedexToCharge => "SEDEX_TO_CHARGE",
            Self::Sedex10Retail => "SEDEX_10_RETAIL",
            Self::SedexTodayRetail => "SEDEX_TODAY_RETAIL",
            Self::SedexCash => "SEDEX_CASH",
            Self::SedexPaymentOnDelivery => "SEDEX_PAYMENT_ON_DELIVERY",
            Self::PacRetail => "PAC_RETAIL",
            Self::PacCash => "PAC_CASH",
            Self::PacPaymentOnDelivery => "PAC_PAYMENT_ON_DELIVERY",
            Self::Sedex12 => "SEDEX_12",
        }
    }

    /// Returns a human-readable description of the tier.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SedexRetail => "SEDEX (retail)",
            Self::SedexToCharge => "SEDEX a cobrar",
            Self::Sedex10Retail => "SEDEX 10 (retail)",
            Self::SedexTodayRetail => "SEDEX Hoje (retail)",
            Self::SedexCash => "SEDEX (cash contract)",
            Self::SedexPaymentOnDelivery => "SEDEX (payment on delivery)",
            Self::PacRetail => "PAC (retail)",
            Self::PacCash => "PAC (cash contract)",
            Self::PacPaymentOnDelivery => "PAC (payment on delivery)",
            Self::Sedex12 => "SEDEX 12",
        }
    }

    /// Returns true for the expedited SEDEX family.
    #[must_use]
    pub const fn is_sedex(&self) -> bool {
        !self.is_pac()
    }

    /// Returns true for the economy PAC family.
    #[must_use]
    pub const fn is_pac(&self) -> bool {
        matches!(
            self,
            Self::PacRetail | Self::PacCash | Self::PacPaymentOnDelivery
        )
    }

    /// Returns all service codes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SedexRetail,
            Self::SedexToCharge,
            Self::Sedex10Retail,
            Self::SedexTodayRetail,
            Self::SedexCash,
            Self::SedexPaymentOnDelivery,
            Self::PacRetail,
            Self::PacCash,
            Self::PacPaymentOnDelivery,
            Self::Sedex12,
        ]
    }

    /// Resolves a carrier wire code back to its service.
    ///
    /// The calculator sometimes echoes codes zero-padded (`04014`), so
    /// leading zeros are ignored when comparing.
    ///
    /// # Errors
    ///
    /// Returns an error if no service uses the given code.
    pub fn from_wire(code: &str) -> Result<Self, ServiceCodeError> {
        let wanted = code.trim().trim_start_matches('0');
        Self::all()
            .iter()
            .copied()
            .find(|service| !wanted.is_empty() && service.as_str() == wanted)
            .ok_or_else(|| ServiceCodeError(code.to_string()))
    }
}

impl std::fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ServiceCode {
    type Err = ServiceCodeError;

    /// Accepts a wire code (`40010`), a symbolic name (`SEDEX_RETAIL`) or a
    /// kebab-case name (`sedex-retail`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().bytes().all(|b| b.is_ascii_digit()) {
            return Self::from_wire(s);
        }

        let normalized = s.trim().replace('-', "_").to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|service| service.name() == normalized)
            .ok_or_else(|| ServiceCodeError(s.to_string()))
    }
}

/// Joins service codes into the comma-separated list sent as `nCdServico`.
#[must_use]
pub fn join_wire_codes(services: &[ServiceCode]) -> String {
    services
        .iter()
        .map(ServiceCode::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
