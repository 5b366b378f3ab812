//! Request payload construction.

use correios_types::{QuoteRequest, join_wire_codes};
use serde::Serialize;

/// Contract credentials for the calculator.
///
/// Without them the carrier quotes retail prices only, and contract
/// services may be rejected or rate limited.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    /// Administrative contract code (`nCdEmpresa`).
    pub company_id: String,
    /// Contract password (`sDsSenha`).
    pub password: String,
}

impl Credentials {
    /// Creates credentials from a company code and password.
    #[must_use]
    pub fn new(company_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("company_id", &self.company_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Form fields posted to the calculator.
///
/// Field names are the carrier's and must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestPayload {
    /// Contract code; empty for retail quotes.
    #[serde(rename = "nCdEmpresa")]
    pub company_id: String,
    /// Contract password; empty for retail quotes.
    #[serde(rename = "sDsSenha")]
    pub password: String,
    /// Comma-separated service codes.
    #[serde(rename = "nCdServico")]
    pub services: String,
    /// Origin postal code.
    #[serde(rename = "sCepOrigem")]
    pub origin: String,
    /// Destination postal code.
    #[serde(rename = "sCepDestino")]
    pub destination: String,
    /// Weight in kilograms.
    #[serde(rename = "nVlPeso")]
    pub weight: f64,
    /// Length in centimeters.
    #[serde(rename = "nVlComprimento")]
    pub length: f64,
    /// Height in centimeters.
    #[serde(rename = "nVlAltura")]
    pub height: f64,
    /// Width in centimeters.
    #[serde(rename = "nVlLargura")]
    pub width: f64,
    /// Diameter in centimeters.
    #[serde(rename = "nVlDiametro")]
    pub diameter: f64,
    /// Package format code.
    #[serde(rename = "nCdFormato")]
    pub format: u8,
    /// Declared value in BRL.
    #[serde(rename = "nVlValorDeclarado")]
    pub declared_value: f64,
    /// Own-hand flag, `S` or `N`.
    #[serde(rename = "sCdMaoPropria")]
    pub own_hand: &'static str,
    /// Receipt-warning flag, `S` or `N`.
    #[serde(rename = "sCdAvisoRecebimento")]
    pub receipt_warning: &'static str,
}

impl RequestPayload {
    /// Returns the payload with contract credentials filled in.
    #[must_use]
    pub fn with_credentials(mut self, credentials: &Credentials) -> Self {
        self.company_id.clone_from(&credentials.company_id);
        self.password.clone_from(&credentials.password);
        self
    }
}

/// Builds the calculator payload for the current state of a request.
///
/// Credentials are left empty; see [`RequestPayload::with_credentials`].
///
/// # Example
///
/// ```
/// use correios_fetch::build_request;
/// use correios_types::{QuoteRequest, ServiceCode};
///
/// let request = QuoteRequest::new()
///     .with_route("01001000", "20040002")
///     .with_services([ServiceCode::SedexRetail, ServiceCode::PacRetail]);
/// let payload = build_request(&request);
/// assert_eq!(payload.services, "40010,41106");
/// assert_eq!(payload.own_hand, "N");
/// ```
#[must_use]
pub fn build_request(request: &QuoteRequest) -> RequestPayload {
    let dimensions = request.dimensions;
    RequestPayload {
        company_id: String::new(),
        password: String::new(),
        services: join_wire_codes(&request.services),
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        weight: dimensions.weight,
        length: dimensions.length,
        height: dimensions.height,
        width: dimensions.width,
        diameter: dimensions.diameter,
        format: request.format.code(),
        declared_value: request.declared_value,
        own_hand: flag(request.extras.own_hand),
        receipt_warning: flag(request.extras.receipt_warning),
    }
}

const fn flag(value: bool) -> &'static str {
    if value { "S" } else { "N" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use correios_types::{Dimensions, Extras, PackageFormat, ServiceCode};

    fn sample_request() -> QuoteRequest {
        QuoteRequest::new()
            .with_route("01001000", "20040002")
            .with_dimensions(Dimensions::new(1.5, 20.0, 10.0, 15.0).with_diameter(4.0))
            .with_declared_value(120.0)
            .with_extras(Extras {
                receipt_warning: false,
                own_hand: true,
            })
            .with_format(PackageFormat::Roll)
            .with_services([ServiceCode::SedexRetail, ServiceCode::PacRetail])
    }

    #[test]
    fn test_build_request_fields() {
        let payload = build_request(&sample_request());

        assert_eq!(payload.company_id, "");
        assert_eq!(payload.password, "");
        assert_eq!(payload.services, "40010,41106");
        assert_eq!(payload.origin, "01001000");
        assert_eq!(payload.destination, "20040002");
        assert!((payload.weight - 1.5).abs() < f64::EPSILON);
        assert!((payload.length - 20.0).abs() < f64::EPSILON);
        assert!((payload.height - 10.0).abs() < f64::EPSILON);
        assert!((payload.width - 15.0).abs() < f64::EPSILON);
        assert!((payload.diameter - 4.0).abs() < f64::EPSILON);
        assert_eq!(payload.format, 2);
        assert!((payload.declared_value - 120.0).abs() < f64::EPSILON);
        assert_eq!(payload.own_hand, "S");
        assert_eq!(payload.receipt_warning, "N");
    }

    #[test]
    fn test_build_request_is_deterministic() {
        let request = sample_request();
        assert_eq!(build_request(&request), build_request(&request));
    }

    #[test]
    fn test_build_request_reflects_mutation() {
        let mut request = sample_request();
        let before = build_request(&request);

        request.set_format(PackageFormat::Letter);
        request.add_service(ServiceCode::Sedex12);
        let after = build_request(&request);

        assert_ne!(before, after);
        assert_eq!(after.format, 3);
        assert_eq!(after.services, "40010,41106,40169");
    }

    #[test]
    fn test_build_request_defaults() {
        let payload = build_request(&QuoteRequest::new());
        assert_eq!(payload.services, "");
        assert_eq!(payload.format, 1);
        assert_eq!(payload.own_hand, "N");
        assert_eq!(payload.receipt_warning, "N");
    }

    #[test]
    fn test_with_credentials() {
        let payload = build_request(&sample_request())
            .with_credentials(&Credentials::new("08082650", "564321"));
        assert_eq!(payload.company_id, "08082650");
        assert_eq!(payload.password, "564321");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("08082650", "564321"));
        assert!(debug.contains("08082650"));
        assert!(!debug.contains("564321"));
    }
}
