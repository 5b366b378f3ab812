//! Quote request state.

use serde::{Deserialize, Serialize};

use crate::{ConfigurationError, PackageFormat, ServiceCode};

/// Package measurements.
///
/// Weight is in kilograms; every other field is in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Weight in kilograms.
    pub weight: f64,
    /// Length in centimeters.
    pub length: f64,
    /// Height in centimeters.
    pub height: f64,
    /// Width in centimeters.
    pub width: f64,
    /// Diameter in centimeters (rolls only).
    pub diameter: f64,
}

impl Dimensions {
    /// Creates dimensions for a box or envelope (no diameter).
    #[must_use]
    pub const fn new(weight: f64, length: f64, height: f64, width: f64) -> Self {
        Self {
            weight,
            length,
            height,
            width,
            diameter: 0.0,
        }
    }

    /// Returns a copy with the given diameter.
    #[must_use]
    pub const fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    /// Checks that every measurement is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending dimension.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("weight", self.weight),
            ("length", self.length),
            ("height", self.height),
            ("width", self.width),
            ("diameter", self.diameter),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }
}

/// Optional carrier services charged as surcharges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extras {
    /// Send a receipt notice back to the sender (aviso de recebimento).
    pub receipt_warning: bool,
    /// Hand the package only to the named recipient (mão própria).
    pub own_hand: bool,
}

/// Everything the calculator needs to quote a package.
///
/// The request is plain data: mutate it field by field, then hand it to the
/// client. The carrier payload is derived from it on every submission, so a
/// request can be changed and re-quoted freely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Package measurements.
    pub dimensions: Dimensions,
    /// Origin postal code (CEP).
    pub origin: String,
    /// Destination postal code (CEP).
    pub destination: String,
    /// Declared value of the contents, in BRL.
    pub declared_value: f64,
    /// Surcharged extras.
    pub extras: Extras,
    /// Package shape.
    pub format: PackageFormat,
    /// Services to quote, in request order.
    pub services: Vec<ServiceCode>,
}

impl QuoteRequest {
    /// Creates a request with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole request configuration at once.
    #[allow(clippy::too_many_arguments)]
    pub fn configure(
        &mut self,
        dimensions: Dimensions,
        origin: impl Into<String>,
        destination: impl Into<String>,
        declared_value: f64,
        extras: Extras,
        format: PackageFormat,
        services: Vec<ServiceCode>,
    ) {
        self.dimensions = dimensions;
        self.origin = origin.into();
        self.destination = destination.into();
        self.declared_value = declared_value;
        self.extras = extras;
        self.format = format;
        self.services = services;
    }

    /// Sets the package measurements.
    pub const fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }

    /// Sets the origin and destination postal codes.
    pub fn set_route(&mut self, origin: impl Into<String>, destination: impl Into<String>) {
        self.origin = origin.into();
        self.destination = destination.into();
    }

    /// Sets the declared value.
    pub const fn set_declared_value(&mut self, value: f64) {
        self.declared_value = value;
    }

    /// Sets the surcharged extras.
    pub const fn set_extras(&mut self, extras: Extras) {
        self.extras = extras;
    }

    /// Sets the package format.
    pub const fn set_format(&mut self, format: PackageFormat) {
        self.format = format;
    }

    /// Appends a service to quote.
    pub fn add_service(&mut self, service: ServiceCode) {
        self.services.push(service);
    }

    /// Builder-style variant of [`Self::set_dimensions`].
    #[must_use]
    pub const fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Builder-style variant of [`Self::set_route`].
    #[must_use]
    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.set_route(origin, destination);
        self
    }

    /// Builder-style variant of [`Self::set_declared_value`].
    #[must_use]
    pub const fn with_declared_value(mut self, value: f64) -> Self {
        self.declared_value = value;
        self
    }

    /// Builder-style variant of [`Self::set_extras`].
    #[must_use]
    pub const fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    /// Builder-style variant of [`Self::set_format`].
    #[must_use]
    pub const fn with_format(mut self, format: PackageFormat) -> Self {
        self.format = format;
        self
    }

    /// Replaces the requested services.
    #[must_use]
    pub fn with_services(mut self, services: impl IntoIterator<Item = ServiceCode>) -> Self {
        self.services = services.into_iter().collect();
        self
    }

    /// Checks postal codes, dimensions and declared value.
    ///
    /// Validation is never applied implicitly: by default a bad postal code
    /// comes back as a per-service carrier error instead. An empty service
    /// list is accepted here.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_postal_code("origin", &self.origin)?;
        validate_postal_code("destination", &self.destination)?;
        self.dimensions.validate()?;
        if !self.declared_value.is_finite() || self.declared_value < 0.0 {
            return Err(ConfigurationError::InvalidDeclaredValue(self.declared_value));
        }
        Ok(())
    }
}

/// Accepts `01001000` and `01001-000`.
fn validate_postal_code(field: &'static str, value: &str) -> Result<(), ConfigurationError> {
    let digits: String = match value.split_once('-') {
        Some((head, tail)) if head.len() == 5 => format!("{head}{tail}"),
        Some(_) => String::new(),
        None => value.to_string(),
    };

    if digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidPostalCode {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> QuoteRequest {
        QuoteRequest::new()
            .with_route("01001000", "20040-002")
            .with_dimensions(Dimensions::new(1.0, 20.0, 10.0, 15.0))
            .with_services([ServiceCode::SedexRetail])
    }

    #[test]
    fn test_defaults() {
        let request = QuoteRequest::new();
        assert_eq!(request.dimensions, Dimensions::default());
        assert_eq!(request.declared_value, 0.0);
        assert_eq!(request.format, PackageFormat::Box);
        assert!(!request.extras.own_hand);
        assert!(!request.extras.receipt_warning);
        assert!(request.services.is_empty());
        assert!(request.origin.is_empty());
    }

    #[test]
    fn test_configure_replaces_state() {
        let mut request = sample_request();
        request.configure(
            Dimensions::new(0.3, 16.0, 2.0, 11.0),
            "70040010",
            "90010000",
            150.0,
            Extras {
                receipt_warning: true,
                own_hand: false,
            },
            PackageFormat::Letter,
            vec![ServiceCode::PacRetail, ServiceCode::Sedex10Retail],
        );

        assert_eq!(request.origin, "70040010");
        assert_eq!(request.destination, "90010000");
        assert_eq!(request.declared_value, 150.0);
        assert!(request.extras.receipt_warning);
        assert_eq!(request.format, PackageFormat::Letter);
        assert_eq!(
            request.services,
            vec![ServiceCode::PacRetail, ServiceCode::Sedex10Retail]
        );
    }

    #[test]
    fn test_validate_accepts_hyphenated_cep() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_cep() {
        let request = sample_request().with_route("1234", "20040002");
        assert_eq!(
            request.validate(),
            Err(ConfigurationError::InvalidPostalCode {
                field: "origin",
                value: "1234".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_misplaced_hyphen() {
        let request = sample_request().with_route("01001000", "2004-0002");
        assert!(matches!(
            request.validate(),
            Err(ConfigurationError::InvalidPostalCode {
                field: "destination",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let request = sample_request().with_dimensions(Dimensions::new(-1.0, 20.0, 10.0, 15.0));
        assert!(matches!(
            request.validate(),
            Err(ConfigurationError::InvalidDimension { name: "weight", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_declared_value() {
        let request = sample_request().with_declared_value(f64::NAN);
        assert!(matches!(
            request.validate(),
            Err(ConfigurationError::InvalidDeclaredValue(_))
        ));
    }

    #[test]
    fn test_validate_allows_empty_services() {
        let request = sample_request().with_services([]);
        assert!(request.validate().is_ok());
    }
}
