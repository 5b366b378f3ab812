//! Package shape definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Package shape, sent to the carrier as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageFormat {
    /// Box or parcel.
    #[default]
    Box,
    /// Roll or prism.
    Roll,
    /// Envelope.
    Letter,
}

impl PackageFormat {
    /// Returns the carrier code (`nCdFormato`).
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Box => 1,
            Self::Roll => 2,
            Self::Letter => 3,
        }
    }

    /// Returns the format as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Roll => "roll",
            Self::Letter => "letter",
        }
    }

    /// Returns all package formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Box, Self::Roll, Self::Letter]
    }
}

impl std::fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageFormat {
    type Err = PackageFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "box" | "1" => Ok(Self::Box),
            "roll" | "prism" | "2" => Ok(Self::Roll),
            "letter" | "envelope" | "3" => Ok(Self::Letter),
            _ => Err(PackageFormatParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid package format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFormatParseError(String);

impl std::fmt::Display for PackageFormatParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid package format '{}', expected one of: box, roll, letter",
            self.0
        )
    }
}

impl std::error::Error for PackageFormatParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(PackageFormat::Box.code(), 1);
        assert_eq!(PackageFormat::Roll.code(), 2);
        assert_eq!(PackageFormat::Letter.code(), 3);
    }

    #[test]
    fn test_default_is_box() {
        assert_eq!(PackageFormat::default(), PackageFormat::Box);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("BOX".parse::<PackageFormat>().unwrap(), PackageFormat::Box);
        assert_eq!("2".parse::<PackageFormat>().unwrap(), PackageFormat::Roll);
        assert_eq!(
            "envelope".parse::<PackageFormat>().unwrap(),
            PackageFormat::Letter
        );
        assert!("crate".parse::<PackageFormat>().is_err());
    }
}
