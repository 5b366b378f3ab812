//! XML response parsing.

use correios_types::{QuoteResult, ServiceCode, ServiceCodeError};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Root element of a calculator response.
const ROOT_ELEMENT: &str = "cResultado";

/// Errors that can occur while decoding a calculator response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseParseError {
    /// The body is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(String),

    /// The body has no root element at all.
    #[error("Response has no root element")]
    MissingRoot,

    /// The root element is not `cResultado` (e.g. an HTML error page).
    #[error("Unexpected root element <{0}>, expected <cResultado>")]
    UnexpectedRoot(String),

    /// A required element is missing or misplaced.
    #[error("Unexpected response structure: {0}")]
    Structure(String),

    /// A numeric field could not be parsed.
    #[error("Invalid number in {field}: '{value}'")]
    InvalidNumber {
        /// The carrier field name.
        field: &'static str,
        /// The raw text.
        value: String,
    },

    /// The carrier returned a service code outside the catalog.
    #[error(transparent)]
    UnknownService(#[from] ServiceCodeError),
}

#[derive(Debug, Deserialize)]
struct RawResult {
    #[serde(rename = "Servicos")]
    services: RawServices,
}

#[derive(Debug, Deserialize)]
struct RawServices {
    #[serde(rename = "cServico", default)]
    entries: Vec<RawService>,
}

#[derive(Debug, Deserialize)]
struct RawService {
    #[serde(rename = "Codigo")]
    code: String,
    #[serde(rename = "PrazoEntrega")]
    delivery_time: String,
    #[serde(rename = "Valor")]
    price: String,
    #[serde(rename = "ValorMaoPropria")]
    own_hand_price: String,
    #[serde(rename = "ValorAvisoRecebimento")]
    receipt_warning_price: String,
    #[serde(rename = "ValorValorDeclarado")]
    declared_value_price: String,
    #[serde(rename = "ValorSemAdicionais", default)]
    price_without_extras: Option<String>,
    #[serde(rename = "EntregaDomiciliar", default)]
    home_delivery: Option<String>,
    #[serde(rename = "EntregaSabado", default)]
    saturday_delivery: Option<String>,
    #[serde(rename = "Erro")]
    error_code: String,
    #[serde(rename = "MsgErro", default)]
    error_message: Option<String>,
    #[serde(rename = "obsFim", default)]
    note: Option<String>,
}

/// Parses a calculator response body into per-service quotes.
///
/// Quotes are returned in the order the carrier listed them. Services the
/// carrier could not quote are still returned, with a nonzero
/// [`QuoteResult::error_code`].
///
/// # Errors
///
/// Returns an error if the document is not a `cResultado/Servicos` tree, or
/// if any record has a missing or malformed field.
pub fn parse_fare_response(xml: &str) -> Result<Vec<QuoteResult>, ResponseParseError> {
    let root = root_element(xml)?;
    if root != ROOT_ELEMENT {
        return Err(ResponseParseError::UnexpectedRoot(root));
    }

    let raw: RawResult =
        quick_xml::de::from_str(xml).map_err(|e| ResponseParseError::Structure(e.to_string()))?;

    raw.services
        .entries
        .into_iter()
        .map(decode_service)
        .collect()
}

/// Returns the local name of the first element in the document.
fn root_element(xml: &str) -> Result<String, ResponseParseError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(ResponseParseError::MissingRoot),
            Ok(_) => {}
            Err(e) => return Err(ResponseParseError::Xml(e.to_string())),
        }
    }
}

fn decode_service(raw: RawService) -> Result<QuoteResult, ResponseParseError> {
    Ok(QuoteResult {
        service: ServiceCode::from_wire(&raw.code)?,
        delivery_time: parse_integer("PrazoEntrega", &raw.delivery_time)?,
        price: parse_decimal("Valor", &raw.price)?,
        own_hand_price: parse_decimal("ValorMaoPropria", &raw.own_hand_price)?,
        receipt_warning_price: parse_decimal("ValorAvisoRecebimento", &raw.receipt_warning_price)?,
        declared_value_price: parse_decimal("ValorValorDeclarado", &raw.declared_value_price)?,
        price_without_extras: non_empty(raw.price_without_extras)
            .map(|value| parse_decimal("ValorSemAdicionais", &value))
            .transpose()?,
        home_delivery: non_empty(raw.home_delivery).unwrap_or_default(),
        saturday_delivery: non_empty(raw.saturday_delivery).as_deref() == Some("S"),
        error_code: parse_integer("Erro", &raw.error_code)?,
        error_message: non_empty(raw.error_message).unwrap_or_default(),
        note: non_empty(raw.note),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_integer<T: FromStr>(field: &'static str, value: &str) -> Result<T, ResponseParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ResponseParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Parses a carrier decimal (`"1.234,56"`) into an `f64`.
///
/// The carrier formats numbers in the pt-BR locale: comma as the decimal
/// separator and, for large values, dots grouping thousands. Plain
/// period-decimal text is accepted as long as it has a single period.
///
/// # Errors
///
/// Returns an error for empty, non-finite or otherwise malformed values.
///
/// # Example
///
/// ```
/// use correios_fetch::parse_decimal;
///
/// assert_eq!(parse_decimal("Valor", "12,34").unwrap(), 12.34);
/// assert_eq!(parse_decimal("Valor", "1.234,50").unwrap(), 1234.5);
/// assert!(parse_decimal("Valor", "12.34.5").is_err());
/// ```
pub fn parse_decimal(field: &'static str, value: &str) -> Result<f64, ResponseParseError> {
    let invalid = || ResponseParseError::InvalidNumber {
        field,
        value: value.to_string(),
    };

    let trimmed = value.trim();
    let normalized = match trimmed.split_once(',') {
        Some((integer, fraction)) => {
            if !is_grouped_integer(integer) {
                return Err(invalid());
            }
            format!("{}.{fraction}", integer.replace('.', ""))
        }
        None => trimmed.to_string(),
    };

    if !normalized
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b'.' || b == b'-')
    {
        return Err(invalid());
    }

    match normalized.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(invalid()),
    }
}

/// Accepts `1234`, `1.234` and `12.345.678`, with an optional leading minus.
fn is_grouped_integer(integer: &str) -> bool {
    let digits = integer.strip_prefix('-').unwrap_or(integer);
    let mut groups = digits.split('.');
    let Some(first) = groups.next() else {
        return false;
    };
    if first.is_empty() || !first.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.contains('.') && first.len() > 3 {
        return false;
    }
    groups.all(|group| group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit()))
}
