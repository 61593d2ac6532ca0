//! Numeric input parsing shared by the JSON and HTML surfaces.
//!
//! The storage unit accepts any number and clamps it. Rejecting text that
//! is not a number happens here, before the service is called.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::GatewayError;

/// A numeric request field, accepted either as a JSON number or as a
/// string such as `"12.5"`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NumberInput {
    /// Plain JSON number.
    Number(f64),
    /// String-encoded number.
    Text(String),
}

impl NumberInput {
    /// Resolves the field to a finite `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidNumber`] if the text does not parse
    /// or the value is not finite.
    pub fn resolve(&self, field: &'static str) -> Result<f64, GatewayError> {
        match self {
            Self::Number(value) if value.is_finite() => Ok(*value),
            Self::Number(value) => Err(GatewayError::InvalidNumber {
                field,
                value: value.to_string(),
            }),
            Self::Text(raw) => parse_number(field, raw),
        }
    }
}

/// Parses `raw` as a finite `f64`, ignoring surrounding whitespace.
///
/// `"inf"`, `"NaN"` and friends are rejected so that every value reaching
/// the service is an ordinary number.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidNumber`] naming `field` on failure.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, GatewayError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| GatewayError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

/// Like [`parse_number`], but a missing field counts as `0`.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidNumber`] if the field is present but not
/// a finite number.
pub fn parse_number_or_zero(field: &'static str, raw: Option<&str>) -> Result<f64, GatewayError> {
    raw.map_or(Ok(0.0), |raw| parse_number(field, raw))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert!(matches!(parse_number("amount", "20"), Ok(v) if (v - 20.0).abs() < f64::EPSILON));
        assert!(matches!(parse_number("amount", " 2.5 "), Ok(v) if (v - 2.5).abs() < f64::EPSILON));
        assert!(matches!(parse_number("amount", "-1"), Ok(v) if (v + 1.0).abs() < f64::EPSILON));
        assert!(matches!(parse_number("amount", "1e3"), Ok(v) if (v - 1000.0).abs() < f64::EPSILON));
    }

    #[test]
    fn rejects_non_numbers() {
        for raw in ["", "abc", "not a number", "12abc", "inf", "NaN", "-infinity"] {
            let result = parse_number("capacity", raw);
            let Err(GatewayError::InvalidNumber { field, value }) = result else {
                panic!("{raw:?} should be rejected");
            };
            assert_eq!(field, "capacity");
            assert_eq!(value, raw);
        }
    }

    #[test]
    fn missing_field_defaults_to_zero() {
        assert!(matches!(parse_number_or_zero("amount", None), Ok(v) if v == 0.0));
        assert!(parse_number_or_zero("amount", Some("x")).is_err());
    }

    #[test]
    fn number_input_accepts_both_shapes() {
        let Ok(number) = serde_json::from_str::<NumberInput>("12.5") else {
            panic!("number should deserialize");
        };
        assert!(matches!(number.resolve("amount"), Ok(v) if (v - 12.5).abs() < f64::EPSILON));

        let Ok(text) = serde_json::from_str::<NumberInput>("\"7\"") else {
            panic!("string should deserialize");
        };
        assert!(matches!(text.resolve("amount"), Ok(v) if (v - 7.0).abs() < f64::EPSILON));

        let Ok(bad) = serde_json::from_str::<NumberInput>("\"seven\"") else {
            panic!("string should deserialize");
        };
        assert!(bad.resolve("amount").is_err());
    }
}
