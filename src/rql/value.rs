//! Typed literal values and their wire encoding.

use chrono::{DateTime, NaiveDate, Utc};

use super::RqlError;

/// A literal value accepted by the RQL comparison operators.
///
/// Values are encoded into the expression text at the moment a leaf is
/// built; they never live inside the expression tree itself. `From`
/// implementations cover the common Rust literal types so builder calls can
/// pass `&str`, integers, floats, booleans, dates and `Vec`s directly.
///
/// # Example
///
/// ```rust
/// use marketplace_sdk::rql::RqlValue;
///
/// let scalar: RqlValue = "active".into();
/// let list: RqlValue = vec![1, 2, 3].into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RqlValue {
    /// A string literal, rendered verbatim without quoting.
    Str(String),
    /// A boolean, rendered as `true` or `false`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A calendar date, rendered as ISO-8601 `YYYY-MM-DD`.
    Date(NaiveDate),
    /// A UTC timestamp, rendered as ISO-8601 / RFC 3339.
    DateTime(DateTime<Utc>),
    /// A list of values, valid only for the list operators.
    List(Vec<RqlValue>),
}

impl RqlValue {
    /// The name of this value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::List(_) => "list",
        }
    }

    /// Truthiness used by the presence sentinels to pick `eq` vs `ne`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(value) => !value.is_empty(),
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Date(_) | Self::DateTime(_) => true,
            Self::List(values) => !values.is_empty(),
        }
    }

    /// Encodes a scalar value for a comparison operator.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] if the value is a list.
    pub fn encode_scalar(&self, op: &'static str) -> Result<String, RqlError> {
        match self {
            Self::List(_) => Err(RqlError::UnsupportedType {
                op,
                value_type: self.type_name(),
            }),
            _ => Ok(self.plain()),
        }
    }

    /// Encodes a list value for a membership operator, joining the
    /// elements with commas. No escaping or quoting is applied.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] if the value is not a list.
    pub fn encode_list(&self, op: &'static str) -> Result<String, RqlError> {
        match self {
            Self::List(values) => Ok(values
                .iter()
                .map(Self::plain)
                .collect::<Vec<_>>()
                .join(",")),
            _ => Err(RqlError::UnsupportedType {
                op,
                value_type: self.type_name(),
            }),
        }
    }

    fn plain(&self) -> String {
        match self {
            Self::Str(value) => value.clone(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Date(value) => value.format("%Y-%m-%d").to_string(),
            Self::DateTime(value) => value.to_rfc3339(),
            Self::List(values) => values
                .iter()
                .map(Self::plain)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for RqlValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RqlValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for RqlValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for RqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for RqlValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for RqlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for RqlValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for RqlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for RqlValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<NaiveDate> for RqlValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for RqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<RqlValue>> From<Vec<T>> for RqlValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_strings_render_verbatim_without_quoting() {
        let value = RqlValue::from("2.50 * total");
        assert_eq!(value.encode_scalar("eq").unwrap(), "2.50 * total");
    }

    #[test]
    fn test_booleans_render_lowercase() {
        assert_eq!(RqlValue::from(true).encode_scalar("eq").unwrap(), "true");
        assert_eq!(RqlValue::from(false).encode_scalar("eq").unwrap(), "false");
    }

    #[test]
    fn test_numbers_render_in_decimal() {
        assert_eq!(RqlValue::from(42).encode_scalar("gt").unwrap(), "42");
        assert_eq!(RqlValue::from(-7i64).encode_scalar("lt").unwrap(), "-7");
        assert_eq!(RqlValue::from(2.5).encode_scalar("ge").unwrap(), "2.5");
    }

    #[test]
    fn test_dates_render_iso_8601() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            RqlValue::from(date).encode_scalar("le").unwrap(),
            "2024-03-09"
        );

        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap();
        assert_eq!(
            RqlValue::from(timestamp).encode_scalar("le").unwrap(),
            "2024-03-09T12:30:00+00:00"
        );
    }

    #[test]
    fn test_list_rejected_by_scalar_operators() {
        let value = RqlValue::from(vec!["a", "b"]);
        assert_eq!(
            value.encode_scalar("eq"),
            Err(RqlError::UnsupportedType {
                op: "eq",
                value_type: "list",
            })
        );
    }

    #[test]
    fn test_scalar_rejected_by_list_operators() {
        let value = RqlValue::from("solo");
        assert_eq!(
            value.encode_list("in"),
            Err(RqlError::UnsupportedType {
                op: "in",
                value_type: "string",
            })
        );
    }

    #[test]
    fn test_list_elements_join_with_commas() {
        let value = RqlValue::from(vec![1, 2, 3]);
        assert_eq!(value.encode_list("in").unwrap(), "1,2,3");
    }

    #[test]
    fn test_mixed_literal_conversions() {
        assert_eq!(RqlValue::from(7u32), RqlValue::Int(7));
        assert_eq!(RqlValue::from(1.5f32), RqlValue::Float(1.5));
        assert_eq!(
            RqlValue::from(String::from("owned")),
            RqlValue::Str("owned".to_string())
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(RqlValue::from(true).is_truthy());
        assert!(!RqlValue::from(false).is_truthy());
        assert!(RqlValue::from(1).is_truthy());
        assert!(!RqlValue::from(0).is_truthy());
        assert!(RqlValue::from("x").is_truthy());
        assert!(!RqlValue::from("").is_truthy());
        assert!(!RqlValue::List(Vec::new()).is_truthy());
    }
}
