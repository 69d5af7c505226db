use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A cleaned-up scalar pulled out of the profile feed: either a finite
/// number or a textual value that survived normalization unchanged
/// (e.g. a position like "Won").
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", display_number(*n)),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Render a number without a trailing ".0" when it is a whole value,
/// so counts read as "12" rather than "12.0".
pub fn display_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Normalize one raw feed value into a clean scalar.
///
/// Missing and null values come back as `None`. Numbers pass through.
/// Strings are trimmed; empty strings and "n/a" (any case) mean no data;
/// anything else is stripped down to digits, '.' and '-' and parsed, and
/// if no number comes out the original trimmed text is kept. Objects,
/// arrays and booleans carry no usable value.
pub fn normalize_value(raw: Option<&Value>) -> Option<Scalar> {
    match raw {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).map(Scalar::Number),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
                return None;
            }
            let re = Regex::new(r"[^0-9.-]").unwrap();
            let cleaned = re.replace_all(trimmed, "");
            match cleaned.parse::<f64>() {
                Ok(num) if num.is_finite() => Some(Scalar::Number(num)),
                _ => Some(Scalar::Text(trimmed.to_string())),
            }
        }
        Some(_) => None,
    }
}

/// Numeric normalization rounded to a whole number, for ages and counts.
pub fn normalize_round(raw: Option<&Value>) -> Option<i64> {
    match normalize_value(raw)? {
        Scalar::Number(n) => Some(n.round() as i64),
        Scalar::Text(_) => None,
    }
}

/// Stringify a scalar feed value, trimming whitespace; empty means absent.
pub fn text_of(raw: Option<&Value>) -> Option<String> {
    let s = match raw? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_numbers_display_without_decimal() {
        assert_eq!(display_number(12.0), "12");
        assert_eq!(display_number(70.5), "70.5");
    }

    #[test]
    fn booleans_carry_no_value() {
        assert_eq!(normalize_value(Some(&json!(true))), None);
    }
}
