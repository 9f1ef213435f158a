//! Baseline JSON primitive for scalars and opaque objects.

use crate::EncodeError;

/// Integral numbers below this magnitude print as plain digits.
const PLAIN_DIGITS_LIMIT: f64 = 1e21;

/// A leaf handed to the baseline encoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leaf<'a> {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(&'a str),
    Object(&'a serde_json::Value),
}

/// Turns one leaf into JSON text.
///
/// The encoder emits the returned text verbatim and never inspects it.
pub trait BaselineEncoder {
    fn encode_leaf(&self, leaf: &Leaf<'_>) -> Result<String, EncodeError>;
}

/// Default baseline backed by `serde_json`.
///
/// `Undefined`, `Null` and non-finite numbers all encode as `null`.
/// Integral numbers below 1e21 in magnitude print as plain digits with no
/// fractional part or exponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonBaseline;

impl BaselineEncoder for SerdeJsonBaseline {
    fn encode_leaf(&self, leaf: &Leaf<'_>) -> Result<String, EncodeError> {
        let text = match *leaf {
            Leaf::Undefined | Leaf::Null => "null".to_owned(),
            Leaf::Bool(b) => b.to_string(),
            Leaf::Number(n) => number_to_json(n)?,
            Leaf::Str(s) => serde_json::to_string(s)?,
            Leaf::Object(obj) => serde_json::to_string(obj)?,
        };
        Ok(text)
    }
}

fn number_to_json(n: f64) -> Result<String, EncodeError> {
    if !n.is_finite() {
        return Ok("null".to_owned());
    }
    if n == 0.0 {
        return Ok("0".to_owned());
    }
    if n.fract() == 0.0 && n.abs() < PLAIN_DIGITS_LIMIT {
        return Ok(format!("{n}"));
    }
    Ok(serde_json::to_string(&n)?)
}
