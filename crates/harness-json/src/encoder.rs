//! Recursive value-to-text encoder.

use serde::Deserialize;

use crate::baseline::{BaselineEncoder, Leaf, SerdeJsonBaseline};
use crate::value::{ErrorLike, Value};
use crate::EncodeError;

/// Encoder settings.
///
/// The default is unguarded: nesting is limited only by the call stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncodeOptions {
    /// Maximum number of nested sequence/error levels. `None` disables the check.
    pub max_depth: Option<usize>,
}

/// Encodes `value` with the `serde_json` baseline and default options.
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    Encoder::new().encode(value)
}

/// Renders [`Value`] trees into JSON text.
///
/// Sequences and error values are written by the encoder itself; every
/// other leaf goes through the baseline `B`.
#[derive(Debug, Clone, Default)]
pub struct Encoder<B = SerdeJsonBaseline> {
    baseline: B,
    options: EncodeOptions,
}

impl Encoder<SerdeJsonBaseline> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncodeOptions) -> Self {
        Self {
            baseline: SerdeJsonBaseline,
            options,
        }
    }
}

impl<B: BaselineEncoder> Encoder<B> {
    pub fn with_baseline(baseline: B, options: EncodeOptions) -> Self {
        Self { baseline, options }
    }

    /// Encodes `value` into a fresh string.
    pub fn encode(&self, value: &Value) -> Result<String, EncodeError> {
        let mut out = String::new();
        self.write_any(value, 0, &mut out)?;
        Ok(out)
    }

    /// Appends the encoding of `value` to `out`.
    ///
    /// On error `out` is restored to its previous contents.
    pub fn encode_into(&self, value: &Value, out: &mut String) -> Result<(), EncodeError> {
        let start = out.len();
        let res = self.write_any(value, 0, out);
        if res.is_err() {
            out.truncate(start);
        }
        res
    }

    fn write_any(&self, value: &Value, depth: usize, out: &mut String) -> Result<(), EncodeError> {
        match value {
            Value::Sequence(items) => self.write_sequence(items, depth + 1, out),
            Value::Error(err) => self.write_error(err, depth + 1, out),
            Value::Undefined => self.write_leaf(&Leaf::Undefined, out),
            Value::Null => self.write_leaf(&Leaf::Null, out),
            Value::Bool(b) => self.write_leaf(&Leaf::Bool(*b), out),
            Value::Number(n) => self.write_leaf(&Leaf::Number(*n), out),
            Value::Str(s) => self.write_leaf(&Leaf::Str(s), out),
            Value::Object(obj) => self.write_leaf(&Leaf::Object(obj), out),
        }
    }

    fn write_sequence(&self, items: &[Value], depth: usize, out: &mut String) -> Result<(), EncodeError> {
        self.check_depth(depth)?;
        out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.write_any(item, depth, out)?;
        }
        out.push(']');
        Ok(())
    }

    fn write_error(&self, err: &ErrorLike, depth: usize, out: &mut String) -> Result<(), EncodeError> {
        self.check_depth(depth)?;
        out.push('{');
        out.push_str("\"message\":");
        self.write_any(&err.message, depth, out)?;
        for (key, field) in err.diagnostic_fields() {
            out.push_str(",\"");
            out.push_str(key);
            out.push_str("\":");
            self.write_any(field, depth, out)?;
        }
        out.push('}');
        Ok(())
    }

    fn write_leaf(&self, leaf: &Leaf<'_>, out: &mut String) -> Result<(), EncodeError> {
        out.push_str(&self.baseline.encode_leaf(leaf)?);
        Ok(())
    }

    fn check_depth(&self, depth: usize) -> Result<(), EncodeError> {
        match self.options.max_depth {
            Some(max_depth) if depth > max_depth => {
                tracing::debug!(depth, max_depth, "refusing to encode nested value");
                Err(EncodeError::DepthExceeded { max_depth })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(levels: usize) -> Value {
        let mut value = Value::Number(0.0);
        for _ in 0..levels {
            value = Value::Sequence(vec![value]);
        }
        value
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(encode(&Value::Sequence(vec![])).unwrap(), "[]");
    }

    #[test]
    fn message_only_error() {
        let err: Value = ErrorLike::new("boom").into();
        assert_eq!(encode(&err).unwrap(), r#"{"message":"boom"}"#);
    }

    #[test]
    fn empty_message_is_still_emitted() {
        let err: Value = ErrorLike::new("").into();
        assert_eq!(encode(&err).unwrap(), r#"{"message":""}"#);
        let err: Value = ErrorLike::new(Value::Undefined).into();
        assert_eq!(encode(&err).unwrap(), r#"{"message":null}"#);
    }

    #[test]
    fn depth_guard_allows_exact_depth() {
        let encoder = Encoder::with_options(EncodeOptions { max_depth: Some(3) });
        assert_eq!(encoder.encode(&nested(3)).unwrap(), "[[[0]]]");
    }

    #[test]
    fn depth_guard_rejects_deeper_values() {
        let encoder = Encoder::with_options(EncodeOptions { max_depth: Some(2) });
        let err = encoder.encode(&nested(3)).unwrap_err();
        assert!(matches!(err, EncodeError::DepthExceeded { max_depth: 2 }));
    }

    #[test]
    fn depth_guard_counts_error_levels() {
        let encoder = Encoder::with_options(EncodeOptions { max_depth: Some(1) });
        let inner: Value = ErrorLike::new("inner").into();
        let outer: Value = ErrorLike::new("outer").with_stack(inner).into();
        assert!(encoder.encode(&outer).is_err());
        assert!(encoder.encode(&ErrorLike::new("flat").into()).is_ok());
    }

    #[test]
    fn zero_depth_still_encodes_leaves() {
        let encoder = Encoder::with_options(EncodeOptions { max_depth: Some(0) });
        assert_eq!(encoder.encode(&Value::Str("x".into())).unwrap(), r#""x""#);
        assert!(encoder.encode(&Value::Sequence(vec![])).is_err());
    }

    #[test]
    fn encode_into_appends_and_restores_on_error() {
        let mut out = String::from("payload=");
        Encoder::new()
            .encode_into(&Value::Bool(true), &mut out)
            .unwrap();
        assert_eq!(out, "payload=true");

        let encoder = Encoder::with_options(EncodeOptions { max_depth: Some(1) });
        assert!(encoder.encode_into(&nested(2), &mut out).is_err());
        assert_eq!(out, "payload=true");
    }
}
