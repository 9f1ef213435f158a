//! Input value model for the encoder.

use std::error::Error as StdError;

/// Wire names of the optional diagnostic fields, in emission order.
///
/// `message` is not listed: it is always present and always emitted first.
pub const DIAGNOSTIC_FIELDS: [&str; 6] = [
    "name",
    "description",
    "fileName",
    "lineNumber",
    "number",
    "stack",
];

/// A value the harness can report back to the server.
///
/// Numbers are `f64` because that is the only numeric type a page script
/// can hand over.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    /// Ordered list, encoded as a JSON array element by element.
    Sequence(Vec<Value>),
    /// Thrown error, encoded with its diagnostic fields.
    Error(Box<ErrorLike>),
    /// Opaque plain object, handed to the baseline encoder untouched.
    Object(serde_json::Value),
}

/// Error object with a mandatory message and optional diagnostic fields.
///
/// A field set to `None` is absent on the source object and is left out of
/// the output entirely; it is never written as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLike {
    pub message: Value,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub file_name: Option<Value>,
    pub line_number: Option<Value>,
    pub number: Option<Value>,
    pub stack: Option<Value>,
}

impl ErrorLike {
    pub fn new(message: impl Into<Value>) -> Self {
        Self {
            message: message.into(),
            name: None,
            description: None,
            file_name: None,
            line_number: None,
            number: None,
            stack: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<Value>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<Value>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<Value>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_line_number(mut self, line_number: impl Into<Value>) -> Self {
        self.line_number = Some(line_number.into());
        self
    }

    pub fn with_number(mut self, number: impl Into<Value>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_stack(mut self, stack: impl Into<Value>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Present diagnostic fields as `(wire_name, value)`, in [`DIAGNOSTIC_FIELDS`] order.
    pub fn diagnostic_fields(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        let slots = [
            &self.name,
            &self.description,
            &self.file_name,
            &self.line_number,
            &self.number,
            &self.stack,
        ];
        DIAGNOSTIC_FIELDS
            .into_iter()
            .zip(slots)
            .filter_map(|(key, slot)| slot.as_ref().map(|value| (key, value)))
    }

    /// Adapts a Rust error into an error value.
    ///
    /// The message is the error's `Display` text and the name is its short
    /// type name. When the error has sources, their messages are joined
    /// line by line into `stack`.
    pub fn from_error<E: StdError>(err: &E) -> Self {
        let mut out = ErrorLike::new(err.to_string()).with_name(short_type_name::<E>());
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        if !causes.is_empty() {
            out.stack = Some(Value::Str(causes.join("\n")));
        }
        out
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl From<ErrorLike> for Value {
    fn from(err: ErrorLike) -> Self {
        Value::Error(Box::new(err))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Arrays become sequences all the way down; scalars map to their variant
/// and objects stay opaque.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            obj @ serde_json::Value::Object(_) => Value::Object(obj),
        }
    }
}
