//! Diagnostic payload encoder for the browser test harness.
//!
//! The harness reports command results and thrown errors back to the
//! coordinating server as JSON text. [`encode`] renders a [`Value`] tree
//! into that text: sequences become arrays, [`ErrorLike`] values become
//! objects carrying a fixed, ordered set of diagnostic fields, and every
//! other leaf is handed to a [`BaselineEncoder`].
//!
//! # Example
//!
//! ```
//! use harness_json::{encode, ErrorLike, Value};
//!
//! let err = ErrorLike::new("boom").with_name("TypeError");
//! let payload = Value::Sequence(vec![err.into(), 1.into(), "x".into()]);
//! assert_eq!(
//!     encode(&payload).unwrap(),
//!     r#"[{"message":"boom","name":"TypeError"},1,"x"]"#
//! );
//! ```

mod baseline;
mod encoder;
mod error;
mod params;
mod value;

pub use baseline::{BaselineEncoder, Leaf, SerdeJsonBaseline};
pub use encoder::{encode, EncodeOptions, Encoder};
pub use error::EncodeError;
pub use params::{form_urlencode, serialize_params};
pub use value::{ErrorLike, Value, DIAGNOSTIC_FIELDS};
