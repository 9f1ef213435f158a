//! Browser harness helpers.
//!
//! Small, pure pieces of the in-page harness that surround payload
//! encoding: reset navigation, URL path helpers, browser identification
//! and HTML fragment cleanup.

pub mod browser;
mod error;
pub mod html;
pub mod paths;
pub mod reset;

pub use browser::{friendly_name, friendly_version, BrowserFamily};
pub use error::UtilError;
pub use html::{prepare_fragment, strip_html_comments, trim};
pub use paths::{create_path, extract_id};
pub use reset::{LoadType, Location, RecordingLocation, ResetCommand};
