//! Reset command: reloads the page to clear script state.
//!
//! The harness resets a captured browser by navigating it to a fresh
//! `/refresh/<now>/load_type/<type>` url under the current page.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How the reloaded page loads the test files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadType {
    Load,
    Preload,
    /// Unrecognised value, passed through verbatim.
    Other(String),
}

impl LoadType {
    pub fn parse(s: &str) -> Self {
        match s {
            "load" => LoadType::Load,
            "preload" => LoadType::Preload,
            other => LoadType::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LoadType::Load => "load",
            LoadType::Preload => "preload",
            LoadType::Other(s) => s,
        }
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The page location the command navigates.
pub trait Location {
    /// Scheme including the trailing colon, e.g. `http:`.
    fn protocol(&self) -> &str;
    fn host(&self) -> &str;
    fn pathname(&self) -> &str;
    /// Navigates to `url`, replacing the current history entry.
    fn replace(&mut self, url: &str);
}

/// In-memory [`Location`] that records every replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingLocation {
    pub protocol: String,
    pub host: String,
    pub pathname: String,
    pub replaced: Vec<String>,
}

impl RecordingLocation {
    pub fn new(protocol: &str, host: &str, pathname: &str) -> Self {
        Self {
            protocol: protocol.to_owned(),
            host: host.to_owned(),
            pathname: pathname.to_owned(),
            replaced: Vec::new(),
        }
    }
}

impl Location for RecordingLocation {
    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn replace(&mut self, url: &str) {
        self.replaced.push(url.to_owned());
    }
}

pub struct ResetCommand<L, C> {
    location: L,
    signal: Arc<AtomicBool>,
    now: C,
}

impl<L, C> ResetCommand<L, C>
where
    L: Location,
    C: Fn() -> u64,
{
    /// `signal` is raised before navigating; `now` returns epoch milliseconds.
    pub fn new(location: L, signal: Arc<AtomicBool>, now: C) -> Self {
        Self {
            location,
            signal,
            now,
        }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Resets the page. `args` is `[load_type, test_case_id]`, both optional.
    ///
    /// Without a test case id the page always does a full `load`.
    /// Returns the url navigated to.
    pub fn reset(&mut self, args: &[&str]) -> String {
        self.signal.store(true, Ordering::SeqCst);

        let test_case_id = args.get(1).copied().filter(|id| !id.is_empty());
        let load_type = match (test_case_id, args.first().copied()) {
            (None, _) => LoadType::Load,
            (Some(_), Some(requested)) if !requested.is_empty() => LoadType::parse(requested),
            (Some(_), _) => LoadType::Preload,
        };

        let mut url = format!(
            "{}//{}{}/refresh/{}/load_type/{}",
            self.location.protocol(),
            self.location.host(),
            self.location.pathname(),
            (self.now)(),
            load_type
        );
        if let Some(id) = test_case_id {
            url.push_str("/testcase_id/");
            url.push_str(id);
        }

        tracing::info!(%url, "replacing page location");
        self.location.replace(&url);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> ResetCommand<RecordingLocation, impl Fn() -> u64> {
        let location = RecordingLocation::new("http:", "localhost:9876", "/slave/id/1/page/RUNNER");
        ResetCommand::new(location, Arc::new(AtomicBool::new(false)), || 1234)
    }

    #[test]
    fn load_type_round_trip() {
        assert_eq!(LoadType::parse("load"), LoadType::Load);
        assert_eq!(LoadType::parse("preload"), LoadType::Preload);
        assert_eq!(LoadType::parse("lazy").as_str(), "lazy");
    }

    #[test]
    fn no_args_forces_load() {
        let mut cmd = command();
        assert_eq!(
            cmd.reset(&[]),
            "http://localhost:9876/slave/id/1/page/RUNNER/refresh/1234/load_type/load"
        );
    }

    #[test]
    fn test_case_id_defaults_to_preload() {
        let mut cmd = command();
        assert_eq!(
            cmd.reset(&["", "case-7"]),
            "http://localhost:9876/slave/id/1/page/RUNNER/refresh/1234/load_type/preload/testcase_id/case-7"
        );
    }

    #[test]
    fn explicit_preload_without_id_becomes_load() {
        let mut cmd = command();
        assert!(cmd.reset(&["preload"]).ends_with("/load_type/load"));
        assert!(cmd.reset(&["preload", ""]).ends_with("/load_type/load"));
    }

    #[test]
    fn explicit_load_type_with_id() {
        let mut cmd = command();
        assert!(cmd
            .reset(&["load", "9"])
            .ends_with("/refresh/1234/load_type/load/testcase_id/9"));
    }
}
