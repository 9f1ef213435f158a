//! URL path helpers for harness endpoints.

use std::sync::LazyLock;

use regex::Regex;

use crate::UtilError;

static ID_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/id/(\d+)/").expect("static regex"));

static RUNNER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)/(slave|runner|bcr)/").expect("static regex"));

/// Extracts the numeric browser id from a `.../id/<n>/...` url.
pub fn extract_id(url: &str) -> Result<u64, UtilError> {
    let digits = ID_SEGMENT
        .captures(url)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| UtilError::MissingId(url.to_owned()))?;
    digits
        .as_str()
        .parse()
        .map_err(|_| UtilError::IdOverflow(url.to_owned()))
}

/// Rebases `path` onto the server prefix of `base_path`.
///
/// The prefix is everything before the last `/slave/`, `/runner/` or
/// `/bcr/` segment of `base_path`.
pub fn create_path(base_path: &str, path: &str) -> Result<String, UtilError> {
    let prefix = RUNNER_PREFIX
        .captures(base_path)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| UtilError::MissingRunnerSegment(base_path.to_owned()))?;
    let mut out = String::with_capacity(prefix.len() + path.len());
    out.push_str(prefix.as_str());
    out.push_str(path);
    Ok(out)
}
