//! Browser identification from the user agent string.
//!
//! Detection follows the classic engine flags: `webkit`, `opera`, `msie`
//! and `mozilla` are tested in that order on the lower-cased agent, and
//! Chrome/Firefox are split out of WebKit/Mozilla by their product token.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ENGINE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".+(?:rv|it|ra|ie)[/: ]([\d.]+)").expect("static regex")
});

static CHROME_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Chrome/(.*)\s").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserFamily {
    Chrome,
    Safari,
    Opera,
    InternetExplorer,
    Firefox,
    Mozilla,
}

impl BrowserFamily {
    pub fn detect(user_agent: &str) -> Option<Self> {
        let ua = user_agent.to_lowercase();
        if ua.contains("webkit") {
            if user_agent.contains("Chrome") {
                Some(BrowserFamily::Chrome)
            } else {
                Some(BrowserFamily::Safari)
            }
        } else if ua.contains("opera") {
            Some(BrowserFamily::Opera)
        } else if ua.contains("msie") {
            Some(BrowserFamily::InternetExplorer)
        } else if ua.contains("mozilla") && !ua.contains("compatible") {
            if user_agent.contains("Firefox") {
                Some(BrowserFamily::Firefox)
            } else {
                Some(BrowserFamily::Mozilla)
            }
        } else {
            None
        }
    }

    pub fn friendly_name(self) -> &'static str {
        match self {
            BrowserFamily::Chrome => "Chrome",
            BrowserFamily::Safari => "Safari",
            BrowserFamily::Opera => "Opera",
            BrowserFamily::InternetExplorer => "Internet Explorer",
            BrowserFamily::Firefox => "Firefox",
            BrowserFamily::Mozilla => "Mozilla",
        }
    }
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

/// Display name of the browser, `None` for agents no flag matches.
pub fn friendly_name(user_agent: &str) -> Option<&'static str> {
    BrowserFamily::detect(user_agent).map(BrowserFamily::friendly_name)
}

/// Version string reported for the browser.
///
/// Chrome reports its `Chrome/` token; everything else reports the engine
/// version. A Chrome agent whose token is not followed by whitespace falls
/// back to the engine version.
pub fn friendly_version(user_agent: &str) -> Option<String> {
    if BrowserFamily::detect(user_agent) == Some(BrowserFamily::Chrome) {
        if let Some(version) = CHROME_VERSION.captures(user_agent).and_then(|c| c.get(1)) {
            return Some(version.as_str().to_owned());
        }
    }
    engine_version(user_agent)
}

fn engine_version(user_agent: &str) -> Option<String> {
    let ua = user_agent.to_lowercase();
    ENGINE_VERSION
        .captures(&ua)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}
