//! HTML fragment cleanup before insertion into the page.

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Strips leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    s.trim()
}

/// Removes every `<!-- ... -->` comment block.
///
/// A comment with no closing `-->` swallows the rest of the input.
pub fn strip_html_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find(COMMENT_OPEN) {
        out.push_str(&rest[..start]);
        let body = &rest[start + COMMENT_OPEN.len()..];
        match body.find(COMMENT_CLOSE) {
            Some(stop) => rest = &body[stop + COMMENT_CLOSE.len()..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Markup ready to be assigned to a wrapper element: comments removed,
/// then trimmed.
pub fn prepare_fragment(html: &str) -> String {
    trim(&strip_html_comments(html)).to_owned()
}
