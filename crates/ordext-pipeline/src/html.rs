//! HTML body normalization.
//!
//! Mail sources are responsible for handing the engine plain text; when only
//! an HTML part is available, tags are dropped and whitespace collapsed
//! before the text crosses the boundary.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Strip tags and collapse all whitespace runs to single spaces.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
