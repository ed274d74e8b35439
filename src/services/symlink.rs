//! Detection of symlink pointer files.
//!
//! Hosting providers serve a symlink committed to a repository as a blob
//! whose content is the link target, e.g. `docs/README.md`.

use once_cell::sync::Lazy;
use regex::Regex;

static SYMLINK_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w./-]*$").expect("symlink pattern is valid"));

/// Whether `content` looks like a symlink target rather than file content.
///
/// Only a single line without spaces made of word characters, dots,
/// slashes and hyphens qualifies. Empty content qualifies too.
pub fn is_symlink(content: &str) -> bool {
    let mut lines = content.split('\n');
    let line = lines.next().unwrap_or_default();
    if lines.next().is_some() || line.contains(' ') {
        return false;
    }
    SYMLINK_TARGET.is_match(line)
}
