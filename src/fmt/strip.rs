//! ANSI escape removal for the file sink and for consoles without color.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// CSI sequences (`ESC [ params final`), two-byte `ESC X` forms, and any stray ESC left over.
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~]|[@-_a-z])?").expect("Invalid ANSI regex")
});

/// Removes every ANSI escape sequence from `text`.
///
/// Borrows when there is nothing to strip.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }
    ANSI_REGEX.replace_all(text, "")
}
