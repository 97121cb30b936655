use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z0-9._%+-])[A-Za-z0-9._%+-]*(@[A-Za-z0-9.-]+\.[A-Za-z]+)\b").unwrap());

// PASETO tokens ("v4.local.<base64url>") and any other long opaque run.
#[allow(clippy::unwrap_used)]
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bv\d\.(?:local|public)\.[A-Za-z0-9_\-.]+|\b[A-Za-z0-9_\-+/]{24,}={0,2}").unwrap()
});

/// Mask emails down to their first character and domain, and replace
/// bearer tokens with `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let masked = EMAIL.replace_all(input, "$1***$2");
    TOKEN.replace_all(&masked, "[REDACTED_TOKEN]").into_owned()
}

/// Display wrapper that redacts on formatting, for use in log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
