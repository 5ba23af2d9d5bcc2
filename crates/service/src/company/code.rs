//! Company code derivation.
//!
//! A code is a lowercase, URL-safe token derived from the company name alone.
//! The same name always yields the same code, so a second company with an
//! equivalent name collides on the primary key instead of getting a new code.

/// Longest code we produce; fits the `companies.code` column.
pub const MAX_CODE_LEN: usize = 48;

/// Derive a code from a company name.
///
/// ASCII letters and digits are lowercased and kept, any other run of
/// characters becomes one `-`. Names with no ASCII alphanumerics fall back to
/// `c` + the hex of their UTF-8 bytes. Never empty, never contains whitespace.
///
/// ```
/// use service::company::code::derive_code;
/// assert_eq!(derive_code("Apple"), "apple");
/// assert_eq!(derive_code("  Acme, Inc. "), "acme-inc");
/// ```
pub fn derive_code(name: &str) -> String {
    let trimmed = name.trim();
    let slug = slugify(trimmed);
    if !slug.is_empty() {
        return slug;
    }
    let bytes = trimmed.as_bytes();
    let take = bytes.len().min((MAX_CODE_LEN - 1) / 2);
    format!("c{}", hex::encode(&bytes[..take]))
}

fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_CODE_LEN));
    let mut pending_dash = false;
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
        if out.len() >= MAX_CODE_LEN {
            break;
        }
    }
    out.truncate(MAX_CODE_LEN);
    while out.ends_with('-') {
        out.pop();
    }
    out
}
