//! Avatar URL repair and resolution helpers

use url::{ParseError, Url};

/// Repairs an avatar URL malformed by a known provider defect.
///
/// A run of three or more slashes is stripped down to the suffix starting at
/// the last slash of the run; a doubled `//avatars/` path segment is
/// collapsed to `/avatars/`. Only the first matching rule applies, and any
/// other input passes through unchanged. The repair is idempotent.
pub fn fix_malformed_avatar(raw: &str) -> String {
    if let Some(index) = raw.find("///") {
        let suffix = raw[index..].trim_start_matches('/');
        return format!("/{}", suffix);
    }
    if raw.contains("//avatars/") {
        return raw.replace("//avatars/", "/avatars/");
    }
    raw.to_string()
}

/// Expands a possibly-relative avatar URL to an absolute one.
///
/// An already-absolute `raw` is returned re-serialized; a relative `raw` is
/// resolved against `base`. This never fails: when either side does not
/// parse, `raw` is passed through unchanged.
pub fn expand_avatar(base: &str, raw: &str) -> String {
    match Url::parse(raw) {
        Ok(absolute) => absolute.to_string(),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(base)
            .and_then(|base| base.join(raw))
            .map(|resolved| resolved.to_string())
            .unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}
