use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fallback when sanitization leaves nothing usable.
const FALLBACK_NAME: &str = "document";

/// Reduces a client-supplied filename to a safe single path segment.
///
/// The name is NFKD-decomposed and combining marks dropped, so accented
/// letters fall back to their ASCII base. Path separators become spaces.
/// Only ASCII letters, digits, `_`, `.`, `-` and whitespace survive.
/// Whitespace runs collapse into `_`, and leading or trailing `.`/`_` are
/// stripped.
pub fn sanitize_filename(raw: &str) -> String {
    let kept: String = raw
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter_map(|ch| match ch {
            '/' | '\\' => Some(' '),
            c if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') => Some(c),
            c if c.is_whitespace() => Some(' '),
            _ => None,
        })
        .collect();

    let joined = kept.split_whitespace().collect::<Vec<_>>().join("_");
    let trimmed = joined.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Splits `name` into stem and extension (extension keeps its dot).
/// A leading dot does not start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Returns `name`, or `stem_{n}.ext` for the smallest `n >= 1` for which
/// `is_taken` is false.
pub fn dedup_filename(name: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(name) {
        return name.to_string();
    }
    let (stem, ext) = split_extension(name);
    let mut counter = 1;
    loop {
        let candidate = format!("{stem}_{counter}{ext}");
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
