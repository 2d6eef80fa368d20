/// Lower-cases `text`, replaces every character outside `[a-z0-9]` with a
/// space and collapses whitespace runs into single spaces.
///
/// Total over all inputs: an empty string (or one with no alphanumerics)
/// normalizes to an empty string.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            pending_space = true;
        }
    }

    out
}
