/// Returns the part of `value` before the first whitespace, e.g. the DOI in
/// `10.1002/psp4.13000 [doi]`.
///
/// # Arguments
///
/// * `value` - The field value to shorten
pub fn leading_token(value: &str) -> Option<&str> {
    value
        .trim()
        .split(char::is_whitespace)
        .next()
        .filter(|token| !token.is_empty())
}

/// Returns at most `max_chars` characters of `text`, for log lines.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
