/// Cuts `s` to at most `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", s[..idx].trim_end()),
        None => s.to_string(),
    }
}

/// Collapses runs of whitespace (newlines included) to single spaces so a
/// remote error body fits on one terminal line.
#[must_use]
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Short, one-line excerpt of an HTTP response body for error messages.
#[must_use]
pub fn body_excerpt(body: &str, max_chars: usize) -> String {
    truncate_with_ellipsis(&single_line(body), max_chars)
}

/// `"1 campaign"` / `"3 campaigns"`.
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
