// ABOUTME: Small string helpers shared by the client and the CLI
// ABOUTME: UTF-8 safe truncation and secret masking for console output

/// Cut `s` to at most `max_bytes` bytes on a char boundary, marking the cut with `...`.
pub fn truncate_str(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }

    // Find a valid UTF-8 boundary at or before max_bytes
    let mut boundary = max_bytes;
    while boundary > 0 && !s.is_char_boundary(boundary) {
        boundary -= 1;
    }

    if boundary == 0 {
        return String::new();
    }

    format!("{}...", &s[..boundary])
}

/// One `*` per character, so the length is visible but the value is not.
pub fn mask_secret(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
