use uuid::Uuid;

/// Prefix of generated ticket IDs
pub const ID_PREFIX: &str = "t";

/// Generate a ticket ID that is not already taken
///
/// IDs look like `t-3f9a1c2e`. `is_taken` is consulted for every candidate so
/// the result is unique within the collection it is checked against.
pub fn generate_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let hex = Uuid::new_v4().simple().to_string();
        let candidate = format!("{}-{}", ID_PREFIX, &hex[..8]);
        if !is_taken(&candidate) {
            return candidate;
        }
        tracing::debug!("generated ID {} collides, retrying", candidate);
    }
}

/// Capitalize the first character of a word, leaving the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate text to at most `max_chars` characters, appending "..." when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
