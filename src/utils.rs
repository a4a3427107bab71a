// src/utils.rs

/// Truncate to at most `max_chars` characters, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Drop repeated strings, keeping the first occurrence of each.
pub fn dedupe_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

/// Substitute `placeholder` for blank values.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Short, log-safe form of a secret.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "MISSING".to_string();
    }
    format!("{}...", truncate_chars(secret, 7))
}

/// Strip a trailing slash so endpoint paths can be appended.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
