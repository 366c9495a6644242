// src/core/sanitize.rs

/// Collapse whitespace runs (including NBSP from scraped text) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Uppercase the first character, leave the rest alone ("trout" → "Trout").
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

/// Everything before the last space-separated token ("J. Smith CF" → "J. Smith").
/// A single token yields an empty string.
pub fn drop_last_token(s: &str) -> &str {
    match s.rfind(' ') {
        Some(i) => &s[..i],
        None => "",
    }
}

/// The last space-separated token ("J. Smith CF" → "CF").
pub fn last_token(s: &str) -> &str {
    match s.rfind(' ') {
        Some(i) => &s[i + 1..],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_nbsp_and_tabs() {
        assert_eq!(normalize_ws("  J.\u{a0}Smith \t CF "), "J. Smith CF");
    }

    #[test]
    fn tokens_split_on_last_space() {
        assert_eq!(drop_last_token("J. Smith CF"), "J. Smith");
        assert_eq!(last_token("J. Smith CF"), "CF");
        assert_eq!(drop_last_token("CF"), "");
        assert_eq!(last_token("CF"), "CF");
    }

    #[test]
    fn upper_first_keeps_tail() {
        assert_eq!(upper_first("trout"), "Trout");
        assert_eq!(upper_first("mcNeil"), "McNeil");
        assert_eq!(upper_first(""), "");
    }
}
