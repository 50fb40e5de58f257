//! Utility helpers shared across the WASM frontend.

/// Return the current timestamp in **milliseconds** since UNIX epoch.
///
/// We use JS Date here because it is available in browser/WASM without
/// pulling in a datetime crate.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Format the age of a unix timestamp (seconds) relative to `now_ms`,
/// HackerNews style: "just now", "5 m ago", "3 h ago", "2 d ago".
///
/// Takes the reference time as a parameter so it stays testable off the
/// wasm target.
pub fn format_relative_time(then_secs: u64, now_ms: u64) -> String {
    let now_secs = now_ms / 1000;
    let elapsed = now_secs.saturating_sub(then_secs);

    if elapsed < 60 {
        "just now".to_string()
    } else if elapsed < 3_600 {
        format!("{} m ago", elapsed / 60)
    } else if elapsed < 86_400 {
        format!("{} h ago", elapsed / 3_600)
    } else {
        format!("{} d ago", elapsed / 86_400)
    }
}

/// First line of a doc comment, truncated to `max_chars` with an
/// ellipsis. Keeps the rustdoc item list to one line per item.
pub fn first_doc_line(docs: &str, max_chars: usize) -> String {
    let line = docs.lines().next().unwrap_or_default().trim();
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let truncated: String = line.chars().take(max_chars).collect();
    format!("{}…", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_time_buckets() {
        let now_ms = 1_700_000_000_000; // now_secs = 1_700_000_000
        assert_eq!(format_relative_time(1_700_000_000, now_ms), "just now");
        assert_eq!(format_relative_time(1_699_999_700, now_ms), "5 m ago");
        assert_eq!(format_relative_time(1_699_989_200, now_ms), "3 h ago");
        assert_eq!(format_relative_time(1_699_827_200, now_ms), "2 d ago");
    }

    #[test]
    fn relative_time_clock_skew_is_clamped() {
        // Item timestamps slightly in the future must not underflow.
        assert_eq!(format_relative_time(2_000_000_000, 1_700_000_000_000), "just now");
    }

    #[test]
    fn doc_line_is_single_line_and_bounded() {
        assert_eq!(first_doc_line("Short summary.\n\nLong body.", 40), "Short summary.");
        assert_eq!(first_doc_line("", 40), "");

        let long = "word ".repeat(30);
        let snippet = first_doc_line(&long, 20);
        assert!(snippet.ends_with('…'));
        assert!(snippet.chars().count() <= 21);
    }
}
