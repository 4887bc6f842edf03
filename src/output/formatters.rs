//! Formatting utilities for terminal output

/// Join a chain as `BAT → BAD → CAD`
#[must_use]
pub fn chain_arrow(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Comma list, or a dash when empty
#[must_use]
pub fn word_list(words: &[String]) -> String {
    if words.is_empty() {
        "—".to_string()
    } else {
        words.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_arrow_joins_uppercase() {
        let words = vec!["bat".to_string(), "cat".to_string()];
        assert_eq!(chain_arrow(&words), "BAT → CAT");
        assert_eq!(chain_arrow(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn word_list_placeholder() {
        assert_eq!(word_list(&[]), "—");
        assert_eq!(word_list(&["bad".to_string(), "cad".to_string()]), "bad, cad");
    }
}
