//! Confidence disclaimers appended to shown answers

use helpdesk_domain::ConfidenceLevel;

/// Note appended to medium-confidence answers
pub const MEDIUM_DISCLAIMER: &str =
    "_Note: This information may not be complete. Please verify with the relevant department._";

/// Warning appended to low-confidence answers
pub const LOW_DISCLAIMER: &str = "_⚠️ Low confidence: Please verify this information with the \
                                  relevant department before taking action._";

/// Disclaimer text for a level, if any
pub fn disclaimer_for(level: ConfidenceLevel) -> Option<&'static str> {
    match level {
        ConfidenceLevel::Medium => Some(MEDIUM_DISCLAIMER),
        ConfidenceLevel::Low => Some(LOW_DISCLAIMER),
        ConfidenceLevel::High | ConfidenceLevel::Insufficient => None,
    }
}

/// Append the level's disclaimer after a blank line
pub fn add_disclaimer(response: &str, level: ConfidenceLevel) -> String {
    match disclaimer_for(level) {
        Some(note) => format!("{}\n\n{}", response, note),
        None => response.to_string(),
    }
}

/// Whether `text` ends with one of the disclaimers
pub fn has_disclaimer(text: &str) -> bool {
    text.ends_with(MEDIUM_DISCLAIMER) || text.ends_with(LOW_DISCLAIMER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_note() {
        let text = add_disclaimer("Annual leave is 14 days.", ConfidenceLevel::Medium);
        assert!(text.starts_with("Annual leave is 14 days.\n\n"));
        assert!(text.contains("Note:"));
        assert!(has_disclaimer(&text));
    }

    #[test]
    fn test_low_warning() {
        let text = add_disclaimer("Annual leave is 14 days.", ConfidenceLevel::Low);
        assert!(text.contains("Low confidence:"));
        assert!(text.contains("before taking action"));
        assert!(has_disclaimer(&text));
    }

    #[test]
    fn test_high_unchanged() {
        let text = add_disclaimer("Annual leave is 14 days.", ConfidenceLevel::High);
        assert_eq!(text, "Annual leave is 14 days.");
        assert!(!has_disclaimer(&text));
    }
}
