//! Hallucination risk scoring
//!
//! A heuristic estimate of how likely a response is unsupported by its
//! citations. Not a calibrated probability.

use helpdesk_domain::Citation;

/// Hedging phrases that signal an uncertain answer
pub const HEDGE_PHRASES: [&str; 7] = [
    "i think",
    "maybe",
    "probably",
    "i'm not sure",
    "it might be",
    "could be",
    "possibly",
];

/// Penalty when there are no citations at all
const NO_CITATIONS_PENALTY: f64 = 0.5;

/// Additional penalty for short, uncited responses
const SHORT_UNCITED_PENALTY: f64 = 0.3;

/// Responses with fewer words than this count as short
const SHORT_RESPONSE_WORDS: usize = 10;

/// Penalty per distinct hedge phrase
const HEDGE_PENALTY: f64 = 0.1;

/// Penalty for numeric claims without citations
const UNCITED_NUMBER_PENALTY: f64 = 0.2;

/// Hedge phrases present in `response`, each reported once
pub fn hedges_found(response: &str) -> Vec<&'static str> {
    // Typographic apostrophes are folded so "I’m not sure" still counts.
    let lower = response.to_lowercase().replace('\u{2019}', "'");
    HEDGE_PHRASES
        .iter()
        .copied()
        .filter(|phrase| lower.contains(phrase))
        .collect()
}

/// Hallucination risk in [0.0, 1.0]
pub fn hallucination_score(response: &str, citations: &[Citation]) -> f64 {
    let uncited = citations.is_empty();
    let mut score = 0.0;

    if uncited {
        score += NO_CITATIONS_PENALTY;

        if response.split_whitespace().count() < SHORT_RESPONSE_WORDS {
            score += SHORT_UNCITED_PENALTY;
        }
    }

    score += HEDGE_PENALTY * hedges_found(response).len() as f64;

    if uncited && response.chars().any(|c| c.is_ascii_digit()) {
        score += UNCITED_NUMBER_PENALTY;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cited_plain_answer_scores_zero() {
        let citations = vec![Citation::scored(0.9)];
        let score = hallucination_score("Annual leave is 14 days for new employees.", &citations);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_uncited_long_answer() {
        let response = "The office is open on weekdays from early morning until late in the evening";
        assert!((hallucination_score(response, &[]) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_uncited_short_answer() {
        assert!((hallucination_score("Ask your manager.", &[]) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_uncited_numbers() {
        let response = "The standard allowance for every permanent staff member is 18 days each year";
        assert!((hallucination_score(response, &[]) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_hedges_counted_once_each() {
        let citations = vec![Citation::scored(0.9)];
        let response = "Maybe, maybe, maybe. I think so.";
        assert_eq!(hedges_found(response), vec!["i think", "maybe"]);
        assert!((hallucination_score(response, &citations) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_typographic_apostrophe() {
        assert_eq!(hedges_found("I’m not sure about that"), vec!["i'm not sure"]);
    }

    #[test]
    fn test_hedging_uncited_answer_is_capped() {
        let response = "I think the policy is maybe 15 days but I'm not sure. It could be 20.";
        assert_eq!(hallucination_score(response, &[]), 1.0);
    }
}
