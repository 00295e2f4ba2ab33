//! Confidence computation
//!
//! Turns citation scores and the classifier's routing confidence into a
//! combined score and a [`ConfidenceLevel`].

use crate::GateConfig;
use helpdesk_domain::{Citation, ConfidenceLevel};
use serde::Serialize;

/// Derived confidence figures for one answer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceAssessment {
    /// Aggregate of citation scores
    pub kb_confidence: f64,
    /// Classifier confidence, clamped to [0.0, 1.0]
    pub query_confidence: f64,
    /// Average of the two, always in [0.0, 1.0]
    pub combined_confidence: f64,
    /// Tier of the combined score
    pub confidence_level: ConfidenceLevel,
}

/// Clamp a caller-supplied confidence into [0.0, 1.0]
///
/// Non-finite values count as no confidence at all.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Knowledge-base confidence from an ordered citation list
///
/// Mean of the citation scores (missing scores count as 0.5). With at least
/// `agreement_min_citations` sources the agreement bonus is added. The result
/// never exceeds 1.0; an empty list yields 0.0.
pub fn kb_confidence(citations: &[Citation], config: &GateConfig) -> f64 {
    if citations.is_empty() {
        return 0.0;
    }

    let total: f64 = citations.iter().map(|c| clamp_unit(c.score())).sum();
    let mut mean = total / citations.len() as f64;

    if citations.len() >= config.agreement_min_citations {
        mean += config.agreement_bonus;
    }

    mean.min(1.0)
}

/// Map a combined score to its tier (all bounds inclusive)
pub fn level_for(combined: f64, config: &GateConfig) -> ConfidenceLevel {
    if combined >= config.high_threshold {
        ConfidenceLevel::High
    } else if combined >= config.medium_threshold {
        ConfidenceLevel::Medium
    } else if combined >= config.low_threshold {
        ConfidenceLevel::Low
    } else {
        ConfidenceLevel::Insufficient
    }
}

/// Combine knowledge-base and query confidence into an assessment
pub fn assess(kb_confidence: f64, query_confidence: f64, config: &GateConfig) -> ConfidenceAssessment {
    let kb_confidence = clamp_unit(kb_confidence);
    let query_confidence = clamp_unit(query_confidence);
    let combined_confidence = (kb_confidence + query_confidence) / 2.0;

    ConfidenceAssessment {
        kb_confidence,
        query_confidence,
        combined_confidence,
        confidence_level: level_for(combined_confidence, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(scores: &[f64]) -> Vec<Citation> {
        scores.iter().map(|s| Citation::scored(*s)).collect()
    }

    #[test]
    fn test_empty_citations() {
        assert_eq!(kb_confidence(&[], &GateConfig::default()), 0.0);
    }

    #[test]
    fn test_mean_without_bonus() {
        let kb = kb_confidence(&scored(&[0.6, 0.8]), &GateConfig::default());
        assert!((kb - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_agreement_bonus() {
        let kb = kb_confidence(&scored(&[0.6, 0.6, 0.6]), &GateConfig::default());
        assert!((kb - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_is_capped() {
        let kb = kb_confidence(&scored(&[0.95, 0.97, 0.99]), &GateConfig::default());
        assert_eq!(kb, 1.0);
    }

    #[test]
    fn test_missing_score_counts_as_half() {
        let citations = vec![Citation::new("excerpt", "s3://kb/doc", None)];
        assert_eq!(kb_confidence(&citations, &GateConfig::default()), 0.5);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let kb = kb_confidence(&scored(&[3.0, -1.0]), &GateConfig::default());
        assert!((kb - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_levels() {
        let config = GateConfig::default();
        assert_eq!(level_for(0.95, &config), ConfidenceLevel::High);
        assert_eq!(level_for(0.8, &config), ConfidenceLevel::High);
        assert_eq!(level_for(0.7, &config), ConfidenceLevel::Medium);
        assert_eq!(level_for(0.6, &config), ConfidenceLevel::Medium);
        assert_eq!(level_for(0.5, &config), ConfidenceLevel::Low);
        assert_eq!(level_for(0.4, &config), ConfidenceLevel::Low);
        assert_eq!(level_for(0.39, &config), ConfidenceLevel::Insufficient);
        assert_eq!(level_for(0.0, &config), ConfidenceLevel::Insufficient);
    }

    #[test]
    fn test_assess_clamps_query_confidence() {
        let config = GateConfig::default();
        let high = assess(1.0, 7.5, &config);
        assert_eq!(high.query_confidence, 1.0);
        assert_eq!(high.combined_confidence, 1.0);

        let nan = assess(0.5, f64::NAN, &config);
        assert_eq!(nan.query_confidence, 0.0);
        assert_eq!(nan.combined_confidence, 0.25);
        assert_eq!(nan.confidence_level, ConfidenceLevel::Insufficient);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: kb confidence never leaves [0, 1]
        #[test]
        fn test_kb_confidence_range(scores in prop::collection::vec(-2.0f64..3.0, 0..12)) {
            let citations: Vec<_> = scores.iter().map(|s| Citation::scored(*s)).collect();
            let kb = kb_confidence(&citations, &GateConfig::default());
            prop_assert!((0.0..=1.0).contains(&kb), "kb {} out of range", kb);
        }

        /// Property: adding strong agreeing citations never lowers kb confidence
        #[test]
        fn test_high_scores_are_monotonic(
            base in prop::collection::vec(0.9f64..=1.0, 3..8),
            extra in prop::collection::vec(0.9f64..=1.0, 1..4),
        ) {
            let config = GateConfig::default();
            let before: Vec<_> = base.iter().map(|s| Citation::scored(*s)).collect();
            let after: Vec<_> = base.iter().chain(extra.iter()).map(|s| Citation::scored(*s)).collect();

            let kb_before = kb_confidence(&before, &config);
            let kb_after = kb_confidence(&after, &config);

            prop_assert!(kb_after + 1e-9 >= kb_before);
            prop_assert!(kb_after <= 1.0);
        }

        /// Property: combined confidence stays in [0, 1] for any inputs
        #[test]
        fn test_combined_range(kb in -5.0f64..5.0, query in -5.0f64..5.0) {
            let assessment = assess(kb, query, &GateConfig::default());
            prop_assert!((0.0..=1.0).contains(&assessment.combined_confidence));
        }
    }
}
