//! Citation module - retrieved passages that back a generated answer

use serde::{Deserialize, Serialize};

/// Score assumed for a citation whose producer assigned none
pub const DEFAULT_CITATION_SCORE: f64 = 0.5;

/// A reference to a retrieved source chunk
///
/// Citations come from the vector search backend in retrieval-rank order
/// (best first). Every field is optional on the wire; missing text fields
/// deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Text excerpt of the retrieved chunk
    #[serde(default)]
    pub content: String,

    /// Source identifier or URI
    #[serde(default)]
    pub location: String,

    /// Producer-assigned metadata
    #[serde(default)]
    pub metadata: CitationMetadata,
}

/// Retrieval metadata attached to a citation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationMetadata {
    /// Retrieval relevance score in [0.0, 1.0]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Citation {
    /// Create a citation
    pub fn new(content: impl Into<String>, location: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            content: content.into(),
            location: location.into(),
            metadata: CitationMetadata { score },
        }
    }

    /// Create a citation carrying only a relevance score
    ///
    /// # Examples
    ///
    /// ```
    /// use helpdesk_domain::Citation;
    ///
    /// let citation = Citation::scored(0.9);
    /// assert_eq!(citation.score(), 0.9);
    /// ```
    pub fn scored(score: f64) -> Self {
        Self::new("", "", Some(score))
    }

    /// Relevance score, falling back to [`DEFAULT_CITATION_SCORE`]
    pub fn score(&self) -> f64 {
        self.metadata.score.unwrap_or(DEFAULT_CITATION_SCORE)
    }

    /// Excerpt shortened to at most `max_chars` characters
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_score_defaults() {
        let citation = Citation::new("text", "s3://bucket/doc.pdf", None);
        assert_eq!(citation.score(), DEFAULT_CITATION_SCORE);
    }

    #[test]
    fn test_deserialize_partial() {
        let citation: Citation = serde_json::from_str(r#"{"metadata": {"score": 0.85}}"#).unwrap();
        assert_eq!(citation.score(), 0.85);
        assert!(citation.content.is_empty());
        assert!(citation.location.is_empty());

        let bare: Citation = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.metadata.score, None);
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let citation = Citation::new("Annual leave – 14 days", "", None);
        assert_eq!(citation.excerpt(14), "Annual leave –");
        assert_eq!(citation.excerpt(100), "Annual leave – 14 days");
    }
}
