//! Word-anchored keyword matching
//!
//! A keyword matches when it occurs case-insensitively and starts at a word
//! boundary: `benefit` matches "benefits", `hr` does not match "through".

use regex::Regex;
use tracing::error;

/// One compiled keyword
#[derive(Debug, Clone)]
struct Keyword {
    text: String,
    pattern: Regex,
}

/// An ordered set of keywords
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    /// Compile a keyword list, keeping its order
    ///
    /// Blank entries are ignored.
    pub fn new<I>(keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .filter_map(|k| {
                let text = k.as_ref().trim().to_lowercase();
                if text.is_empty() {
                    return None;
                }
                let source = format!(r"(?i)\b{}", regex::escape(&text));
                match Regex::new(&source) {
                    Ok(pattern) => Some(Keyword { text, pattern }),
                    Err(e) => {
                        error!("Skipping keyword '{}': {}", text, e);
                        None
                    }
                }
            })
            .collect();

        Self { keywords }
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Whether any keyword occurs in `text`
    pub fn matches_any(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| k.pattern.is_match(text))
    }

    /// Number of distinct keywords occurring in `text`
    pub fn count_matches(&self, text: &str) -> usize {
        self.keywords.iter().filter(|k| k.pattern.is_match(text)).count()
    }

    /// Index of the first keyword (in list order) occurring in `text`
    pub fn first_match(&self, text: &str) -> Option<usize> {
        self.keywords.iter().position(|k| k.pattern.is_match(text))
    }

    /// Keywords occurring in `text`
    pub fn matched<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.keywords
            .iter()
            .filter(|k| k.pattern.is_match(text))
            .map(|k| k.text.as_str())
            .collect()
    }
}
