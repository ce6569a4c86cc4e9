use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse urgency tier derived from impact keyword hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Advisory sentence shown to executives for this tier.
    pub const fn executive_insight(self) -> &'static str {
        match self {
            Self::High => {
                "This development may require immediate executive attention due to potential strategic or regulatory implications."
            }
            Self::Medium => {
                "This trend should be monitored as it may influence market or operational decisions."
            }
            Self::Low => {
                "This update is informational and does not require immediate executive action."
            }
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse tone label derived from net keyword polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const fn ordered() -> [Self; 3] {
        [Self::Positive, Self::Neutral, Self::Negative]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single news item as read from a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Article {
    /// Literal scenario entry with a headline and body copy.
    Headline { title: String, content: String },
    /// Dataset row carrying free text and its category label.
    Labeled { text: String, label: String },
}

impl Article {
    pub fn headline(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Headline {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn labeled(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Labeled {
            text: text.into(),
            label: label.into(),
        }
    }

    /// Lowercased, space-joined text fields fed to the classifier.
    pub fn normalized_text(&self) -> String {
        match self {
            Self::Headline { title, content } => {
                normalize_fields(&[title.as_str(), content.as_str()])
            }
            Self::Labeled { text, .. } => normalize_fields(&[text.as_str()]),
        }
    }

    /// Category supplied by the source, if any.
    pub fn topic_hint(&self) -> Option<&str> {
        match self {
            Self::Headline { .. } => None,
            Self::Labeled { label, .. } => Some(label),
        }
    }

    /// First report column: the headline, or a truncated excerpt of dataset text.
    pub fn display_text(&self) -> String {
        match self {
            Self::Headline { title, .. } => title.clone(),
            Self::Labeled { text, .. } => excerpt(text, EXCERPT_CHARS),
        }
    }
}

pub const EXCERPT_CHARS: usize = 120;
pub const EXCERPT_SUFFIX: &str = "...";

/// Joins textual fields with a single space and lowercases the result.
pub fn normalize_fields(fields: &[&str]) -> String {
    fields.join(" ").to_lowercase()
}

/// Keeps the first `limit` characters (not bytes) and appends the ellipsis.
pub fn excerpt(text: &str, limit: usize) -> String {
    let mut excerpt: String = text.chars().take(limit).collect();
    excerpt.push_str(EXCERPT_SUFFIX);
    excerpt
}

/// Classifier output for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub topic: String,
    pub impact_level: ImpactLevel,
    pub impact_score: u32,
    pub sentiment: Sentiment,
    pub sentiment_score: i32,
    pub insight: &'static str,
    pub signals: KeywordHits,
}

/// Keywords that contributed to the scores, in keyword-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordHits {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub impact: Vec<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positive: Vec<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub negative: Vec<&'static str>,
}
