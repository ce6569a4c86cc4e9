mod policy;
mod profile;
mod rules;

pub use policy::{
    ARTIFICIAL_INTELLIGENCE, GENERAL_TECHNOLOGY, HIGH_IMPACT_THRESHOLD, MEDIUM_IMPACT_THRESHOLD,
    POLICY_AND_REGULATION, STARTUPS,
};
pub use profile::{KeywordSet, RuleProfile, TopicStrategy};

use super::domain::{Article, Classification};
use policy::{derive_topic, impact_level_for, sentiment_for};

/// Stateless keyword classifier bound to one rule profile.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    profile: &'static RuleProfile,
}

impl Classifier {
    pub const fn new(profile: &'static RuleProfile) -> Self {
        Self { profile }
    }

    pub const fn profile(&self) -> &'static RuleProfile {
        self.profile
    }

    /// Classifies already-normalized (lowercased) text.
    ///
    /// `topic_hint` is only consulted by pass-through profiles; derived
    /// profiles ignore it.
    pub fn classify(&self, text: &str, topic_hint: Option<&str>) -> Classification {
        let signals = rules::score_text(text, self.profile);
        let impact_level = impact_level_for(signals.impact_score);

        let topic = match self.profile.topic {
            TopicStrategy::Derived => derive_topic(text).to_string(),
            TopicStrategy::PassThrough => topic_hint.unwrap_or(GENERAL_TECHNOLOGY).to_string(),
        };

        Classification {
            topic,
            impact_level,
            impact_score: signals.impact_score,
            sentiment: sentiment_for(signals.sentiment_score),
            sentiment_score: signals.sentiment_score,
            insight: impact_level.executive_insight(),
            signals: signals.hits,
        }
    }

    pub fn classify_article(&self, article: &Article) -> Classification {
        self.classify(&article.normalized_text(), article.topic_hint())
    }
}
