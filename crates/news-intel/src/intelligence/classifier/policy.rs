use super::super::domain::{ImpactLevel, Sentiment};

pub const HIGH_IMPACT_THRESHOLD: u32 = 4;
pub const MEDIUM_IMPACT_THRESHOLD: u32 = 2;

pub const ARTIFICIAL_INTELLIGENCE: &str = "Artificial Intelligence";
pub const POLICY_AND_REGULATION: &str = "Policy & Regulation";
pub const STARTUPS: &str = "Startups";
pub const GENERAL_TECHNOLOGY: &str = "General Technology";

pub(crate) fn impact_level_for(score: u32) -> ImpactLevel {
    if score >= HIGH_IMPACT_THRESHOLD {
        ImpactLevel::High
    } else if score >= MEDIUM_IMPACT_THRESHOLD {
        ImpactLevel::Medium
    } else {
        ImpactLevel::Low
    }
}

pub(crate) fn sentiment_for(score: i32) -> Sentiment {
    match score {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

/// First matching rule wins.
pub(crate) fn derive_topic(text: &str) -> &'static str {
    if text.contains("ai") {
        ARTIFICIAL_INTELLIGENCE
    } else if text.contains("privacy") || text.contains("regulation") {
        POLICY_AND_REGULATION
    } else if text.contains("startup") {
        STARTUPS
    } else {
        GENERAL_TECHNOLOGY
    }
}
