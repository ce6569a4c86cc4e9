use super::super::domain::KeywordHits;
use super::profile::RuleProfile;

pub(crate) const IMPACT_POINTS: u32 = 2;

pub(crate) struct ScoreSignals {
    pub impact_score: u32,
    pub sentiment_score: i32,
    pub hits: KeywordHits,
}

pub(crate) fn score_text(text: &str, profile: &RuleProfile) -> ScoreSignals {
    let impact: Vec<&'static str> = profile.impact.matches(text).collect();
    let positive: Vec<&'static str> = profile.positive.matches(text).collect();
    let negative: Vec<&'static str> = profile.negative.matches(text).collect();

    let impact_score = IMPACT_POINTS * impact.len() as u32;
    let sentiment_score = positive.len() as i32 - negative.len() as i32;

    ScoreSignals {
        impact_score,
        sentiment_score,
        hits: KeywordHits {
            impact,
            positive,
            negative,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_counts_substring_containment() {
        let signals = score_text("deregulation talks stall", &RuleProfile::SCENARIO);
        assert_eq!(signals.impact_score, 2);
        assert_eq!(signals.hits.impact, vec!["regulation"]);
    }

    #[test]
    fn sentiment_nets_positive_against_negative() {
        let signals = score_text(
            "record launch offsets decline and layoff",
            &RuleProfile::SCENARIO,
        );
        assert_eq!(signals.hits.positive, vec!["launch", "record"]);
        assert_eq!(signals.hits.negative, vec!["decline", "layoff"]);
        assert_eq!(signals.sentiment_score, 0);
    }

    #[test]
    fn empty_text_scores_zero() {
        let signals = score_text("", &RuleProfile::DATASET);
        assert_eq!(signals.impact_score, 0);
        assert_eq!(signals.sentiment_score, 0);
        assert_eq!(signals.hits, KeywordHits::default());
    }
}
