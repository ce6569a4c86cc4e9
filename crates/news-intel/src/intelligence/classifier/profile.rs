use serde::Serialize;

/// Fixed set of lowercase keywords matched by substring containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(&'static [&'static str]);

impl KeywordSet {
    pub const fn new(keywords: &'static [&'static str]) -> Self {
        Self(keywords)
    }

    pub const fn keywords(&self) -> &'static [&'static str] {
        self.0
    }

    /// Keywords present anywhere in `text`; each counts once.
    pub fn matches<'a>(&self, text: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.0
            .iter()
            .copied()
            .filter(move |keyword| text.contains(keyword))
    }
}

/// How the topic column is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStrategy {
    /// Ordered substring rules over the article text.
    Derived,
    /// The source's category label is used verbatim.
    PassThrough,
}

/// Keyword sets and topic strategy for one classification variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleProfile {
    pub name: &'static str,
    pub impact: KeywordSet,
    pub positive: KeywordSet,
    pub negative: KeywordSet,
    pub topic: TopicStrategy,
}

impl RuleProfile {
    /// Rules applied to the curated scenario headlines.
    pub const SCENARIO: RuleProfile = RuleProfile {
        name: "scenario",
        impact: KeywordSet::new(&[
            "layoff",
            "regulation",
            "lawsuit",
            "acquisition",
            "merger",
            "ai",
            "ban",
        ]),
        positive: KeywordSet::new(&["growth", "launch", "record", "innovation", "increase"]),
        negative: KeywordSet::new(&["loss", "decline", "cut", "ban", "layoff", "investigation"]),
        topic: TopicStrategy::Derived,
    };

    /// Rules applied to labeled dataset rows.
    pub const DATASET: RuleProfile = RuleProfile {
        name: "dataset",
        impact: KeywordSet::new(&[
            "policy",
            "regulation",
            "lawsuit",
            "market",
            "ban",
            "crisis",
            "investigation",
        ]),
        positive: KeywordSet::new(&[
            "growth",
            "positive",
            "breakthrough",
            "record",
            "innovation",
            "increase",
        ]),
        negative: KeywordSet::new(&[
            "decline",
            "loss",
            "ban",
            "crisis",
            "controversial",
            "investigation",
        ]),
        topic: TopicStrategy::PassThrough,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_sets_are_lowercase() {
        for profile in [RuleProfile::SCENARIO, RuleProfile::DATASET] {
            for set in [profile.impact, profile.positive, profile.negative] {
                assert!(set
                    .keywords()
                    .iter()
                    .all(|keyword| *keyword == keyword.to_lowercase()));
            }
        }
    }

    #[test]
    fn matches_yield_each_keyword_once() {
        let set = KeywordSet::new(&["growth", "record"]);
        let hits: Vec<_> = set.matches("growth, growth and more growth").collect();
        assert_eq!(hits, vec!["growth"]);
    }
}
