use super::{ArticleSource, SourceError, SourceKind};
use crate::intelligence::domain::Article;
use serde::Serialize;

/// Curated news scenarios offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    AiAndStartupActivity,
    RegulationAndPolicyNews,
    GeneralTechUpdates,
}

impl Scenario {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::AiAndStartupActivity,
            Self::RegulationAndPolicyNews,
            Self::GeneralTechUpdates,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AiAndStartupActivity => "AI & Startup Activity",
            Self::RegulationAndPolicyNews => "Regulation & Policy News",
            Self::GeneralTechUpdates => "General Tech Updates",
        }
    }

    /// Case-insensitive lookup by display label.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ordered()
            .into_iter()
            .find(|scenario| scenario.label().eq_ignore_ascii_case(wanted))
    }

    pub fn articles(self) -> Vec<Article> {
        let entries: &[(&str, &str)] = match self {
            Self::AiAndStartupActivity => &[
                (
                    "AI startup announces major acquisition",
                    "The company reported record growth and innovation in artificial intelligence.",
                ),
                (
                    "Tech firm launches new AI platform",
                    "The launch signals expansion and increased market share.",
                ),
            ],
            Self::RegulationAndPolicyNews => &[
                (
                    "Government proposes new AI regulation",
                    "New privacy laws may impact technology companies.",
                ),
                (
                    "Major tech company faces investigation",
                    "Regulatory scrutiny increases after data privacy lawsuit.",
                ),
            ],
            Self::GeneralTechUpdates => &[
                (
                    "Tech conference highlights innovation trends",
                    "Startups showcase product launches and new features.",
                ),
                (
                    "Industry report shows steady growth",
                    "Market expansion continues across sectors.",
                ),
            ],
        };

        entries
            .iter()
            .map(|(title, content)| Article::headline(*title, *content))
            .collect()
    }
}

/// Serves the fixed article lists for each [`Scenario`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioSource;

impl ArticleSource for ScenarioSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Scenario
    }

    fn selections(&self) -> Result<Vec<String>, SourceError> {
        Ok(Scenario::ordered()
            .into_iter()
            .map(|scenario| scenario.label().to_string())
            .collect())
    }

    fn fetch(&self, selection: &str) -> Result<Vec<Article>, SourceError> {
        Scenario::from_name(selection)
            .map(Scenario::articles)
            .ok_or_else(|| SourceError::UnknownScenario(selection.to_string()))
    }
}
