use ranking::{
    recommend::{Preferences, ReadingTimeBand},
    text::{Difficulty, Topic},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationParam {
    /// Comma separated topic labels, e.g. `Frontend,Python`.
    pub categories: Option<String>,
    pub reading_time: Option<String>,
    pub difficulty: Option<String>,
}

impl RecommendationParam {
    /// Labels that parse become hard preferences, the rest are dropped.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            categories: self
                .categories
                .as_deref()
                .map(|csv| {
                    csv.split(',')
                        .filter_map(|label| Topic::parse(label.trim()))
                        .collect()
                })
                .unwrap_or_default(),
            reading_time: self.reading_time.as_deref().and_then(ReadingTimeBand::parse),
            difficulty: self.difficulty.as_deref().and_then(Difficulty::parse),
        }
    }
}
