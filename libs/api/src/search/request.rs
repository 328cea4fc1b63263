use ranking::{
    search::{DateRange, Filters, Sort},
    text::{Difficulty, Topic},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParam {
    pub q: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub reading_time: Option<String>,
    pub date_range: Option<String>,
    pub sort_by: Option<String>,
}

impl SearchParam {
    /// Unknown or empty filter labels behave like an unset filter.
    pub fn filters(&self) -> Filters {
        Filters {
            category: self.category.as_deref().and_then(Topic::parse),
            difficulty: self.difficulty.as_deref().and_then(Difficulty::parse),
            reading_time: self.reading_time.as_deref().and_then(parse_reading_time),
            date_range: self.date_range.as_deref().and_then(DateRange::parse),
            sort: self.sort_by.as_deref().map(Sort::parse).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
pub struct SuggestionsParam {
    pub q: String,
}

/// Parses the minute bands the search page sends, "1-3" style.
fn parse_reading_time(band: &str) -> Option<(u32, u32)> {
    let (min, max) = band.split_once('-')?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}
