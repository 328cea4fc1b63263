use chrono::{DateTime, Utc};
use entity::prelude::*;

use crate::{
    metrics,
    text::{self, Difficulty, Topic},
};

pub const MAX_RECOMMENDATIONS: usize = 12;

#[derive(Debug, Default, Clone)]
pub struct Preferences {
    pub categories: Vec<Topic>,
    pub reading_time: Option<ReadingTimeBand>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReadingTimeBand {
    Short,
    Medium,
    Long,
}

impl ReadingTimeBand {
    pub fn parse(band: &str) -> Option<Self> {
        match band {
            "short" => Some(ReadingTimeBand::Short),
            "medium" => Some(ReadingTimeBand::Medium),
            "long" => Some(ReadingTimeBand::Long),
            _ => None,
        }
    }

    fn contains(&self, mins: u32) -> bool {
        match self {
            ReadingTimeBand::Short => (1..=3).contains(&mins),
            ReadingTimeBand::Medium => (3..=8).contains(&mins),
            ReadingTimeBand::Long => mins >= 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub blog: BlogEntity,
    pub score: f64,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub reading_time_mins: u32,
    pub engagement_pct: u64,
}

/// Picks the top twelve blogs for a reader.
///
/// Depth counts twice: up to five points for every thousand words,
/// doubled. Freshness decays half a point per day over ten days, a
/// long piece over 500 characters earns three, an image one, and a
/// preferred category four. Reading-time and difficulty preferences
/// exclude records outright rather than scoring them down.
pub fn recommend(
    blogs: &[BlogEntity],
    preferences: &Preferences,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    let mut recommendations = vec![];
    for blog in blogs {
        let word_count = text::word_count(&blog.long_description);
        let reading_time_mins = text::reading_time_mins(word_count);
        let difficulty = Difficulty::of(&blog.long_description);
        let topic = Topic::classify(&blog.title, &blog.long_description);

        if let Some(band) = preferences.reading_time {
            if !band.contains(reading_time_mins) {
                continue;
            }
        }
        if let Some(wanted) = preferences.difficulty {
            if difficulty != wanted {
                continue;
            }
        }

        let mut score = (word_count as f64 / 1000.0).min(5.0) * 2.0;

        let created_at = blog.created_at.unwrap_or(now);
        let days_since_creation =
            (now - created_at).num_seconds() as f64 / 86_400.0;
        score += (10.0 - days_since_creation).max(0.0) * 0.5;

        if blog.long_description.chars().count() > 500 {
            score += 3.0;
        }
        if !blog.image_url.is_empty() {
            score += 1.0;
        }
        if preferences.categories.contains(&topic) {
            score += 4.0;
        }

        recommendations.push(Recommendation {
            score,
            topic,
            difficulty,
            reading_time_mins,
            engagement_pct: metrics::engagement_pct(&blog.id),
            blog: blog.clone(),
        });
    }

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(MAX_RECOMMENDATIONS);

    recommendations
}

#[cfg(test)]
mod test {
    use chrono::{Duration, TimeZone, Utc};
    use entity::prelude::*;

    use crate::{
        recommend::{
            recommend, Preferences, ReadingTimeBand, MAX_RECOMMENDATIONS,
        },
        text::{Difficulty, Topic},
    };

    fn blog(id: &str, title: &str, words: usize) -> BlogEntity {
        BlogEntity {
            id: id.to_string(),
            title: title.to_string(),
            long_description: "react ".repeat(words).trim_end().to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_score_components_add_up() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let mut record = blog("1", "Hooks deep dive", 1000);
        record.created_at = Some(now - Duration::days(4));
        record.image_url = "https://img.example/cover.png".to_string();
        let preferences = Preferences {
            categories: vec![Topic::Frontend],
            ..Default::default()
        };

        // Act
        let picks = recommend(&[record], &preferences, now);

        // Assert
        // 2.0 depth, 3.0 freshness, 3.0 length, 1.0 image, 4.0
        // preferred category.
        assert_eq!(picks.len(), 1);
        assert!((picks[0].score - 13.0).abs() < 1e-9);
        assert_eq!(picks[0].topic, Topic::Frontend);
        assert_eq!(picks[0].difficulty, Difficulty::Intermediate);
        assert_eq!(picks[0].reading_time_mins, 5);
    }

    #[test]
    fn test_depth_is_capped_at_five_thousand_words() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let five_thousand = blog("1", "Long", 5000);
        let ten_thousand = blog("2", "Longer", 10000);

        // Act
        let picks =
            recommend(&[five_thousand, ten_thousand], &Preferences::default(), now);

        // Assert
        assert!((picks[0].score - picks[1].score).abs() < 1e-9);
    }

    #[test]
    fn test_freshness_decays_to_zero() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let mut old = blog("1", "Old", 100);
        old.created_at = Some(now - Duration::days(30));
        let mut older = blog("2", "Older", 100);
        older.created_at = Some(now - Duration::days(300));

        // Act
        let picks = recommend(&[old, older], &Preferences::default(), now);

        // Assert
        assert!((picks[0].score - picks[1].score).abs() < 1e-9);
    }

    #[test]
    fn test_reading_time_preference_excludes_records() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let short_read = blog("1", "Short", 400);
        let medium_read = blog("2", "Medium", 1000);
        let preferences = Preferences {
            reading_time: Some(ReadingTimeBand::Short),
            ..Default::default()
        };

        // Act
        let picks = recommend(&[short_read, medium_read], &preferences, now);

        // Assert
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].blog.id, "1");
    }

    #[test]
    fn test_difficulty_preference_excludes_records() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let beginner = blog("1", "Starter", 100);
        let advanced = blog("2", "Expert", 2000);
        let preferences = Preferences {
            difficulty: Some(Difficulty::Advanced),
            ..Default::default()
        };

        // Act
        let picks = recommend(&[beginner, advanced], &preferences, now);

        // Assert
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].blog.id, "2");
    }

    #[test]
    fn test_preferred_category_ranks_first() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let frontend = blog("1", "Hooks", 500);
        let mut general = blog("2", "Gardening", 500);
        general.long_description = "turnip ".repeat(500).trim_end().to_string();
        let preferences = Preferences {
            categories: vec![Topic::General],
            ..Default::default()
        };

        // Act
        let picks = recommend(&[frontend, general], &preferences, now);

        // Assert
        assert_eq!(picks[0].blog.id, "2");
    }

    #[test]
    fn test_only_twelve_come_back() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let blogs: Vec<_> = (0..20)
            .map(|i| blog(&format!("{}", i), "Hooks", 100))
            .collect();

        // Act
        let picks = recommend(&blogs, &Preferences::default(), now);

        // Assert
        assert_eq!(picks.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_parse_band() {
        // Act & Assert
        assert_eq!(ReadingTimeBand::parse("short"), Some(ReadingTimeBand::Short));
        assert_eq!(ReadingTimeBand::parse("all"), None);
    }
}
