use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    metrics,
    text::{self, Topic},
};

pub const MAX_TOP_PERFORMERS: usize = 5;
pub const MAX_RECENT_ACTIVITY: usize = 8;

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub total_blogs: u64,
    pub total_views: u64,
    pub total_comments: u64,
    pub total_saves: u64,
    pub top_performers: Vec<BlogPerformance>,
    pub topic_stats: Vec<TopicStats>,
    pub engagement: EngagementMetrics,
    pub recent_activity: Vec<ActivityEvent>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPerformance {
    pub blog_id: String,
    pub title: String,
    pub views: u64,
    pub comments: u64,
    pub saves: u64,
    pub engagement: u64,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicStats {
    pub topic: String,
    pub count: u64,
    pub total_views: u64,
    pub total_engagement: u64,
    pub average_engagement: u64,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    pub average_engagement: u64,
    pub top_category: String,
    pub growth_rate_pct: u64,
    pub active_users: u64,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub blog_id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
}

/// Blends views, comments, saves and content depth into one figure.
pub fn engagement_score(
    views: u64,
    comments: u64,
    saves: u64,
    word_count: usize,
) -> u64 {
    let content_factor = (word_count as f64 / 10.0).min(50.0);
    let raw = views as f64 * 0.4
        + comments as f64 * 20.0
        + saves as f64 * 15.0
        + content_factor;

    (raw / 10.0).round() as u64
}

/// Aggregates the whole corpus into one analytics snapshot.
///
/// Counters come from [`metrics`], with recorded wishlist counts
/// taking precedence over the stand-in saves. Growth rate is the share
/// of records created in the past thirty days; records without
/// created_at count as new. Recent activity lists the newest dated
/// records as publish events.
pub fn snapshot(
    blogs: &[BlogEntity],
    saves_by_blog: &HashMap<String, u64>,
    user_count: u64,
    subscriber_count: u64,
    now: DateTime<Utc>,
) -> Snapshot {
    let mut total_views = 0;
    let mut total_comments = 0;
    let mut total_saves = 0;
    let mut performances = Vec::with_capacity(blogs.len());
    let mut by_topic: HashMap<Topic, TopicStats> = HashMap::new();

    for blog in blogs {
        let views = metrics::views(&blog.id);
        let comments = metrics::comments(&blog.id);
        let saves =
            metrics::saves(&blog.id, saves_by_blog.get(&blog.id).copied());
        let word_count = text::word_count(&blog.long_description);
        let engagement = engagement_score(views, comments, saves, word_count);

        total_views += views;
        total_comments += comments;
        total_saves += saves;

        let topic = Topic::classify(&blog.title, &blog.long_description);
        let stats = by_topic.entry(topic).or_insert_with(|| TopicStats {
            topic: topic.label().to_string(),
            ..Default::default()
        });
        stats.count += 1;
        stats.total_views += views;
        stats.total_engagement += engagement;

        performances.push(BlogPerformance {
            blog_id: blog.id.clone(),
            title: blog.title.clone(),
            views,
            comments,
            saves,
            engagement,
        });
    }

    let average_engagement = match performances.len() {
        0 => 0,
        count => {
            let sum: u64 = performances.iter().map(|p| p.engagement).sum();
            (sum as f64 / count as f64).round() as u64
        }
    };

    let mut topic_stats: Vec<TopicStats> = by_topic
        .into_values()
        .map(|mut stats| {
            stats.average_engagement = (stats.total_engagement as f64
                / stats.count as f64)
                .round() as u64;
            stats
        })
        .collect();
    topic_stats.sort_by_key(|stats| std::cmp::Reverse(stats.total_views));

    let top_category = topic_stats
        .first()
        .map(|stats| stats.topic.clone())
        .unwrap_or_else(|| Topic::Frontend.label().to_string());

    let mut top_performers = performances;
    top_performers.sort_by_key(|p| std::cmp::Reverse(p.engagement));
    top_performers.truncate(MAX_TOP_PERFORMERS);

    let thirty_days_ago = now - Duration::days(30);
    let recent = blogs
        .iter()
        .filter(|blog| blog.created_at.unwrap_or(now) > thirty_days_ago)
        .count();
    let growth_rate_pct = match blogs.len() {
        0 => 0,
        total => (recent as f64 * 100.0 / total as f64).round() as u64,
    };

    let mut dated: Vec<&BlogEntity> =
        blogs.iter().filter(|blog| blog.created_at.is_some()).collect();
    dated.sort_by_key(|blog| std::cmp::Reverse(blog.created_at));
    let recent_activity = dated
        .into_iter()
        .take(MAX_RECENT_ACTIVITY)
        .map(|blog| ActivityEvent {
            blog_id: blog.id.clone(),
            title: blog.title.clone(),
            published_at: blog.created_at.unwrap_or(now),
        })
        .collect();

    Snapshot {
        total_blogs: blogs.len() as u64,
        total_views,
        total_comments,
        total_saves,
        top_performers,
        topic_stats,
        engagement: EngagementMetrics {
            average_engagement,
            top_category,
            growth_rate_pct,
            active_users: user_count + subscriber_count,
        },
        recent_activity,
        generated_at: now,
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use chrono::{Duration, TimeZone, Utc};
    use entity::prelude::*;

    use crate::{
        insights::{engagement_score, snapshot, MAX_RECENT_ACTIVITY},
        metrics,
    };

    fn blog(id: &str, title: &str, long: &str) -> BlogEntity {
        BlogEntity {
            id: id.to_string(),
            title: title.to_string(),
            long_description: long.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_engagement_score() {
        // Act
        let score = engagement_score(100, 10, 4, 800);

        // Assert
        // (40 + 200 + 60 + 50) / 10, with the content factor capped.
        assert_eq!(score, 35);
    }

    #[test]
    fn test_totals_sum_the_counters() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let blogs =
            vec![blog("1", "a react post", "react"), blog("2", "b", "turnips")];

        // Act
        let snap = snapshot(&blogs, &HashMap::new(), 0, 0, now);

        // Assert
        assert_eq!(snap.total_blogs, 2);
        assert_eq!(
            snap.total_views,
            metrics::views("1") + metrics::views("2")
        );
        assert_eq!(
            snap.total_comments,
            metrics::comments("1") + metrics::comments("2")
        );
        assert_eq!(
            snap.total_saves,
            metrics::saves("1", None) + metrics::saves("2", None)
        );
        assert_eq!(snap.generated_at, now);
    }

    #[test]
    fn test_recorded_saves_override_the_stand_in() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let blogs = vec![blog("1", "a", "words")];
        let saves = HashMap::from([("1".to_string(), 3)]);

        // Act
        let snap = snapshot(&blogs, &saves, 0, 0, now);

        // Assert
        assert_eq!(snap.total_saves, 3);
        assert_eq!(snap.top_performers[0].saves, 3);
    }

    #[test]
    fn test_top_performers_are_sorted_and_capped() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let blogs: Vec<_> = (0..7)
            .map(|i| blog(&format!("{}", i), "t", "words"))
            .collect();

        // Act
        let snap = snapshot(&blogs, &HashMap::new(), 0, 0, now);

        // Assert
        assert_eq!(snap.top_performers.len(), 5);
        let engagements: Vec<_> =
            snap.top_performers.iter().map(|p| p.engagement).collect();
        let mut sorted = engagements.clone();
        sorted.sort_by_key(|e| std::cmp::Reverse(*e));
        assert_eq!(engagements, sorted);
    }

    #[test]
    fn test_topic_stats_are_grouped_and_ordered_by_views() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let blogs = vec![
            blog("1", "react hooks", "state"),
            blog("2", "more react", "components"),
            blog("3", "tulips", "gardening"),
        ];

        // Act
        let snap = snapshot(&blogs, &HashMap::new(), 0, 0, now);

        // Assert
        assert_eq!(snap.topic_stats.len(), 2);
        let frontend = snap
            .topic_stats
            .iter()
            .find(|stats| stats.topic == "Frontend")
            .unwrap();
        assert_eq!(frontend.count, 2);
        assert_eq!(
            frontend.total_views,
            metrics::views("1") + metrics::views("2")
        );
        assert!(
            snap.topic_stats[0].total_views >= snap.topic_stats[1].total_views
        );
    }

    #[test]
    fn test_growth_rate_counts_undated_records_as_new() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let mut old = blog("1", "old", "words");
        old.created_at = Some(now - Duration::days(90));
        let undated = blog("2", "new-ish", "words");

        // Act
        let snap = snapshot(&[old, undated], &HashMap::new(), 0, 0, now);

        // Assert
        assert_eq!(snap.engagement.growth_rate_pct, 50);
    }

    #[test]
    fn test_active_users_adds_mirrors_and_subscribers() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();

        // Act
        let snap = snapshot(&[], &HashMap::new(), 12, 30, now);

        // Assert
        assert_eq!(snap.engagement.active_users, 42);
        assert_eq!(snap.engagement.top_category, "Frontend");
        assert_eq!(snap.engagement.average_engagement, 0);
        assert_eq!(snap.engagement.growth_rate_pct, 0);
    }

    #[test]
    fn test_recent_activity_lists_newest_dated_records() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let mut blogs = vec![];
        for i in 0..10 {
            let mut record = blog(&format!("{}", i), "t", "words");
            record.created_at = Some(now - Duration::days(i));
            blogs.push(record);
        }
        blogs.push(blog("undated", "t", "words"));

        // Act
        let snap = snapshot(&blogs, &HashMap::new(), 0, 0, now);

        // Assert
        assert_eq!(snap.recent_activity.len(), MAX_RECENT_ACTIVITY);
        assert_eq!(snap.recent_activity[0].blog_id, "0");
        assert_eq!(snap.recent_activity[7].blog_id, "7");
        assert!(snap
            .recent_activity
            .iter()
            .all(|event| event.blog_id != "undated"));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let blogs = vec![blog("1", "a react post", "react hooks")];
        let snap = snapshot(&blogs, &HashMap::new(), 1, 2, now);

        // Act
        let json = serde_json::to_string(&snap).unwrap();
        let parsed = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(snap, parsed);
    }
}
