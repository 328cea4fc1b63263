use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use entity::prelude::*;

use crate::{
    metrics,
    text::{self, Difficulty, Topic},
};

const TITLE_WEIGHT: f64 = 10.0;
const SHORT_DESCRIPTION_WEIGHT: f64 = 5.0;
const LONG_DESCRIPTION_WEIGHT: f64 = 3.0;
const SEMANTIC_CAP: f64 = 5.0;

/// Queries of one or two characters return no hits.
pub const MIN_QUERY_CHARS: usize = 3;

#[derive(Debug, Default, Clone)]
pub struct Filters {
    pub category: Option<Topic>,
    pub difficulty: Option<Difficulty>,
    pub reading_time: Option<(u32, u32)>,
    pub date_range: Option<DateRange>,
    pub sort: Sort,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DateRange {
    PastWeek,
    PastMonth,
    PastYear,
}

impl DateRange {
    pub fn parse(range: &str) -> Option<Self> {
        match range {
            "week" => Some(DateRange::PastWeek),
            "month" => Some(DateRange::PastMonth),
            "year" => Some(DateRange::PastYear),
            _ => None,
        }
    }

    fn days(&self) -> i64 {
        match self {
            DateRange::PastWeek => 7,
            DateRange::PastMonth => 30,
            DateRange::PastYear => 365,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Sort {
    #[default]
    Relevance,
    Newest,
    Oldest,
    Popular,
}

impl Sort {
    /// Unknown labels fall back to relevance.
    pub fn parse(sort: &str) -> Self {
        match sort {
            "newest" => Sort::Newest,
            "oldest" => Sort::Oldest,
            "popular" => Sort::Popular,
            _ => Sort::Relevance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hit {
    pub blog: BlogEntity,
    pub score: f64,
    pub semantic_relevance: f64,
    pub matched_terms: Vec<String>,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub reading_time_mins: u32,
    pub views: u64,
    pub comments: u64,
    pub saves: u64,
}

/// Scores every blog against the query and returns the positive hits,
/// sorted per `filters.sort`.
///
/// Each query term adds a weight per field it appears in, a capped
/// pairwise term overlap doubles in as semantic relevance, matching
/// category, difficulty and reading-time filters add flat bonuses, and
/// fresh records get a recency boost. A record with no created_at is
/// scored as if published now. The date-range filter is the one hard
/// cut; everything else only moves the score.
pub fn search(
    blogs: &[BlogEntity],
    query: &str,
    filters: &Filters,
    saves_by_blog: &HashMap<String, u64>,
    now: DateTime<Utc>,
) -> Vec<Hit> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return vec![];
    }

    let terms = text::tokenize(query);

    let mut hits = vec![];
    for blog in blogs {
        let title = blog.title.to_lowercase();
        let short = blog.short_description.to_lowercase();
        let long = blog.long_description.to_lowercase();
        let content = format!("{} {} {}", title, short, long);

        let mut score = 0.0;
        for term in &terms {
            if title.contains(term) {
                score += TITLE_WEIGHT;
            }
            if short.contains(term) {
                score += SHORT_DESCRIPTION_WEIGHT;
            }
            if long.contains(term) {
                score += LONG_DESCRIPTION_WEIGHT;
            }
        }

        let semantic_relevance = semantic_similarity(&terms, &content);
        score += semantic_relevance * 2.0;

        let topic = Topic::classify(&blog.title, &blog.long_description);
        if filters.category == Some(topic) {
            score += 5.0;
        }

        let difficulty = Difficulty::of(&blog.long_description);
        if filters.difficulty == Some(difficulty) {
            score += 3.0;
        }

        let reading_time_mins =
            text::reading_time_mins(text::word_count(&blog.long_description));
        if let Some((min, max)) = filters.reading_time {
            if reading_time_mins >= min && reading_time_mins <= max {
                score += 2.0;
            }
        }

        let created_at = blog.created_at.unwrap_or(now);
        let days_since_creation = (now - created_at).num_days();
        if days_since_creation < 7 {
            score += 3.0;
        } else if days_since_creation < 30 {
            score += 1.0;
        }

        if let Some(range) = filters.date_range {
            if created_at < now - Duration::days(range.days()) {
                continue;
            }
        }

        if score <= 0.0 {
            continue;
        }

        let matched_terms = terms
            .iter()
            .filter(|term| content.contains(term.as_str()))
            .cloned()
            .collect();

        hits.push(Hit {
            score,
            semantic_relevance,
            matched_terms,
            topic,
            difficulty,
            reading_time_mins,
            views: metrics::views(&blog.id),
            comments: metrics::comments(&blog.id),
            saves: metrics::saves(
                &blog.id,
                saves_by_blog.get(&blog.id).copied(),
            ),
            blog: blog.clone(),
        });
    }

    sort_hits(&mut hits, filters.sort);

    hits
}

fn sort_hits(hits: &mut [Hit], sort: Sort) {
    match sort {
        Sort::Relevance => {
            hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
        // Records without created_at sort as oldest, not as fresh.
        Sort::Newest => hits.sort_by_key(|hit| {
            std::cmp::Reverse(timestamp_or_epoch(&hit.blog))
        }),
        Sort::Oldest => {
            hits.sort_by_key(|hit| timestamp_or_epoch(&hit.blog));
        }
        Sort::Popular => {
            hits.sort_by_key(|hit| std::cmp::Reverse(hit.views));
        }
    }
}

fn timestamp_or_epoch(blog: &BlogEntity) -> i64 {
    blog.created_at.map(|at| at.timestamp()).unwrap_or(0)
}

/// Counts containment pairs between query terms and content words at
/// 0.1 a pair, capped at 5.0.
fn semantic_similarity(terms: &[String], content: &str) -> f64 {
    let content_words: Vec<&str> = content.split_whitespace().collect();

    let mut similarity: f64 = 0.0;
    for term in terms {
        for word in &content_words {
            if word.contains(term.as_str()) || term.contains(word) {
                similarity += 0.1;
            }
        }
    }

    similarity.min(SEMANTIC_CAP)
}
