//! Derivations over blog text. Everything here is computed on the fly
//! so records never store a word count that can drift from the content.

pub const WORDS_PER_MINUTE: usize = 200;

pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Reading time in whole minutes, rounded up.
pub fn reading_time_mins(word_count: usize) -> u32 {
    word_count.div_ceil(WORDS_PER_MINUTE) as u32
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn of(content: &str) -> Self {
        let word_count = word_count(content);
        if word_count < 500 {
            Difficulty::Beginner
        } else if word_count < 1500 {
            Difficulty::Intermediate
        } else {
            Difficulty::Advanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Beginner" => Some(Difficulty::Beginner),
            "Intermediate" => Some(Difficulty::Intermediate),
            "Advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Topic {
    Frontend,
    Backend,
    Python,
    Database,
    DevOps,
    Mobile,
    #[default]
    General,
}

// First match wins, so "react native" titles land on Frontend.
const TOPIC_KEYWORDS: [(Topic, [&str; 3]); 6] = [
    (Topic::Frontend, ["react", "javascript", "js"]),
    (Topic::Backend, ["node", "express", "api"]),
    (Topic::Python, ["python", "django", "flask"]),
    (Topic::Database, ["database", "sql", "mongodb"]),
    (Topic::DevOps, ["devops", "docker", "aws"]),
    (Topic::Mobile, ["mobile", "react native", "flutter"]),
];

impl Topic {
    /// Classifies a blog by keyword lookup over its title and long
    /// description. Falls back to `General` when nothing matches.
    pub fn classify(title: &str, description: &str) -> Self {
        let text = format!("{} {}", title, description).to_lowercase();

        for (topic, keywords) in TOPIC_KEYWORDS {
            if keywords.iter().any(|keyword| text.contains(keyword)) {
                return topic;
            }
        }

        Topic::General
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Frontend => "Frontend",
            Topic::Backend => "Backend",
            Topic::Python => "Python",
            Topic::Database => "Database",
            Topic::DevOps => "DevOps",
            Topic::Mobile => "Mobile",
            Topic::General => "General",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Frontend" => Some(Topic::Frontend),
            "Backend" => Some(Topic::Backend),
            "Python" => Some(Topic::Python),
            "Database" => Some(Topic::Database),
            "DevOps" => Some(Topic::DevOps),
            "Mobile" => Some(Topic::Mobile),
            "General" => Some(Topic::General),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::text::{
        reading_time_mins, tokenize, word_count, Difficulty, Topic,
    };

    #[test]
    fn test_tokenize() {
        // Arrange
        let text = "React  Hooks\ttutorial";

        // Act
        let terms = tokenize(text);

        // Assert
        assert_eq!(terms, vec!["react", "hooks", "tutorial"]);
    }

    #[test]
    fn test_word_count() {
        // Arrange
        let content = "one two  three";

        // Act
        let count = word_count(content);

        // Assert
        assert_eq!(count, 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        // Act & Assert
        assert_eq!(reading_time_mins(0), 0);
        assert_eq!(reading_time_mins(1), 1);
        assert_eq!(reading_time_mins(200), 1);
        assert_eq!(reading_time_mins(201), 2);
        assert_eq!(reading_time_mins(1000), 5);
    }

    #[test]
    fn test_difficulty_boundaries() {
        // Arrange
        let beginner = "word ".repeat(499);
        let intermediate = "word ".repeat(500);
        let advanced = "word ".repeat(1500);

        // Act & Assert
        assert_eq!(Difficulty::of(""), Difficulty::Beginner);
        assert_eq!(Difficulty::of(&beginner), Difficulty::Beginner);
        assert_eq!(Difficulty::of(&intermediate), Difficulty::Intermediate);
        assert_eq!(Difficulty::of(&advanced), Difficulty::Advanced);
    }

    #[test]
    fn test_classify_topics() {
        // Act & Assert
        assert_eq!(
            Topic::classify("Intro to React", "hooks and state"),
            Topic::Frontend
        );
        assert_eq!(
            Topic::classify("Express in an hour", "node servers"),
            Topic::Backend
        );
        assert_eq!(
            Topic::classify("Hello Django", "a python web framework"),
            Topic::Python
        );
        assert_eq!(
            Topic::classify("Indexes", "mongodb query planning"),
            Topic::Database
        );
        assert_eq!(
            Topic::classify("Ship it", "docker images on aws"),
            Topic::DevOps
        );
        assert_eq!(
            Topic::classify("Flutter layouts", "widgets everywhere"),
            Topic::Mobile
        );
        assert_eq!(
            Topic::classify("Watercolor basics", "brushes and paper"),
            Topic::General
        );
    }

    #[test]
    fn test_classify_first_match_wins() {
        // "react" is a Frontend keyword and is checked before Mobile.
        assert_eq!(
            Topic::classify("React Native animations", "gesture handling"),
            Topic::Frontend
        );
    }

    #[test]
    fn test_classify_matches_substrings() {
        // Keyword lookup is plain substring containment, so "json"
        // carries the "js" keyword.
        assert_eq!(
            Topic::classify("Parsing JSON by hand", "a bad idea"),
            Topic::Frontend
        );
    }
}
