//! Keyword-based topic tagging.
//!
//! Each topic is a fixed keyword list compiled into one case-insensitive
//! alternation anchored on word boundaries, so "aged" matches but "engaged"
//! does not. A keyword also matches the inflections its topic allows
//! ("scorer", "shooting", "older", "smiles"), but only as a whole word.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::records::{ScoredRecord, TaggedRecord, Topic, TopicFlags};

pub const APPEARANCE_KEYWORDS: &[&str] = &[
    "appearance",
    "looks",
    "hot",
    "ugly",
    "skinny",
    "beautiful",
    "cute",
    "pretty",
    "fat",
    "smile",
    "hair",
    "legs",
    "butt",
    "attractive",
    "pale",
    "fine",
    "gorgeous",
    "hairline",
    "large",
];

pub const AGE_KEYWORDS: &[&str] = &[
    "young",
    "old",
    "age",
    "teen",
    "veteran",
    "freshman",
    "senior",
    "junior",
    "sophomore",
    "elder",
    "aged",
];

pub const PERFORMANCE_KEYWORDS: &[&str] = &[
    "score",
    "scoring",
    "pass",
    "rebound",
    "assist",
    "block",
    "steal",
    "defense",
    "offense",
    "speed",
    "quickness",
    "athletic",
    "shoot",
    "handle",
    "dribble",
    "skill",
    "dunk",
    "playmaking",
    "performance",
    "triple-double",
    "double-double",
];

pub fn keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Performance => PERFORMANCE_KEYWORDS,
        Topic::Appearance => APPEARANCE_KEYWORDS,
        Topic::Age => AGE_KEYWORDS,
    }
}

/// Verb and agent-noun endings: "scored", "passes", "shooter", "rebounders".
pub const PERFORMANCE_SUFFIXES: &[&str] = &["s", "es", "d", "ed", "r", "rs", "er", "ers", "ing"];

/// Plurals and verb forms only. Agent endings would turn "butt" into "butter".
pub const APPEARANCE_SUFFIXES: &[&str] = &["s", "ed", "ing"];

/// Plurals and comparatives: "seniors", "aged", "older".
pub const AGE_SUFFIXES: &[&str] = &["s", "d", "er"];

/// Endings accepted after a keyword of `topic` within the same word.
pub fn inflection_suffixes(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Performance => PERFORMANCE_SUFFIXES,
        Topic::Appearance => APPEARANCE_SUFFIXES,
        Topic::Age => AGE_SUFFIXES,
    }
}

fn keyword_pattern(topic: Topic) -> Regex {
    let words = keywords(topic);
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    let suffixes = inflection_suffixes(topic).join("|");
    RegexBuilder::new(&format!(r"\b(?:{alternation})(?:{suffixes})?\b"))
        .case_insensitive(true)
        .build()
        .expect("keyword pattern is built from escaped literals")
}

static PERFORMANCE: Lazy<Regex> = Lazy::new(|| keyword_pattern(Topic::Performance));
static APPEARANCE: Lazy<Regex> = Lazy::new(|| keyword_pattern(Topic::Appearance));
static AGE: Lazy<Regex> = Lazy::new(|| keyword_pattern(Topic::Age));

fn pattern(topic: Topic) -> &'static Regex {
    match topic {
        Topic::Performance => &*PERFORMANCE,
        Topic::Appearance => &*APPEARANCE,
        Topic::Age => &*AGE,
    }
}

/// Whether `text` contains any keyword of `topic` as a whole word.
pub fn mentions(topic: Topic, text: Option<&str>) -> bool {
    text.is_some_and(|t| pattern(topic).is_match(t))
}

pub fn mentions_performance(text: Option<&str>) -> bool {
    mentions(Topic::Performance, text)
}

pub fn mentions_appearance(text: Option<&str>) -> bool {
    mentions(Topic::Appearance, text)
}

pub fn mentions_age(text: Option<&str>) -> bool {
    mentions(Topic::Age, text)
}

pub fn tag_text(text: Option<&str>) -> TopicFlags {
    TopicFlags {
        performance: mentions_performance(text),
        appearance: mentions_appearance(text),
        age: mentions_age(text),
    }
}

pub fn tag_record(scored: ScoredRecord) -> TaggedRecord {
    let topics = tag_text(scored.tweet.tweet_text.as_deref());
    TaggedRecord { scored, topics }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary_age() {
        assert!(mentions_age(Some("aged")));
        assert!(mentions_age(Some("She has aged like fine wine")));
        assert!(!mentions_age(Some("engaged")));
        assert!(!mentions_age(Some("The crowd was engaged all night")));
        assert!(!mentions_age(Some("a page of highlights")));
    }

    #[test]
    fn test_word_boundary_other_topics() {
        assert!(!mentions_appearance(Some("what a shot")));
        assert!(!mentions_appearance(Some("finest game")));
        assert!(!mentions_performance(Some("passion on the bench")));
        assert!(!mentions_performance(Some("passionate crowd")));
        assert!(!mentions_age(Some("agenda")));
        assert!(mentions_performance(Some("great pass.")));
    }

    #[test]
    fn test_inflected_keywords() {
        assert!(mentions_performance(Some("He is a great scorer")));
        assert!(mentions_performance(Some("scored 30 tonight")));
        assert!(mentions_performance(Some("elite shooting night")));
        assert!(mentions_performance(Some("three dunks in a row")));
        assert!(mentions_age(Some("the older guard")));
        assert!(mentions_appearance(Some("nobody smiles like her")));
    }

    #[test]
    fn test_agent_endings_only_for_performance() {
        assert!(!mentions_appearance(Some("spreading butter on toast")));
        assert!(!mentions_appearance(Some("Butters the mascot")));
        assert!(!mentions_appearance(Some("the hotter hand tonight")));
        assert!(mentions_appearance(Some("two receding hairlines")));
        assert!(mentions_age(Some("younger legs off the bench")));
        assert!(mentions_performance(Some("best rebounders in the league")));
        assert!(mentions_performance(Some("a natural passer")));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(mentions_appearance(Some("She LOOKS amazing")));
        assert!(mentions_age(Some("FRESHMAN phenom")));
        assert!(mentions_performance(Some("Defense wins games")));
    }

    #[test]
    fn test_hyphenated_keywords() {
        assert!(mentions_performance(Some("another triple-double tonight")));
        assert!(mentions_performance(Some("Double-Double machine")));
    }

    #[test]
    fn test_topics_are_independent() {
        let flags = tag_text(Some("The young guard looks pretty and can shoot"));
        assert!(flags.performance);
        assert!(flags.appearance);
        assert!(flags.age);

        let flags = tag_text(Some("Tip-off at seven"));
        assert_eq!(flags, TopicFlags::default());
    }

    #[test]
    fn test_null_text_matches_nothing() {
        assert_eq!(tag_text(None), TopicFlags::default());
        for topic in Topic::ALL {
            assert!(!mentions(topic, None));
        }
    }

    #[test]
    fn test_keyword_lists() {
        assert_eq!(keywords(Topic::Appearance).len(), 19);
        assert_eq!(keywords(Topic::Age).len(), 11);
        assert_eq!(keywords(Topic::Performance).len(), 21);
    }
}
