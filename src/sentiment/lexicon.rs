//! Valence lexicon for the rule-based scorer.
//!
//! Word valences sit on a -4.0..=4.0 scale. Boosters shift a neighbouring
//! sentiment word by a fixed amount, negations flip it.

use std::collections::{HashMap, HashSet};

/// Shift applied by an intensifying booster ("very", "so").
pub const BOOSTER_INCR: f64 = 0.293;
/// Shift applied by a dampening booster ("slightly", "barely").
pub const BOOSTER_DECR: f64 = -0.293;
/// Shift applied to an ALL-CAPS sentiment word in mixed-case text.
pub const CAPS_INCR: f64 = 0.733;
/// Multiplier applied to a sentiment word inside a negation window.
pub const NEGATION_SCALAR: f64 = -0.74;

pub trait SentimentLexicon {
    /// Valence of a lower-cased word, if it carries sentiment.
    fn valence(&self, word: &str) -> Option<f64>;

    /// Booster shift of a lower-cased word, if it is a booster.
    fn booster(&self, word: &str) -> Option<f64>;

    /// Whether a lower-cased word negates what follows it.
    fn is_negation(&self, word: &str) -> bool;
}

const VALENCES: &[(&str, f64)] = &[
    // strongly positive
    ("best", 3.2),
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("lovely", 2.8),
    ("great", 3.1),
    ("greatest", 3.2),
    ("awesome", 3.1),
    ("amazing", 2.8),
    ("incredible", 2.8),
    ("unbelievable", 2.2),
    ("outstanding", 3.0),
    ("phenomenal", 3.1),
    ("spectacular", 2.9),
    ("brilliant", 2.8),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("perfect", 2.7),
    ("beautiful", 2.9),
    ("gorgeous", 3.0),
    ("stunning", 2.6),
    ("legendary", 2.6),
    ("legend", 2.2),
    ("elite", 2.1),
    ("superb", 3.1),
    ("champion", 2.9),
    ("champions", 2.4),
    ("championship", 1.9),
    ("win", 2.8),
    ("wins", 2.7),
    ("won", 2.7),
    ("winner", 2.8),
    ("winning", 2.4),
    ("victory", 2.8),
    ("triumph", 3.0),
    ("happy", 2.7),
    ("joy", 2.8),
    ("proud", 2.1),
    ("inspiring", 2.4),
    ("inspiration", 2.4),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    // moderately positive
    ("good", 1.9),
    ("better", 1.9),
    ("nice", 1.8),
    ("pretty", 2.2),
    ("cute", 2.0),
    ("fine", 0.8),
    ("attractive", 1.9),
    ("talented", 2.3),
    ("talent", 1.8),
    ("impressive", 2.3),
    ("impressed", 2.1),
    ("strong", 2.3),
    ("smart", 1.7),
    ("skilled", 1.6),
    ("fun", 2.3),
    ("exciting", 2.2),
    ("excited", 1.4),
    ("cool", 1.3),
    ("solid", 1.2),
    ("clutch", 1.5),
    ("dominant", 1.4),
    ("dominate", 1.2),
    ("dominated", 1.2),
    ("fire", 1.3),
    ("respect", 2.1),
    ("deserve", 1.3),
    ("deserves", 1.3),
    ("deserved", 1.3),
    ("support", 1.7),
    ("confident", 2.2),
    ("confidence", 2.3),
    ("hope", 1.9),
    ("glad", 2.0),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("smile", 1.5),
    ("smiling", 2.1),
    ("wow", 2.8),
    ("yes", 1.7),
    ("ready", 1.5),
    ("safe", 1.9),
    ("healthy", 1.7),
    ("success", 2.7),
    ("successful", 2.8),
    ("easy", 1.9),
    ("free", 2.3),
    ("lol", 1.8),
    ("haha", 2.0),
    ("like", 1.5),
    ("liked", 1.8),
    ("likes", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("favorite", 2.0),
    ("well", 1.1),
    ("special", 1.7),
    ("huge", 1.3),
    ("worth", 0.9),
    ("ok", 1.2),
    ("okay", 0.9),
    // moderately negative
    ("no", -1.2),
    ("lose", -1.6),
    ("loses", -1.3),
    ("losing", -1.6),
    ("lost", -1.3),
    ("loss", -1.3),
    ("weak", -1.9),
    ("poor", -2.1),
    ("slow", -0.8),
    ("tired", -1.9),
    ("lazy", -1.5),
    ("sloppy", -1.6),
    ("mess", -1.5),
    ("miss", -0.6),
    ("missed", -1.2),
    ("problem", -1.7),
    ("problems", -1.7),
    ("mistake", -1.4),
    ("crazy", -1.4),
    ("ridiculous", -1.5),
    ("overrated", -1.4),
    ("trash", -1.5),
    ("garbage", -1.8),
    ("sucks", -1.5),
    ("suck", -1.9),
    ("worried", -1.2),
    ("worry", -1.9),
    ("scared", -1.9),
    ("nervous", -1.1),
    ("sorry", -0.3),
    ("doubt", -1.5),
    ("doubts", -1.2),
    ("foul", -1.7),
    ("fouled", -1.0),
    ("injury", -2.0),
    ("injured", -1.7),
    ("hurt", -2.4),
    ("pain", -2.3),
    ("fat", -1.3),
    ("ugly", -2.3),
    ("old", -0.4),
    ("skinny", -0.4),
    ("pale", -0.6),
    ("annoying", -1.8),
    ("boring", -1.3),
    ("fake", -2.1),
    ("cheat", -2.0),
    ("cheating", -2.6),
    ("dirty", -1.9),
    ("damn", -1.7),
    ("fight", -1.6),
    ("fighting", -1.5),
    ("choke", -1.4),
    ("choked", -1.7),
    // strongly negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("horrendous", -2.8),
    ("disaster", -3.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("sad", -2.1),
    ("angry", -2.3),
    ("mad", -2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("disappointing", -2.2),
    ("disappointed", -1.9),
    ("disappointment", -2.3),
    ("embarrassing", -1.6),
    ("embarrassed", -1.5),
    ("pathetic", -2.0),
    ("stupid", -2.4),
    ("dumb", -2.3),
    ("idiot", -2.3),
    ("disgusting", -2.4),
    ("disgrace", -2.2),
    ("shame", -2.1),
    ("shameful", -2.2),
    ("wtf", -2.8),
    ("kill", -3.7),
    ("killed", -3.5),
    ("racist", -3.1),
    ("sexist", -2.4),
    ("clown", -1.2),
    ("robbed", -2.5),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCR),
    ("amazingly", BOOSTER_INCR),
    ("awfully", BOOSTER_INCR),
    ("completely", BOOSTER_INCR),
    ("considerably", BOOSTER_INCR),
    ("decidedly", BOOSTER_INCR),
    ("deeply", BOOSTER_INCR),
    ("enormously", BOOSTER_INCR),
    ("entirely", BOOSTER_INCR),
    ("especially", BOOSTER_INCR),
    ("exceptionally", BOOSTER_INCR),
    ("extremely", BOOSTER_INCR),
    ("fabulously", BOOSTER_INCR),
    ("fully", BOOSTER_INCR),
    ("greatly", BOOSTER_INCR),
    ("hella", BOOSTER_INCR),
    ("highly", BOOSTER_INCR),
    ("hugely", BOOSTER_INCR),
    ("incredibly", BOOSTER_INCR),
    ("intensely", BOOSTER_INCR),
    ("majorly", BOOSTER_INCR),
    ("more", BOOSTER_INCR),
    ("most", BOOSTER_INCR),
    ("particularly", BOOSTER_INCR),
    ("purely", BOOSTER_INCR),
    ("quite", BOOSTER_INCR),
    ("really", BOOSTER_INCR),
    ("remarkably", BOOSTER_INCR),
    ("so", BOOSTER_INCR),
    ("substantially", BOOSTER_INCR),
    ("thoroughly", BOOSTER_INCR),
    ("totally", BOOSTER_INCR),
    ("tremendously", BOOSTER_INCR),
    ("unbelievably", BOOSTER_INCR),
    ("unusually", BOOSTER_INCR),
    ("utterly", BOOSTER_INCR),
    ("very", BOOSTER_INCR),
    ("almost", BOOSTER_DECR),
    ("barely", BOOSTER_DECR),
    ("hardly", BOOSTER_DECR),
    ("kinda", BOOSTER_DECR),
    ("less", BOOSTER_DECR),
    ("little", BOOSTER_DECR),
    ("marginally", BOOSTER_DECR),
    ("occasionally", BOOSTER_DECR),
    ("partly", BOOSTER_DECR),
    ("scarcely", BOOSTER_DECR),
    ("slightly", BOOSTER_DECR),
    ("somewhat", BOOSTER_DECR),
    ("sorta", BOOSTER_DECR),
];

const NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hadnt", "hadn't", "hasnt",
    "hasn't", "havent", "haven't", "isnt", "isn't", "neither", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "shouldnt", "shouldn't", "wasnt", "wasn't", "werent",
    "weren't", "without", "wont", "won't", "wouldnt", "wouldn't", "rarely", "seldom",
    "despite",
];

/// The built-in lexicon, extendable with [`ValenceLexicon::with_word`].
#[derive(Debug, Clone)]
pub struct ValenceLexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl ValenceLexicon {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().map(|&(w, v)| (w.to_string(), v)).collect(),
            boosters: BOOSTERS.iter().map(|&(w, v)| (w.to_string(), v)).collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Adds or overrides a word's valence.
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.valences.insert(word.to_lowercase(), valence);
        self
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for ValenceLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for ValenceLexicon {
    fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.contains("n't")
    }
}
