//! Rule-based compound polarity scoring.
//!
//! Each token's lexicon valence is adjusted by preceding boosters, negations
//! within three tokens, ALL-CAPS emphasis, and a contrastive "but". The
//! summed valence gets punctuation emphasis and is squashed into [-1, 1].

use crate::sentiment::lexicon::{CAPS_INCR, NEGATION_SCALAR, SentimentLexicon, ValenceLexicon};

/// Normalisation constant; approximates the maximum expected raw sum.
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;
const NEGATION_WINDOW: usize = 3;

/// A token with surrounding punctuation stripped, plus its lower-cased form.
#[derive(Debug, Clone)]
struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    fn is_shouting(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
            && !self.raw.chars().any(char::is_lowercase)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    lexicon: ValenceLexicon,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(mut self, lexicon: ValenceLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Compound polarity of `text` in [-1, 1], rounded to four decimals.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let shouting = tokens.iter().filter(|t| t.is_shouting()).count();
        let caps_differential = shouting > 0 && shouting < tokens.len();

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| self.token_valence(&tokens, i, caps_differential))
            .collect();

        apply_but_rule(&tokens, &mut sentiments);

        let mut sum: f64 = sentiments.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else {
            sum -= emphasis;
        }

        round4(normalize(sum))
    }

    fn token_valence(&self, tokens: &[Token], i: usize, caps_differential: bool) -> f64 {
        let token = &tokens[i];
        let lower = token.lower.as_str();

        if self.lexicon.booster(lower).is_some() {
            return 0.0;
        }
        if lower == "kind" && tokens.get(i + 1).is_some_and(|t| t.lower == "of") {
            return 0.0;
        }

        let Some(mut valence) = self.lexicon.valence(lower) else {
            return 0.0;
        };

        // "no" only counts on its own, not as a modifier of a sentiment word
        if lower == "no"
            && tokens
                .get(i + 1)
                .is_some_and(|t| self.lexicon.valence(&t.lower).is_some())
        {
            return 0.0;
        }

        if caps_differential && token.is_shouting() {
            valence += CAPS_INCR.copysign(valence);
        }

        for distance in 1..=NEGATION_WINDOW {
            if i < distance {
                break;
            }
            let prior = &tokens[i - distance];
            if self.lexicon.valence(&prior.lower).is_some() {
                continue;
            }

            let mut shift = self.booster_shift(prior, valence, caps_differential);
            if shift != 0.0 {
                shift *= match distance {
                    2 => 0.95,
                    3 => 0.9,
                    _ => 1.0,
                };
            }
            valence += shift;
            valence = self.negation_check(valence, tokens, i, distance);
        }

        valence
    }

    fn booster_shift(&self, prior: &Token, valence: f64, caps_differential: bool) -> f64 {
        let Some(mut shift) = self.lexicon.booster(&prior.lower) else {
            return 0.0;
        };
        if valence < 0.0 {
            shift = -shift;
        }
        if caps_differential && prior.is_shouting() {
            shift += CAPS_INCR.copysign(valence);
        }
        shift
    }

    fn negation_check(&self, valence: f64, tokens: &[Token], i: usize, distance: usize) -> f64 {
        let word = |d: usize| tokens[i - d].lower.as_str();
        let intensifies = |w: &str| w == "so" || w == "this";

        match distance {
            1 => {
                if self.lexicon.is_negation(word(1)) {
                    return valence * NEGATION_SCALAR;
                }
            }
            2 => {
                if word(2) == "never" && intensifies(word(1)) {
                    return valence * 1.25;
                }
                if word(2) == "without" && word(1) == "doubt" {
                    return valence;
                }
                if self.lexicon.is_negation(word(2)) {
                    return valence * NEGATION_SCALAR;
                }
            }
            _ => {
                if word(3) == "never" && (intensifies(word(2)) || intensifies(word(1))) {
                    return valence * 1.25;
                }
                if word(3) == "without" && (word(2) == "doubt" || word(1) == "doubt") {
                    return valence;
                }
                if self.lexicon.is_negation(word(3)) {
                    return valence * NEGATION_SCALAR;
                }
            }
        }
        valence
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .filter_map(|raw| {
            let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
            // all-punctuation tokens (emoticons) are kept whole
            let raw = if stripped.is_empty() { raw } else { stripped };
            (raw.chars().count() > 1).then(|| Token {
                raw,
                lower: raw.to_lowercase().replace('\u{2019}', "'"),
            })
        })
        .collect()
}

/// Halves sentiment before a "but" and boosts it by half after.
fn apply_but_rule(tokens: &[Token], sentiments: &mut [f64]) {
    let Some(pivot) = tokens.iter().position(|t| t.lower == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };

    exclamations as f64 * EXCLAMATION_INCR + question_emphasis
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
