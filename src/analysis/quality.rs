use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use super::{round1, Lexicon};
use crate::{Analyze, TextSample};

/// A multi-factor quality score for a single text sample.
///
/// The four component scores are each capped at 25 points; `overall` is their
/// sum, so it lies in `[0, 100]`. All values are rounded to one decimal place
/// and derived deterministically from the input; the score is never mutated
/// after creation.
#[derive(Debug, Clone, Serialize)]
pub struct QualityScore {
    /// Sum of the four component scores.
    pub overall: f64,
    /// Word-count score: `min(words / 10, 1) * 25`.
    pub length: f64,
    /// Fraction of the reference alphabet present in the text, scaled to 25.
    pub character_diversity: f64,
    /// 25 if the text contains terminal punctuation, else 0.
    pub structure: f64,
    /// Average-word-length score: `min(avg / 6, 1) * 25`.
    pub complexity: f64,
    pub word_count: usize,
    pub char_count: usize,
}

/// Computes quality scores from lexical and structural features.
///
/// Pure and stateless apart from the shared read-only [`Lexicon`]; a single
/// scorer can be used concurrently from multiple threads.
pub struct TextScorer {
    lexicon: Arc<Lexicon>,
}

impl TextScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Create a scorer over the built-in lexicon.
    pub fn with_builtin() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }

    /// Score the given text.
    ///
    /// Empty or whitespace-only input is a defined zero case: every component
    /// contributes 0 and no division by zero occurs.
    pub fn score(&self, text: &str) -> QualityScore {
        let sample = TextSample::new(text);
        let words: Vec<&str> = text.split_whitespace().collect();

        let length = (words.len() as f64 / 10.0).min(1.0) * 25.0;

        let reference: HashSet<char> = self.lexicon.reference_alphabet.chars().collect();
        let text_lower = text.to_lowercase();
        let seen: HashSet<char> = text_lower
            .chars()
            .filter(|c| reference.contains(c))
            .collect();
        let character_diversity = seen.len() as f64 / reference.len() as f64 * 25.0;

        let structure = if self
            .lexicon
            .sentence_enders
            .iter()
            .any(|&p| text.contains(p))
        {
            25.0
        } else {
            0.0
        };

        let complexity = if words.is_empty() {
            0.0
        } else {
            let total_len: usize = words.iter().map(|w| w.chars().count()).sum();
            let avg_word_length = total_len as f64 / words.len() as f64;
            (avg_word_length / 6.0).min(1.0) * 25.0
        };

        QualityScore {
            overall: round1(length + character_diversity + structure + complexity),
            length: round1(length),
            character_diversity: round1(character_diversity),
            structure: round1(structure),
            complexity: round1(complexity),
            word_count: sample.word_count,
            char_count: sample.char_count,
        }
    }
}

impl Analyze for TextScorer {
    type Report = QualityScore;

    fn analyze(&self, text: &str) -> QualityScore {
        self.score(text)
    }
}

#[cfg(test)]
mod tests {
    use super::TextScorer;

    #[test]
    fn empty_text_scores_zero() {
        let scorer = TextScorer::with_builtin();
        let score = scorer.score("");
        assert_eq!(score.overall, 0.0);
        assert_eq!(score.word_count, 0);

        let score = scorer.score("   \t ");
        assert_eq!(score.overall, 0.0);
    }

    #[test]
    fn golden_bismillahi() {
        // 3 words, no terminal punctuation, 10 distinct reference letters,
        // average word length 8 (capped complexity).
        let scorer = TextScorer::with_builtin();
        let score = scorer.score("Bismillahi Rahmaani Raheem");
        assert_eq!(score.word_count, 3);
        assert_eq!(score.char_count, 26);
        assert_eq!(score.length, 7.5);
        assert_eq!(score.structure, 0.0);
        assert_eq!(score.character_diversity, 6.9); // 10/36 * 25
        assert_eq!(score.complexity, 25.0);
        assert_eq!(score.overall, 39.4);
    }

    #[test]
    fn structure_credit_requires_terminal_punctuation() {
        let scorer = TextScorer::with_builtin();
        assert_eq!(scorer.score("Nabad gelyo").structure, 0.0);
        assert_eq!(scorer.score("Nabad gelyo!").structure, 25.0);
        assert_eq!(scorer.score("Ma nabad baa?").structure, 25.0);
    }

    #[test]
    fn length_score_caps_at_ten_words() {
        let scorer = TextScorer::with_builtin();
        let short = scorer.score("waa dal");
        assert_eq!(short.length, 5.0); // 2/10 * 25

        let long = "soo ".repeat(12);
        assert_eq!(scorer.score(&long).length, 25.0);
    }

    #[test]
    fn overall_is_bounded_for_arbitrary_input() {
        let scorer = TextScorer::with_builtin();
        for text in [
            "",
            "a",
            "?!?!",
            "Waxaa jira qof oo fiican ah.",
            "áéíóú ÁÉÍÓÚ xyz 1234",
            &"qoraal aad u dheer oo soomaali ah ".repeat(40),
        ] {
            let score = scorer.score(text);
            assert!(
                (0.0..=100.0).contains(&score.overall),
                "overall {} out of range for {text:?}",
                score.overall
            );
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = TextScorer::with_builtin();
        let a = scorer.score("Waxbarashadu waa iftiinka nolosha.");
        let b = scorer.score("Waxbarashadu waa iftiinka nolosha.");
        assert_eq!(a.overall, b.overall);
        assert_eq!(a.character_diversity, b.character_diversity);
    }
}
