use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{round1, Lexicon};
use crate::Analyze;

/// A Somali dialect category.
///
/// `Northern`, `Southern` and `Central` are produced by the plain classifier;
/// `Standard` and `Coastal` additionally appear in the enterprise analyzer's
/// weighted detection. `Unknown` means no indicator matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    Northern,
    Southern,
    Central,
    Standard,
    Coastal,
    Unknown,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Northern => "Northern",
            Dialect::Southern => "Southern",
            Dialect::Central => "Central",
            Dialect::Standard => "Standard",
            Dialect::Coastal => "Coastal",
            Dialect::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// The outcome of a dialect classification.
#[derive(Debug, Clone, Serialize)]
pub struct DialectResult {
    /// Best-guess dialect, `Unknown` when no indicator matched.
    pub dialect: Dialect,
    /// Share of all indicator hits belonging to the winning category,
    /// as a percentage in `[0, 100]`, one decimal place.
    pub confidence: f64,
    /// Indicators of the winning category found in the text.
    pub matched_indicators: Vec<String>,
}

impl DialectResult {
    fn unknown() -> Self {
        Self {
            dialect: Dialect::Unknown,
            confidence: 0.0,
            matched_indicators: Vec::new(),
        }
    }
}

/// Heuristic dialect classifier over fixed indicator lists.
///
/// This is a rule table, not a statistical model: each indicator that occurs
/// as a substring of the lowercased text counts one hit for its category, and
/// the category with the most hits wins. Ties go to the earlier category in
/// the lexicon's declaration order (Northern, Southern, Central for the
/// built-in tables).
pub struct DialectClassifier {
    lexicon: Arc<Lexicon>,
}

impl DialectClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Create a classifier over the built-in lexicon.
    pub fn with_builtin() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }

    /// Classify the dialect of the given text.
    pub fn classify(&self, text: &str) -> DialectResult {
        let text_lower = text.to_lowercase();

        let mut total_hits = 0usize;
        let mut winner: Option<(Dialect, Vec<String>)> = None;

        for set in &self.lexicon.dialect_indicators {
            let matched: Vec<String> = set
                .indicators
                .iter()
                .filter(|indicator| text_lower.contains(indicator.as_str()))
                .cloned()
                .collect();
            total_hits += matched.len();

            // Strictly-greater keeps earlier categories on ties.
            let beats_current = match &winner {
                Some((_, best)) => matched.len() > best.len(),
                None => true,
            };
            if beats_current {
                winner = Some((set.dialect, matched));
            }
        }

        if total_hits == 0 {
            return DialectResult::unknown();
        }

        let (dialect, matched_indicators) = winner.unwrap_or((Dialect::Unknown, Vec::new()));
        DialectResult {
            dialect,
            confidence: round1(matched_indicators.len() as f64 / total_hits as f64 * 100.0),
            matched_indicators,
        }
    }
}

impl Analyze for DialectClassifier {
    type Report = DialectResult;

    fn analyze(&self, text: &str) -> DialectResult {
        self.classify(text)
    }
}
