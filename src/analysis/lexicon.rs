use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dialect::Dialect;

/// Errors raised while loading a lexicon from disk.
#[derive(thiserror::Error, Debug)]
pub enum LexiconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid lexicon config: {0}")]
    Config(String),
}

/// A named set of professional-domain vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalCategory {
    pub name: String,
    pub words: Vec<String>,
}

/// An indicator list for the plain dialect classifier.
///
/// Declaration order inside [`Lexicon::dialect_indicators`] is the tie-break
/// priority: an earlier set keeps the win when a later set matches the same
/// number of indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub dialect: Dialect,
    pub indicators: Vec<String>,
}

/// A weighted dialect profile for the enterprise analyzer.
///
/// Each matched indicator contributes `weight * confidence_boost` to the
/// profile's raw score. Declaration order is the tie-break priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialectProfile {
    pub dialect: Dialect,
    pub indicators: Vec<String>,
    pub weight: f64,
    pub confidence_boost: f64,
}

/// Process-wide, read-only scoring configuration.
///
/// Loaded once at startup and shared by all components (typically behind an
/// `Arc`). Never mutated after construction, so concurrent reads need no
/// locking. [`Lexicon::builtin`] carries the standard tables; deployments
/// with their own word lists can load a JSON override via
/// [`Lexicon::from_config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Reference alphabet for the character-diversity score: the 26 Latin
    /// letters plus the accented vowels in both cases. The uppercase accented
    /// vowels never match lowercased text but stay in the set because the
    /// diversity divisor is its total length.
    pub reference_alphabet: String,
    /// Characters that terminate a sentence.
    pub sentence_enders: Vec<char>,
    /// Grammatical particles (waa, baa, ayaa, ...).
    pub particles: Vec<String>,
    /// Pluralizing suffixes checked against word endings.
    pub plural_suffixes: Vec<String>,
    /// Professional-domain vocabulary, one category per domain.
    pub professional: Vec<ProfessionalCategory>,
    /// Indicator sets for the plain dialect classifier, in priority order.
    pub dialect_indicators: Vec<IndicatorSet>,
    /// Weighted dialect profiles for the enterprise analyzer, in priority order.
    pub dialect_profiles: Vec<DialectProfile>,
    /// Islamic greetings, blessings and respectful titles.
    pub islamic_terms: Vec<String>,
    /// Respectful-address and polite-form terms.
    pub respectful_terms: Vec<String>,
    /// Formal written-register phrases.
    pub formal_patterns: Vec<String>,
    /// Academic and research vocabulary.
    pub academic_words: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// Load a lexicon from a JSON config file.
    ///
    /// The file must contain a complete lexicon; there is no per-field
    /// merging with the built-in tables.
    pub fn from_config(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        let lexicon: Lexicon = serde_json::from_str(&content)
            .map_err(|e| LexiconError::Config(format!("Failed to parse JSON: {e}")))?;
        log::info!(
            "Loaded lexicon from {}: {} professional categories, {} dialect profiles",
            path.display(),
            lexicon.professional.len(),
            lexicon.dialect_profiles.len()
        );
        Ok(lexicon)
    }

    /// The built-in lexicon with the standard Somali indicator tables.
    pub fn builtin() -> Self {
        Self {
            reference_alphabet: "abcdefghijklmnopqrstuvwxyzáéíóúÁÉÍÓÚ".to_string(),
            sentence_enders: vec!['.', '!', '?'],
            particles: words(&["waa", "baa", "ayaa", "waxaa", "waxa"]),
            plural_suffixes: words(&["yo", "yaal", "aal", "oyin"]),
            professional: vec![
                ProfessionalCategory {
                    name: "government".to_string(),
                    words: words(&[
                        "dowlad",
                        "xukuumad",
                        "wasiir",
                        "guddoomiye",
                        "golaha",
                        "baarlamaan",
                    ]),
                },
                ProfessionalCategory {
                    name: "business".to_string(),
                    words: words(&[
                        "ganacsato",
                        "macmiil",
                        "suuq",
                        "dhaqaale",
                        "maaliyadeed",
                        "ganacsi",
                    ]),
                },
                ProfessionalCategory {
                    name: "education".to_string(),
                    words: words(&[
                        "waxbarasho",
                        "dugsiga",
                        "jaamacad",
                        "macallin",
                        "arday",
                        "cilmi",
                    ]),
                },
                ProfessionalCategory {
                    name: "medical".to_string(),
                    words: words(&[
                        "caafimaad",
                        "dhakhtarka",
                        "bukaan",
                        "dawaynta",
                        "isbitaal",
                        "xanuun",
                    ]),
                },
                ProfessionalCategory {
                    name: "legal".to_string(),
                    words: words(&[
                        "sharci", "maxkamad", "qaadhiga", "xaq", "dacwad", "garsoor",
                    ]),
                },
                ProfessionalCategory {
                    name: "islamic".to_string(),
                    words: words(&[
                        "islaam", "diinta", "salaad", "quraanka", "nabiga", "masjid", "ducada",
                    ]),
                },
            ],
            dialect_indicators: vec![
                IndicatorSet {
                    dialect: Dialect::Northern,
                    indicators: words(&["waa", "baa", "ayaa", "oo", "iyo"]),
                },
                IndicatorSet {
                    dialect: Dialect::Southern,
                    indicators: words(&["ka", "ku", "la", "ah", "uu"]),
                },
                IndicatorSet {
                    dialect: Dialect::Central,
                    indicators: words(&["si", "ugu", "kala", "soo", "aan"]),
                },
            ],
            dialect_profiles: vec![
                DialectProfile {
                    dialect: Dialect::Standard,
                    indicators: words(&["waa", "baa", "ayaa", "waxa", "waxaa"]),
                    weight: 1.0,
                    confidence_boost: 0.8,
                },
                DialectProfile {
                    dialect: Dialect::Northern,
                    indicators: words(&["yahay", "tahay", "kaalay", "yaal", "dhinac"]),
                    weight: 0.9,
                    confidence_boost: 0.7,
                },
                DialectProfile {
                    dialect: Dialect::Southern,
                    indicators: words(&["raac", "keen", "dhowr", "yimi", "kale"]),
                    weight: 0.8,
                    confidence_boost: 0.6,
                },
                DialectProfile {
                    dialect: Dialect::Coastal,
                    indicators: words(&["xamar", "badda", "dekad", "dooni", "kalluun"]),
                    weight: 0.7,
                    confidence_boost: 0.5,
                },
            ],
            islamic_terms: words(&[
                "assalamu calaykum",
                "wacalaykum salaam",
                "nabadgelyo",
                "barakallahu",
                "alhamdulillah",
                "subhanallah",
                "inshallah",
                "shiikh",
                "ustaad",
                "xaaji",
                "imam",
            ]),
            respectful_terms: words(&[
                "walaal",
                "waalidka",
                "odayaal",
                "hooyada",
                "mudane",
                "marwo",
                "duqa",
                "guddoomiye",
                "fadlan",
                "mahadsanid",
                "raalli noqo",
            ]),
            formal_patterns: words(&["waxaa", "waxa", "sida", "guud ahaan", "si kastaba"]),
            academic_words: words(&["cilmi", "daraasad", "baaritaan", "xog", "macluumaad"]),
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}
