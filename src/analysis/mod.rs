//! Somali text analysis components.
//!
//! This module provides the three scoring components of the crate, all driven
//! by a shared immutable [`Lexicon`]:
//!
//! - [`TextScorer`] — a four-factor quality score (length, character
//!   diversity, structure, word complexity), each factor capped at 25 points.
//! - [`DialectClassifier`] — indicator-word dialect detection with a
//!   confidence percentage.
//! - [`EnterpriseAnalyzer`] — grammar, vocabulary, weighted dialect,
//!   cultural, readability and professional-writing sub-analyses composed
//!   into aggregate enterprise metrics.
//!
//! # Determinism
//!
//! Every component is a pure function of `(text, lexicon)`. There is no
//! hidden state, no I/O on the scoring path and no randomness; repeated
//! calls on the same input produce identical reports.
//!
//! # Dialect categories
//!
//! | Category | Indicators | Used by |
//! |---|---|---|
//! | Northern | `waa baa ayaa oo iyo` | classifier |
//! | Southern | `ka ku la ah uu` | classifier |
//! | Central | `si ugu kala soo aan` | classifier |
//! | Standard | `waa baa ayaa waxa waxaa` | enterprise (weighted) |
//! | Coastal | `xamar badda dekad dooni kalluun` | enterprise (weighted) |
//!
//! The classifier breaks ties by a fixed priority order (Northern, then
//! Southern, then Central); the weighted enterprise variant breaks ties in
//! profile declaration order (Standard first). Both orders are part of the
//! scoring contract and covered by tests.
//!
//! # Custom lexicons
//!
//! [`Lexicon::builtin`] carries the standard indicator tables. Deployments
//! that maintain their own word lists can load a JSON file instead:
//!
//! ```rust,no_run
//! use somali_nlp_rs::analysis::Lexicon;
//! use std::path::Path;
//!
//! let lexicon = Lexicon::from_config(Path::new("lexicon.json"))?;
//! # Ok::<(), somali_nlp_rs::analysis::LexiconError>(())
//! ```

pub mod dialect;
pub mod enterprise;
pub mod lexicon;
pub mod quality;

pub use dialect::{Dialect, DialectClassifier, DialectResult};
pub use enterprise::{EnterpriseAnalyzer, EnterpriseReport};
pub use lexicon::{Lexicon, LexiconError};
pub use quality::{QualityScore, TextScorer};

/// Round to one decimal place, the precision used by every reported score.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to three decimal places, used for ratio metrics.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Split text into non-empty trimmed sentences on `.`, `!` and `?`.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
