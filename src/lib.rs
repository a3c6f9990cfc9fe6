//! # somali-nlp-rs
//!
//! A Rust library for deterministic quality scoring and dialect analysis
//! of Somali text.
//!
//! ## Features
//!
//! - **Quality Scoring**: Multi-factor lexical/structural quality score for a text sample
//! - **Dialect Detection**: Heuristic dialect classification with confidence values
//! - **Enterprise Analysis**: Grammar, vocabulary, cultural and readability sub-scores
//!   composed into aggregate enterprise metrics
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! somali-nlp-rs = "0.3"
//! ```
//!
//! ```rust
//! use somali_nlp_rs::analysis::{Lexicon, TextScorer, DialectClassifier};
//! use std::sync::Arc;
//!
//! let lexicon = Arc::new(Lexicon::builtin());
//!
//! let scorer = TextScorer::new(lexicon.clone());
//! let quality = scorer.score("Waxbarashadu waa iftiinka nolosha.");
//! println!("quality: {}", quality.overall);
//!
//! let classifier = DialectClassifier::new(lexicon);
//! let dialect = classifier.classify("Waxaa jira qof oo fiican ah");
//! println!("dialect: {} ({}%)", dialect.dialect, dialect.confidence);
//! ```
//!
//! All scoring is a pure function of the input text and an immutable
//! [`analysis::Lexicon`]; components hold the lexicon behind an `Arc` and are
//! safe to share across threads without locking.

pub mod analysis;

use serde::Serialize;

/// A text sample prepared for scoring.
///
/// Word and character counts are fixed at construction; the sample is never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct TextSample {
    /// The raw input text.
    pub text: String,
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Number of characters (Unicode scalar values).
    pub char_count: usize,
}

impl TextSample {
    /// Build a sample from raw text, counting words and characters.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
        }
    }

    /// True if the sample contains no non-whitespace content.
    ///
    /// Callers should treat empty samples as a rejection case; every analysis
    /// component returns a defined zero result for them rather than panicking.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Common interface for text analysis components.
///
/// Each component produces its own serializable report type. Implementations
/// are pure: the same text and lexicon always yield an identical report.
pub trait Analyze {
    /// The report produced by this component.
    type Report: Serialize;

    /// Analyze the given text and produce a report.
    fn analyze(&self, text: &str) -> Self::Report;
}
