use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;
use serde::Serialize;

use super::{round1, round3, split_sentences, Dialect, Lexicon};
use crate::{Analyze, TextSample};

/// Subject-particle-complement structure, matched against lowercased text.
const SVO_PATTERN: &str = r"(\w+)\s+(waa|baa|ayaa)\s+(\w+)";

/// Year numbers, parenthesized or bracketed references.
const CITATION_PATTERN: &str = r"\d{4}|\(.*\)|\[.*\]";

/// Cultural sensitivity baseline. No taboo-content detector is implemented;
/// the baseline is a constant until one exists, so every report carries the
/// full score here.
const SENSITIVITY_BASELINE: f64 = 100.0;

/// Grammar sub-analysis: additive point checks plus diagnostics.
///
/// Numeric scoring and the human-readable issue strings are kept in separate
/// fields so callers can surface one without parsing the other.
#[derive(Debug, Clone, Serialize)]
pub struct GrammarReport {
    /// 0–100, sum of the individual checks capped at 100.
    pub score: f64,
    /// One entry per failed check.
    pub issues: Vec<String>,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
    /// Number of distinct grammatical particles found.
    pub particle_count: usize,
    pub has_terminal_punctuation: bool,
}

/// Matches within one professional vocabulary category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMatches {
    pub category: String,
    pub words: Vec<String>,
}

/// Vocabulary sub-analysis.
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyReport {
    /// 10 points per professional-vocabulary match, capped at 100.
    pub score: f64,
    /// Categories with at least one match.
    pub categories: Vec<CategoryMatches>,
    /// `unique / total` word ratio, three decimal places.
    pub diversity_ratio: f64,
    pub unique_words: usize,
    pub total_words: usize,
    pub average_word_length: f64,
    /// Words longer than six characters.
    pub complex_words: usize,
    /// `complex / total` word ratio, three decimal places.
    pub complexity_ratio: f64,
}

/// Raw score and matches for one weighted dialect profile.
#[derive(Debug, Clone, Serialize)]
pub struct DialectScore {
    pub dialect: Dialect,
    /// `weight * confidence_boost` summed over matched indicators.
    pub raw_score: f64,
    /// `min(raw_score * 10, 100)`.
    pub confidence: f64,
    pub indicators: Vec<String>,
}

/// Weighted dialect sub-analysis.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedDialectReport {
    pub primary: Dialect,
    pub confidence: f64,
    /// Profiles with at least one matched indicator.
    pub breakdown: Vec<DialectScore>,
    pub is_standard: bool,
}

/// Cultural sub-analysis.
#[derive(Debug, Clone, Serialize)]
pub struct CulturalReport {
    /// +5 per Islamic term and +3 per respectful term, capped at 100.
    pub score: f64,
    pub islamic_terms: Vec<String>,
    pub respectful_terms: Vec<String>,
    /// Constant baseline; no taboo-content detector backs this value.
    pub sensitivity: f64,
    pub is_appropriate: bool,
}

/// Ordinal grade-level label for a readability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GradeLevel {
    Elementary,
    MiddleSchool,
    HighSchool,
    College,
    Graduate,
    Unknown,
}

/// Coarse word-length complexity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

/// Readability sub-analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ReadabilityReport {
    /// `100 - (1.015 * avgSentLen + 84.6 * avgWordLen / 4.7)`, clamped to [0, 100].
    pub score: f64,
    pub grade_level: GradeLevel,
    pub average_sentence_length: f64,
    pub average_word_length: f64,
    pub complexity: ComplexityLevel,
}

/// Professional-writing sub-analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalReport {
    /// 10 points per indicator, capped at 100.
    pub score: f64,
    /// Formal-pattern and academic-word matches, plus 2 for citations.
    pub indicator_count: usize,
    pub has_citations: bool,
    pub is_professional_level: bool,
}

/// Aggregate enterprise metrics, each a fixed linear combination of the
/// sub-scores.
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseMetrics {
    /// `0.30*grammar + 0.25*vocabulary + 0.20*cultural + 0.15*readability + 0.10*professional`.
    pub accuracy: f64,
    /// Professional score plus cultural (+10) and standard-dialect (+5)
    /// boosts, minus 2 per grammar issue, capped at 100.
    pub professionalism: f64,
    /// The cultural sensitivity baseline.
    pub cultural_appropriateness: f64,
    /// Threshold-gated point blocks: 30/25/20/15/10.
    pub business_readiness: f64,
    /// `0.30*accuracy + 0.25*professionalism + 0.20*cultural + 0.25*readiness`.
    pub overall: f64,
}

/// The complete enterprise analysis of one text sample.
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseReport {
    pub word_count: usize,
    pub char_count: usize,
    pub grammar: GrammarReport,
    pub vocabulary: VocabularyReport,
    pub dialect: WeightedDialectReport,
    pub cultural: CulturalReport,
    pub readability: ReadabilityReport,
    pub professional: ProfessionalReport,
    pub metrics: EnterpriseMetrics,
}

/// Composes the grammar, vocabulary, dialect, cultural, readability and
/// professional sub-analyses into aggregate enterprise scores.
///
/// The structural patterns are compiled once at construction. Analysis is a
/// pure function of `(text, lexicon)`; the analyzer is safe to share across
/// threads.
pub struct EnterpriseAnalyzer {
    lexicon: Arc<Lexicon>,
    svo: Regex,
    citation: Regex,
}

impl EnterpriseAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            // Both patterns are fixed literals, valid by construction.
            svo: Regex::new(SVO_PATTERN).expect("SVO pattern is valid"),
            citation: Regex::new(CITATION_PATTERN).expect("citation pattern is valid"),
        }
    }

    /// Create an analyzer over the built-in lexicon.
    pub fn with_builtin() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }

    /// Run the full enterprise analysis.
    ///
    /// Empty or whitespace-only input short-circuits before any sub-analysis
    /// and yields an all-zero report, so callers can reject it without a
    /// special error path.
    pub fn analyze(&self, text: &str) -> EnterpriseReport {
        let sample = TextSample::new(text);
        if sample.is_blank() {
            log::warn!("Empty text submitted for enterprise analysis");
            return EnterpriseReport::zero();
        }

        let grammar = self.analyze_grammar(text);
        let vocabulary = self.analyze_vocabulary(text);
        let dialect = self.analyze_dialect_weighted(text);
        let cultural = self.analyze_cultural(text);
        let readability = self.analyze_readability(text);
        let professional = self.analyze_professional(text);

        let metrics = compute_metrics(
            &grammar,
            &vocabulary,
            &dialect,
            &cultural,
            &readability,
            &professional,
        );

        log::debug!(
            "Enterprise analysis: {} words, overall {}",
            sample.word_count,
            metrics.overall
        );

        EnterpriseReport {
            word_count: sample.word_count,
            char_count: sample.char_count,
            grammar,
            vocabulary,
            dialect,
            cultural,
            readability,
            professional,
            metrics,
        }
    }

    fn analyze_grammar(&self, text: &str) -> GrammarReport {
        let text_lower = text.to_lowercase();
        let words: Vec<&str> = text.split_whitespace().collect();
        let sentences = split_sentences(text);

        let mut score: f64 = 0.0;
        let mut issues = Vec::new();

        if self.svo.is_match(&text_lower) {
            score += 20.0;
        } else {
            issues.push("No clear Subject-Verb-Object structure detected".to_string());
        }

        let particle_count = self
            .lexicon
            .particles
            .iter()
            .filter(|p| text_lower.contains(p.as_str()))
            .count();
        if particle_count > 0 {
            score += 15.0;
        } else {
            issues.push("Missing grammatical particles (waa, baa, ayaa)".to_string());
        }

        let has_terminal_punctuation = self
            .lexicon
            .sentence_enders
            .iter()
            .any(|&p| text.contains(p));
        if has_terminal_punctuation {
            score += 10.0;
        } else {
            issues.push("Missing proper sentence punctuation".to_string());
        }

        let has_plural = self
            .lexicon
            .plural_suffixes
            .iter()
            .any(|suffix| words.iter().any(|w| w.ends_with(suffix.as_str())));
        if has_plural {
            score += 10.0;
        }

        let average_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            let total: usize = sentences
                .iter()
                .map(|s| s.split_whitespace().count())
                .sum();
            total as f64 / sentences.len() as f64
        };
        if (8.0..=20.0).contains(&average_sentence_length) {
            score += 15.0;
        } else if average_sentence_length < 8.0 {
            issues.push("Sentences too short for professional writing".to_string());
        } else {
            issues.push("Sentences too long, may affect readability".to_string());
        }

        GrammarReport {
            score: score.min(100.0),
            issues,
            sentence_count: sentences.len(),
            average_sentence_length: round1(average_sentence_length),
            particle_count,
            has_terminal_punctuation,
        }
    }

    fn analyze_vocabulary(&self, text: &str) -> VocabularyReport {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.to_lowercase()
                    .trim_matches(|c| ".,!?;:".contains(c))
                    .to_string()
            })
            .collect();

        let mut score = 0.0;
        let mut categories = Vec::new();
        for category in &self.lexicon.professional {
            let found: Vec<String> = words
                .iter()
                .filter(|w| category.words.contains(w))
                .cloned()
                .collect();
            if !found.is_empty() {
                score += found.len() as f64 * 10.0;
                categories.push(CategoryMatches {
                    category: category.name.clone(),
                    words: found,
                });
            }
        }

        let total_words = words.len();
        let unique_words = words.iter().collect::<HashSet<_>>().len();
        let diversity_ratio = if total_words > 0 {
            unique_words as f64 / total_words as f64
        } else {
            0.0
        };

        let average_word_length = if total_words > 0 {
            let total_len: usize = words.iter().map(|w| w.chars().count()).sum();
            total_len as f64 / total_words as f64
        } else {
            0.0
        };
        let complex_words = words.iter().filter(|w| w.chars().count() > 6).count();
        let complexity_ratio = if total_words > 0 {
            complex_words as f64 / total_words as f64
        } else {
            0.0
        };

        VocabularyReport {
            score: score.min(100.0),
            categories,
            diversity_ratio: round3(diversity_ratio),
            unique_words,
            total_words,
            average_word_length: round1(average_word_length),
            complex_words,
            complexity_ratio: round3(complexity_ratio),
        }
    }

    fn analyze_dialect_weighted(&self, text: &str) -> WeightedDialectReport {
        let text_lower = text.to_lowercase();

        let mut breakdown = Vec::new();
        for profile in &self.lexicon.dialect_profiles {
            let indicators: Vec<String> = profile
                .indicators
                .iter()
                .filter(|indicator| text_lower.contains(indicator.as_str()))
                .cloned()
                .collect();
            if indicators.is_empty() {
                continue;
            }
            let raw_score = indicators.len() as f64 * profile.weight * profile.confidence_boost;
            breakdown.push(DialectScore {
                dialect: profile.dialect,
                raw_score,
                confidence: (raw_score * 10.0).min(100.0),
                indicators,
            });
        }

        // First strictly-highest raw score wins, so earlier profiles keep ties.
        let mut primary: Option<&DialectScore> = None;
        for entry in &breakdown {
            let beats_current = match primary {
                Some(best) => entry.raw_score > best.raw_score,
                None => true,
            };
            if beats_current {
                primary = Some(entry);
            }
        }

        match primary {
            Some(best) => WeightedDialectReport {
                primary: best.dialect,
                confidence: round1(best.confidence),
                is_standard: best.dialect == Dialect::Standard,
                breakdown,
            },
            None => WeightedDialectReport {
                primary: Dialect::Unknown,
                confidence: 0.0,
                breakdown,
                is_standard: false,
            },
        }
    }

    fn analyze_cultural(&self, text: &str) -> CulturalReport {
        let text_lower = text.to_lowercase();

        let islamic_terms: Vec<String> = self
            .lexicon
            .islamic_terms
            .iter()
            .filter(|term| text_lower.contains(term.as_str()))
            .cloned()
            .collect();
        let respectful_terms: Vec<String> = self
            .lexicon
            .respectful_terms
            .iter()
            .filter(|term| text_lower.contains(term.as_str()))
            .cloned()
            .collect();

        let score = islamic_terms.len() as f64 * 5.0 + respectful_terms.len() as f64 * 3.0;

        CulturalReport {
            score: score.min(100.0),
            islamic_terms,
            respectful_terms,
            sensitivity: SENSITIVITY_BASELINE,
            is_appropriate: SENSITIVITY_BASELINE >= 80.0,
        }
    }

    fn analyze_readability(&self, text: &str) -> ReadabilityReport {
        let sentences = split_sentences(text);
        let words: Vec<&str> = text.split_whitespace().collect();

        if sentences.is_empty() || words.is_empty() {
            return ReadabilityReport {
                score: 0.0,
                grade_level: GradeLevel::Unknown,
                average_sentence_length: 0.0,
                average_word_length: 0.0,
                complexity: ComplexityLevel::Low,
            };
        }

        let average_sentence_length = words.len() as f64 / sentences.len() as f64;
        let total_len: usize = words.iter().map(|w| w.chars().count()).sum();
        let average_word_length = total_len as f64 / words.len() as f64;

        let raw = 100.0 - (1.015 * average_sentence_length + 84.6 * average_word_length / 4.7);
        let score = raw.clamp(0.0, 100.0);

        let grade_level = if score >= 90.0 {
            GradeLevel::Elementary
        } else if score >= 80.0 {
            GradeLevel::MiddleSchool
        } else if score >= 70.0 {
            GradeLevel::HighSchool
        } else if score >= 60.0 {
            GradeLevel::College
        } else {
            GradeLevel::Graduate
        };

        let complexity = if average_word_length > 6.0 {
            ComplexityLevel::High
        } else if average_word_length > 4.0 {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::Low
        };

        ReadabilityReport {
            score: round1(score),
            grade_level,
            average_sentence_length: round1(average_sentence_length),
            average_word_length: round1(average_word_length),
            complexity,
        }
    }

    fn analyze_professional(&self, text: &str) -> ProfessionalReport {
        let text_lower = text.to_lowercase();

        let mut indicator_count = self
            .lexicon
            .formal_patterns
            .iter()
            .filter(|pattern| text_lower.contains(pattern.as_str()))
            .count();
        indicator_count += self
            .lexicon
            .academic_words
            .iter()
            .filter(|word| text_lower.contains(word.as_str()))
            .count();

        let has_citations = self.citation.is_match(text);
        if has_citations {
            indicator_count += 2;
        }

        let score = (indicator_count as f64 * 10.0).min(100.0);

        ProfessionalReport {
            score,
            indicator_count,
            has_citations,
            is_professional_level: score >= 70.0,
        }
    }
}

impl EnterpriseReport {
    /// The defined result for empty input: every score zero, no matches.
    fn zero() -> Self {
        Self {
            word_count: 0,
            char_count: 0,
            grammar: GrammarReport {
                score: 0.0,
                issues: Vec::new(),
                sentence_count: 0,
                average_sentence_length: 0.0,
                particle_count: 0,
                has_terminal_punctuation: false,
            },
            vocabulary: VocabularyReport {
                score: 0.0,
                categories: Vec::new(),
                diversity_ratio: 0.0,
                unique_words: 0,
                total_words: 0,
                average_word_length: 0.0,
                complex_words: 0,
                complexity_ratio: 0.0,
            },
            dialect: WeightedDialectReport {
                primary: Dialect::Unknown,
                confidence: 0.0,
                breakdown: Vec::new(),
                is_standard: false,
            },
            cultural: CulturalReport {
                score: 0.0,
                islamic_terms: Vec::new(),
                respectful_terms: Vec::new(),
                sensitivity: 0.0,
                is_appropriate: false,
            },
            readability: ReadabilityReport {
                score: 0.0,
                grade_level: GradeLevel::Unknown,
                average_sentence_length: 0.0,
                average_word_length: 0.0,
                complexity: ComplexityLevel::Low,
            },
            professional: ProfessionalReport {
                score: 0.0,
                indicator_count: 0,
                has_citations: false,
                is_professional_level: false,
            },
            metrics: EnterpriseMetrics {
                accuracy: 0.0,
                professionalism: 0.0,
                cultural_appropriateness: 0.0,
                business_readiness: 0.0,
                overall: 0.0,
            },
        }
    }
}

/// Combine the sub-reports into the aggregate metrics.
///
/// Aggregates are computed from the reported (one-decimal) sub-scores, so a
/// serialized report always agrees with its own metrics.
fn compute_metrics(
    grammar: &GrammarReport,
    vocabulary: &VocabularyReport,
    dialect: &WeightedDialectReport,
    cultural: &CulturalReport,
    readability: &ReadabilityReport,
    professional: &ProfessionalReport,
) -> EnterpriseMetrics {
    let accuracy = round1(
        grammar.score * 0.30
            + vocabulary.score * 0.25
            + cultural.score * 0.20
            + readability.score * 0.15
            + professional.score * 0.10,
    );

    let mut professionalism = professional.score;
    if cultural.is_appropriate {
        professionalism += 10.0;
    }
    if dialect.is_standard {
        professionalism += 5.0;
    }
    professionalism -= grammar.issues.len() as f64 * 2.0;
    let professionalism = round1(professionalism.min(100.0));

    let cultural_appropriateness = round1(cultural.sensitivity);

    let mut business_readiness = 0.0;
    if grammar.score >= 80.0 {
        business_readiness += 30.0;
    }
    if vocabulary.score >= 70.0 {
        business_readiness += 25.0;
    }
    if cultural.is_appropriate {
        business_readiness += 20.0;
    }
    if readability.score >= 60.0 {
        business_readiness += 15.0;
    }
    if professional.is_professional_level {
        business_readiness += 10.0;
    }
    let business_readiness = round1(business_readiness);

    let overall = round1(
        accuracy * 0.30
            + professionalism * 0.25
            + cultural_appropriateness * 0.20
            + business_readiness * 0.25,
    );

    EnterpriseMetrics {
        accuracy,
        professionalism,
        cultural_appropriateness,
        business_readiness,
        overall,
    }
}

impl Analyze for EnterpriseAnalyzer {
    type Report = EnterpriseReport;

    fn analyze(&self, text: &str) -> EnterpriseReport {
        EnterpriseAnalyzer::analyze(self, text)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{ComplexityLevel, EnterpriseAnalyzer, GradeLevel};
    use crate::analysis::{Dialect, Lexicon};

    fn analyzer() -> EnterpriseAnalyzer {
        EnterpriseAnalyzer::with_builtin()
    }

    #[test]
    fn empty_text_yields_all_zero_report() {
        let report = analyzer().analyze("   ");
        assert_eq!(report.word_count, 0);
        assert_eq!(report.grammar.score, 0.0);
        assert_eq!(report.vocabulary.score, 0.0);
        assert_eq!(report.dialect.primary, Dialect::Unknown);
        assert_eq!(report.readability.grade_level, GradeLevel::Unknown);
        assert_eq!(report.metrics.overall, 0.0);
    }

    #[test]
    fn grammar_credits_svo_particles_and_punctuation() {
        let report = analyzer().analyze("Nin waa socday. Isagu wuxuu tegay suuqa magaalada si deg deg ah.");
        // SVO (+20), particle (+15) and punctuation (+10) pass; no plural
        // suffix, and the 6-word sentence average misses the 8-20 band.
        assert_eq!(report.grammar.score, 45.0);
        assert!(report.grammar.has_terminal_punctuation);
        assert!(report.grammar.particle_count >= 1);
        assert!(!report
            .grammar
            .issues
            .iter()
            .any(|i| i.contains("punctuation")));
    }

    #[test]
    fn grammar_records_issues_for_failed_checks() {
        let report = analyzer().analyze("qof tegay");
        let issues = &report.grammar.issues;
        assert!(issues.iter().any(|i| i.contains("Subject-Verb-Object")));
        assert!(issues.iter().any(|i| i.contains("particles")));
        assert!(issues.iter().any(|i| i.contains("punctuation")));
        assert!(issues.iter().any(|i| i.contains("too short")));
    }

    #[test]
    fn grammar_flags_overlong_sentences() {
        let long = format!("{}.", "eray ".repeat(30).trim_end());
        let report = analyzer().analyze(&long);
        assert!(report
            .grammar
            .issues
            .iter()
            .any(|i| i.contains("too long")));
    }

    #[test]
    fn vocabulary_awards_ten_points_per_match() {
        // "dowlad" (government) and "ganacsi" (business): 2 matches.
        let report = analyzer().analyze("dowlad iyo ganacsi");
        assert_eq!(report.vocabulary.score, 20.0);
        assert_eq!(report.vocabulary.categories.len(), 2);
    }

    #[test]
    fn vocabulary_strips_punctuation_before_matching() {
        let report = analyzer().analyze("Dowlad, ganacsi!");
        assert_eq!(report.vocabulary.score, 20.0);
    }

    #[test]
    fn vocabulary_ratios_for_known_text() {
        let report = analyzer().analyze("suuq suuq weyn");
        assert_eq!(report.vocabulary.total_words, 3);
        assert_eq!(report.vocabulary.unique_words, 2);
        assert_eq!(report.vocabulary.diversity_ratio, 0.667);
        // Both "suuq" occurrences match the business category.
        assert_eq!(report.vocabulary.score, 20.0);
    }

    #[test]
    fn weighted_dialect_higher_raw_score_wins() {
        // "waa" hits Standard (1.0 * 0.8 = 0.8) and "yahay" hits Northern
        // (0.9 * 0.7 = 0.63).
        let report = analyzer().analyze("waa yahay");
        assert_eq!(report.dialect.primary, Dialect::Standard);
        assert!(report.dialect.is_standard);
        assert_eq!(report.dialect.breakdown.len(), 2);
    }

    #[test]
    fn weighted_dialect_tie_breaks_in_profile_order() {
        // Equalize all profile weights so one indicator hit per profile
        // produces an exact raw-score tie.
        let mut lexicon = Lexicon::builtin();
        for profile in &mut lexicon.dialect_profiles {
            profile.weight = 1.0;
            profile.confidence_boost = 0.5;
        }
        let analyzer = EnterpriseAnalyzer::new(Arc::new(lexicon));

        // "yahay" (Northern) and "kale" (Southern) both score 0.5; the
        // earlier-declared Northern profile keeps the win.
        let report = analyzer.analyze("yahay kale");
        assert_eq!(report.dialect.primary, Dialect::Northern);
        assert_eq!(report.dialect.breakdown.len(), 2);
        assert!(!report.dialect.is_standard);
    }

    #[test]
    fn weighted_dialect_confidence_scales_with_matches() {
        // All five Standard indicators: raw = 5 * 0.8 = 4.0, confidence 40.
        let report = analyzer().analyze("waa baa ayaa waxa waxaa");
        assert_eq!(report.dialect.primary, Dialect::Standard);
        assert_eq!(report.dialect.confidence, 40.0);
    }

    #[test]
    fn weighted_dialect_unknown_without_indicators() {
        let report = analyzer().analyze("zzz qqq");
        assert_eq!(report.dialect.primary, Dialect::Unknown);
        assert_eq!(report.dialect.confidence, 0.0);
        assert!(report.dialect.breakdown.is_empty());
    }

    #[test]
    fn cultural_scores_islamic_and_respectful_terms() {
        // "alhamdulillah" (+5) and "fadlan" (+3).
        let report = analyzer().analyze("alhamdulillah fadlan");
        assert_eq!(report.cultural.score, 8.0);
        assert_eq!(report.cultural.sensitivity, 100.0);
        assert!(report.cultural.is_appropriate);
    }

    #[test]
    fn readability_grades_short_simple_text_high() {
        // 3 words, 1 sentence, avg word length 11/3:
        // 100 - (1.015*3 + 84.6*(11/3)/4.7) = 30.955 -> Graduate band.
        let report = analyzer().analyze("waa dal weyn.");
        assert_eq!(report.readability.score, 31.0);
        assert_eq!(report.readability.grade_level, GradeLevel::Graduate);
        assert_eq!(report.readability.complexity, ComplexityLevel::Low);
    }

    #[test]
    fn readability_grade_bands() {
        // Terminal punctuation either rides on a word (average word length 2)
        // or stands alone as its own token (average sentence length 2), so
        // the formula tops out just under 80 and High School is the highest
        // reachable band.
        let report = analyzer().analyze("a a a a.");
        // 4 words, avg word length 1.25: 100 - (4.06 + 22.5) = 73.44.
        assert_eq!(report.readability.score, 73.4);
        assert_eq!(report.readability.grade_level, GradeLevel::HighSchool);

        let report = analyzer().analyze("a.");
        // 1 word of length 2: 100 - (1.015 + 36) = 62.985.
        assert_eq!(report.readability.score, 63.0);
        assert_eq!(report.readability.grade_level, GradeLevel::College);
    }

    #[test]
    fn readability_band_edge_at_seventy() {
        // Ten one-letter words score 70.05; an eleventh drops it to 69.2.
        // The pair straddles the High School / College boundary.
        let high = analyzer().analyze("a a a a a a a a a a.");
        assert_eq!(high.readability.grade_level, GradeLevel::HighSchool);

        let college = analyzer().analyze("a a a a a a a a a a a.");
        assert_eq!(college.readability.grade_level, GradeLevel::College);
    }

    #[test]
    fn readability_clamps_to_zero_for_dense_text() {
        let dense = format!("{}.", "qaansoroobaad ".repeat(40).trim_end());
        let report = analyzer().analyze(&dense);
        assert_eq!(report.readability.score, 0.0);
        assert_eq!(report.readability.grade_level, GradeLevel::Graduate);
        assert_eq!(report.readability.complexity, ComplexityLevel::High);
    }

    #[test]
    fn professional_counts_patterns_and_citations() {
        // "waxaa" matches both "waxaa" and "waxa" as substrings (2),
        // "cilmi" (1), plus the year citation (+2): 5 indicators, score 50.
        let report = analyzer().analyze("Waxaa la sameeyay cilmi baaris sanadkii 2023");
        assert!(report.professional.has_citations);
        // "baaritaan" does not match "baaris"; indicators: waxaa, waxa, cilmi + 2.
        assert_eq!(report.professional.indicator_count, 5);
        assert_eq!(report.professional.score, 50.0);
        assert!(!report.professional.is_professional_level);
    }

    #[test]
    fn aggregate_metrics_recompute_from_sub_scores() {
        let report = analyzer().analyze(
            "Dowladda iyo ganacsatadu waxay ka wada shaqeeyaan horumarinta waxbarashada dalka. \
             Waxaa jira dhakhaatiir iyo macallimiin cusub.",
        );
        let m = &report.metrics;

        let expected_accuracy = super::round1(
            report.grammar.score * 0.30
                + report.vocabulary.score * 0.25
                + report.cultural.score * 0.20
                + report.readability.score * 0.15
                + report.professional.score * 0.10,
        );
        assert_eq!(m.accuracy, expected_accuracy);

        let expected_overall = super::round1(
            m.accuracy * 0.30
                + m.professionalism * 0.25
                + m.cultural_appropriateness * 0.20
                + m.business_readiness * 0.25,
        );
        assert_eq!(m.overall, expected_overall);
        assert_eq!(m.cultural_appropriateness, 100.0);
    }

    #[test]
    fn overall_score_is_bounded() {
        let analyzer = analyzer();
        for text in [
            "a",
            "waa baa ayaa waxaa dowlad ganacsi cilmi (2024).",
            "Assalamu calaykum mudane guddoomiye, fadlan waxaa la gaaray heshiis.",
            &"dowlad xukuumad wasiir golaha baarlamaan ganacsato macmiil suuq. ".repeat(5),
        ] {
            let report = analyzer.analyze(text);
            assert!(
                (0.0..=100.0).contains(&report.metrics.overall),
                "overall {} out of range for {text:?}",
                report.metrics.overall
            );
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let analyzer = analyzer();
        let text = "Waxaa jira dowlad iyo ganacsi. Alhamdulillah waa wanaagsan tahay.";
        let a = serde_json::to_string(&analyzer.analyze(text)).unwrap();
        let b = serde_json::to_string(&analyzer.analyze(text)).unwrap();
        assert_eq!(a, b);
    }
}
