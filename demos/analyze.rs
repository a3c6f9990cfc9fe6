use std::sync::Arc;

use somali_nlp_rs::analysis::{DialectClassifier, EnterpriseAnalyzer, Lexicon, TextScorer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let lexicon = Arc::new(Lexicon::builtin());
    let scorer = TextScorer::new(lexicon.clone());
    let classifier = DialectClassifier::new(lexicon.clone());
    let analyzer = EnterpriseAnalyzer::new(lexicon);

    let text = "Dowladda iyo ganacsatadu waxay ka wada shaqeeyaan horumarinta waxbarashada dalka. \
                Waxaa jira macallimiin iyo dhakhaatiir cusub oo ka howlgala gobollada.";

    let quality = scorer.score(text);
    println!(
        "Quality: {} (length {}, diversity {}, structure {}, complexity {})",
        quality.overall,
        quality.length,
        quality.character_diversity,
        quality.structure,
        quality.complexity
    );

    let dialect = classifier.classify(text);
    println!(
        "Dialect: {} ({}%), indicators: {:?}",
        dialect.dialect, dialect.confidence, dialect.matched_indicators
    );

    let report = analyzer.analyze(text);
    println!(
        "Enterprise: overall {}, accuracy {}, business readiness {}",
        report.metrics.overall, report.metrics.accuracy, report.metrics.business_readiness
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
