//! # wordstat-core
//!
//! This crate is the **primary library interface** for `wordstat`.
//! It coordinates source resolution, loading, tokenization and analysis.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordstat_core::{analyse, settings::AnalyzeSettings};
//!
//! let result = analyse(&AnalyzeSettings::for_source("notes.txt")).expect("analysis failed");
//! println!("{} words", result.count());
//! ```

use tracing::info;

pub use wordstat_analysis::{AnalysisError, AnalysisOptions, ErrorKind};
pub use wordstat_settings as settings;
pub use wordstat_types as types;

use wordstat_settings::AnalyzeSettings;
use wordstat_tokenize::PunctuationSet;
use wordstat_types::{AnalysisArgsMeta, AnalysisReceipt, AnalysisResult};

/// Build analysis options from settings.
pub fn options_from(settings: &AnalyzeSettings) -> AnalysisOptions {
    AnalysisOptions {
        punctuation: PunctuationSet::new(&settings.punctuation),
        precision: settings.effective_precision(),
    }
}

/// Runs the complete workflow: Resolve -> Load -> Tokenize -> Analyse.
///
/// A failed run yields no partial result.
pub fn analyse(settings: &AnalyzeSettings) -> Result<AnalysisResult, AnalysisError> {
    let source = wordstat_source::resolve(settings.source.as_deref())?;
    let options = options_from(settings);

    let result = if settings.stream {
        let reader = wordstat_source::open_reader(&source)?;
        wordstat_analysis::analyse_reader(reader, source.id(), &options)?
    } else {
        let text = wordstat_source::load_text(&source)?;
        wordstat_analysis::analyse_text(&text, &options)?
    };

    info!(
        source = source.id(),
        words = result.count(),
        average = %result.average_length(),
        "analysed source"
    );
    Ok(result)
}

/// Analyse in-memory text with the punctuation and precision of `settings`.
///
/// `settings.source` and `settings.stream` are ignored.
pub fn analyse_str(
    text: &str,
    settings: &AnalyzeSettings,
) -> Result<AnalysisResult, AnalysisError> {
    wordstat_analysis::analyse_text(text, &options_from(settings))
}

/// Run [`analyse`] and wrap the result in a JSON receipt.
pub fn analyse_receipt(settings: &AnalyzeSettings) -> Result<AnalysisReceipt, AnalysisError> {
    let report = analyse(settings)?;
    let args = AnalysisArgsMeta {
        punctuation: PunctuationSet::new(&settings.punctuation).as_string(),
        precision: settings.effective_precision(),
        stream: settings.stream,
    };
    Ok(wordstat_format::create_receipt(
        settings.source.as_deref().unwrap_or_default(),
        args,
        report,
    ))
}
