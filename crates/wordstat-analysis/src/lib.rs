//! # wordstat-analysis
//!
//! **Tier 2 (Analysis)**
//!
//! Consumes tokens, keeps the words, and produces one [`AnalysisResult`].
//!
//! ## What belongs here
//! * The per-run accumulator ([`Analyser`])
//! * In-memory and buffered-reader entry points
//! * The error taxonomy of a run ([`AnalysisError`])
//!
//! ## What does NOT belong here
//! * Source resolution (see `wordstat-source`)
//! * Report rendering (see `wordstat-format`)

mod error;

use std::collections::BTreeMap;
use std::io::BufRead;

use tracing::{debug, trace};
use wordstat_tokenize::{PunctuationSet, classify, tokenize, word_length};
pub use wordstat_types::{AnalysisResult, DEFAULT_PRECISION};

pub use error::{AnalysisError, ErrorKind};

/// Knobs for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub punctuation: PunctuationSet,
    /// Fractional digits of the average word length.
    pub precision: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            punctuation: PunctuationSet::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Running totals for one analysis.
///
/// Feed tokens with [`push_token`](Self::push_token) or whole chunks of text
/// with [`push_text`](Self::push_text), then call [`finish`](Self::finish).
#[derive(Debug, Clone)]
pub struct Analyser {
    options: AnalysisOptions,
    count: usize,
    total_length: usize,
    rejected: usize,
    histogram: BTreeMap<usize, usize>,
}

impl Analyser {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            count: 0,
            total_length: 0,
            rejected: 0,
            histogram: BTreeMap::new(),
        }
    }

    /// Classify one token; returns `true` if it was counted as a word.
    pub fn push_token(&mut self, token: &str) -> bool {
        match classify(token, &self.options.punctuation) {
            Some(word) => {
                let len = word_length(&word);
                trace!(token, len, "word");
                self.count += 1;
                self.total_length += len;
                *self.histogram.entry(len).or_insert(0) += 1;
                true
            }
            None => {
                trace!(token, "numeric");
                self.rejected += 1;
                false
            }
        }
    }

    /// Tokenize `text` and push every token.
    ///
    /// Chunks must be split on whitespace, or a word could be cut in two.
    pub fn push_text(&mut self, text: &str) {
        for token in tokenize(text) {
            self.push_token(token);
        }
    }

    /// Words accepted so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Tokens rejected as numeric (or empty after stripping) so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Close the run.
    ///
    /// Fails with [`AnalysisError::EmptyAnalysis`] when no word was accepted.
    pub fn finish(self) -> Result<AnalysisResult, AnalysisError> {
        debug!(
            words = self.count,
            rejected = self.rejected,
            total_length = self.total_length,
            "analysis finished"
        );
        if self.count == 0 {
            return Err(AnalysisError::EmptyAnalysis);
        }
        let result = AnalysisResult::from_histogram(self.histogram, self.options.precision)
            .ok_or(AnalysisError::EmptyAnalysis)?;
        debug_assert_eq!(result.count(), self.count);
        debug_assert_eq!(result.total_length(), self.total_length);
        Ok(result)
    }
}

impl Default for Analyser {
    fn default() -> Self {
        Self::new(AnalysisOptions::default())
    }
}

/// Analyse an already tokenized sequence.
pub fn analyse_tokens<'a, I>(
    tokens: I,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut analyser = Analyser::new(options.clone());
    for token in tokens {
        analyser.push_token(token);
    }
    analyser.finish()
}

/// Tokenize and analyse a complete text.
pub fn analyse_text(
    text: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError> {
    analyse_tokens(tokenize(text), options)
}

/// Analyse a reader one line at a time.
///
/// Each line is decoded as UTF-8 with invalid sequences replaced. Read
/// failures are reported against `source_id`.
pub fn analyse_reader<R: BufRead>(
    mut reader: R,
    source_id: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError> {
    let mut analyser = Analyser::new(options.clone());
    let mut line = Vec::new();
    let mut bytes = 0usize;
    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| AnalysisError::from_io(source_id, e))?;
        if n == 0 {
            break;
        }
        bytes += n;
        analyser.push_text(&String::from_utf8_lossy(&line));
    }
    debug!(source = source_id, bytes, "stream consumed");
    analyser.finish()
}
