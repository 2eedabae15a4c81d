#![no_main]

use libfuzzer_sys::fuzz_target;
use wordstat_analysis::{AnalysisOptions, ErrorKind, analyse_reader, analyse_text};
use wordstat_tokenize::{DEFAULT_PUNCTUATION, classify, tokenize, word_length};

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let text = String::from_utf8_lossy(data);
    let options = AnalysisOptions::default();

    let bulk = analyse_text(&text, &options);
    let streamed = analyse_reader(data, "fuzz", &options);

    let expected_words = tokenize(&text)
        .filter(|t| classify(t, &options.punctuation).is_some())
        .count();

    match (bulk, streamed) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            assert_eq!(a.count(), expected_words);
            assert_eq!(a.words_of_length().values().sum::<usize>(), a.count());
            assert!(!a.most_frequent_lengths().is_empty());
            assert!(a.words_of_length().keys().all(|len| *len > 0));
        }
        (Err(a), Err(b)) => {
            assert_eq!(a.kind(), ErrorKind::EmptyAnalysis);
            assert_eq!(b.kind(), ErrorKind::EmptyAnalysis);
            assert_eq!(expected_words, 0);
        }
        (a, b) => panic!("bulk and streamed runs disagree: {a:?} vs {b:?}"),
    }

    // Surviving words never carry default punctuation.
    for token in tokenize(&text) {
        if let Some(word) = classify(token, &options.punctuation) {
            assert!(!word.chars().any(|c| DEFAULT_PUNCTUATION.contains(c)));
            assert!(word_length(&word) > 0);
        }
    }
});
