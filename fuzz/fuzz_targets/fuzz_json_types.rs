#![no_main]

use libfuzzer_sys::fuzz_target;
use wordstat_types::{AnalysisReceipt, AnalysisResult};

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }

    // Anything that deserializes must serialize back to an equal result.
    if let Ok(result) = serde_json::from_slice::<AnalysisResult>(data) {
        assert!(result.count() > 0);
        assert!(!result.most_frequent_lengths().is_empty());
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    let _ = serde_json::from_slice::<AnalysisReceipt>(data);
});
