//! BDD-style scenarios for the analysis result and receipt contracts.

use std::collections::BTreeMap;

use wordstat_types::{
    AnalysisArgsMeta, AnalysisReceipt, AnalysisResult, DEFAULT_PRECISION, OutputFormat,
    SCHEMA_VERSION, ToolInfo,
};

fn sample() -> AnalysisResult {
    let hist: BTreeMap<usize, usize> =
        [(1, 1), (2, 1), (3, 1), (4, 3), (5, 3), (7, 3), (10, 1)].into_iter().collect();
    AnalysisResult::from_histogram(hist, DEFAULT_PRECISION).unwrap()
}

mod derived_statistics {
    use super::*;

    #[test]
    fn given_three_tied_lengths_when_built_then_all_are_most_frequent() {
        let result = sample();
        assert_eq!(result.count(), 13);
        assert_eq!(result.average_length().to_string(), "4.923");
        assert_eq!(result.most_frequent_length(), 3);
        assert_eq!(result.most_frequent_lengths(), &[4, 5, 7]);
    }

    #[test]
    fn given_single_bucket_when_built_then_it_is_the_only_mode() {
        let hist: BTreeMap<usize, usize> = [(6, 4)].into_iter().collect();
        let result = AnalysisResult::from_histogram(hist, 3).unwrap();
        assert_eq!(result.average_length().to_string(), "6.000");
        assert_eq!(result.most_frequent_length(), 4);
        assert_eq!(result.most_frequent_lengths(), &[6]);
    }

    #[test]
    fn given_precision_when_built_then_average_uses_it() {
        let hist: BTreeMap<usize, usize> = [(1, 1), (2, 1)].into_iter().collect();
        let result = AnalysisResult::from_histogram(hist, 1).unwrap();
        assert_eq!(result.average_length().to_string(), "1.5");
    }
}

mod json {
    use super::*;

    #[test]
    fn given_result_when_serialized_then_histogram_keys_are_ascending_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["count"], 13);
        assert_eq!(json["average_length"], "4.923");
        let keys: Vec<&String> = json["words_of_length"].as_object().unwrap().keys().collect();
        assert_eq!(keys.first().map(|k| k.as_str()), Some("1"));
        assert_eq!(json["most_frequent_lengths"], serde_json::json!([4, 5, 7]));
    }

    #[test]
    fn given_serialized_result_when_deserialized_then_it_is_identical() {
        let result = sample();
        let text = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn given_tampered_count_when_deserialized_then_it_is_rejected() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["count"] = serde_json::json!(99);
        let err = serde_json::from_value::<AnalysisResult>(json).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn given_empty_histogram_when_deserialized_then_it_is_rejected() {
        let json = serde_json::json!({
            "count": 0,
            "total_length": 0,
            "average_length": "0.000",
            "words_of_length": {}
        });
        assert!(serde_json::from_value::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn given_overflowing_histogram_when_deserialized_then_it_is_rejected() {
        let json = serde_json::json!({
            "count": 1,
            "total_length": 1,
            "average_length": "1.000",
            "words_of_length": { "1": usize::MAX, "2": 1 }
        });
        let err = serde_json::from_value::<AnalysisResult>(json).unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn given_receipt_when_serialized_then_envelope_fields_are_present() {
        let receipt = AnalysisReceipt {
            schema_version: SCHEMA_VERSION,
            generated_at_ms: 0,
            tool: ToolInfo::current(),
            source: "short_2.txt".to_string(),
            args: AnalysisArgsMeta {
                punctuation: "-+.^:?,=()".to_string(),
                precision: 3,
                stream: false,
            },
            report: sample(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["schema_version"], SCHEMA_VERSION);
        assert_eq!(json["tool"]["name"], "wordstat");
        assert_eq!(json["report"]["count"], 13);
    }

    #[test]
    fn output_format_uses_kebab_case() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
    }
}
