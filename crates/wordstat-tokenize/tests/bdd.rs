use wordstat_tokenize::{PunctuationSet, classify, is_numeric, strip_punctuation, tokenize};

#[test]
fn given_sample_sentence_when_tokenized_then_nine_tokens_are_produced() {
    let tokens: Vec<&str> = tokenize("Hello world & good morning. The date is 18/05/2016").collect();
    assert_eq!(tokens.len(), 9);
    assert_eq!(tokens[4], "morning.");
    assert_eq!(tokens[8], "18/05/2016");
}

#[test]
fn given_date_with_slashes_when_classified_then_it_is_a_ten_char_word() {
    let set = PunctuationSet::default();
    let word = classify("18/05/2016", &set).unwrap();
    assert_eq!(word, "18/05/2016");
    assert_eq!(word.chars().count(), 10);
}

#[test]
fn given_dotted_date_when_classified_then_it_is_numeric() {
    let set = PunctuationSet::default();
    assert_eq!(classify("18.05.2016", &set), None);
}

#[test]
fn given_custom_set_when_stripping_then_only_those_chars_are_removed() {
    let set = PunctuationSet::new("/");
    assert_eq!(strip_punctuation("18/05/2016.", &set), "18052016.");
    assert_eq!(classify("18/05/2016", &set), None);
}

#[test]
fn given_empty_set_when_stripping_then_token_is_unchanged() {
    let set = PunctuationSet::new("");
    assert!(set.is_empty());
    assert_eq!(strip_punctuation("a.b", &set), "a.b");
}

#[test]
fn given_non_ascii_decimal_digits_when_checked_then_they_are_numeric() {
    assert!(is_numeric("١٢٣"));
    assert!(!is_numeric("²"));
}

#[test]
fn given_arabic_and_fullwidth_years_when_classified_then_they_are_dropped() {
    let set = PunctuationSet::default();
    assert_eq!(classify("٢٠١٦.", &set), None);
    assert_eq!(classify("(４２)", &set), None);
    assert_eq!(classify("word", &set).as_deref(), Some("word"));
}

#[test]
fn given_non_breaking_space_when_tokenized_then_it_joins_the_token() {
    let tokens: Vec<&str> = tokenize("a\u{00A0}b\tc").collect();
    assert_eq!(tokens, vec!["a\u{00A0}b", "c"]);
}

#[test]
fn given_case_and_symbols_when_stripped_then_they_are_preserved() {
    let set = PunctuationSet::default();
    assert_eq!(strip_punctuation("It's-OK!", &set), "It'sOK!");
}
