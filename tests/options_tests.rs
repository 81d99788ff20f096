use pagebrief::core::models::{
    Language, LengthInput, PageText, SessionOptions, SummaryRequest, DEFAULT_SUMMARY_LENGTH,
};

#[test]
fn test_resolve_uses_parsed_value_for_positive_digits() {
    for (raw, expected) in [("1", 1), ("80", 80), ("150", 150), ("999", 999)] {
        let input = LengthInput::from_raw(raw);
        assert_eq!(input.resolve(), expected, "raw input {raw:?}");
    }
}

#[test]
fn test_resolve_falls_back_to_default_for_empty_or_zero() {
    assert_eq!(LengthInput::from_raw("").resolve(), DEFAULT_SUMMARY_LENGTH);
    assert_eq!(LengthInput::from_raw("0").resolve(), DEFAULT_SUMMARY_LENGTH);
    // Filtered-out input leaves the empty state behind
    assert_eq!(
        LengthInput::from_raw("eighty").resolve(),
        DEFAULT_SUMMARY_LENGTH
    );
}

#[test]
fn test_resolve_saturates_digit_strings_beyond_u32() {
    // The filter accepts digit strings of any length; resolution must honor
    // them rather than fall back to the default.
    let input = LengthInput::from_raw("4294967296");
    assert_eq!(input.raw(), "4294967296");
    assert_eq!(input.resolve(), u32::MAX);
    assert!(!input.is_default());

    assert_eq!(
        LengthInput::from_raw("99999999999999999999999999").resolve(),
        u32::MAX
    );
    // u32::MAX itself still parses exactly
    assert_eq!(LengthInput::from_raw("4294967295").resolve(), u32::MAX);
}

#[test]
fn test_default_indicator() {
    assert!(LengthInput::from_raw("").is_default());
    assert!(LengthInput::from_raw("150").is_default());
    assert!(!LengthInput::from_raw("80").is_default());
}

#[test]
fn test_non_digit_keystrokes_never_change_stored_value() {
    let mut input = LengthInput::from_raw("12");
    for c in ['a', ' ', '-', '.', '!', 'é'] {
        input.push(c);
        assert_eq!(input.raw(), "12", "keystroke {c:?} must be rejected");
    }
    input.push('3');
    assert_eq!(input.raw(), "123");
}

#[test]
fn test_set_rejects_mixed_strings_wholesale() {
    let mut input = LengthInput::from_raw("42");
    for candidate in ["4a", "１２", "12 ", "-5", "+5", "1.5"] {
        input.set(candidate);
        assert_eq!(input.raw(), "42", "candidate {candidate:?} must be rejected");
    }
}

#[test]
fn test_language_names_match_prompt_wording() {
    let expected = [
        (Language::English, "English"),
        (Language::Spanish, "Spanish"),
        (Language::French, "French"),
        (Language::German, "German"),
        (Language::Italian, "Italian"),
        (Language::Latvian, "Latvian"),
    ];
    for (language, name) in expected {
        assert_eq!(language.as_str(), name);
        assert_eq!(language.to_string(), name);
    }
}

#[test]
fn test_summary_request_resolves_options() {
    let options = SessionOptions {
        language: Some(Language::French),
        length: LengthInput::from_raw("80"),
        ..SessionOptions::default()
    };
    let text = PageText::new("Bonjour tout le monde").unwrap();
    let request = SummaryRequest::new(text, &options).unwrap();
    assert_eq!(request.language, Language::French);
    assert_eq!(request.max_words, 80);
}

#[test]
fn test_summary_request_defaults_length_silently() {
    let options = SessionOptions {
        language: Some(Language::English),
        ..SessionOptions::default()
    };
    let text = PageText::new("page body").unwrap();
    let request = SummaryRequest::new(text, &options).unwrap();
    assert_eq!(request.max_words, DEFAULT_SUMMARY_LENGTH);
}
