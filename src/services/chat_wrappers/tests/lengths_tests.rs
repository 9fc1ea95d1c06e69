use super::*;

#[test]
fn test_from_template_measures_three_regions() {
    let lengths = FmtStrLengths::from_template("AB%s1CD%s2EF").unwrap();
    assert_eq!(lengths, FmtStrLengths::new(2, 2, 2));
}

#[test]
fn test_from_template_counts_control_byte_in_prefix() {
    let lengths = FmtStrLengths::from_template("\u{1}*DEAD* %s1 :  %s2").unwrap();
    assert_eq!(lengths, FmtStrLengths::new(8, 4, 0));
}

#[test]
fn test_from_template_counts_bytes() {
    // "ÄÖ" is four bytes
    let lengths = FmtStrLengths::from_template("ÄÖ%s1%s2").unwrap();
    assert_eq!(lengths, FmtStrLengths::new(4, 0, 0));
}

#[test]
fn test_from_template_missing_message_placeholder() {
    assert_eq!(
        FmtStrLengths::from_template("%s1 said nothing"),
        Err(TemplateError::MissingMessage)
    );
}

#[test]
fn test_available_bytes_subtracts_fixed_limits() {
    assert_eq!(FmtStrLengths::default().available_bytes(), 95);
    assert_eq!(FmtStrLengths::new(10, 4, 1).available_bytes(), 80);
}

#[test]
fn test_available_bytes_clamps_to_zero() {
    assert_eq!(FmtStrLengths::new(50, 40, 5).available_bytes(), 0);
    assert_eq!(FmtStrLengths::new(200, 200, 200).available_bytes(), 0);
    assert_eq!(FmtStrLengths::new(usize::MAX, 1, 1).available_bytes(), 0);
}

#[test]
fn test_max_is_element_wise() {
    let a = FmtStrLengths::new(5, 1, 9);
    let b = FmtStrLengths::new(2, 7, 3);
    assert_eq!(a.max(b), FmtStrLengths::new(5, 7, 9));
}

#[test]
fn test_wrapper_length_is_fixed() {
    assert_eq!(FmtStrLengths::new(90, 0, 0).max_wrapper_length(), WRAPPER_LENGTH);
    // Every alphabet character is three bytes in UTF-8.
    assert_eq!(FmtStrLengths::default().required_wrapper_bytes(), WRAPPER_LENGTH * 3 * 6);
}

#[test]
fn test_include_skips_bad_template_but_keeps_previous_budget() {
    let mut lengths = ChatFmtStrLengths::default();

    assert!(lengths.include(ChatCategory::Team, "(TEAM) %s1 : %s2", "test"));
    assert!(!lengths.include(ChatCategory::Team, "broken %s1", "test"));

    assert_eq!(*lengths.get(ChatCategory::Team), FmtStrLengths::new(7, 3, 0));
}

#[test]
fn test_from_format_strings_uses_both_tiers() {
    let mut formats = ChatFormatStrings::default();
    formats.set(LocaleTier::English, ChatCategory::All, "%s1 :  %s2");
    formats.set(LocaleTier::Localized, ChatCategory::All, "[ALLE] %s1: %s2");
    formats.set(LocaleTier::English, ChatCategory::Coach, "%s1 missing");

    let lengths = ChatFmtStrLengths::from_format_strings(&formats, "german");

    assert_eq!(*lengths.get(ChatCategory::All), FmtStrLengths::new(7, 4, 0));
    assert_eq!(*lengths.get(ChatCategory::Coach), FmtStrLengths::default());
}

#[test]
fn test_merged_budget_never_understates_any_source() {
    let mut german = ChatFmtStrLengths::default();
    german.include(ChatCategory::All, "%s1 sagt: %s2 (alle)", "german");
    let mut russian = ChatFmtStrLengths::default();
    russian.include(ChatCategory::All, "(ВСЕМ) %s1 : %s2", "russian");

    let merged = german.max(&russian);

    for source in [&german, &russian] {
        let merged_all = merged.get(ChatCategory::All);
        let source_all = source.get(ChatCategory::All);
        assert!(merged_all.prefix >= source_all.prefix);
        assert!(merged_all.separator >= source_all.separator);
        assert!(merged_all.suffix >= source_all.suffix);
    }
}

#[test]
fn test_categories_without_room_flags_crowded_templates() {
    let mut lengths = ChatFmtStrLengths::default();
    lengths.include(ChatCategory::Spec, &format!("{}%s1%s2", "x".repeat(80)), "test");

    assert_eq!(lengths.categories_without_room(), vec![ChatCategory::Spec]);
}

#[test]
fn test_room_check_counts_marker_bytes() {
    // 30 + 20 + 27 leaves 18 bytes: enough for 18 characters, not for 54 bytes.
    let template = format!("{}%s1{}%s2{}", "x".repeat(30), "y".repeat(20), "z".repeat(27));
    let mut lengths = ChatFmtStrLengths::default();
    lengths.include(ChatCategory::Team, &template, "test");
    assert_eq!(lengths.get(ChatCategory::Team).available_bytes(), 18);

    assert_eq!(lengths.categories_without_room(), vec![ChatCategory::Team]);
}

#[test]
fn test_room_check_boundary() {
    // 95 - 41 = 54 bytes left: exactly what six 3-char markers take.
    let mut fits = ChatFmtStrLengths::default();
    fits.include(ChatCategory::Coach, &format!("{}%s1%s2", "c".repeat(41)), "test");
    assert!(fits.categories_without_room().is_empty());

    let mut crowded = ChatFmtStrLengths::default();
    crowded.include(ChatCategory::Coach, &format!("{}%s1%s2", "c".repeat(42)), "test");
    assert_eq!(crowded.categories_without_room(), vec![ChatCategory::Coach]);
}
