use super::*;

fn sequence(chars: &[char]) -> WrapperSequence {
    WrapperSequence::try_from(chars.iter().collect::<String>()).unwrap()
}

#[test]
fn test_category_key_round_trips_through_suffix() {
    for category in ChatCategory::ALL {
        let suffix = category.key().strip_prefix(CHAT_KEY_PREFIX).unwrap();
        assert_eq!(ChatCategory::from_key_suffix(suffix), Some(category));
    }
}

#[test]
fn test_spectator_keys_follow_game_naming() {
    assert_eq!(ChatCategory::from_key_suffix("AllSpec"), Some(ChatCategory::Spec));
    assert_eq!(ChatCategory::from_key_suffix("Spec"), Some(ChatCategory::SpecTeam));
    assert_eq!(ChatCategory::from_key_suffix("Party"), None);
}

#[test]
fn test_category_serializes_snake_case() {
    let json = serde_json::to_string(&ChatCategory::TeamDead).unwrap();
    assert_eq!(json, "\"team_dead\"");

    let parsed: ChatCategory = serde_json::from_str("\"spec_team\"").unwrap();
    assert_eq!(parsed, ChatCategory::SpecTeam);

    assert!(serde_json::from_str::<ChatCategory>("\"party\"").is_err());
}

#[test]
fn test_wrapper_sequence_keeps_encodings_in_lockstep() {
    let seq = sequence(&['\u{200B}', '\u{FEFF}', '\u{2060}']);

    assert_eq!(seq.len(), 3);
    assert_eq!(seq.narrow(), "\u{200B}\u{FEFF}\u{2060}");
    assert_eq!(seq.wide(), &[0x200B, 0xFEFF, 0x2060]);
}

#[test]
fn test_wrapper_sequence_rejects_visible_characters() {
    let err = WrapperSequence::try_from("\u{200B}a".to_string()).unwrap_err();
    assert!(err.contains("U+0061"));
}

#[test]
fn test_wrapper_sequence_serializes_as_narrow_string() {
    let seq = sequence(&['\u{200C}', '\u{200D}']);
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, "\"\u{200C}\u{200D}\"");

    let parsed: WrapperSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, seq);
}

#[test]
fn test_chat_wrappers_json_shape() {
    let mut team = CategoryWrappers::default();
    team.name.start = sequence(&['\u{200B}']);
    let mut types: [CategoryWrappers; CHAT_CATEGORY_COUNT] = Default::default();
    types[ChatCategory::Team.index()] = team;
    let wrappers = ChatWrappers::new(types);

    let json = serde_json::to_value(&wrappers).unwrap();
    let entries = json.as_array().unwrap();

    assert_eq!(entries.len(), CHAT_CATEGORY_COUNT);
    assert_eq!(entries[2]["type"], "team");
    assert_eq!(entries[2]["name"]["start"], "\u{200B}");
    assert_eq!(entries[2]["full"]["end"], "");

    let restored: ChatWrappers = serde_json::from_value(json).unwrap();
    assert_eq!(restored, wrappers);
}

#[test]
fn test_chat_wrappers_rejects_missing_category() {
    let json = serde_json::json!([
        {
            "type": "all",
            "full": { "start": "", "end": "" },
            "name": { "start": "", "end": "" },
            "message": { "start": "", "end": "" }
        }
    ]);

    let err = serde_json::from_value::<ChatWrappers>(json).unwrap_err();
    assert!(err.to_string().contains("AllDead"));
}

#[test]
fn test_chat_format_strings_tiers_are_independent() {
    let mut strings = ChatFormatStrings::default();
    strings.set(LocaleTier::English, ChatCategory::Coach, "%s1 : %s2");

    assert_eq!(strings.get(LocaleTier::English, ChatCategory::Coach), "%s1 : %s2");
    assert_eq!(strings.get(LocaleTier::Localized, ChatCategory::Coach), "");
}
