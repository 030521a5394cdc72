use crate::*;

// ========== Vocabulary ==========

#[test]
fn test_canonical_roundtrip_for_vocabulary() {
    for token in token::vocabulary() {
        assert_eq!(InputToken::from_canonical(token.canonical()), token);
    }
}

#[test]
fn test_unknown_canonical_is_freeform() {
    let t = InputToken::from_canonical("AIR");
    assert_eq!(t.class(), TokenClass::Freeform);
    assert_eq!(t.canonical(), "AIR");
}

#[test]
fn test_freeform_refuses_classified_text() {
    assert!(Freeform::new("H").is_none());
    assert!(Freeform::new("air").is_none());
    assert!(Freeform::new("7jc").is_none());
    assert_eq!(Freeform::new("dp").map(|f| f.as_str().to_string()), Some("dp".into()));
}

#[test]
fn test_classification() {
    assert_eq!(InputToken::from("6").class(), TokenClass::Directional);
    assert_eq!(InputToken::from("9jc").class(), TokenClass::Directional);
    assert_eq!(InputToken::from("jc").class(), TokenClass::Directional);
    assert_eq!(InputToken::from("S2").class(), TokenClass::Button);
    assert_eq!(InputToken::from("BD").class(), TokenClass::Movement);
    assert_eq!(InputToken::from("whiff").class(), TokenClass::Modifier);
    assert_eq!(InputToken::from("or").class(), TokenClass::Connector);
    assert_eq!(InputToken::from("tag").class(), TokenClass::Marker);
}

#[test]
fn test_glyphs() {
    assert_eq!(InputToken::from("D").glyph(), "66");
    assert_eq!(InputToken::from("BD").glyph(), "44");
    assert_eq!(InputToken::from("+").glyph(), " + ");
    assert_eq!(InputToken::from(">").glyph(), " > ");
    assert_eq!(InputToken::from("or").glyph(), "/");
    assert_eq!(InputToken::from("tag").glyph(), "TAG");
    assert_eq!(InputToken::from("7jc").glyph(), "7jc");
    assert_eq!(InputToken::from("dp").glyph(), "DP");
}

#[test]
fn test_glyph_lookup_is_case_insensitive() {
    assert_eq!(InputToken::from_glyph("s1"), Some(InputToken::Button(Button::S1)));
    assert_eq!(InputToken::from_glyph("S1"), Some(InputToken::Button(Button::S1)));
    assert_eq!(InputToken::from_glyph("OR"), Some(InputToken::Connector(Connector::Or)));
    assert_eq!(InputToken::from_glyph("DL"), Some(InputToken::Modifier(Modifier::Delay)));
    assert_eq!(InputToken::from_glyph("66"), Some(InputToken::Movement(Movement::Dash)));
    assert_eq!(InputToken::from_glyph("air"), None);
}

#[test]
fn test_direction_from_digit() {
    assert_eq!(Direction::from_digit('5'), Some(Direction::Neutral));
    assert_eq!(Direction::from_digit('9'), Some(Direction::UpForward));
    assert_eq!(Direction::from_digit('0'), None);
    assert_eq!(Direction::from_digit('x'), None);
}

#[test]
fn test_merges_after_direction() {
    assert!(InputToken::from("H").merges_after_direction());
    assert!(InputToken::from("D").merges_after_direction());
    assert!(InputToken::from("tag").merges_after_direction());
    assert!(!InputToken::from("6").merges_after_direction());
    assert!(!InputToken::from("hold").merges_after_direction());
    assert!(!InputToken::from("~").merges_after_direction());
}

#[test]
fn test_token_serde_as_canonical_string() {
    let json = serde_json::to_string(&InputToken::from("S1")).unwrap();
    assert_eq!(json, "\"S1\"");
    let t: InputToken = serde_json::from_str("\"whatever\"").unwrap();
    assert_eq!(t.canonical(), "whatever");
}

// ========== Sequence ==========

#[test]
fn test_sequence_builder_ops() {
    let mut seq = ComboSequence::new();
    assert!(seq.is_empty());
    seq.push(InputToken::from("2"));
    seq.push(InputToken::from("M"));
    seq.push(InputToken::from("M"));
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.undo(), Some(InputToken::from("M")));
    assert_eq!(seq.to_canonical(), vec!["2", "M"]);
    seq.reset();
    assert!(seq.is_empty());
    assert_eq!(seq.undo(), None);
}

#[test]
fn test_sequence_replace_with() {
    let mut seq = ComboSequence::from_canonical(["5", "L"]);
    seq.replace_with(ComboSequence::from_canonical(["6", "H"]));
    assert_eq!(seq.to_canonical(), vec!["6", "H"]);
}

#[test]
fn test_sequence_serde_is_plain_list() {
    let seq = ComboSequence::from_canonical(["air", "6", "H", ">", "BD"]);
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, r#"["air","6","H",">","BD"]"#);
    let back: ComboSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seq);
}

// ========== Roster ==========

#[test]
fn test_find_character() {
    assert_eq!(find_character("jinx").map(|c| c.name), Some("Jinx"));
    assert!(find_character("nobody").is_none());
}

#[test]
fn test_difficulty_names() {
    assert_eq!(Difficulty::from_name("Medium"), Some(Difficulty::Medium));
    assert_eq!(Difficulty::from_name("medium"), None);
    assert_eq!(Difficulty::Hard.as_str(), "Hard");
}

// ========== Limits ==========

#[test]
fn test_validate_too_few_inputs() {
    let limits = LimitsConfig::default();
    let seq = ComboSequence::from_canonical(["2", "L", ">", "2", "M"]);
    let err = validate_combo_inputs(&seq, &limits).unwrap_err();
    assert!(err.to_string().contains("more than 5"));
}

#[test]
fn test_validate_requires_then() {
    let limits = LimitsConfig::default();
    let seq = ComboSequence::from_canonical(["2", "L", "+", "2", "M", "+", "H"]);
    assert!(validate_combo_inputs(&seq, &limits).is_err());

    let relaxed = LimitsConfig { require_then: false, ..LimitsConfig::default() };
    assert!(validate_combo_inputs(&seq, &relaxed).is_ok());
}

#[test]
fn test_validate_ok() {
    let seq = ComboSequence::from_canonical(["2", "L", ">", "2", "M", ">", "H"]);
    assert!(validate_combo_inputs(&seq, &LimitsConfig::default()).is_ok());
}

#[test]
fn test_user_combo_limit() {
    let limits = LimitsConfig::default();
    assert!(validate_user_combo_limit(99, &limits).is_ok());
    assert!(validate_user_combo_limit(100, &limits).is_err());
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let cfg = ComboConfig::default();
    assert!(!cfg.notation.strict);
    assert_eq!(cfg.limits.max_combos_per_user, 100);
    assert_eq!(cfg.share.query_param, "s");
}

#[test]
fn test_config_partial_json() {
    let cfg = ComboConfig::from_json(r#"{"notation":{"strict":true},"limits":{"min_inputs":2}}"#).unwrap();
    assert!(cfg.notation.strict);
    assert_eq!(cfg.limits.min_inputs, 2);
    assert!(cfg.limits.require_then);
    assert_eq!(cfg.share.query_param, "s");
}

#[test]
fn test_config_bad_json() {
    assert!(matches!(ComboConfig::from_json("{"), Err(ComboError::Config(_))));
}

// ========== Records / Decoded ==========

#[test]
fn test_record_json_roundtrip() {
    let mut record = ComboRecord::new("ahri", "user-1", ComboSequence::from_canonical(["6", "H", "~", "S1"]));
    record.difficulty = Some(Difficulty::Easy);
    record.tags = vec!["BnB".into()];
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(r#""inputs":["6","H","~","S1"]"#));
    let back: ComboRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_decoded_variants() {
    let exact = Decoded::new(1, vec![]);
    assert!(exact.is_exact());
    assert!(exact.unmatched().is_empty());

    let fallback = Decoded::new(2, vec!["XYZ".to_string()]);
    assert!(!fallback.is_exact());
    assert_eq!(fallback.unmatched(), ["XYZ".to_string()]);
    assert_eq!(fallback.into_value(), 2);
}
