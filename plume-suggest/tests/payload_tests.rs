use plume_suggest::{EditKind, parse_payload};

#[test]
fn test_full_payload() {
    let raw = r#"{
        "corrections": [
            {
                "id": "c-1",
                "type": "grammar",
                "original": "vait",
                "suggestion": "vais",
                "message": "First person of aller is vais."
            },
            {
                "type": "spelling",
                "original": "a",
                "suggestion": "à",
                "message": "Preposition takes a grave accent."
            },
            {
                "type": "punctuation",
                "original": "maison",
                "suggestion": "maison.",
                "message": "Sentence should end with a period."
            }
        ]
    }"#;

    let edits = parse_payload(raw).unwrap();
    assert_eq!(edits.len(), 3);

    assert_eq!(edits[0].id.as_deref(), Some("c-1"));
    assert_eq!(edits[0].kind, EditKind::Grammar);
    assert_eq!(edits[0].original, "vait");
    assert_eq!(edits[0].suggestion, "vais");

    assert_eq!(edits[1].id, None);
    assert_eq!(edits[1].kind, EditKind::Spelling);
    assert_eq!(edits[1].suggestion, "à");

    assert_eq!(edits[2].kind, EditKind::Punctuation);
}

#[test]
fn test_clean_text_payload() {
    let edits = parse_payload(r#"{ "corrections": [] }"#).unwrap();
    assert!(edits.is_empty());
}

#[test]
fn test_missing_corrections_key_is_malformed() {
    assert!(parse_payload(r#"{ "edits": [] }"#).is_err());
}

#[test]
fn test_missing_required_field_is_malformed() {
    // "suggestion" absent
    let raw = r#"{
        "corrections": [
            {"type": "spelling", "original": "teh", "message": "Typo."}
        ]
    }"#;
    assert!(parse_payload(raw).is_err());
}
