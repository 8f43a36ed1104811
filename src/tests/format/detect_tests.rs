use crate::format::{FormatHint, FormatKind, detect, sniff};

#[test]
fn extension_beats_content_type() {
    let hint = FormatHint {
        filename: Some("contacts.csv"),
        content_type: Some("application/json"),
    };

    assert_eq!(detect(hint, "{}"), FormatKind::Csv);
}

#[test]
fn extension_is_case_insensitive() {
    let hint = FormatHint {
        filename: Some("CONTACTS.JSON"),
        content_type: None,
    };

    assert_eq!(detect(hint, ""), FormatKind::Json);
}

#[test]
fn content_type_used_when_extension_is_unknown() {
    let hint = FormatHint {
        filename: Some("contacts.txt"),
        content_type: Some("text/csv"),
    };

    assert_eq!(detect(hint, "{}"), FormatKind::Csv);
}

#[test]
fn content_type_matching_is_substring_based() {
    let hint = FormatHint {
        filename: None,
        content_type: Some("application/json; charset=utf-8"),
    };

    assert_eq!(detect(hint, "name, email"), FormatKind::Json);
}

#[test]
fn sniffing_is_the_fallback() {
    let hint = FormatHint {
        filename: None,
        content_type: Some("text/plain"),
    };

    assert_eq!(detect(hint, r#"[{"name": "A"}]"#), FormatKind::Json);
    assert_eq!(detect(hint, "A, a@x.com, 010, 2020-01-01"), FormatKind::Csv);
}

#[test]
fn sniff_skips_leading_whitespace() {
    assert_eq!(sniff("  \n\t {\"name\": \"A\"}"), FormatKind::Json);
    assert_eq!(sniff("  \n [1]"), FormatKind::Json);
    assert_eq!(sniff("  \n A, B"), FormatKind::Csv);
    assert_eq!(sniff(""), FormatKind::Csv);
}

#[test]
fn format_kind_from_str() {
    assert_eq!(FormatKind::from_str("csv"), Some(FormatKind::Csv));
    assert_eq!(FormatKind::from_str("JSON"), Some(FormatKind::Json));
    assert_eq!(FormatKind::from_str("yaml"), None);
}
