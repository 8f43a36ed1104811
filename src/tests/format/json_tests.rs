use crate::format::{FormatError, FormatKind, parse_records};

fn parse_json(content: &str) -> Result<Vec<crate::model::RawRecord>, FormatError> {
    parse_records(FormatKind::Json, content)
}

#[test]
fn json_array_of_objects() {
    let content = r#"[
        {"name": "김철수", "email": "charles@clovf.com", "tel": "01075312468", "joined": "2018.03.07"},
        {"name": "박영희", "email": "matilda@clovf.com", "tel": "01087654321", "joined": "2021.04.28"}
    ]"#;

    let records = parse_json(content).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "김철수");
    assert_eq!(records[0].phone, "01075312468");
    assert_eq!(records[1].joined, "2021.04.28");
}

#[test]
fn json_single_object_is_wrapped() {
    let content = r#"{"name": "A", "email": "a@x.com", "tel": "01012345678", "joined": "2020-01-01"}"#;

    let records = parse_json(content).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "A");
}

#[test]
fn json_member_names_are_case_insensitive() {
    let content = r#"{"Name": "A", "EMAIL": "a@x.com", "Tel": "01012345678", "JOINED": "2020-01-01"}"#;

    let records = parse_json(content).unwrap();

    assert_eq!(records[0].name, "A");
    assert_eq!(records[0].email, "a@x.com");
    assert_eq!(records[0].phone, "01012345678");
    assert_eq!(records[0].joined, "2020-01-01");
}

#[test]
fn json_missing_members_default_to_empty() {
    let records = parse_json(r#"{"name": "A"}"#).unwrap();

    assert_eq!(records[0].name, "A");
    assert_eq!(records[0].email, "");
    assert_eq!(records[0].phone, "");
    assert_eq!(records[0].joined, "");
}

#[test]
fn json_null_members_default_to_empty() {
    let records = parse_json(r#"{"name": "A", "email": null}"#).unwrap();

    assert_eq!(records[0].email, "");
}

#[test]
fn json_empty_input_is_empty_batch() {
    assert!(parse_json("").unwrap().is_empty());
    assert!(parse_json("   \n ").unwrap().is_empty());
}

#[test]
fn json_empty_array_is_empty_batch() {
    assert!(parse_json("[]").unwrap().is_empty());
}

#[test]
fn json_syntax_error_carries_diagnostic() {
    let err = parse_json(r#"{"name": "A","#).unwrap_err();

    assert!(matches!(err, FormatError::Json(_)));
    assert!(err.to_string().starts_with("Invalid JSON format:"));
}

#[test]
fn json_scalar_is_a_shape_error() {
    let err = parse_json("42").unwrap_err();

    assert!(matches!(err, FormatError::JsonShape));
}

#[test]
fn json_array_of_scalars_is_a_shape_error() {
    let err = parse_json(r#"["A", "B"]"#).unwrap_err();

    assert!(matches!(err, FormatError::JsonShape));
}

#[test]
fn json_non_string_member_names_the_field() {
    let err = parse_json(r#"{"name": "A", "tel": 1012345678}"#).unwrap_err();

    match err {
        FormatError::JsonFieldType { field } => assert_eq!(field, "tel"),
        other => panic!("expected JsonFieldType, got {other:?}"),
    }
}
