use crate::format::{FormatError, FormatKind, parse_records};

fn parse_csv(content: &str) -> Result<Vec<crate::model::RawRecord>, FormatError> {
    parse_records(FormatKind::Csv, content)
}

#[test]
fn csv_single_line() {
    let records = parse_csv("김철수, charles@clovf.com, 01075312468, 2018.03.07").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "김철수");
    assert_eq!(records[0].email, "charles@clovf.com");
    assert_eq!(records[0].phone, "01075312468");
    assert_eq!(records[0].joined, "2018.03.07");
}

#[test]
fn csv_multiple_lines() {
    let content = "김철수, charles@clovf.com, 01075312468, 2018.03.07\n\
                   박영희, matilda@clovf.com, 01087654321, 2021.04.28\n\
                   홍길동, kildong.hong@clovf.com, 01012345678, 2015.08.15";

    let records = parse_csv(content).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "김철수");
    assert_eq!(records[1].name, "박영희");
    assert_eq!(records[2].name, "홍길동");
}

#[test]
fn csv_empty_input_is_empty_batch() {
    assert!(parse_csv("").unwrap().is_empty());
}

#[test]
fn csv_whitespace_only_is_empty_batch() {
    assert!(parse_csv("   \n  \t \n").unwrap().is_empty());
}

#[test]
fn csv_blank_lines_are_discarded() {
    let content = "A, a@x.com, 01012345678, 2020-01-01\n\n\nB, b@x.com, 01012345679, 2020-01-02\n";

    let records = parse_csv(content).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "A");
    assert_eq!(records[1].name, "B");
}

#[test]
fn csv_fields_are_trimmed() {
    let records = parse_csv("  A  ,  a@x.com ,\t01012345678 , 2020-01-01 ").unwrap();

    assert_eq!(records[0].name, "A");
    assert_eq!(records[0].email, "a@x.com");
    assert_eq!(records[0].phone, "01012345678");
    assert_eq!(records[0].joined, "2020-01-01");
}

#[test]
fn csv_extra_fields_are_ignored() {
    let records = parse_csv("A, a@x.com, 01012345678, 2020-01-01, extra, more").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].joined, "2020-01-01");
}

#[test]
fn csv_too_few_fields_names_line_and_count() {
    let content = "A, a@x.com, 01012345678, 2020-01-01\nB, b@x.com, 01012345679";

    let err = parse_csv(content).unwrap_err();

    match err {
        FormatError::CsvFieldCount { line, found } => {
            assert_eq!(line, 2);
            assert_eq!(found, 3);
        }
        other => panic!("expected CsvFieldCount, got {other:?}"),
    }
}

#[test]
fn csv_field_count_error_message() {
    let err = parse_csv("only, three, fields").unwrap_err();

    let message = err.to_string();
    assert!(message.contains("line 1"), "message: {message}");
    assert!(message.contains("got 3"), "message: {message}");
}

#[test]
fn csv_quoted_field_may_contain_comma() {
    let records = parse_csv("\"Kim, Chul-soo\", kim@x.com, 01012345678, 2020-01-01").unwrap();

    assert_eq!(records[0].name, "Kim, Chul-soo");
}

#[test]
fn csv_empty_fields_are_kept_for_validation() {
    // Separators without values are a validation concern, not a parse error.
    let records = parse_csv(",,,").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "");
    assert_eq!(records[0].joined, "");
}
