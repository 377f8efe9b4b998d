use alloc::vec::Vec;

use rstest::rstest;

use crate::{END_OF_INPUT, Error, ObjectContent, StrSource, Value, ValueType, parse_as, parse_str};

#[rstest]
#[case::bare_string(r#""hello""#, '"', 1)]
#[case::bare_number("7", '7', 1)]
#[case::bare_number_after_whitespace("  7", '7', 3)]
#[case::bare_literal("null", 'n', 1)]
fn top_level_scalars_are_rejected(#[case] input: &str, #[case] found: char, #[case] position: u64) {
    assert_eq!(
        parse_str(input),
        Err(Error::Structural {
            expected: '{',
            found,
            position,
        })
    );
}

#[test]
fn empty_input_mismatches_the_end_sentinel() {
    assert_eq!(
        parse_str(""),
        Err(Error::Structural {
            expected: '{',
            found: END_OF_INPUT,
            position: 1,
        })
    );
}

#[test]
fn missing_value_fails_at_the_terminator() {
    // Position 7 is the `}` the primitive reader stops at.
    assert_eq!(
        parse_str(r#"{"a": }"#),
        Err(Error::Structural {
            expected: '0',
            found: '}',
            position: 7,
        })
    );
}

#[test]
fn missing_colon() {
    assert_eq!(
        parse_str(r#"{"a" 1}"#),
        Err(Error::Structural {
            expected: ':',
            found: '1',
            position: 6,
        })
    );
}

#[test]
fn unquoted_key() {
    assert_eq!(
        parse_str("{a: 1}"),
        Err(Error::Structural {
            expected: '"',
            found: 'a',
            position: 2,
        })
    );
}

#[test]
fn unterminated_string() {
    assert_eq!(
        parse_str(r#"{"a": "x"#),
        Err(Error::Structural {
            expected: '"',
            found: END_OF_INPUT,
            position: 9,
        })
    );
}

#[test]
fn unterminated_array() {
    assert_eq!(
        parse_str("[1,"),
        Err(Error::Structural {
            expected: '0',
            found: END_OF_INPUT,
            position: 4,
        })
    );
}

#[test]
fn mismatched_closing_bracket() {
    // The array loop never sees `]`, so the empty token in value position is
    // what gets reported.
    assert_eq!(
        parse_str("[1}"),
        Err(Error::Structural {
            expected: '0',
            found: '}',
            position: 3,
        })
    );
}

#[test]
fn failure_aborts_the_whole_parse() {
    let mut source = StrSource::new(r#"{"a": {"b": }, "c": 1}"#);
    assert!(crate::parse(&mut source).is_err());
}

#[test]
fn parse_as_checks_the_top_level_tag() {
    assert_eq!(
        parse_as::<Vec<Value>, _>(&mut StrSource::new("{}")),
        Err(Error::TypeMismatch {
            expected: ValueType::Array,
            found: ValueType::Object,
        })
    );
    assert_eq!(
        parse_as::<ObjectContent, _>(&mut StrSource::new("[]")),
        Err(Error::TypeMismatch {
            expected: ValueType::Object,
            found: ValueType::Array,
        })
    );
}
