//! End-to-end tests over the Sigma value types: tokenization, boundary
//! checks, conversion to backend syntaxes, numeric normalization, regex
//! delimiter escaping and raw-input dispatch.

use pretty_assertions::assert_eq;
use serde_json::json;
use sigma_values::{
    ConversionConfig, SigmaError, SigmaNumber, SigmaRegex, SigmaString, SigmaValue, SpecialChar,
    Token,
};

fn lit(s: &str) -> Token {
    Token::Literal(s.to_string())
}

#[test]
fn tokenizer_escape_semantics() {
    assert_eq!(SigmaString::new("plain").tokens(), &[lit("plain")]);
    assert_eq!(
        SigmaString::new("abc*def?").tokens(),
        &[
            lit("abc"),
            Token::Special(SpecialChar::WildcardMulti),
            lit("def"),
            Token::Special(SpecialChar::WildcardSingle),
        ]
    );
    assert_eq!(SigmaString::new(r"a\*b").tokens(), &[lit("a*b")]);
    assert_eq!(SigmaString::new(r"a\").tokens(), &[lit(r"a\")]);
    assert_eq!(SigmaString::new(r"a\qb").tokens(), &[lit(r"a\qb")]);
}

#[test]
fn boundary_checks_respect_token_kind() {
    let s = SigmaString::new("*cmd.exe");
    assert!(s.starts_with(SpecialChar::WildcardMulti));
    assert!(!s.starts_with("cmd"));
    assert!(s.ends_with(".exe"));
    assert!(!s.ends_with(SpecialChar::WildcardSingle));
}

#[test]
fn conversion_to_sql_like_syntax() {
    let s = SigmaString::new("%admin%*login?");
    let config = ConversionConfig::new()
        .escape_char('\\')
        .wildcard_multi("%")
        .wildcard_single("_")
        .add_escaped("%_");
    assert_eq!(s.convert(&config).unwrap(), r"\%admin\%%login_");
}

#[test]
fn conversion_without_wildcard_support_fails() {
    let s = SigmaString::new("a*b");
    let err = s
        .convert(&ConversionConfig::new().no_wildcard_multi())
        .unwrap_err();
    assert!(matches!(err, SigmaError::Value(_)));
}

#[test]
fn concatenation_is_non_mutating() {
    let head = SigmaString::new("head*");
    let tail = SigmaString::new("tail");
    let joined = head.clone() + tail.clone();
    assert_eq!(joined.to_string(), "head*tail");
    assert_eq!(head.to_string(), "head*");
    assert_eq!(tail.to_string(), "tail");
}

#[test]
fn numeric_normalization() {
    assert_eq!("3.9".parse::<SigmaNumber>().unwrap(), 3);
    assert!(matches!(
        "x".parse::<SigmaNumber>(),
        Err(SigmaError::Value(_))
    ));
}

#[test]
fn regex_delimiter_escaping() {
    let re = SigmaRegex::new(r"a.b\c").unwrap();
    assert_eq!(re.escape(&[".", "\\"], '\\').unwrap(), r"a\.b\\c");
}

#[test]
fn regex_rejects_invalid_patterns() {
    assert!(matches!(
        SigmaRegex::new("*invalid"),
        Err(SigmaError::Regex(_))
    ));
}

#[test]
fn dispatch_covers_all_raw_kinds() {
    let cases = [
        (json!(1), "number"),
        (json!(2.5), "number"),
        (json!("val*"), "string"),
        (json!(null), "null"),
    ];
    for (raw, expected) in cases {
        let value = SigmaValue::from_json(&raw).unwrap();
        assert_eq!(value.type_name(), expected, "input {raw}");
    }
    assert!(SigmaValue::from_json(&json!(false)).is_err());
}

#[test]
fn null_values_always_equal() {
    let a = SigmaValue::from_json(&json!(null)).unwrap();
    let b = SigmaValue::from_json(&json!(null)).unwrap();
    assert!(a.try_eq(&b).unwrap());
}
