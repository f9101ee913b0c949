use jcanon_core::{parse, Arena, JsonError, Node};

/// Helper: parse input that must fail and return the error.
fn parse_err(input: &str) -> JsonError {
    let arena = Arena::new();
    match parse(input, &arena) {
        Ok(_) => panic!("parse of {input:?} should have failed"),
        Err(err) => err,
    }
}

// ============================================================================
// Roots
// ============================================================================

#[test]
fn parse_empty_object() {
    let arena = Arena::new();
    let root = parse("{}", &arena).unwrap();
    assert!(root.is_object());
    assert_eq!(root.as_object().unwrap().len(), 0);
}

#[test]
fn parse_empty_array() {
    let arena = Arena::new();
    let root = parse("[]", &arena).unwrap();
    assert!(root.is_array());
    assert_eq!(root.as_array().unwrap().len(), 0);
}

#[test]
fn parse_empty_input_fails() {
    let err = parse_err("");
    assert!(matches!(err, JsonError::MissingToken(_)));
}

#[test]
fn parse_bare_scalar_root_fails() {
    // The top level is stricter than the Value grammar.
    for input in ["1", "1.5", "\"text\"", "true", "null"] {
        let err = parse_err(input);
        assert!(
            matches!(err, JsonError::WrongTokenType(_)),
            "input {input:?} gave {err}"
        );
    }
}

#[test]
fn parse_ignores_tokens_after_root() {
    let arena = Arena::new();
    let root = parse("{} []", &arena).unwrap();
    assert!(root.is_object());
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn parse_flat_object() {
    let arena = Arena::new();
    let root = parse(
        r#"{"name": "rosette", "count": 3, "ratio": 2.5, "open": true, "tag": null}"#,
        &arena,
    )
    .unwrap();
    let map = root.as_object().unwrap();
    assert_eq!(map.get("name").and_then(Node::as_str), Some("rosette"));
    assert_eq!(map.get("count").and_then(Node::as_int), Some(3));
    assert_eq!(map.get("ratio").and_then(Node::as_float), Some(2.5));
    assert_eq!(map.get("open").and_then(Node::as_bool), Some(true));
    assert!(map.get("tag").is_some_and(Node::is_null));
}

#[test]
fn parse_object_iterates_key_sorted() {
    let arena = Arena::new();
    let root = parse(r#"{"b": 2, "a": 1, "c": 3}"#, &arena).unwrap();
    let keys: Vec<&str> = root.as_object().unwrap().keys().copied().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn parse_duplicate_key_last_wins() {
    let arena = Arena::new();
    let root = parse(r#"{"a": 1, "a": 2}"#, &arena).unwrap();
    let map = root.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a").and_then(Node::as_int), Some(2));
}

#[test]
fn parse_object_missing_colon_fails() {
    let err = parse_err(r#"{"a" 1}"#);
    assert!(matches!(err, JsonError::WrongTokenType(_)));
    assert!(err.to_string().contains("':' after key \"a\""), "got: {err}");
}

#[test]
fn parse_object_non_string_key_fails() {
    let err = parse_err("{1: 2}");
    assert!(matches!(err, JsonError::WrongTokenType(_)));
}

#[test]
fn parse_object_trailing_comma_fails() {
    let err = parse_err(r#"{"a": 1,}"#);
    assert!(matches!(err, JsonError::WrongTokenType(_)));
    assert!(err.to_string().contains("trailing commas"), "got: {err}");
}

#[test]
fn parse_object_missing_comma_fails() {
    let err = parse_err(r#"{"a": 1 "b": 2}"#);
    assert!(matches!(err, JsonError::WrongTokenType(_)));
    assert!(err.to_string().contains("comma-delimited"), "got: {err}");
}

#[test]
fn parse_unclosed_object_fails() {
    let err = parse_err(r#"{"a": 1"#);
    assert!(matches!(err, JsonError::MissingToken(_)));
}

#[test]
fn parse_object_cut_after_key_fails() {
    let err = parse_err(r#"{"a""#);
    assert!(matches!(err, JsonError::MissingToken(_)));
    assert!(err.to_string().contains("after key \"a\""), "got: {err}");
}

#[test]
fn parse_object_cut_after_comma_fails() {
    let err = parse_err(r#"{"a": 1,"#);
    assert!(matches!(err, JsonError::MissingToken(_)));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn parse_array_of_scalars() {
    let arena = Arena::new();
    let root = parse(r#"[1, 2.5, "x", false, null]"#, &arena).unwrap();
    let items = root.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0].as_int(), Some(1));
    assert_eq!(items[1].as_float(), Some(2.5));
    assert_eq!(items[2].as_str(), Some("x"));
    assert_eq!(items[3].as_bool(), Some(false));
    assert!(items[4].is_null());
}

#[test]
fn parse_array_trailing_comma_fails() {
    let err = parse_err("[1, 2,]");
    assert!(matches!(err, JsonError::WrongTokenType(_)));
    assert!(err.to_string().contains("trailing commas"), "got: {err}");
}

#[test]
fn parse_array_missing_comma_fails() {
    let err = parse_err("[1 2]");
    assert!(matches!(err, JsonError::WrongTokenType(_)));
    assert!(err.to_string().contains("comma-delimited"), "got: {err}");
}

#[test]
fn parse_array_with_separator_succeeds() {
    let arena = Arena::new();
    assert!(parse("[1, 2]", &arena).is_ok());
}

#[test]
fn parse_array_leading_comma_fails() {
    let err = parse_err("[, 1]");
    assert!(matches!(err, JsonError::WrongTokenType(_)));
}

#[test]
fn parse_unclosed_array_fails() {
    let err = parse_err("[1,");
    assert!(matches!(err, JsonError::MissingToken(_)));
    assert!(err.to_string().contains("after ','"), "got: {err}");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn parse_number_without_dot_is_int() {
    let arena = Arena::new();
    let root = parse("[3]", &arena).unwrap();
    let node = &root.as_array().unwrap()[0];
    assert!(node.is_int());
    assert!(!node.is_float());
}

#[test]
fn parse_number_with_dot_is_float() {
    let arena = Arena::new();
    let root = parse("[3.0]", &arena).unwrap();
    let node = &root.as_array().unwrap()[0];
    assert!(node.is_float());
    assert_eq!(node.as_float(), Some(3.0));
}

#[test]
fn parse_i64_extremes() {
    let arena = Arena::new();
    let root = parse("[9223372036854775807, -9223372036854775808]", &arena).unwrap();
    let items = root.as_array().unwrap();
    assert_eq!(items[0].as_int(), Some(i64::MAX));
    assert_eq!(items[1].as_int(), Some(i64::MIN));
}

#[test]
fn parse_integer_overflow_fails() {
    let err = parse_err("[9223372036854775808]");
    assert!(matches!(err, JsonError::Tokenization(_)));
    assert!(err.to_string().contains("out of range"), "got: {err}");
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn parse_nested_structure() {
    let arena = Arena::new();
    let root = parse(r#"{"a": [1, {"b": true}]}"#, &arena).unwrap();
    assert!(root.is_object());
    let a = root.as_object().unwrap().get("a").unwrap();
    let items = a.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_int(), Some(1));
    let inner = items[1].as_object().unwrap();
    assert_eq!(inner.get("b").and_then(Node::as_bool), Some(true));
}

#[test]
fn parse_deeply_nested_arrays() {
    let arena = Arena::new();
    let root = parse("[[[[1]]]]", &arena).unwrap();
    let mut node = &root;
    for _ in 0..4 {
        node = &node.as_array().unwrap()[0];
    }
    assert_eq!(node.as_int(), Some(1));
}

#[test]
fn parse_object_value_cut_fails() {
    let err = parse_err(r#"{"a":"#);
    assert!(matches!(err, JsonError::MissingToken(_)));
}
