use jcanon_core::{parse, write, Arena, Node, Object};

/// Helper: parse and re-serialize in one step.
fn canonicalize(input: &str) -> String {
    let arena = Arena::new();
    let root = parse(input, &arena).unwrap();
    write(&root)
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn write_null() {
    assert_eq!(write(&Node::Null), "null");
}

#[test]
fn write_booleans() {
    assert_eq!(write(&Node::Bool(true)), "true");
    assert_eq!(write(&Node::Bool(false)), "false");
}

#[test]
fn write_int_has_no_decimal_point() {
    assert_eq!(write(&Node::Int(3)), "3");
    assert_eq!(write(&Node::Int(-42)), "-42");
}

#[test]
fn write_integral_float_keeps_decimal_point() {
    // The int/float distinction must survive a round trip.
    assert_eq!(write(&Node::Float(3.0)), "3.0");
    assert_eq!(write(&Node::Float(-2.0)), "-2.0");
    assert_eq!(write(&Node::Float(0.0)), "0.0");
}

#[test]
fn write_fractional_float() {
    assert_eq!(write(&Node::Float(3.5)), "3.5");
    assert_eq!(write(&Node::Float(-0.25)), "-0.25");
}

#[test]
fn write_string() {
    assert_eq!(write(&Node::String("hello")), "\"hello\"");
}

#[test]
fn write_string_emits_escapes_verbatim() {
    assert_eq!(write(&Node::String(r"a\nb")), r#""a\nb""#);
}

// ============================================================================
// Composites
// ============================================================================

#[test]
fn write_empty_composites_on_one_line() {
    assert_eq!(canonicalize("{}"), "{}");
    assert_eq!(canonicalize("[]"), "[]");
    assert!(!canonicalize("{ }").contains('\n'));
}

#[test]
fn write_flat_object() {
    assert_eq!(
        canonicalize(r#"{"a": 1, "b": 2}"#),
        "{\n  \"a\": 1,\n  \"b\": 2\n}"
    );
}

#[test]
fn write_sorts_object_keys() {
    // Key order in the source is irrelevant; output is the canonical
    // key-sorted form.
    assert_eq!(
        canonicalize(r#"{"b": 2, "a": 1}"#),
        "{\n  \"a\": 1,\n  \"b\": 2\n}"
    );
}

#[test]
fn write_flat_array() {
    assert_eq!(canonicalize("[1, 2, 3]"), "[\n  1,\n  2,\n  3\n]");
}

#[test]
fn write_nested_indentation() {
    let expected = "\
{
  \"a\": [
    1,
    {
      \"b\": true
    }
  ]
}";
    assert_eq!(canonicalize(r#"{"a": [1, {"b": true}]}"#), expected);
}

#[test]
fn write_empty_composites_inside_parents() {
    assert_eq!(
        canonicalize(r#"{"a": {}, "b": []}"#),
        "{\n  \"a\": {},\n  \"b\": []\n}"
    );
}

#[test]
fn write_programmatic_tree() {
    // Trees built by hand serialize the same way as parsed ones.
    let mut map = Object::new();
    map.insert("b", Node::Int(2));
    map.insert("a", Node::Float(1.0));
    let root = Node::Object(map);
    assert_eq!(write(&root), "{\n  \"a\": 1.0,\n  \"b\": 2\n}");
}

#[test]
fn write_mixed_array() {
    assert_eq!(
        canonicalize(r#"[null, true, 7, 7.5, "x"]"#),
        "[\n  null,\n  true,\n  7,\n  7.5,\n  \"x\"\n]"
    );
}
