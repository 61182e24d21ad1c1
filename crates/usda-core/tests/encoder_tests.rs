/// Encoder contract tests: one entry per value kind, list typing rules,
/// nested scopes and root handling.
use usda_core::encoder::{FOOTER, HEADER};
use usda_core::{serialize, serialize_value, Map, UsdaError, Value};

/// Build a document from `(key, value)` pairs, preserving their order.
fn doc(entries: Vec<(&str, Value)>) -> Map {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// The rendered body between the fixed header and footer.
fn body(document: &Map) -> String {
    let usda = serialize(document).unwrap();
    assert!(usda.starts_with(HEADER), "missing header:\n{usda}");
    assert!(usda.ends_with(FOOTER), "missing footer:\n{usda}");
    usda[HEADER.len()..usda.len() - FOOTER.len()].to_string()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn encode_int() {
    let usda = serialize(&doc(vec![("test", Value::Integer(12))])).unwrap();
    assert!(usda.contains("int test = 12"));
}

#[test]
fn encode_negative_int() {
    assert_eq!(body(&doc(vec![("offset", Value::Integer(-7))])), "int offset = -7");
}

#[test]
fn encode_float_keeps_fractional_digit() {
    let usda = serialize(&doc(vec![("test", Value::Float(1.0))])).unwrap();
    assert!(usda.contains("float test = 1.0"));
    assert!(!usda.contains("float test = 1\n"));
}

#[test]
fn encode_float_fraction() {
    assert_eq!(body(&doc(vec![("scale", Value::Float(0.25))])), "float scale = 0.25");
}

#[test]
fn encode_string_as_token() {
    let usda = serialize(&doc(vec![("test", Value::from("asdf"))])).unwrap();
    assert!(usda.contains(r#"token test = "asdf""#));
}

#[test]
fn encode_string_with_quote_is_not_escaped() {
    // Embedded quotes pass through verbatim.
    assert_eq!(
        body(&doc(vec![("label", Value::from(r#"say "hi""#))])),
        r#"token label = "say "hi"""#
    );
}

#[test]
fn encode_empty_string() {
    assert_eq!(body(&doc(vec![("name", Value::from(""))])), r#"token name = """#);
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn encode_string_list() {
    let usda = serialize(&doc(vec![("test", Value::from(vec!["first", "second"]))])).unwrap();
    assert!(usda.contains(r#"token[] test = ["first","second"]"#));
}

#[test]
fn first_element_sets_list_type() {
    let list = Value::List(vec![Value::from("asdf"), Value::Integer(1)]);
    let usda = serialize(&doc(vec![("test", list)])).unwrap();
    assert!(usda.contains(r#"token[] test = ["asdf","1"]"#));
}

#[test]
fn encode_int_list() {
    let usda = serialize(&doc(vec![("test", Value::from(vec![1i64, 2, 3, 4]))])).unwrap();
    assert!(usda.contains("int[] test = [1,2,3,4]"));
}

#[test]
fn encode_float_list() {
    let list = Value::from(vec![1.0, 0.5, -2.0]);
    assert_eq!(body(&doc(vec![("widths", list)])), "float[] widths = [1.0,0.5,-2.0]");
}

#[test]
fn int_list_prints_later_elements_natively() {
    // Only the tag is inferred; later elements keep their own text, unquoted.
    let list = Value::List(vec![Value::Integer(1), Value::Float(2.5), Value::from("x")]);
    assert_eq!(body(&doc(vec![("mixed", list)])), "int[] mixed = [1,2.5,x]");
}

#[test]
fn token_list_coerces_floats() {
    let list = Value::List(vec![Value::from("a"), Value::Float(3.0)]);
    assert_eq!(body(&doc(vec![("tags", list)])), r#"token[] tags = ["a","3.0"]"#);
}

#[test]
fn token_list_coerces_nested_list() {
    let list = Value::List(vec![Value::from("a"), Value::from(vec![1i64, 2])]);
    assert_eq!(body(&doc(vec![("tags", list)])), r#"token[] tags = ["a","[1, 2]"]"#);
}

#[test]
fn empty_list_defaults_to_int() {
    assert_eq!(body(&doc(vec![("ids", Value::List(vec![]))])), "int[] ids = []");
}

#[test]
fn list_of_lists_has_no_type_tag() {
    let list = Value::List(vec![Value::from(vec![1i64, 2])]);
    let err = serialize(&doc(vec![("points", list)])).unwrap_err();
    match err {
        UsdaError::ListTypeTag { key, kind, supported } => {
            assert_eq!(key, "points");
            assert_eq!(kind, "list");
            assert_eq!(supported, "integer, float, string");
        }
        other => panic!("expected ListTypeTag, got {other:?}"),
    }
}

#[test]
fn list_of_maps_has_no_type_tag() {
    let inner = doc(vec![("a", Value::Integer(1))]);
    let list = Value::List(vec![Value::Map(inner)]);
    let err = serialize(&doc(vec![("items", list)])).unwrap_err();
    assert!(matches!(err, UsdaError::ListTypeTag { ref kind, .. } if kind == "map"));
    assert!(err.to_string().contains("items"));
}

// ============================================================================
// Nested scopes
// ============================================================================

#[test]
fn encode_map_as_scope() {
    let inner = doc(vec![("test_int", Value::Integer(1))]);
    let usda = serialize(&doc(vec![("test", Value::Map(inner))])).unwrap();
    assert!(usda.contains(r#"def Scope "test""#));
}

#[test]
fn scope_body_is_indented() {
    let inner = doc(vec![("inner", Value::Integer(1)), ("name", Value::from("n"))]);
    let outer = doc(vec![("k", Value::Map(inner)), ("after", Value::Float(2.0))]);
    assert_eq!(
        body(&outer),
        "def Scope \"k\"\n    {\n        int inner = 1\n        token name = \"n\"\n    }\n    float after = 2.0"
    );
}

#[test]
fn deeply_nested_scopes() {
    let c = doc(vec![("leaf", Value::Integer(3))]);
    let b = doc(vec![("c", Value::Map(c))]);
    let a = doc(vec![("b", Value::Map(b))]);
    let expected = "def Scope \"a\"\n    {\n        def Scope \"b\"\n        {\n            def Scope \"c\"\n            {\n                int leaf = 3\n            }\n        }\n    }";
    assert_eq!(body(&doc(vec![("a", Value::Map(a))])), expected);
}

#[test]
fn empty_scope() {
    assert_eq!(
        body(&doc(vec![("empty", Value::Map(Map::new()))])),
        "def Scope \"empty\"\n    {\n    }"
    );
}

#[test]
fn nested_error_aborts_whole_document() {
    let bad = Value::List(vec![Value::List(vec![])]);
    let inner = doc(vec![("ok", Value::Integer(1)), ("bad", bad)]);
    let result = serialize(&doc(vec![("first", Value::Integer(0)), ("scope", Value::Map(inner))]));
    assert!(matches!(result, Err(UsdaError::ListTypeTag { ref key, .. }) if key == "bad"));
}

// ============================================================================
// Ordering and root
// ============================================================================

#[test]
fn entries_follow_insertion_order() {
    let document = doc(vec![
        ("zeta", Value::Integer(1)),
        ("alpha", Value::Integer(2)),
        ("mid", Value::Integer(3)),
    ]);
    assert_eq!(body(&document), "int zeta = 1\n    int alpha = 2\n    int mid = 3");
}

#[test]
fn empty_document_is_bare_template() {
    let usda = serialize(&Map::new()).unwrap();
    assert_eq!(usda, format!("{HEADER}{FOOTER}"));
}

#[test]
fn serialize_value_requires_map() {
    let err = serialize_value(&Value::Integer(12)).unwrap_err();
    match err {
        UsdaError::RootType { found } => assert_eq!(found, "integer"),
        other => panic!("expected RootType, got {other:?}"),
    }
}

#[test]
fn serialize_value_rejects_list_root() {
    let err = serialize_value(&Value::from(vec![1i64])).unwrap_err();
    assert!(err.to_string().contains("dictionary-like"));
    assert!(err.to_string().contains("list"));
}

#[test]
fn serialize_value_accepts_map() {
    let document = doc(vec![("x", Value::Integer(1))]);
    assert_eq!(
        serialize_value(&Value::Map(document.clone())).unwrap(),
        serialize(&document).unwrap()
    );
}
