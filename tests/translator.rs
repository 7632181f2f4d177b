//! End-to-end translation tests over in-memory document trees
//!
//! These pin the exact output bytes and the error reported for each kind of
//! bad input.

use conflang::conflang::{translate, translate_with_scope, ErrorKind, Node, Number, TranslationError};
use rstest::rstest;

fn doc<const N: usize>(entries: [(&str, Node); N]) -> Node {
    Node::mapping(entries)
}

#[test]
fn test_translate_simple_dict() {
    let obj = doc([
        ("a", Node::from(10)),
        ("b", doc([("c", Node::from(20)), ("d", Node::from(30))])),
    ]);
    let result = translate(&obj).unwrap();

    let lines: Vec<&str> = result.lines().collect();
    assert!(lines.contains(&"const a = 10;"));
    assert!(lines.contains(&"const b = {"));
    assert!(lines.contains(&"    c : 20,"));
    assert!(lines.contains(&"    d : 30,"));
}

#[test]
fn test_translate_nested_exact_bytes() {
    let obj = doc([
        ("a", Node::from(10)),
        (
            "b",
            doc([
                ("c", Node::from(20)),
                ("d", doc([("e", Node::from("^(+ a 5)")), ("f", Node::from(0.5))])),
            ]),
        ),
        ("g", Node::from("^(sqrt a)")),
    ]);

    insta::assert_snapshot!(translate(&obj).unwrap(), @r"
const a = 10;
const b = {
    c : 20,
    d : {
        e : 15,
        f : 0.5,
    },
};
const g = 3.1622776601683795;
");
}

#[test]
fn test_translate_nested_has_no_trailing_newline() {
    let obj = doc([("b", doc([("c", Node::from(1))]))]);
    assert_eq!(translate(&obj).unwrap(), "const b = {\n    c : 1,\n};");
}

#[test]
fn test_translate_with_expression() {
    let obj = doc([("a", Node::from(10)), ("b", Node::from("^(+ a 5)"))]);
    let result = translate(&obj).unwrap();
    assert_eq!(result, "const a = 10;\nconst b = 15;");
}

#[test]
fn test_expression_results_chain() {
    let obj = doc([
        ("a", Node::from(10)),
        ("b", Node::from("^(- a 4)")),
        ("c", Node::from("^(+ b 0.5)")),
        ("d", Node::from("^(+ c 1)")),
    ]);
    let (text, scope) = translate_with_scope(&obj).unwrap();

    assert_eq!(text, "const a = 10;\nconst b = 6;\nconst c = 6.5;\nconst d = 7.5;");
    assert_eq!(scope.get("b"), Some(Number::Int(6)));
    assert_eq!(scope.get("d"), Some(Number::Float(7.5)));
}

#[rstest]
#[case("^(+ a 5)", "15")]
#[case("^(+ a 5.0)", "15.0")]
#[case("^(- a 3.2)", "6.8")]
#[case("^(- a 12)", "-2")]
#[case("^(sqrt a)", "3.1622776601683795")]
fn test_expression_values(#[case] expr: &str, #[case] expected: &str) {
    let obj = doc([("a", Node::from(10)), ("b", Node::from(expr))]);
    let result = translate(&obj).unwrap();
    assert_eq!(result, format!("const a = 10;\nconst b = {expected};"));
}

#[test]
fn test_translate_invalid_expression() {
    let obj = doc([("a", Node::from(10)), ("b", Node::from("^(+ c 5)"))]);
    let err = translate(&obj).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Naming);
    assert_eq!(err.to_string(), "const c not found");
}

#[test]
fn test_translate_invalid_key_name() {
    let obj = doc([("invalid-key", Node::from(10))]);
    let err = translate(&obj).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Naming);
    assert_eq!(
        err.to_string(),
        r#"Names should be [_a-zA-Z][_a-zA-Z0-9]* but "invalid-key" found"#
    );
}

#[test]
fn test_translate_invalid_nested_key_aborts() {
    let obj = doc([
        ("a", Node::from(1)),
        ("b", doc([("ok", Node::from(2)), ("9bad", Node::from(3))])),
    ]);
    assert_eq!(
        translate(&obj),
        Err(TranslationError::InvalidName("9bad".to_string()))
    );
}

#[test]
fn test_translate_list() {
    let wrapped = translate(&doc([("a", Node::List(vec![Node::from(10)]))])).unwrap();
    let plain = translate(&doc([("a", Node::from(10))])).unwrap();
    assert_eq!(wrapped, "const a = 10;");
    assert_eq!(wrapped, plain);
}

#[test]
fn test_singleton_list_expression_binds_scope() {
    let obj = doc([
        ("a", Node::List(vec![Node::from("^(+ z 1)")])),
    ]);
    assert_eq!(translate(&obj).unwrap_err().kind(), ErrorKind::Naming);

    let obj = doc([
        ("z", Node::from(1)),
        ("a", Node::List(vec![Node::from("^(+ z 1)")])),
        ("b", Node::from("^(+ a 1)")),
    ]);
    assert_eq!(translate(&obj).unwrap(), "const z = 1;\nconst a = 2;\nconst b = 3;");
}

#[rstest]
#[case(Node::List(vec![]), "list", "[]")]
#[case(Node::List(vec![Node::from(1), Node::from(2)]), "list", "[1, 2]")]
#[case(Node::Bool(true), "bool", "true")]
#[case(Node::Null, "null", "null")]
#[case(Node::Datetime("1979-05-27T07:32:00Z".to_string()), "datetime", "1979-05-27T07:32:00Z")]
fn test_translate_unknown_type(#[case] node: Node, #[case] kind: &str, #[case] repr: &str) {
    let err = translate(&doc([("a", node)])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_eq!(err.to_string(), format!("Unknown type {kind} at line: \"{repr}\""));
}

#[rstest]
#[case("plain text")]
#[case("^(+ a 5) trailing")]
#[case("(+ a 5)")]
#[case("")]
fn test_translate_malformed_text(#[case] text: &str) {
    let err = translate(&doc([("a", Node::from(1)), ("b", Node::from(text))])).unwrap_err();
    assert_eq!(err, TranslationError::MalformedExpression(text.to_string()));
}

#[test]
fn test_sqrt_negative_is_reported() {
    let obj = doc([("n", Node::from(-9)), ("r", Node::from("^(sqrt n)"))]);
    let err = translate(&obj).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert_eq!(
        err.to_string(),
        "Cannot take sqrt of const n = -9: value is negative"
    );
}

#[test]
fn test_unknown_operator_is_reported() {
    let obj = doc([("a", Node::from(2)), ("b", Node::from("^(* a 2)"))]);
    let err = translate(&obj).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Operator);
    assert_eq!(err.to_string(), "Unknown operator *");
}

#[test]
fn test_runs_do_not_share_scope() {
    let first = doc([("a", Node::from(1))]);
    let second = doc([("b", Node::from("^(+ a 1)"))]);

    translate(&first).unwrap();
    assert_eq!(
        translate(&second),
        Err(TranslationError::UnresolvedReference("a".to_string()))
    );
}
