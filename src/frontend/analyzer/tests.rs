//! Analyzer unit tests.

use super::*;
use crate::frontend::diagnostics::ErrorKind;
use crate::frontend::parser;

fn check_str(source: &str) -> Result<MethodTable, CompileError> {
    let program = parser::parse(source).expect("test source should parse");
    analyze(&program)
}

fn error_kind(source: &str) -> ErrorKind {
    check_str(source).expect_err("expected a semantic error").kind
}

fn main_with(body: &str) -> String {
    format!("class Main : Object {{\n  run [\n{body}\n  ]\n}}\n")
}

// ========================================
// Entry point
// ========================================

#[test]
fn test_minimal_program() {
    assert!(check_str("class Main { run [ ] }").is_ok());
}

#[test]
fn test_missing_main_class() {
    assert_eq!(error_kind("class A { foo [ x := 1. y := x. ] }"), ErrorKind::MissingMain);
}

#[test]
fn test_missing_run_method() {
    assert_eq!(error_kind("class Main { start [ ] }"), ErrorKind::MissingMain);
}

#[test]
fn test_missing_main_wins_over_other_defects() {
    let source = "class A : Nowhere { foo [ x := y. ] foo [ ] }\nclass A { }";
    assert_eq!(error_kind(source), ErrorKind::MissingMain);
}

#[test]
fn test_inherited_run_does_not_count() {
    let source = "class Base { run [ ] }\nclass Main : Base { }";
    assert_eq!(error_kind(source), ErrorKind::MissingMain);
}

// ========================================
// Duplicates and hierarchy
// ========================================

#[test]
fn test_duplicate_class() {
    assert_eq!(error_kind("class Main { run [ ] }\nclass Main { }"), ErrorKind::OtherSemantic);
}

#[test]
fn test_redefining_builtin_class() {
    assert_eq!(error_kind("class Main { run [ ] }\nclass Integer { }"), ErrorKind::OtherSemantic);
}

#[test]
fn test_duplicate_selector() {
    assert_eq!(error_kind("class Main { run [ ] run [ ] }"), ErrorKind::OtherSemantic);
}

#[test]
fn test_duplicate_parameter_in_nested_block() {
    assert_eq!(error_kind(&main_with("b := [ :a :a | ].")), ErrorKind::OtherSemantic);
}

#[test]
fn test_unknown_parent() {
    assert_eq!(error_kind("class Main : Missing { run [ ] }"), ErrorKind::Undefined);
}

#[test]
fn test_inheritance_cycle() {
    let source = "class A : B { }\nclass B : A { }\nclass Main { run [ ] }";
    assert_eq!(error_kind(source), ErrorKind::OtherSemantic);
}

#[test]
fn test_self_inheritance() {
    assert_eq!(error_kind("class Main : Main { run [ ] }"), ErrorKind::OtherSemantic);
}

#[test]
fn test_parent_defined_later_in_file() {
    assert!(check_str("class Main : Base { run [ x := self greet. ] }\nclass Base { greet [ ] }").is_ok());
}

// ========================================
// Reference resolution
// ========================================

#[test]
fn test_undefined_variable() {
    assert_eq!(error_kind(&main_with("x := y.")), ErrorKind::Undefined);
}

#[test]
fn test_forward_reference_is_undefined() {
    assert_eq!(error_kind(&main_with("x := y.\ny := 1.")), ErrorKind::Undefined);
}

#[test]
fn test_self_reference_on_fresh_variable() {
    assert_eq!(error_kind(&main_with("x := x.")), ErrorKind::Undefined);
}

#[test]
fn test_reassignment_is_allowed() {
    assert!(check_str(&main_with("x := 1.\nx := 2.\ny := x.")).is_ok());
}

#[test]
fn test_receivers_are_always_in_scope() {
    assert!(check_str(&main_with("a := self.\nb := super.")).is_ok());
}

#[test]
fn test_nested_block_sees_enclosing_scope() {
    assert!(check_str(&main_with("x := 1.\nb := [ :p | y := x plus: p. ].")).is_ok());
}

#[test]
fn test_nested_block_locals_do_not_leak() {
    assert_eq!(error_kind(&main_with("b := [ :p | y := p. ].\nz := y.")), ErrorKind::Undefined);
}

#[test]
fn test_method_parameters_are_in_scope() {
    assert!(check_str("class Main { run [ ] add:to: [ :a :b | c := a plus: b. ] }").is_ok());
}

#[test]
fn test_undefined_class_reference() {
    assert_eq!(error_kind(&main_with("x := Foo new.")), ErrorKind::Undefined);
}

#[test]
fn test_unknown_class_side_selector() {
    assert_eq!(error_kind(&main_with("x := Integer foo.")), ErrorKind::Undefined);
}

#[test]
fn test_inherited_class_side_selector() {
    let source = "class Main { run [ x := Counter new. y := Counter from: 3. ] }\nclass Counter : Integer { }";
    assert!(check_str(source).is_ok());
}

#[test]
fn test_unknown_selector_on_self_is_allowed() {
    assert!(check_str(&main_with("x := self anything.")).is_ok());
}

// ========================================
// Arity
// ========================================

#[test]
fn test_chained_plus_is_arity_mismatch() {
    assert_eq!(error_kind(&main_with("x := 5 plus: 1 plus: 2.")), ErrorKind::ArityMismatch);
}

#[test]
fn test_class_side_selector_must_exist_exactly() {
    assert_eq!(error_kind(&main_with("x := Integer from: 1 from: 2.")), ErrorKind::Undefined);
    assert_eq!(error_kind(&main_with("x := Integer new: 1.")), ErrorKind::Undefined);
    assert_eq!(error_kind(&main_with("x := Integer plus.")), ErrorKind::Undefined);
}

#[test]
fn test_constructors_are_not_inherited_from_object() {
    assert_eq!(error_kind(&main_with("x := String new.")), ErrorKind::Undefined);
    assert_eq!(error_kind(&main_with("x := String from: 'a'.")), ErrorKind::Undefined);
    assert_eq!(error_kind(&main_with("x := Main new.")), ErrorKind::Undefined);
}

#[test]
fn test_self_send_with_similar_selector_is_allowed() {
    let source = "class Main { run [ x := self add: 1. ] add:to: [ :a :b | ] }";
    assert!(check_str(source).is_ok());
}

#[test]
fn test_string_literal_receiver() {
    assert!(check_str(&main_with("x := 'a' plus: 'b'.")).is_ok());
    assert_eq!(error_kind(&main_with("x := 'a' plus.")), ErrorKind::ArityMismatch);
}

#[test]
fn test_run_with_parameter() {
    assert_eq!(error_kind("class Main { run [ :x | y := x. ] }"), ErrorKind::ArityMismatch);
}

#[test]
fn test_block_arity_must_match_selector() {
    assert_eq!(error_kind("class Main { run [ ] foo: [ ] }"), ErrorKind::ArityMismatch);
    assert_eq!(error_kind("class Main { run [ ] foo [ :a | ] }"), ErrorKind::ArityMismatch);
}

// ========================================
// Collisions
// ========================================

#[test]
fn test_assignment_to_parameter_collides() {
    assert_eq!(error_kind("class Main { run [ :x | x := 1. ] }"), ErrorKind::Collision);
}

#[test]
fn test_collision_in_nested_block() {
    assert_eq!(error_kind(&main_with("b := [ :v | v := 2. ].")), ErrorKind::Collision);
}

#[test]
fn test_outer_parameter_may_be_shadowed_in_nested_block() {
    let source = "class Main { run [ ] foo: [ :x | b := [ :y | x := y. ]. ] }";
    assert!(check_str(source).is_ok());
}

// ========================================
// Configuration
// ========================================

#[test]
fn test_injected_builtin_selector() {
    let program = parser::parse(&main_with("x := Integer minus: 1.")).unwrap();
    assert_eq!(analyze(&program).unwrap_err().kind, ErrorKind::Undefined);

    let config = AnalyzerConfig::new().with_builtins(BuiltinTable::standard().with_method("Integer", "minus:", 1));
    assert!(analyze_with(&program, &config).is_ok());
}

#[test]
fn test_analysis_is_deterministic() {
    let program = parser::parse("class Main : Missing { run [ x := y. ] }").unwrap();
    let first = analyze(&program).unwrap_err();
    let second = analyze(&program).unwrap_err();
    assert_eq!(first, second);
}
