//! Integration tests for the SOL25 compiler pipeline

use std::fs;
use std::path::Path;

use sol25::frontend::{analyzer, parser};
use sol25::{CompileError, ErrorKind};

/// Run the full pipeline on a fixture file
fn compile_file(path: &Path) -> Result<String, CompileError> {
    let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    sol25::compile(&source)
}

fn fixtures(kind: &str) -> Vec<std::path::PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "sol25"))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures compile successfully
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());
    for path in paths {
        let result = compile_file(&path);
        assert!(result.is_ok(), "{} should compile: {:?}", path.display(), result.err());
    }
}

/// Invalid fixtures are named `<exit code>_<what>.sol25`
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());
    for path in paths {
        let stem = path.file_stem().unwrap().to_string_lossy().to_string();
        let expected: i32 = stem.split('_').next().unwrap().parse().unwrap();
        match compile_file(&path) {
            Ok(_) => panic!("{} should fail with {expected}", path.display()),
            Err(err) => assert_eq!(err.exit_code(), expected, "{}: {err}", path.display()),
        }
    }
}

// ============================================================================
// Scenario table
// ============================================================================

fn exit_code(source: &str) -> i32 {
    match sol25::compile(source) {
        Ok(_) => 0,
        Err(err) => err.exit_code(),
    }
}

#[test]
fn test_documented_scenarios() {
    let cases = [
        // Empty run method is legal
        ("class Main : Object { run [ ] }", 0),
        // run must take no parameters
        ("class Main : Object { run [ :x | y := x. ] }", 33),
        // No Main class at all
        ("class A : Object { foo [ x := 1. y := x. ] }", 31),
        // Locals may be reassigned
        ("class Main : Object { run [ x := 1. x := 2. ] }", 0),
        // Parameter and local share a name
        ("class Main : Object { run [ :x | x := 1. ] }", 34),
        // plus: takes one argument
        ("class Main : Object { run [ x := 5 plus: 1 plus: 2. ] }", 33),
    ];
    for (source, expected) in cases {
        assert_eq!(exit_code(source), expected, "{source}");
    }
}

#[test]
fn test_error_kind_precedence() {
    let cases = [
        // Lexical and syntax errors come before any semantic check
        ("class A : Object { foo [ x := 'open. ] }", 21),
        ("class Main : Object { run [ x := 1 foo bar. ] }", 21),
        ("class A : Object { foo [ x := 1 ] }", 22),
        // Missing entry point wins over other semantic defects
        ("class A : Missing { foo [ x := y. ] }", 31),
        ("class Main : Object { runner [ ] }", 31),
        // Duplicates before undefined references
        ("class Main : Object { run [ x := y. ] run [ ] }", 35),
        // Unknown parent before undefined variables
        ("class Main : Nope { run [ x := y. ] }", 32),
        // Undefined reference before arity
        ("class Main : Object { run [ x := y plus: 1 plus: 2. z := Foo new. ] }", 32),
    ];
    for (source, expected) in cases {
        assert_eq!(exit_code(source), expected, "{source}");
    }
}

#[test]
fn test_whitespace_only_input_is_lexical_error() {
    for source in ["", "   ", "\n\n", "\t \n"] {
        assert_eq!(exit_code(source), 21, "{source:?}");
    }
}

#[test]
fn test_builtin_redefinition_is_semantic_error() {
    assert_eq!(exit_code("class Integer : Object { } class Main : Object { run [ ] }"), 35);
}

#[test]
fn test_class_side_sends() {
    assert_eq!(exit_code("class Main : Object { run [ x := Integer from: 5. ] }"), 0);
    assert_eq!(exit_code("class Main : Object { run [ x := Integer from: 1 from: 2. ] }"), 32);
    assert_eq!(exit_code("class Main : Object { run [ x := Integer new: 1. ] }"), 32);
    assert_eq!(exit_code("class Main : Object { run [ x := Integer plus. ] }"), 32);
    assert_eq!(exit_code("class Main : Object { run [ x := String new. ] }"), 32);
    assert_eq!(exit_code("class Main : Object { run [ x := String from: 'a'. ] }"), 32);
    assert_eq!(exit_code("class Main : Object { run [ x := Main new. ] }"), 32);
    assert_eq!(exit_code("class Main : Integer { run [ x := Main new. ] }"), 0);
    assert_eq!(exit_code("class Main : Object { run [ x := Integer frobnicate. ] }"), 32);
    assert_eq!(exit_code("class Main : Object { run [ x := Unknown new. ] }"), 32);
}

#[test]
fn test_nested_block_scoping() {
    // Outer names are visible in nested blocks
    assert_eq!(exit_code("class Main : Object { run [ a := 1. b := [ :x | c := a plus: x. ]. ] }"), 0);
    // Nested locals do not leak out
    assert_eq!(exit_code("class Main : Object { run [ b := [ c := 1. ]. d := c. ] }"), 32);
}

#[test]
fn test_error_carries_line_number() {
    let source = "class Main : Object {\n    run [\n        x := 1.\n        y := x plus: 1\n    ]\n}\n";
    let err = sol25::compile(source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.line, Some(4));
}

#[test]
fn test_analysis_is_deterministic() {
    let program = parser::parse("class Main : Object { run [ x := y. z := q. ] }").unwrap();
    let first = analyzer::analyze(&program).unwrap_err();
    let second = analyzer::analyze(&program).unwrap_err();
    assert_eq!(first, second);
    assert!(first.message.contains("'y'"), "{}", first.message);
}
