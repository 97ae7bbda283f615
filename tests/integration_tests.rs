//! Integration tests for the end-to-end front end.
//!
//! These tests run the complete pipeline from source code through
//! tokenization, parsing and semantic analysis.

use minilang::{
    analyzer::analyzer::analyze,
    ast::statements::Stmt,
    check,
    errors::errors::{ErrorFamily, Reason},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

#[test]
fn test_check_complete_program() {
    let source = r#"import Math from "std/math"

let base = 10
let label = "area"
let verbose = true

function square(n) {
    let result = Math(n, n)
    return result
}

function describe(value, flag) {
    if (flag) {
        let shown = value
        return shown
    } else if (value) {
        return value
    }
    return value
}

let area = square(base)
describe(area, verbose)
"#;

    let program = check(source).unwrap();
    assert_eq!(program.body.len(), 8);
}

#[test]
fn test_pipeline_stages_agree() {
    let source = "let a = 1\nlet b = a";

    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.len(), 8);

    let program = parse(source).unwrap();
    assert_eq!(program.body.len(), 2);

    assert!(analyze(&program).is_ok());
}

#[test]
fn test_check_empty_source() {
    let program = check("").unwrap();
    assert!(program.body.is_empty());
}

#[test]
fn test_check_comments_only() {
    let program = check("// nothing\n// to see here").unwrap();
    assert!(program.body.is_empty());
}

#[test]
fn test_check_surfaces_lexer_error() {
    let error = check("let a = $").err().unwrap();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_family(), ErrorFamily::Syntax);
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_check_surfaces_parser_error() {
    let error = check("let a = add(1,)").err().unwrap();

    assert_eq!(error.get_error_name(), "DanglingComma");
    assert_eq!(error.get_family(), ErrorFamily::Syntax);
}

#[test]
fn test_check_surfaces_analyzer_error() {
    let error = check("let a = 1\nlet a = 2").err().unwrap();

    assert_eq!(error.get_error_name(), "IdentifierAlreadyDeclared");
    assert_eq!(error.get_family(), ErrorFamily::Reference);
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_check_reports_first_error_only() {
    // Line 2 fails to parse, so the reference error on line 1 is never seen.
    let error = check("let a = missing\nlet b = ,").err().unwrap();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_check_import_shape_rule_runs_after_parsing() {
    let source = "import lowercase from \"std/math\"";

    // The statement is syntactically valid
    let program = parse(source).unwrap();
    assert!(matches!(program.body[0], Stmt::ImportStatement { .. }));

    // but the shape rule rejects it in analysis.
    let error = check(source).err().unwrap();
    assert_eq!(error.get_reason(), Some(Reason::ImportNameMustBePascalCase));
}

#[test]
fn test_check_error_lines_match_source() {
    let source = r#"let a = 1
function f(x) {
    return x
}
f(b)
"#;

    let error = check(source).err().unwrap();
    assert_eq!(error.get_error_name(), "IdentifierNotDeclared");
    assert_eq!(error.get_line(), 5);
    assert_eq!(error.get_reason(), Some(Reason::FunctionParamDoesNotExist));
}

#[test]
fn test_check_multiline_string_keeps_lines_aligned() {
    let source = "let a = \"first\nsecond\"\nlet b = missing";

    let error = check(source).err().unwrap();
    assert_eq!(error.get_line(), 3);
}

#[test]
fn test_check_ast_is_stable_across_runs() {
    let source = "function f(a) { return a }\nlet x = f(1)";

    assert_eq!(check(source).unwrap(), check(source).unwrap());
}
