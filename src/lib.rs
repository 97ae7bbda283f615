#![allow(clippy::module_inception)]

use crate::ast::statements::Program;
use crate::errors::errors::{Error, ErrorTip};

pub mod analyzer;
pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Runs the whole front end over one source string: tokenize, parse, analyze.
/// Returns the validated AST, or the first error any stage produced.
pub fn check(source: &str) -> Result<Program, Error> {
    let program = parser::parser::parse(source)?;
    analyzer::analyzer::analyze(&program)?;
    Ok(program)
}

pub fn get_line(source: &str, line_number: u32) -> Option<&str> {
    if line_number == 0 {
        return None;
    }

    source.lines().nth((line_number - 1) as usize)
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: UnexpectedToken (Cannot have a dangling comma.)
        -> final.lang
          |
        2 | let a = add(1,)
          | ^
    */

    let line_number = error.get_line();
    let line_text = get_line(source, line_number).unwrap_or("");

    let line_string = line_number.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");
    println!("{} | {}", line_string, line_text.trim_start());
    println!("{:>padding$} ^", "|");
}
