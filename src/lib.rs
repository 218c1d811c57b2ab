#![allow(clippy::module_inception)]

//! Parser crate for the rslox scripting language.
//!
//! Turns source text into a field-labeled syntax tree plus a list of
//! diagnostics. Lexical and syntax errors are both recovered, so a single
//! [`parse`] call reports every problem in a file alongside a best-effort
//! tree.

use crate::{
    ast::declarations::Program,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text. `line` and `column` are 1-based,
/// `offset` is a 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses rslox source text into a syntax tree and a diagnostic list.
///
/// The tree is always returned, even for malformed input: lexical errors
/// are skipped character-by-character and syntax errors recover at the
/// next statement boundary, leaving error placeholder nodes behind.
/// Lexical diagnostics precede syntax diagnostics in the returned list.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let (tokens, mut diagnostics) = lexer::lexer::tokenize(source);
    let (program, syntax_errors) = parser::parser::parse(tokens);
    diagnostics.extend(syntax_errors);

    (program, diagnostics)
}

/// Finds the line containing a byte offset.
///
/// # Returns
///
/// The 1-based line number, the line's text, and the offset's position
/// within that line. Offsets at or past the end of the source resolve to
/// the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last = (line_number, line.to_string(), line.len());
        start = end;
        line_number += 1;
    }

    last
}


pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: message
        -> final.lox
           |
        20 | var a = #;
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
