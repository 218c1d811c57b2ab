//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the top-level parse
//! driver. The parser uses a Pratt approach with NUD/LED handlers for
//! expression parsing and specialized functions for declaration and
//! statement parsing.
//!
//! It maintains lookup tables for:
//! - Declaration handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Syntax errors are never fatal: the driver records the diagnostic,
//! discards tokens up to the next statement boundary and keeps going, so
//! the caller always receives a tree for the whole file.

use log::debug;

use crate::{
    ast::declarations::{Decl, ErrorDecl, Program},
    errors::errors::{Error, ErrorImpl, ExpectedTokens},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, DeclHandler, DeclLookup, LEDHandler,
        LEDLookup, NUDHandler, NUDLookup,
    },
    stmt::parse_decl,
};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the cursor into it, the handler lookup tables
/// and the diagnostics collected so far. The token stream always ends with
/// an EOF token; the cursor never moves past it.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    decl_lookup: DeclLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
    errors: Vec<Error>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            decl_lookup: DeclLookup::new(),
            nud_lookup: NUDLookup::new(),
            led_lookup: LEDLookup::new(),
            binding_power_lookup: BPLookup::new(),
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Advances past the current token and returns it. Parks on the EOF
    /// token instead of running off the end of the stream.
    pub fn advance(&mut self) -> &Token {
        let pos = self.pos;
        if self.tokens[pos].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[pos]
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// UnexpectedToken error at the found token's position.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: ExpectedTokens::from(expected_kind),
                    found: token.value.clone(),
                },
                token.span.start,
            ));
        }
        Ok(self.advance().clone())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &DeclLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Tokens that also carry an infix registration (`-`, `(`) keep their
    /// infix binding power.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: DeclHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Default);
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Records a diagnostic without aborting the parse.
    pub fn record(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Discards tokens until a plausible statement boundary: just past a
    /// `;`, or in front of a statement-starting keyword, a `}`, or EOF.
    ///
    /// Bounds error cascades to roughly one diagnostic per malformed
    /// statement.
    pub fn synchronize(&mut self) {
        debug!(
            "recovering at {}:{}",
            self.current_token().span.start.line,
            self.current_token().span.start.column
        );

        while self.has_tokens() {
            let kind = self.current_token_kind();

            if kind == TokenKind::Semicolon {
                self.advance();
                return;
            }
            if kind == TokenKind::CloseCurly || kind.starts_statement() {
                return;
            }

            self.advance();
        }
    }
}

/// Parses a stream of tokens into a syntax tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses declarations until EOF,
/// recovering at statement boundaries after each syntax error.
///
/// # Returns
///
/// The `Program` root (with `Decl::Error` placeholders at recovery points)
/// and every syntax error encountered.
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<Error>) {
    let empty = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
    if tokens.is_empty() {
        let span = Span {
            start: empty,
            end: empty,
        };
        return (Program { decls: vec![], span }, vec![]);
    }

    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut decls = vec![];

    while parser.has_tokens() {
        let before = parser.pos;

        match parse_decl(&mut parser) {
            Ok(decl) => decls.push(decl),
            Err(error) => {
                let start = parser.current_token().span.start;
                parser.record(error);
                parser.synchronize();
                if parser.pos == before {
                    // A stray boundary token, e.g. `}` at top level, would
                    // otherwise never be consumed.
                    parser.advance();
                }
                let end = parser.current_token().span.start;
                decls.push(Decl::Error(ErrorDecl {
                    span: Span { start, end },
                }));
            }
        }
    }

    let span = Span {
        start: empty,
        end: parser.current_token().span.end,
    };

    (Program { decls, span }, parser.errors)
}
