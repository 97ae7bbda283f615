//! The main Parser struct and parse entry point.
//!
//! The parser owns one lexer and a single token of lookahead, primed before
//! recursive descent begins. All productions are built from `eat` calls and
//! recursive calls to other productions.

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl, Reason},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt;

/// Parsing state: the token source and the not-yet-consumed lookahead.
/// `None` lookahead means the input is exhausted.
pub struct Parser {
    lexer: Lexer,
    lookahead: Option<Token>,
}

impl Parser {
    /// Creates a parser over `source` and primes the lookahead.
    pub fn new(source: &str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token()?;

        Ok(Parser { lexer, lookahead })
    }

    /// Returns the kind of the lookahead token without advancing.
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    pub fn has_tokens(&self) -> bool {
        self.lookahead.is_some()
    }

    /// The line of the lookahead token, or the lexer's current line once the
    /// input is exhausted.
    pub fn line(&self) -> u32 {
        match &self.lookahead {
            Some(token) => token.line,
            None => self.lexer.line(),
        }
    }

    /// Asserts that the lookahead has the expected kind, returns it, and
    /// advances by pulling one more token from the lexer.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = match self.lookahead.take() {
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput,
                    self.lexer.line(),
                ))
            }
            Some(token) => token,
        };

        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.value },
                token.line,
            ));
        }

        self.lookahead = self.lexer.next_token()?;
        Ok(token)
    }

    /// Builds the error for a lookahead that fits none of a context's
    /// productions: `UnexpectedToken` naming the offending token, or
    /// `UnexpectedEndOfInput` when the lookahead is exhausted. The reason
    /// carries the context's expected set for diagnostics.
    pub fn unexpected(&self, reason: Reason) -> Error {
        match &self.lookahead {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.line,
            )
            .with_reason(reason),
            None => {
                Error::new(ErrorImpl::UnexpectedEndOfInput, self.lexer.line()).with_reason(reason)
            }
        }
    }
}

/// Parses a source string into a Program AST.
///
/// This is the single entry point for parsing. Statements are consumed until
/// the lookahead is exhausted; the first syntax violation aborts with an
/// error and no partial AST.
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(source)?;

    let mut body = vec![];
    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    Ok(Program { body, line: 1 })
}
