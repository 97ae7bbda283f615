use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct TokenRule {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order against the unconsumed remainder; the first rule whose
    // pattern matches at the cursor wins, so keyword rules sit ahead of the
    // generic identifier rule.
    static ref TOKEN_RULES: Vec<TokenRule> = vec![
        TokenRule { regex: Regex::new("^//.*").unwrap(), handler: skip_handler },
        TokenRule { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        TokenRule { regex: Regex::new("^\\d+").unwrap(), handler: number_handler },
        TokenRule { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        TokenRule { regex: Regex::new("^let").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Let, "let") },
        TokenRule { regex: Regex::new("^function").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Function, "function") },
        TokenRule { regex: Regex::new("^true").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Boolean, "true") },
        TokenRule { regex: Regex::new("^false").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Boolean, "false") },
        TokenRule { regex: Regex::new("^return").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Return, "return") },
        TokenRule { regex: Regex::new("^import").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Import, "import") },
        TokenRule { regex: Regex::new("^from").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::From, "from") },
        TokenRule { regex: Regex::new("^if").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::If, "if") },
        TokenRule { regex: Regex::new("^else").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Else, "else") },
        TokenRule { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        TokenRule { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        TokenRule { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        TokenRule { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        TokenRule { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        TokenRule { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        TokenRule { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        TokenRule { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        TokenRule { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        TokenRule { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
    ];
}

pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: String::from(source),
            pos: 0,
            line: 1,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advances the line counter by one per newline in `text`.
    pub fn bump_lines(&mut self, text: &str) {
        self.line += text.matches('\n').count() as u32;
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Produces the next token, or `None` once the source is exhausted.
    ///
    /// Skip rules (whitespace, comments) advance the cursor and line counter
    /// without emitting; the returned token carries the line number at the
    /// moment its scan began.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while !self.at_eof() {
            let mut matched: Option<(RegexHandler, String)> = None;

            for rule in TOKEN_RULES.iter() {
                if let Some(found) = rule.regex.find(self.remainder()) {
                    matched = Some((rule.handler, String::from(found.as_str())));
                    break;
                }
            }

            let (handler, text) = match matched {
                Some(matched) => matched,
                None => {
                    let offending = self
                        .remainder()
                        .chars()
                        .next()
                        .map(String::from)
                        .unwrap_or_default();
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken { token: offending },
                        self.line,
                    ));
                }
            };

            if let Some(token) = handler(self, &text) {
                return Ok(Some(token));
            }
        }

        Ok(None)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.bump_lines(matched);
    lexer.advance_n(matched.len());
    None
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let line = lexer.line();
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(TokenKind::Number, String::from(matched), line))
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let line = lexer.line();
    // The match includes the surrounding quotes; the token value does not.
    // A literal may span lines, in which case the token keeps the line it
    // opened on and the counter catches up afterwards.
    let literal = String::from(&matched[1..matched.len() - 1]);
    lexer.advance_n(matched.len());
    lexer.bump_lines(&literal);
    Some(MK_TOKEN!(TokenKind::String, literal, line))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let line = lexer.line();
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(TokenKind::Identifier, String::from(matched), line))
}

/// Collects every token in `source`. Convenience wrapper used by tests and
/// callers that do not need streaming.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
