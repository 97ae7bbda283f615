use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl, Reason},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// ExpressionValue := NumberLiteral | StringLiteral | BooleanLiteral
///                  | Identifier | FunctionCall | ArrayLiteral | ObjectLiteral
pub fn parse_expression_value(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_kind() {
        Some(TokenKind::Number) => parse_number_literal(parser),
        Some(TokenKind::String) => parse_string_literal(parser),
        Some(TokenKind::Boolean) => parse_boolean_literal(parser),
        Some(TokenKind::Identifier) => parse_identifier_or_call(parser),
        Some(TokenKind::OpenBracket) => parse_array_literal(parser),
        Some(TokenKind::OpenCurly) => parse_object_literal(parser),
        _ => Err(parser.unexpected(Reason::ExpressionValue)),
    }
}

/// ConditionValue := Identifier | FunctionCall
///
/// Bare literals are rejected here, so an `if` condition is always a name
/// reference the analyzer can resolve.
pub fn parse_condition_value(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_kind() {
        Some(TokenKind::Identifier) => parse_identifier_or_call(parser),
        _ => Err(parser.unexpected(Reason::ConditionValue)),
    }
}

/// Disambiguates a name from a call by peeking for `(` after the identifier.
/// No speculative parsing: the decision is made from the lookahead alone.
pub fn parse_identifier_or_call(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::Identifier)?;

    if parser.current_kind() != Some(TokenKind::OpenParen) {
        return Ok(Expr::Identifier {
            value: token.value,
            line: token.line,
        });
    }

    parser.eat(TokenKind::OpenParen)?;
    let params = parse_generic_list(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    Ok(Expr::FunctionCall {
        name: token.value,
        params,
        line: token.line,
    })
}

/// FunctionCall := IDENTIFIER "(" GenericList ")"
///
/// Used in statement position, where a bare identifier is not allowed.
pub fn parse_function_call(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::Identifier)?;

    parser.eat(TokenKind::OpenParen)?;
    let params = parse_generic_list(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    Ok(Expr::FunctionCall {
        name: token.value,
        params,
        line: token.line,
    })
}

/// GenericList := (ExpressionValue ("," ExpressionValue)*)?  -- no trailing comma
fn parse_generic_list(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parse_list(parser, parse_expression_value, TokenKind::CloseParen)
}

/// Shared list machinery: items separated by commas, ending at `closing`
/// (which is not consumed). A comma immediately followed by the closing
/// delimiter is a dangling comma, a dedicated syntax error rather than a
/// silently terminated list.
pub fn parse_list<T>(
    parser: &mut Parser,
    parse_item: fn(&mut Parser) -> Result<T, Error>,
    closing: TokenKind,
) -> Result<Vec<T>, Error> {
    let mut items = vec![];

    let mut ended_with_comma = false;
    while parser.current_kind().is_some_and(|kind| kind != closing) {
        items.push(parse_item(parser)?);
        ended_with_comma = false;

        if parser.current_kind() == Some(TokenKind::Comma) {
            parser.eat(TokenKind::Comma)?;
            ended_with_comma = true;
        }
    }

    if ended_with_comma {
        return Err(Error::new(ErrorImpl::DanglingComma, parser.line()));
    }

    Ok(items)
}

/// ArrayLiteral := "[" (ExpressionValue ("," ExpressionValue)*)? "]"
pub fn parse_array_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.eat(TokenKind::OpenBracket)?;
    let elements = parse_list(parser, parse_expression_value, TokenKind::CloseBracket)?;
    parser.eat(TokenKind::CloseBracket)?;

    Ok(Expr::ArrayLiteral {
        value: elements,
        line: open.line,
    })
}

/// ObjectLiteral := "{" (ObjectProperty ("," ObjectProperty)*)? "}"
pub fn parse_object_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.eat(TokenKind::OpenCurly)?;
    let properties = parse_list(parser, parse_object_property, TokenKind::CloseCurly)?;
    parser.eat(TokenKind::CloseCurly)?;

    Ok(Expr::ObjectLiteral {
        value: properties,
        line: open.line,
    })
}

/// ObjectProperty := IDENTIFIER ":" ExpressionValue
fn parse_object_property(parser: &mut Parser) -> Result<(String, Expr), Error> {
    let key = parser.eat(TokenKind::Identifier)?;
    parser.eat(TokenKind::Colon)?;
    let value = parse_expression_value(parser)?;

    Ok((key.value, value))
}

pub fn parse_number_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::Number)?;

    match token.value.parse() {
        Ok(value) => Ok(Expr::NumberLiteral {
            value,
            line: token.line,
        }),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.line,
        )),
    }
}

pub fn parse_string_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::String)?;

    Ok(Expr::StringLiteral {
        value: token.value,
        line: token.line,
    })
}

pub fn parse_boolean_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::Boolean)?;

    Ok(Expr::BooleanLiteral {
        value: token.value == "true",
        line: token.line,
    })
}
