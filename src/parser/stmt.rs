use crate::{
    ast::statements::{IfStmt, Stmt},
    errors::errors::{Error, Reason},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{
        parse_condition_value, parse_expression_value, parse_function_call,
        parse_identifier_or_call, parse_list,
    },
    parser::Parser,
};

/// Statement := ImportStatement | VariableDeclaration | FunctionDeclaration
///            | FunctionCall
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_kind() {
        Some(TokenKind::Import) => parse_import_stmt(parser),
        Some(TokenKind::Let) => parse_var_decl_stmt(parser),
        Some(TokenKind::Function) => parse_fn_decl_stmt(parser),
        Some(TokenKind::Identifier) => Ok(Stmt::Expression(parse_function_call(parser)?)),
        _ => Err(parser.unexpected(Reason::Statement)),
    }
}

/// ImportStatement := "import" IDENTIFIER "from" STRING
pub fn parse_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.eat(TokenKind::Import)?;
    let name = parser.eat(TokenKind::Identifier)?.value;

    parser.eat(TokenKind::From)?;
    let path = parser.eat(TokenKind::String)?.value;

    Ok(Stmt::ImportStatement {
        name,
        path,
        line: keyword.line,
    })
}

/// VariableDeclaration := "let" IDENTIFIER "=" ExpressionValue
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.eat(TokenKind::Let)?;
    let name = parser.eat(TokenKind::Identifier)?.value;

    parser.eat(TokenKind::Assignment)?;
    let value = parse_expression_value(parser)?;

    Ok(Stmt::VariableDeclaration {
        name,
        value,
        line: keyword.line,
    })
}

/// FunctionDeclaration := "function" IDENTIFIER "(" IdentifierList ")" Block
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.eat(TokenKind::Function)?;
    let name = parser.eat(TokenKind::Identifier)?.value;

    parser.eat(TokenKind::OpenParen)?;
    let params = parse_identifier_list(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::FunctionDeclaration {
        name,
        params,
        body,
        line: keyword.line,
    })
}

/// IdentifierList := (IDENTIFIER ("," IDENTIFIER)*)?  -- no trailing comma
fn parse_identifier_list(parser: &mut Parser) -> Result<Vec<String>, Error> {
    parse_list(
        parser,
        |parser| Ok(parser.eat(TokenKind::Identifier)?.value),
        TokenKind::CloseParen,
    )
}

/// Block := "{" ScopedStatement* "}"
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.eat(TokenKind::OpenCurly)?;

    let mut statements = vec![];
    while parser
        .current_kind()
        .is_some_and(|kind| kind != TokenKind::CloseCurly)
    {
        statements.push(parse_scoped_stmt(parser)?);
    }

    parser.eat(TokenKind::CloseCurly)?;

    Ok(statements)
}

/// ScopedStatement := IfStatement | VariableDeclaration | FunctionDeclaration
///                  | Identifier | FunctionCall | ReturnStatement
pub fn parse_scoped_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_kind() {
        Some(TokenKind::If) => Ok(Stmt::If(parse_if_stmt(parser)?)),
        Some(TokenKind::Let) => parse_var_decl_stmt(parser),
        Some(TokenKind::Function) => parse_fn_decl_stmt(parser),
        Some(TokenKind::Identifier) => Ok(Stmt::Expression(parse_identifier_or_call(parser)?)),
        Some(TokenKind::Return) => parse_return_stmt(parser),
        _ => Err(parser.unexpected(Reason::ScopedStatement)),
    }
}

/// IfStatement := "if" "(" ConditionValue ")" Block ("else" IfStatement)?
///
/// A bare `else { .. }` is not in the grammar: `else` must introduce another
/// `if`, which becomes this statement's fallback.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<IfStmt, Error> {
    let keyword = parser.eat(TokenKind::If)?;

    parser.eat(TokenKind::OpenParen)?;
    let condition = parse_condition_value(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    let fallback = if parser.current_kind() == Some(TokenKind::Else) {
        parser.eat(TokenKind::Else)?;
        Some(Box::new(parse_if_stmt(parser)?))
    } else {
        None
    };

    Ok(IfStmt {
        condition,
        body,
        fallback,
        line: keyword.line,
    })
}

/// ReturnStatement := "return" ExpressionValue
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.eat(TokenKind::Return)?;
    let value = parse_expression_value(parser)?;

    Ok(Stmt::ReturnStatement {
        value,
        line: keyword.line,
    })
}
