use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::{
        expressions::Expr,
        statements::{IfStmt, Program, Stmt},
    },
    errors::errors::{Error, ErrorImpl, Reason},
};

lazy_static! {
    // One or more capitalised words, no separators.
    static ref PASCAL_CASE: Regex = Regex::new("^[A-Z][a-z]+(?:[A-Z][a-z]+)*$").unwrap();
}

type ScopeId = usize;

/// One lexical scope frame: the names declared directly in it, with the line
/// of each declaration, and a non-owning link to the enclosing frame.
#[derive(Debug)]
struct Scope {
    parent: Option<ScopeId>,
    names: HashMap<String, u32>,
}

/// Scope state for one analysis pass. Frames live in an arena and refer to
/// their parents by index; resolution walks the parent chain to the root, so
/// a declaration is visible at any nesting depth below it.
#[derive(Debug)]
struct Analyzer {
    scopes: Vec<Scope>,
}

// The root (program) scope is always frame 0.
const ROOT: ScopeId = 0;

impl Analyzer {
    fn new() -> Self {
        Analyzer {
            scopes: vec![Scope {
                parent: None,
                names: HashMap::new(),
            }],
        }
    }

    fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Scope {
            parent: Some(parent),
            names: HashMap::new(),
        });
        self.scopes.len() - 1
    }

    /// Declares `name` directly in `scope`. Shadowing an ancestor is fine;
    /// redeclaring within the same frame is not.
    fn declare(&mut self, scope: ScopeId, name: &str, line: u32, reason: Reason) -> Result<(), Error> {
        if self.scopes[scope].names.contains_key(name) {
            return Err(Error::new(
                ErrorImpl::IdentifierAlreadyDeclared {
                    name: String::from(name),
                },
                line,
            )
            .with_reason(reason));
        }

        self.scopes[scope].names.insert(String::from(name), line);
        Ok(())
    }

    fn is_declared(&self, scope: ScopeId, name: &str) -> bool {
        let mut current = Some(scope);

        while let Some(id) = current {
            if self.scopes[id].names.contains_key(name) {
                return true;
            }
            current = self.scopes[id].parent;
        }

        false
    }

    fn expect_declared(
        &self,
        scope: ScopeId,
        name: &str,
        line: u32,
        reason: Reason,
    ) -> Result<(), Error> {
        if !self.is_declared(scope, name) {
            return Err(Error::new(
                ErrorImpl::IdentifierNotDeclared {
                    name: String::from(name),
                },
                line,
            )
            .with_reason(reason));
        }

        Ok(())
    }

    /// Validates a call: the callee must resolve, and so must every argument
    /// that is a name. Nested calls are validated all the way down.
    fn check_call(
        &self,
        scope: ScopeId,
        name: &str,
        params: &[Expr],
        line: u32,
        name_reason: Reason,
    ) -> Result<(), Error> {
        self.expect_declared(scope, name, line, name_reason)?;

        for param in params {
            match param {
                Expr::Identifier { value, line } => {
                    self.expect_declared(scope, value, *line, Reason::FunctionParamDoesNotExist)?;
                }
                Expr::FunctionCall { name, params, line } => {
                    self.check_call(scope, name, params, *line, Reason::FunctionNameDoesNotExist)?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn visit_stmt(&mut self, scope: ScopeId, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::ImportStatement { name, line, .. } => {
                if !PASCAL_CASE.is_match(name) {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedToken {
                            token: name.clone(),
                        },
                        *line,
                    )
                    .with_reason(Reason::ImportNameMustBePascalCase));
                }
                // Imports always land in the program scope.
                self.declare(ROOT, name, *line, Reason::Import)
            }
            Stmt::VariableDeclaration { name, value, line } => {
                match value {
                    Expr::Identifier { value, line } => {
                        self.expect_declared(scope, value, *line, Reason::LetValueDoesNotExist)?;
                    }
                    Expr::FunctionCall { name, params, line } => {
                        self.check_call(scope, name, params, *line, Reason::LetValueDoesNotExist)?;
                    }
                    _ => {}
                }
                self.declare(scope, name, *line, Reason::Let)
            }
            Stmt::FunctionDeclaration {
                name,
                params,
                body,
                line,
            } => {
                self.declare(scope, name, *line, Reason::Function)?;

                let fn_scope = self.push_scope(scope);
                for param in params {
                    self.declare(fn_scope, param, *line, Reason::FunctionParamDoesNotExist)?;
                }

                for stmt in body {
                    self.visit_stmt(fn_scope, stmt)?;
                }

                Ok(())
            }
            Stmt::If(if_stmt) => self.visit_if(scope, if_stmt),
            Stmt::Expression(Expr::FunctionCall { name, params, line }) => {
                self.check_call(scope, name, params, *line, Reason::FunctionNameDoesNotExist)
            }
            // Bare identifier statements and return values carry no
            // declarations and are not reference-checked.
            Stmt::Expression(_) | Stmt::ReturnStatement { .. } => Ok(()),
        }
    }

    fn visit_if(&mut self, scope: ScopeId, if_stmt: &IfStmt) -> Result<(), Error> {
        // The condition resolves in the scope active before the if-body.
        match &if_stmt.condition {
            Expr::Identifier { value, line } => {
                self.expect_declared(scope, value, *line, Reason::IfConditionDoesNotExist)?;
            }
            Expr::FunctionCall { name, params, line } => {
                self.check_call(scope, name, params, *line, Reason::IfConditionDoesNotExist)?;
            }
            _ => {}
        }

        let body_scope = self.push_scope(scope);
        for stmt in &if_stmt.body {
            self.visit_stmt(body_scope, stmt)?;
        }

        // An else-if chain hangs off the same parent scope as its sibling.
        if let Some(fallback) = &if_stmt.fallback {
            self.visit_if(scope, fallback)?;
        }

        Ok(())
    }
}

/// Validates every identifier reference in `program` under lexical scoping.
///
/// Each call builds its scope registry from scratch and drops it on return,
/// so repeated and concurrent calls are independent. The first rule
/// violation in traversal order aborts the pass.
pub fn analyze(program: &Program) -> Result<(), Error> {
    let mut analyzer = Analyzer::new();

    for stmt in &program.body {
        analyzer.visit_stmt(ROOT, stmt)?;
    }

    Ok(())
}
