use super::expressions::Expr;

/// The root node returned by the parser. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub line: u32,
}

/// Statement nodes. Each variant carries the line of its leading token.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    ImportStatement {
        name: String,
        path: String,
        line: u32,
    },
    VariableDeclaration {
        name: String,
        value: Expr,
        line: u32,
    },
    FunctionDeclaration {
        name: String,
        params: Vec<String>,
        body: Vec<Stmt>,
        line: u32,
    },
    If(IfStmt),
    ReturnStatement {
        value: Expr,
        line: u32,
    },
    /// A bare identifier or function call in statement position.
    Expression(Expr),
}

impl Stmt {
    pub fn line(&self) -> u32 {
        match self {
            Stmt::ImportStatement { line, .. }
            | Stmt::VariableDeclaration { line, .. }
            | Stmt::FunctionDeclaration { line, .. }
            | Stmt::ReturnStatement { line, .. } => *line,
            Stmt::If(if_stmt) => if_stmt.line,
            Stmt::Expression(expr) => expr.line(),
        }
    }
}

/// An `if` with an optional `else if` chain. A bare `else` block is not part
/// of the grammar, so the fallback is always another `IfStmt`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    /// Restricted by the grammar to `Identifier` or `FunctionCall`.
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub fallback: Option<Box<IfStmt>>,
    pub line: u32,
}
