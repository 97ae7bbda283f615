/// Expression nodes.
///
/// Every variant carries the source line of its leading token. Nodes are
/// plain data: the analyzer only reads them, and tests compare them
/// structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    NumberLiteral {
        value: f64,
        line: u32,
    },
    StringLiteral {
        value: String,
        line: u32,
    },
    BooleanLiteral {
        value: bool,
        line: u32,
    },
    /// A bare name reference. This includes function names outside calls.
    Identifier {
        value: String,
        line: u32,
    },
    FunctionCall {
        name: String,
        params: Vec<Expr>,
        line: u32,
    },
    ArrayLiteral {
        value: Vec<Expr>,
        line: u32,
    },
    /// Properties keep insertion order; duplicate keys are not rejected.
    ObjectLiteral {
        value: Vec<(String, Expr)>,
        line: u32,
    },
}

impl Expr {
    pub fn line(&self) -> u32 {
        match self {
            Expr::NumberLiteral { line, .. }
            | Expr::StringLiteral { line, .. }
            | Expr::BooleanLiteral { line, .. }
            | Expr::Identifier { line, .. }
            | Expr::FunctionCall { line, .. }
            | Expr::ArrayLiteral { line, .. }
            | Expr::ObjectLiteral { line, .. } => *line,
        }
    }
}
