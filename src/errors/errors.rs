use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
    reason: Option<Reason>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: Reason) -> Self {
        self.reason = Some(reason);
        self
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_reason(&self) -> Option<Reason> {
        self.reason
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::DanglingComma => "DanglingComma",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::IdentifierAlreadyDeclared { .. } => "IdentifierAlreadyDeclared",
            ErrorImpl::IdentifierNotDeclared { .. } => "IdentifierNotDeclared",
        }
    }

    /// The error family: syntax errors come from the lexer and parser (plus
    /// the import-name shape check), reference errors from the analyzer's
    /// scope rules.
    pub fn get_family(&self) -> ErrorFamily {
        match &self.internal_error {
            ErrorImpl::IdentifierAlreadyDeclared { .. }
            | ErrorImpl::IdentifierNotDeclared { .. } => ErrorFamily::Reference,
            _ => ErrorFamily::Syntax,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        if let Some(reason) = &self.reason {
            return ErrorTip::Suggestion(reason.to_string());
        }

        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("I was not expecting `{}`.", token))
            }
            ErrorImpl::UnexpectedEndOfInput => {
                ErrorTip::Suggestion(String::from("The program ended unexpectedly."))
            }
            ErrorImpl::DanglingComma => {
                ErrorTip::Suggestion(String::from("Cannot have a dangling comma."))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`.", token))
            }
            ErrorImpl::IdentifierAlreadyDeclared { name } => ErrorTip::Suggestion(format!(
                "The identifier `{}` has already been declared.",
                name
            )),
            ErrorImpl::IdentifierNotDeclared { name } => ErrorTip::Suggestion(format!(
                "The identifier `{}` has not been declared.",
                name
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}Error on line {}: {}",
            self.get_family(),
            self.line,
            self.internal_error
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFamily {
    Syntax,
    Reference,
}

impl Display for ErrorFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorFamily::Syntax => write!(f, "Syntax"),
            ErrorFamily::Reference => write!(f, "Reference"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("dangling comma")]
    DanglingComma,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("identifier {name:?} already declared")]
    IdentifierAlreadyDeclared { name: String },
    #[error("identifier {name:?} not declared")]
    IdentifierNotDeclared { name: String },
}

/// Context tag attached where the bare error variant is ambiguous. Selects
/// the suggestion shown to the user; never consulted by grammar or scope
/// logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Statement,
    ScopedStatement,
    ExpressionValue,
    ConditionValue,
    Import,
    Let,
    Function,
    LetValueDoesNotExist,
    FunctionNameDoesNotExist,
    FunctionParamDoesNotExist,
    IfConditionDoesNotExist,
    ImportNameMustBePascalCase,
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Reason::Statement => "Expected: Import, Let or Function",
            Reason::ScopedStatement => "Expected: Name, If, Let, Function or Return",
            Reason::ExpressionValue => {
                "Expected: Name, String, Number, Boolean, Array, Object or Function"
            }
            Reason::ConditionValue => "Expected: Name or Function",
            Reason::Import => "You can't import with this name. It has already been declared.",
            Reason::Let => {
                "You can't declare a variable with this name. It has already been declared."
            }
            Reason::Function => {
                "You can't declare a function with this name. It has already been declared."
            }
            Reason::LetValueDoesNotExist => {
                "You can't use this variable as value. It does not exist."
            }
            Reason::FunctionNameDoesNotExist => {
                "You can't call this function. It does not exist."
            }
            Reason::FunctionParamDoesNotExist => {
                "You can't call this function with this variable as parameter. It does not exist."
            }
            Reason::IfConditionDoesNotExist => {
                "You can't use this name as condition. It does not exist."
            }
            Reason::ImportNameMustBePascalCase => {
                "You can't import with this name. It must be PascalCase."
            }
        };

        write!(f, "{}", message)
    }
}
