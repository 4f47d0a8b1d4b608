use crate::scanner::Token;
use ariadne::{Label, Report, ReportKind};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("{0}, {1}")]
    ExpectedToken(String, Token),
    #[error("Unexpected token: {0}")]
    UnexpectedToken(Token),
    #[error("Expected expression, got {0}")]
    ExpectedExpression(Token),
    #[error("Unterminated string: {0}")]
    UnterminatedString(Token),
    #[error("Reference to undefined variable '{0}'")]
    UndefinedVariable(String),
}

impl EvalError {
    /**
     * Spans in these reports are relative to the condition text,
     * not to the file the directive line came from.
     */
    pub fn into_report(&mut self) -> Report {
        let msg = self.to_string();

        match self {
            EvalError::ExpectedToken(_, tok)
            | EvalError::UnexpectedToken(tok)
            | EvalError::ExpectedExpression(tok)
            | EvalError::UnterminatedString(tok) => {
                let label = Label::new(tok.span.to_range());
                Report::build(ReportKind::Error, (), 99)
                    .with_message("SyntaxError")
                    .with_label(label.with_message(msg))
                    .finish()
            }
            // undefined variables surface at runtime, there is no token to point at
            EvalError::UndefinedVariable(_) => Report::build(ReportKind::Error, (), 99)
                .with_message(format!("ReferenceError: {}", msg))
                .finish(),
        }
    }
}
