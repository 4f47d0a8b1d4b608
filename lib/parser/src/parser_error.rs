use ariadne::{Label, Report, ReportKind};
use ast::DirectiveKind;
use span_util::Span;
use thiserror::Error;

/// Structural errors raised while building the block tree. The message
/// text is stable, downstream tooling matches on it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Only one if statement found (#{0}), which is invalid. Ignoring it.")]
    LoneDirective(DirectiveKind, Span),

    #[error("Must start with #if, got #{0}.")]
    MustStartWithIf(DirectiveKind, Span),

    #[error("Unexpected #elseif statement found.")]
    UnexpectedElseIf(Span),

    #[error("Unexpected #elseif statement found after #else.")]
    ElseIfAfterElse(Span),

    #[error("Unexpected #else statement found.")]
    UnexpectedElse(Span),

    #[error("Unexpected #else statement found after #else.")]
    ElseAfterElse(Span),

    #[error("Unexpected #endif statement found.")]
    UnexpectedEndIf(Span),

    #[error("Unclosed #if statement found.")]
    UnclosedIf(Span),

    #[error("#elif is no longer supported")]
    ElifRetired(Span),
}

impl ParseError {
    /// Span of the offending directive line, in source byte offsets.
    pub fn span(&self) -> Span {
        match self {
            ParseError::LoneDirective(_, span)
            | ParseError::MustStartWithIf(_, span)
            | ParseError::UnexpectedElseIf(span)
            | ParseError::ElseIfAfterElse(span)
            | ParseError::UnexpectedElse(span)
            | ParseError::ElseAfterElse(span)
            | ParseError::UnexpectedEndIf(span)
            | ParseError::UnclosedIf(span)
            | ParseError::ElifRetired(span) => *span,
        }
    }

    pub fn into_report(&mut self) -> Report {
        let msg = self.to_string();
        let label = Label::new(self.span().to_range());
        Report::build(ReportKind::Error, (), 99)
            .with_message("SyntaxError")
            .with_label(label.with_message(msg))
            .finish()
    }
}
