use span_util::Span;

/// Kind of a recognized directive comment line.
///
/// `Elif` exists only so the builder can reject the retired spelling by
/// name instead of letting it pass through as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    If,
    ElseIf,
    Else,
    EndIf,
    Elif,
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectiveKind::If => write!(f, "if"),
            DirectiveKind::ElseIf => write!(f, "elseif"),
            DirectiveKind::Else => write!(f, "else"),
            DirectiveKind::EndIf => write!(f, "endif"),
            DirectiveKind::Elif => write!(f, "elif"),
        }
    }
}

/// One directive comment line found by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveLine {
    pub kind: DirectiveKind,
    /// Raw text after the keyword, untrimmed. Empty for `else`/`endif`.
    pub condition: String,
    /// The whole line including its trailing newline.
    pub span: Span,
}

impl DirectiveLine {
    pub fn new(kind: DirectiveKind, condition: impl Into<String>, span: Span) -> DirectiveLine {
        DirectiveLine {
            kind,
            condition: condition.into(),
            span,
        }
    }
}
