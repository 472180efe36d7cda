//! Emission errors.

use conv_blocks::BlockKind;
use conv_diagnostic::{Diagnostic, ErrorCode};
use conv_ir::{LineCol, Span, Token};

/// An assignment that cannot be turned into an instruction line.
///
/// `span` and `location` point at the offending tokens when there are any.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct EmitError {
    pub kind: EmitErrorKind,
    pub span: Option<Span>,
    pub location: Option<LineCol>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EmitErrorKind {
    #[error("expected an assignment block, found {kind}")]
    NotAnAssignment { kind: BlockKind },
    #[error("assignment has no identifier")]
    MissingIdentifier,
    /// Compound operators such as `+=` reach the emitter as a bare `+`.
    #[error("assignment must use `=`, found `{found}`")]
    AssignmentOperator { found: String },
    #[error("assignment to `{identifier}` has no value")]
    EmptyValue { identifier: String },
    /// More than one operator, a parenthesized group, or an operator outside
    /// infix position.
    #[error("expression `{expression}` is not a single binary operation")]
    ChainedExpression { expression: String },
}

impl EmitErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EmitErrorKind::ChainedExpression { .. } => ErrorCode::E2001,
            _ => ErrorCode::E2002,
        }
    }
}

impl EmitError {
    /// An error without a source position.
    #[cold]
    pub fn new(kind: EmitErrorKind) -> Self {
        EmitError {
            kind,
            span: None,
            location: None,
        }
    }

    /// An error covering `tokens`. Unpositioned when `tokens` is empty.
    #[cold]
    pub fn at(kind: EmitErrorKind, tokens: &[Token]) -> Self {
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => EmitError {
                kind,
                span: Some(first.span.merge(last.span)),
                location: Some(first.location),
            },
            _ => EmitError::new(kind),
        }
    }

    /// Fill in a position if the error has none yet.
    #[must_use]
    pub fn or_at(self, tokens: &[Token]) -> Self {
        if self.span.is_some() {
            return self;
        }
        EmitError::at(self.kind, tokens)
    }

    /// Convert into an error diagnostic.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag =
            Diagnostic::error(self.kind.error_code()).with_message(self.kind.to_string());
        if let (Some(span), Some(location)) = (self.span, self.location) {
            diag = diag.with_label(span, location, self.primary_label());
        }
        if let EmitErrorKind::ChainedExpression { .. } = self.kind {
            diag = diag
                .with_note("an assignment value is either plain operands or `LHS OP RHS`")
                .with_suggestion("split the expression into one assignment per operation");
        }
        diag
    }

    fn primary_label(&self) -> &'static str {
        match self.kind {
            EmitErrorKind::NotAnAssignment { .. } => "not an assignment",
            EmitErrorKind::MissingIdentifier => "identifier expected here",
            EmitErrorKind::AssignmentOperator { .. } => "expected `=`",
            EmitErrorKind::EmptyValue { .. } => "value expected after this",
            EmitErrorKind::ChainedExpression { .. } => "unsupported expression",
        }
    }
}
