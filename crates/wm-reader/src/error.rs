use crate::ast::Span;

/// Alias for `Result<T, DocError>`.
pub type DocResult<T> = Result<T, DocError>;

/// Errors raised while reading a document or extracting fields from it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocError {
    /// The source contains text that is not a valid token.
    #[error("{message}")]
    Lex {
        /// Location of the bad input.
        span: Span,
        /// Description from the lexer.
        message: String,
    },

    /// The tokens do not form well-nested expressions.
    #[error("syntax error: {message}")]
    Syntax {
        /// Location of the unexpected token.
        span: Span,
        /// Description from the parser.
        message: String,
    },

    /// The source contains no expression at all.
    #[error("document is empty")]
    Empty,

    /// Something follows the root object.
    #[error("unexpected content after the root object")]
    TrailingContent {
        /// Location of the first extra expression.
        span: Span,
    },

    /// The root is not a list headed by a name.
    #[error("document root must be a list starting with a name")]
    BadRoot {
        /// Location of the root expression.
        span: Span,
    },

    /// A mapping element is not of the form `(key value...)`.
    #[error("expected an entry of the form (key value...)")]
    MalformedEntry {
        /// Location of the offending element.
        span: Span,
    },

    /// A required field is absent.
    #[error("required field '{key}' is missing")]
    MissingField {
        /// The missing key.
        key: String,
        /// Location of the mapping that should contain it.
        span: Span,
    },

    /// A field is present but holds the wrong kind of value.
    #[error("field '{key}': expected {expected}, found {found}")]
    WrongType {
        /// The field's key.
        key: String,
        /// What the caller asked for.
        expected: &'static str,
        /// What the document contains.
        found: String,
        /// Location of the entry.
        span: Span,
    },
}

impl DocError {
    /// Source location of the problem, when there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lex { span, .. }
            | Self::Syntax { span, .. }
            | Self::TrailingContent { span }
            | Self::BadRoot { span }
            | Self::MalformedEntry { span }
            | Self::MissingField { span, .. }
            | Self::WrongType { span, .. } => Some(span.clone()),
            Self::Empty => None,
        }
    }
}
