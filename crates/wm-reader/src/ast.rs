/// Source span as a byte range.
pub type Span = std::ops::Range<usize>;

/// An AST node with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    /// The wrapped AST node.
    pub node: T,
    /// The byte range of this node in the source text.
    pub span: Span,
}

/// One S-expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Sexp {
    /// A bare symbol such as `sector` or `_`.
    Symbol(String),
    /// A double-quoted string, escapes already processed.
    String(String),
    /// An integer literal.
    Integer(i64),
    /// A real literal.
    Real(f64),
    /// `#t` or `#f`.
    Boolean(bool),
    /// A parenthesized list.
    List(Vec<Spanned<Sexp>>),
}

impl Sexp {
    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Symbol(_) => "symbol",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Boolean(_) => "boolean",
            Self::List(_) => "list",
        }
    }

    /// The symbol name, if this is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The list items, if this is a list.
    pub fn as_list(&self) -> Option<&[Spanned<Sexp>]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}
