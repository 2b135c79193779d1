//! Reader for the S-expression documents worldmaps and levels are stored in.
//!
//! Source text goes through the [`lexer`], then the [`parser`] builds a
//! spanned [`ast`]. [`Document`] validates the root object and exposes its
//! contents as a [`Mapping`] with typed, span-aware field extraction.

/// Spanned S-expression syntax tree.
pub mod ast;
/// Span-annotated warnings and errors, rendered with ariadne.
pub mod diagnostics;
/// Documents, mappings, and typed field extraction.
pub mod document;
/// Error types for reading documents.
pub mod error;
/// Tokenizer built on logos.
pub mod lexer;
/// S-expression parser built on chumsky.
pub mod parser;

pub use ast::{Sexp, Span, Spanned};
pub use diagnostics::{Diagnostic, Severity};
pub use document::{Document, Entry, FromSexp, Mapping};
pub use error::{DocError, DocResult};
