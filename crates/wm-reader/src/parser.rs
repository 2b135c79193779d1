use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::ast::*;
use crate::lexer::Token;

type Span = SimpleSpan;

/// Parse error with source span.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Byte range the parser was looking at.
    pub span: std::ops::Range<usize>,
    /// Human-readable description.
    pub message: String,
}

fn spanned<T>(node: T, span: Span) -> Spanned<T> {
    Spanned {
        node,
        span: span.into_range(),
    }
}

/// Build the parser for a sequence of top-level expressions.
fn expressions_parser<'a, I>()
-> impl Parser<'a, I, Vec<Spanned<Sexp>>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    let sexp = recursive(|sexp| {
        let atom = select! {
            Token::Symbol(s) => Sexp::Symbol(s),
            Token::Str(s) => Sexp::String(s),
            Token::Integer(n) => Sexp::Integer(n),
            Token::Real(n) => Sexp::Real(n),
            Token::Boolean(b) => Sexp::Boolean(b),
        }
        .labelled("atom");

        let list = sexp
            .repeated()
            .collect::<Vec<Spanned<Sexp>>>()
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map(Sexp::List)
            .labelled("list");

        choice((atom, list))
            .map_with(|node, e| spanned(node, e.span()))
            .labelled("expression")
    });

    sexp.repeated().collect::<Vec<_>>().then_ignore(end())
}

/// Parse a token stream into top-level expressions.
pub fn parse(
    tokens: &[(Token, std::ops::Range<usize>)],
) -> Result<Vec<Spanned<Sexp>>, Vec<ParseError>> {
    let token_iter = tokens
        .iter()
        .map(|(tok, span)| (tok.clone(), Span::from(span.clone())));

    let len = tokens.last().map_or(0, |(_, s)| s.end);
    let eoi: Span = (len..len).into();
    let stream = Stream::from_iter(token_iter).map(eoi, |(t, s): (_, _)| (t, s));

    let (output, errors) = expressions_parser().parse(stream).into_output_errors();

    match output {
        Some(exprs) if errors.is_empty() => Ok(exprs),
        _ => Err(errors
            .into_iter()
            .map(|e| ParseError {
                span: e.span().into_range(),
                message: e.to_string(),
            })
            .collect()),
    }
}
