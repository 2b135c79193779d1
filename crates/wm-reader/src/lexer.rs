use logos::Logos;
use std::fmt;

/// Token type for worldmap documents.
///
/// Keys such as `sector` or `tilemap` are plain symbols; meaning is assigned
/// later by whoever reads the mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left parenthesis `(`.
    LParen,
    /// Right parenthesis `)`.
    RParen,
    /// Double-quoted string literal.
    Str(String),
    /// Integer literal.
    Integer(i64),
    /// Real literal.
    Real(f64),
    /// `#t` or `#f`.
    Boolean(bool),
    /// Bare symbol.
    Symbol(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Str(s) => write!(f, "\"{s}\""),
            Token::Integer(n) => write!(f, "{n}"),
            Token::Real(n) => write!(f, "{n}"),
            Token::Boolean(true) => write!(f, "#t"),
            Token::Boolean(false) => write!(f, "#f"),
            Token::Symbol(s) => write!(f, "{s}"),
        }
    }
}

/// Internal logos token. Borrows from the source while lexing.
/// Converted to owned `Token` after lexing.
#[derive(Logos, Debug)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r";[^\n]*")]
enum RawToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("#t")]
    True,

    #[token("#f")]
    False,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"-?[0-9]+\.[0-9]+")]
    Real,

    #[regex(r"-?[0-9]+")]
    Integer,

    #[regex(r"[a-zA-Z_+*/<>=!?][a-zA-Z0-9_+*/<>=!?.:-]*")]
    Symbol,
}

/// A lexer error with source location.
#[derive(Debug, Clone)]
pub struct LexError {
    /// Byte range of the erroneous input in the source.
    pub span: std::ops::Range<usize>,
    /// Human-readable description of the lexer error.
    pub message: String,
}

/// Lex source text into a sequence of `(Token, Span)` pairs.
///
/// Lexing continues past errors so every problem in the input is reported.
pub fn lex(source: &str) -> (Vec<(Token, std::ops::Range<usize>)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(raw) => {
                let token = match raw {
                    RawToken::LParen => Token::LParen,
                    RawToken::RParen => Token::RParen,
                    RawToken::True => Token::Boolean(true),
                    RawToken::False => Token::Boolean(false),
                    RawToken::Str => {
                        let slice = lexer.slice();
                        Token::Str(unescape(&slice[1..slice.len() - 1]))
                    }
                    RawToken::Real => match lexer.slice().parse::<f64>() {
                        Ok(n) => Token::Real(n),
                        Err(_) => {
                            errors.push(LexError {
                                span: span.clone(),
                                message: format!("invalid real literal: {}", lexer.slice()),
                            });
                            continue;
                        }
                    },
                    RawToken::Integer => match lexer.slice().parse::<i64>() {
                        Ok(n) => Token::Integer(n),
                        Err(_) => {
                            errors.push(LexError {
                                span: span.clone(),
                                message: format!("invalid integer literal: {}", lexer.slice()),
                            });
                            continue;
                        }
                    },
                    RawToken::Symbol => Token::Symbol(lexer.slice().to_string()),
                };
                tokens.push((token, span));
            }
            Err(()) => {
                let text = &source[span.clone()];
                let message = if text.starts_with('"') {
                    "unterminated string literal".to_string()
                } else {
                    format!("unexpected character: {text:?}")
                };
                errors.push(LexError { span, message });
            }
        }
    }

    (tokens, errors)
}

/// Process escape sequences in a string literal.
///
/// Supports `\\`, `\n`, `\t`, `\"`. Unknown sequences are kept as-is.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<String> {
        let (tokens, errors) = lex(source);
        assert!(errors.is_empty(), "errors: {errors:?}");
        tokens.iter().map(|(t, _)| t.to_string()).collect()
    }

    #[test]
    fn lex_nested_entry() {
        assert_eq!(
            kinds("(supertux-level (name \"Icy Island\"))"),
            vec!["(", "supertux-level", "(", "name", "\"Icy Island\"", ")", ")"]
        );
    }

    #[test]
    fn lex_numbers() {
        let (tokens, errors) = lex("(x 12) (speed -0.5)");
        assert!(errors.is_empty());
        assert!(matches!(tokens[2].0, Token::Integer(12)));
        assert!(matches!(tokens[6].0, Token::Real(n) if (n + 0.5).abs() < f64::EPSILON));
    }

    #[test]
    fn lex_booleans() {
        let (tokens, errors) = lex("(solid #t) (auto-play #f)");
        assert!(errors.is_empty());
        assert_eq!(tokens[2].0, Token::Boolean(true));
        assert_eq!(tokens[6].0, Token::Boolean(false));
    }

    #[test]
    fn lex_translatable_marker_is_symbol() {
        let (tokens, errors) = lex("(_ \"Welcome\")");
        assert!(errors.is_empty());
        assert_eq!(tokens[1].0, Token::Symbol("_".into()));
    }

    #[test]
    fn lex_comments_are_skipped() {
        assert_eq!(kinds("; header comment\n(sector) ; trailing"), vec!["(", "sector", ")"]);
    }

    #[test]
    fn lex_multiline_string() {
        let (tokens, errors) = lex("\"line one\nline two\"");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].0, Token::Str("line one\nline two".into()));
    }

    #[test]
    fn lex_string_with_escapes() {
        let (tokens, errors) = lex(r#""say \"hi\"\tnow""#);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].0, Token::Str("say \"hi\"\tnow".into()));
    }

    #[test]
    fn lex_unterminated_string_reports_error() {
        let (_, errors) = lex("(name \"unclosed)");
        assert!(!errors.is_empty());
        assert_eq!(errors[0].message, "unterminated string literal");
    }

    #[test]
    fn lex_unexpected_character() {
        let (_, errors) = lex("(x #z)");
        assert!(!errors.is_empty());
        assert!(errors[0].message.contains("unexpected character"));
    }

    #[test]
    fn lex_preserves_spans() {
        let (tokens, _) = lex("(music \"a.ogg\")");
        assert_eq!(tokens[0].1, 0..1);
        assert_eq!(tokens[1].1, 1..6);
        assert_eq!(tokens[2].1, 7..14);
    }

    #[test]
    fn unescape_unknown_kept() {
        assert_eq!(unescape(r"\x"), "\\x");
    }

    #[test]
    fn unescape_trailing_backslash() {
        assert_eq!(unescape("trail\\"), "trail\\");
    }

    proptest! {
        #[test]
        fn lexing_never_panics(source in "\\PC{0,64}") {
            let _ = lex(&source);
        }

        #[test]
        fn integers_lex_to_their_value(n in -100_000i64..100_000) {
            let (tokens, errors) = lex(&n.to_string());
            prop_assert!(errors.is_empty());
            prop_assert_eq!(&tokens[0].0, &Token::Integer(n));
        }
    }
}
