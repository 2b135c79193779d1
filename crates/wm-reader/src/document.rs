use crate::ast::{Sexp, Span, Spanned};
use crate::error::{DocError, DocResult};
use crate::{lexer, parser};

/// Marker symbol for translatable strings: `(_ "text")`.
const TRANSLATABLE: &str = "_";

/// A parsed document with exactly one root object.
#[derive(Debug, Clone)]
pub struct Document {
    root: Spanned<Sexp>,
}

impl Document {
    /// Lex and parse `source`, then validate the root object.
    ///
    /// The first lexer or parser error aborts; a document is all-or-nothing.
    pub fn parse(source: &str) -> DocResult<Self> {
        let (tokens, lex_errors) = lexer::lex(source);
        if let Some(e) = lex_errors.into_iter().next() {
            return Err(DocError::Lex {
                span: e.span,
                message: e.message,
            });
        }

        let mut exprs = parser::parse(&tokens).map_err(|errors| {
            let first = errors.into_iter().next();
            match first {
                Some(e) => DocError::Syntax {
                    span: e.span,
                    message: e.message,
                },
                None => DocError::Empty,
            }
        })?;

        if exprs.len() > 1 {
            return Err(DocError::TrailingContent {
                span: exprs[1].span.clone(),
            });
        }
        let root = exprs.pop().ok_or(DocError::Empty)?;

        let named = root
            .node
            .as_list()
            .and_then(|items| items.first())
            .is_some_and(|head| head.node.as_symbol().is_some());
        if !named {
            return Err(DocError::BadRoot { span: root.span });
        }

        Ok(Self { root })
    }

    /// Name of the root object, e.g. `supertux-level`.
    pub fn root_name(&self) -> &str {
        self.root_items()
            .first()
            .and_then(|head| head.node.as_symbol())
            .unwrap_or_default()
    }

    /// Contents of the root object as a mapping.
    pub fn root_mapping(&self) -> DocResult<Mapping<'_>> {
        let items = self.root_items().get(1..).unwrap_or_default();
        Mapping::from_items(items, self.root.span.clone())
    }

    /// Span of the whole root object.
    pub fn span(&self) -> Span {
        self.root.span.clone()
    }

    fn root_items(&self) -> &[Spanned<Sexp>] {
        self.root.node.as_list().unwrap_or_default()
    }
}

/// One `(key value...)` element of a mapping.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    key: &'a str,
    args: &'a [Spanned<Sexp>],
    span: Span,
}

impl<'a> Entry<'a> {
    /// The entry's key.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// The values following the key.
    pub fn args(&self) -> &'a [Spanned<Sexp>] {
        self.args
    }

    /// Location of the whole entry.
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Convert the values to `T`.
    pub fn get<T: FromSexp>(&self) -> DocResult<T> {
        T::from_sexp(self.args).ok_or_else(|| DocError::WrongType {
            key: self.key.to_string(),
            expected: T::EXPECTED,
            found: describe(self.args),
            span: self.span.clone(),
        })
    }

    /// Treat the values as a nested mapping.
    pub fn as_mapping(&self) -> DocResult<Mapping<'a>> {
        Mapping::from_items(self.args, self.span.clone())
    }
}

/// An ordered list of entries. Keys may repeat; lookups return the first match.
#[derive(Debug, Clone)]
pub struct Mapping<'a> {
    entries: Vec<Entry<'a>>,
    span: Span,
}

impl<'a> Mapping<'a> {
    /// Validate that every item is `(symbol ...)` and build a mapping.
    pub fn from_items(items: &'a [Spanned<Sexp>], span: Span) -> DocResult<Self> {
        let entries = items
            .iter()
            .map(|item| {
                let list = item.node.as_list().unwrap_or_default();
                match list.split_first() {
                    Some((head, args)) => match head.node.as_symbol() {
                        Some(key) => Ok(Entry {
                            key,
                            args,
                            span: item.span.clone(),
                        }),
                        None => Err(DocError::MalformedEntry {
                            span: item.span.clone(),
                        }),
                    },
                    None => Err(DocError::MalformedEntry {
                        span: item.span.clone(),
                    }),
                }
            })
            .collect::<DocResult<Vec<_>>>()?;
        Ok(Self { entries, span })
    }

    /// All entries in document order.
    pub fn entries(&self) -> &[Entry<'a>] {
        &self.entries
    }

    /// Location of the mapping.
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// The first entry with `key`.
    pub fn find(&self, key: &str) -> Option<&Entry<'a>> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Every entry with `key`, in document order.
    pub fn find_all<'s>(&'s self, key: &'s str) -> impl Iterator<Item = &'s Entry<'a>> + 's {
        self.entries.iter().filter(move |e| e.key == key)
    }

    /// Whether `key` occurs at least once.
    pub fn has(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Try-get: `Ok(None)` when absent, an error when present with the wrong type.
    pub fn get<T: FromSexp>(&self, key: &str) -> DocResult<Option<T>> {
        self.find(key).map(|e| e.get::<T>()).transpose()
    }

    /// Like [`Mapping::get`], substituting `default` when absent.
    pub fn get_or<T: FromSexp>(&self, key: &str, default: T) -> DocResult<T> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Like [`Mapping::get`], failing when absent.
    pub fn require<T: FromSexp>(&self, key: &str) -> DocResult<T> {
        self.get(key)?.ok_or_else(|| DocError::MissingField {
            key: key.to_string(),
            span: self.span.clone(),
        })
    }

    /// The nested mapping under `key`, if present.
    pub fn get_mapping(&self, key: &str) -> DocResult<Option<Mapping<'a>>> {
        self.find(key).map(|e| e.as_mapping()).transpose()
    }
}

fn describe(args: &[Spanned<Sexp>]) -> String {
    match args {
        [] => "nothing".to_string(),
        [one] => one.node.type_name().to_string(),
        many => format!("{} values", many.len()),
    }
}

/// Conversion from the values of an entry.
pub trait FromSexp: Sized {
    /// Description of the accepted shape, used in error messages.
    const EXPECTED: &'static str;

    /// Convert, or `None` if the values have the wrong shape.
    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self>;
}

fn single(args: &[Spanned<Sexp>]) -> Option<&Sexp> {
    match args {
        [one] => Some(&one.node),
        _ => None,
    }
}

fn string_value(value: &Sexp) -> Option<String> {
    match value {
        Sexp::String(s) => Some(s.clone()),
        Sexp::List(items) => match items.as_slice() {
            [marker, text] if marker.node.as_symbol() == Some(TRANSLATABLE) => match &text.node {
                Sexp::String(s) => Some(s.clone()),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}

fn number_value(value: &Sexp) -> Option<f64> {
    match value {
        Sexp::Integer(n) => Some(*n as f64),
        Sexp::Real(n) => Some(*n),
        _ => None,
    }
}

impl FromSexp for String {
    const EXPECTED: &'static str = "a string";

    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self> {
        single(args).and_then(string_value)
    }
}

impl FromSexp for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self> {
        match single(args)? {
            Sexp::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromSexp for i32 {
    const EXPECTED: &'static str = "an integer";

    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self> {
        match single(args)? {
            Sexp::Integer(n) => i32::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl FromSexp for u32 {
    const EXPECTED: &'static str = "a non-negative integer";

    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self> {
        match single(args)? {
            Sexp::Integer(n) => u32::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl FromSexp for f32 {
    const EXPECTED: &'static str = "a number";

    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self> {
        single(args).and_then(number_value).map(|n| n as f32)
    }
}

impl FromSexp for Vec<f32> {
    const EXPECTED: &'static str = "a list of numbers";

    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self> {
        args.iter()
            .map(|a| number_value(&a.node).map(|n| n as f32))
            .collect()
    }
}

impl FromSexp for Vec<u32> {
    const EXPECTED: &'static str = "a list of non-negative integers";

    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self> {
        args.iter()
            .map(|a| match a.node {
                Sexp::Integer(n) => u32::try_from(n).ok(),
                _ => None,
            })
            .collect()
    }
}

impl FromSexp for Vec<String> {
    const EXPECTED: &'static str = "a list of strings";

    fn from_sexp(args: &[Spanned<Sexp>]) -> Option<Self> {
        args.iter().map(|a| string_value(&a.node)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: &str = r#"
(supertux-level
  (version 2)
  (name (_ "Icy Island"))
  (tileset "images/worldmap.strf")
  (sector
    (name "main")
    (music "music/salcon.ogg")
    (ambient-light 0.5 0.5 1)
    (tilemap (solid #t) (width 2) (height 1) (tiles 1 2))))
"#;

    #[test]
    fn root_name_and_mapping() {
        let doc = Document::parse(LEVEL).unwrap();
        assert_eq!(doc.root_name(), "supertux-level");
        let root = doc.root_mapping().unwrap();
        let keys: Vec<_> = root.entries().iter().map(Entry::key).collect();
        assert_eq!(keys, vec!["version", "name", "tileset", "sector"]);
    }

    #[test]
    fn translatable_string() {
        let doc = Document::parse(LEVEL).unwrap();
        let root = doc.root_mapping().unwrap();
        assert_eq!(root.get::<String>("name").unwrap().as_deref(), Some("Icy Island"));
    }

    #[test]
    fn try_get_absent_is_none() {
        let doc = Document::parse(LEVEL).unwrap();
        let root = doc.root_mapping().unwrap();
        assert_eq!(root.get::<String>("author").unwrap(), None);
        assert_eq!(root.get_or("author", "nobody".to_string()).unwrap(), "nobody");
    }

    #[test]
    fn has_checks_presence_only() {
        let doc = Document::parse(LEVEL).unwrap();
        let root = doc.root_mapping().unwrap();
        assert!(root.has("sector"));
        assert!(root.has("version"));
        assert!(!root.has("author"));
    }

    #[test]
    fn require_absent_is_error() {
        let doc = Document::parse(LEVEL).unwrap();
        let root = doc.root_mapping().unwrap();
        let err = root.require::<String>("author").unwrap_err();
        assert_eq!(err.to_string(), "required field 'author' is missing");
    }

    #[test]
    fn wrong_type_is_error() {
        let doc = Document::parse(LEVEL).unwrap();
        let root = doc.root_mapping().unwrap();
        let err = root.get::<bool>("version").unwrap_err();
        assert!(err.span().is_some());
        insta::assert_snapshot!(err, @"field 'version': expected a boolean, found integer");
    }

    #[test]
    fn nested_mapping_values() {
        let doc = Document::parse(LEVEL).unwrap();
        let root = doc.root_mapping().unwrap();
        let sector = root.get_mapping("sector").unwrap().unwrap();
        assert_eq!(
            sector.get::<Vec<f32>>("ambient-light").unwrap(),
            Some(vec![0.5, 0.5, 1.0])
        );

        let tilemap = sector.find("tilemap").unwrap().as_mapping().unwrap();
        assert!(tilemap.require::<bool>("solid").unwrap());
        assert_eq!(tilemap.require::<u32>("width").unwrap(), 2);
        assert_eq!(tilemap.require::<Vec<u32>>("tiles").unwrap(), vec![1, 2]);
    }

    #[test]
    fn integers_read_as_floats() {
        let doc = Document::parse("(obj (x 3) (y 2.5))").unwrap();
        let m = doc.root_mapping().unwrap();
        assert_eq!(m.require::<f32>("x").unwrap(), 3.0);
        assert_eq!(m.require::<f32>("y").unwrap(), 2.5);
    }

    #[test]
    fn negative_into_u32_is_wrong_type() {
        let doc = Document::parse("(obj (width -1))").unwrap();
        let m = doc.root_mapping().unwrap();
        assert!(matches!(
            m.get::<u32>("width"),
            Err(DocError::WrongType { .. })
        ));
    }

    #[test]
    fn repeated_keys_keep_order() {
        let doc = Document::parse("(obj (tileset \"a\") (x 1) (tileset \"b\"))").unwrap();
        let m = doc.root_mapping().unwrap();
        let sets: Vec<String> = m
            .find_all("tileset")
            .map(|e| e.get::<String>().unwrap())
            .collect();
        assert_eq!(sets, vec!["a", "b"]);
        assert_eq!(m.get::<String>("tileset").unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn malformed_entry_rejected() {
        let doc = Document::parse("(obj (x 1) 42)").unwrap();
        assert!(matches!(
            doc.root_mapping(),
            Err(DocError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn entry_without_key_rejected() {
        let doc = Document::parse("(obj (\"x\" 1))").unwrap();
        assert!(matches!(
            doc.root_mapping(),
            Err(DocError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn empty_document() {
        assert_eq!(Document::parse("; nothing\n").unwrap_err(), DocError::Empty);
    }

    #[test]
    fn two_roots_rejected() {
        assert!(matches!(
            Document::parse("(a) (b)"),
            Err(DocError::TrailingContent { .. })
        ));
    }

    #[test]
    fn atom_root_rejected() {
        assert!(matches!(
            Document::parse("42"),
            Err(DocError::BadRoot { .. })
        ));
    }

    #[test]
    fn syntax_error_reported() {
        assert!(matches!(
            Document::parse("(supertux-level (name \"x\")"),
            Err(DocError::Syntax { .. })
        ));
    }

    #[test]
    fn lex_error_reported() {
        assert!(matches!(
            Document::parse("(supertux-level (x #q))"),
            Err(DocError::Lex { .. })
        ));
    }
}
