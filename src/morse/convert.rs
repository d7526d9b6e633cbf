//! Bidirectional text <-> Morse transform.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::table::EncodingTable;

/// Error value handed to an [`UnknownHandler`] when a symbol or code has no
/// table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no encoding for {symbol:?}")]
pub struct NoEncoding {
    /// The offending symbol (encode) or dot-dash code (decode).
    pub symbol: String,
}

/// Policy invoked when no symbol/code correspondence exists for an input
/// unit. Returns the text spliced into the output in its place.
///
/// The converter holds no mutable state, so implementations must be pure
/// with respect to it. Closures with the matching signature implement this
/// trait directly.
pub trait UnknownHandler: Send + Sync {
    fn handle(&self, err: &NoEncoding) -> String;
}

impl<F> UnknownHandler for F
where
    F: Fn(&NoEncoding) -> String + Send + Sync,
{
    fn handle(&self, err: &NoEncoding) -> String {
        self(err)
    }
}

/// Default policy: drop the unknown unit, leaving no separator artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl UnknownHandler for Ignore {
    fn handle(&self, _err: &NoEncoding) -> String {
        String::new()
    }
}

/// Replace every unknown unit with a fixed marker.
#[derive(Debug, Clone)]
pub struct Placeholder(pub String);

impl UnknownHandler for Placeholder {
    fn handle(&self, _err: &NoEncoding) -> String {
        self.0.clone()
    }
}

/// Stateless bidirectional text <-> Morse transform.
///
/// Configuration is fixed at [`build`](ConverterBuilder::build) time and
/// never mutated afterwards, so a converter is safe for unbounded concurrent
/// reads. Unknown symbols never fail a call; they are routed through the
/// configured [`UnknownHandler`].
#[derive(Clone)]
pub struct Converter {
    table: EncodingTable,
    char_separator: String,
    word_separator: String,
    fold_case: bool,
    trailing_separator: bool,
    unknown: Arc<dyn UnknownHandler>,
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("symbols", &self.table.len())
            .field("char_separator", &self.char_separator)
            .field("word_separator", &self.word_separator)
            .field("fold_case", &self.fold_case)
            .field("trailing_separator", &self.trailing_separator)
            .finish()
    }
}

impl Converter {
    /// Start building a converter over `table`.
    pub fn builder(table: EncodingTable) -> ConverterBuilder {
        ConverterBuilder::new(table)
    }

    /// Ready-made converter over the default Cyrillic alphabet: single-space
    /// character separator, case folding on, unknown symbols ignored.
    pub fn cyrillic() -> Self {
        Self::builder(EncodingTable::cyrillic()).fold_case(true).build()
    }

    /// The table this converter encodes and decodes with.
    pub fn table(&self) -> &EncodingTable {
        &self.table
    }

    /// Convert plain text to its Morse representation.
    ///
    /// Iterates logical characters, optionally folding them to uppercase.
    /// Known symbols append their code plus the character separator; unknown
    /// symbols append the handler's replacement, with a separator only when
    /// the replacement is non-empty. One trailing separator is stripped
    /// unless trailing-separator mode is on.
    pub fn encode(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 5);
        for ch in text.chars() {
            let ch = if self.fold_case {
                ch.to_uppercase().next().unwrap_or(ch)
            } else {
                ch
            };
            match self.table.code(ch) {
                Some(code) => {
                    out.push_str(code);
                    out.push_str(&self.char_separator);
                }
                None => {
                    let replacement = self.unknown.handle(&NoEncoding {
                        symbol: ch.to_string(),
                    });
                    if !replacement.is_empty() {
                        out.push_str(&replacement);
                        out.push_str(&self.char_separator);
                    }
                }
            }
        }
        if !self.trailing_separator && out.ends_with(&self.char_separator) {
            out.truncate(out.len() - self.char_separator.len());
        }
        out
    }

    /// Convert a Morse string back to text.
    ///
    /// The input is split into words on the word separator, each word into
    /// codes on the character separator, and each code looked up in the
    /// inverse table. Unknown codes go through the same handler contract as
    /// [`encode`](Self::encode). A literal space is appended after each
    /// word; the final trim mirrors encode's rule, removing as many trailing
    /// characters as the character separator contains.
    pub fn decode(&self, morse: &str) -> String {
        let mut out: Vec<char> = Vec::with_capacity(morse.len() / 4);
        for word in morse.split(self.word_separator.as_str()) {
            for code in word.split(self.char_separator.as_str()) {
                match self.table.symbol(code) {
                    Some(symbol) => out.push(symbol),
                    None => {
                        let replacement = self.unknown.handle(&NoEncoding {
                            symbol: code.to_string(),
                        });
                        if !replacement.is_empty() {
                            out.extend(replacement.chars());
                            out.extend(self.char_separator.chars());
                        }
                    }
                }
            }
            out.push(' ');
        }
        if !self.trailing_separator {
            let sep_chars = self.char_separator.chars().count();
            if out.len() >= sep_chars {
                out.truncate(out.len() - sep_chars);
            }
        }
        out.into_iter().collect()
    }
}

/// Consuming builder for [`Converter`].
pub struct ConverterBuilder {
    table: EncodingTable,
    char_separator: String,
    word_separator: Option<String>,
    fold_case: bool,
    trailing_separator: bool,
    unknown: Arc<dyn UnknownHandler>,
}

impl ConverterBuilder {
    fn new(table: EncodingTable) -> Self {
        Self {
            table,
            char_separator: " ".to_string(),
            word_separator: None,
            fold_case: false,
            trailing_separator: false,
            unknown: Arc::new(Ignore),
        }
    }

    /// Separator placed between the codes of adjacent symbols. Default `" "`.
    pub fn char_separator(mut self, sep: impl Into<String>) -> Self {
        self.char_separator = sep.into();
        self
    }

    /// Separator between encoded words. Defaults to character separator +
    /// space code + character separator, where the space code is the table's
    /// mapping for `' '` when it has one, else a literal space.
    pub fn word_separator(mut self, sep: impl Into<String>) -> Self {
        self.word_separator = Some(sep.into());
        self
    }

    /// Uppercase every symbol before the table lookup. Default off.
    pub fn fold_case(mut self, fold: bool) -> Self {
        self.fold_case = fold;
        self
    }

    /// Keep the separator after the final symbol/word instead of trimming
    /// it. Default off.
    pub fn trailing_separator(mut self, keep: bool) -> Self {
        self.trailing_separator = keep;
        self
    }

    /// Policy for symbols and codes absent from the table. Default:
    /// [`Ignore`].
    pub fn unknown_handler(mut self, handler: impl UnknownHandler + 'static) -> Self {
        self.unknown = Arc::new(handler);
        self
    }

    pub fn build(self) -> Converter {
        let Self {
            table,
            char_separator,
            word_separator,
            fold_case,
            trailing_separator,
            unknown,
        } = self;
        let word_separator = word_separator.unwrap_or_else(|| {
            let space = table.code(' ').unwrap_or(" ");
            format!("{char_separator}{space}{char_separator}")
        });
        Converter {
            table,
            char_separator,
            word_separator,
            fold_case,
            trailing_separator,
            unknown,
        }
    }
}
