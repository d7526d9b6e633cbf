//! Symbol-to-code lookup table and its derived inverse.

use std::collections::HashMap;

use thiserror::Error;

/// Error raised when an encoding table cannot be constructed.
#[derive(Debug, Error)]
pub enum TableError {
    /// The entry list was empty. An empty table would route every input
    /// through the unknown-symbol policy and silently drop it, so it is
    /// rejected at construction time.
    #[error("encoding table has no entries")]
    Empty,
}

/// One `(symbol, code)` pair of an alphabet.
pub type EncodingEntry = (char, &'static str);

/// Default alphabet: uppercase Cyrillic letters, digits 0-9 and the
/// punctuation set `. , : ? ' - / ( ) "`.
///
/// `Ь` and `Ъ` share the code `-..-`. The inverse lookup resolves the
/// collision first-wins over declaration order, so `-..-` decodes to `Ь`.
pub const CYRILLIC: &[EncodingEntry] = &[
    ('А', ".-"),
    ('Б', "-..."),
    ('В', ".--"),
    ('Г', "--."),
    ('Д', "-.."),
    ('Е', "."),
    ('Ж', "...-"),
    ('З', "--.."),
    ('И', ".."),
    ('Й', ".---"),
    ('К', "-.-"),
    ('Л', ".-.."),
    ('М', "--"),
    ('Н', "-."),
    ('О', "---"),
    ('П', ".--."),
    ('Р', ".-."),
    ('С', "..."),
    ('Т', "-"),
    ('У', "..-"),
    ('Ф', "..-."),
    ('Х', "...."),
    ('Ц', "-.-."),
    ('Ч', "---."),
    ('Ш', "----"),
    ('Щ', "--.-"),
    ('Ь', "-..-"),
    ('Ы', "-.--"),
    ('Ъ', "-..-"),
    ('Э', "..-.."),
    ('Ю', "..--"),
    ('Я', ".-.-"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    ('.', "......"),
    (',', ".-.-.-"),
    (':', "---..."),
    ('?', "..--.."),
    ('\'', ".----."),
    ('-', "-....-"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('"', ".-..-."),
];

/// Immutable symbol <-> code correspondence for one alphabet.
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct EncodingTable {
    forward: HashMap<char, String>,
    inverse: HashMap<String, char>,
}

impl EncodingTable {
    /// Build a table from `(symbol, code)` entries.
    ///
    /// When two symbols share a code, the first entry wins in the inverse
    /// lookup; both symbols still encode. Returns [`TableError::Empty`] for
    /// an empty entry list.
    pub fn new(entries: &[(char, &str)]) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self::from_entries(entries))
    }

    /// The default alphabet of the service, see [`CYRILLIC`].
    pub fn cyrillic() -> Self {
        Self::from_entries(CYRILLIC)
    }

    fn from_entries(entries: &[(char, &str)]) -> Self {
        let mut forward = HashMap::with_capacity(entries.len());
        let mut inverse = HashMap::with_capacity(entries.len());
        for &(symbol, code) in entries {
            forward.insert(symbol, code.to_string());
            // First declaration wins on code collisions.
            inverse.entry(code.to_string()).or_insert(symbol);
        }
        Self { forward, inverse }
    }

    /// Code for `symbol`, if the alphabet has one.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.forward.get(&symbol).map(String::as_str)
    }

    /// Symbol for `code`, if the alphabet has one.
    pub fn symbol(&self, code: &str) -> Option<char> {
        self.inverse.get(code).copied()
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
