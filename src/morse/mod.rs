//! Bidirectional text <-> Morse codec.
//!
//! [`EncodingTable`] holds the symbol/code correspondence for one alphabet,
//! [`Converter`] performs the transform with configurable separators and
//! unknown-symbol policy, and [`detect`]/[`auto_convert`] choose a direction
//! for raw input.

mod convert;
mod detect;
mod table;

pub use convert::{Converter, ConverterBuilder, Ignore, NoEncoding, Placeholder, UnknownHandler};
pub use detect::{auto_convert, detect, ConvertError, Direction};
pub use table::{EncodingEntry, EncodingTable, TableError, CYRILLIC};
