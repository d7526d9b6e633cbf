//! morse-web — text <-> Morse code conversion behind a small upload API.
//!
//! The codec lives in [`morse`]: an [`EncodingTable`] with a derived
//! inverse, a configurable [`Converter`], and a direction heuristic that
//! decides whether raw input should be encoded or decoded. The [`web`]
//! module wires two routes (`GET /`, `POST /upload`) over it and writes
//! each conversion result to a timestamp-named file.
//!
//! ## Example
//!
//! ```rust
//! use morse_web::{auto_convert, Converter};
//!
//! let converter = Converter::cyrillic();
//! assert_eq!(converter.encode("ТЕСТ"), "- . ... -");
//! assert_eq!(auto_convert(&converter, "- . ... -").unwrap(), "ТЕСТ");
//! ```

pub mod morse;
pub mod web;

pub use morse::{
    auto_convert, detect, ConvertError, Converter, ConverterBuilder, Direction, EncodingEntry,
    EncodingTable, Ignore, NoEncoding, Placeholder, TableError, UnknownHandler, CYRILLIC,
};
pub use web::{AppError, AppState, ServerConfig, StoreError, WebServer};
