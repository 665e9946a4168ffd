#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Decoding of INI text into sections of string key/value pairs.
//!
//! ```
//! let doc = ini::parse("[server]\nhost = \"localhost\"\n").unwrap();
//! assert_eq!(doc.get("server", "host"), Some("localhost"));
//! ```

mod error;
mod parser;
mod section;
mod util;

use std::io::Read;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use crate::error::{Error, Result, SyntaxError};
pub use crate::parser::{ParseOptions, Parser};
pub use crate::section::{DEFAULT_SECTION, Document, Section};

/// Parses `text` with the default options.
///
/// # Errors
///
/// Returns the first line that is not blank, a comment, a header, or an assignment.
pub fn parse(text: &str) -> std::result::Result<Document, SyntaxError> {
    parse_with(text, &ParseOptions::default())
}

/// Parses `text` with `options`.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with(
    text: &str,
    options: &ParseOptions,
) -> std::result::Result<Document, SyntaxError> {
    Parser::new(text, options).into_document()
}

/// Parses raw bytes. Invalid UTF-8 sequences become U+FFFD.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_bytes(
    data: &[u8],
    options: &ParseOptions,
) -> std::result::Result<Document, SyntaxError> {
    parse_with(&String::from_utf8_lossy(data), options)
}

/// Reads all of `reader` and parses it.
///
/// # Errors
///
/// Fails with [`Error::Read`] if reading fails, or [`Error::Syntax`] on malformed input.
pub fn from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Document> {
    let mut data = Vec::with_capacity(4096);
    reader
        .read_to_end(&mut data)
        .map_err(|source| Error::Read { source })?;

    Ok(parse_bytes(&data, options)?)
}

/// Parses `data` and projects the sections onto `T`.
///
/// The document is handed over as a map of maps of strings, so `T` is typically a struct
/// with one field per section or a `HashMap<String, HashMap<String, String>>`.
///
/// # Errors
///
/// Fails with [`Error::Syntax`] on malformed input and [`Error::Bridge`] when the document
/// does not fit the shape of `T`.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    decode_with(data, &ParseOptions::default())
}

/// Like [`decode`], with explicit options.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_with<T: DeserializeOwned>(data: &[u8], options: &ParseOptions) -> Result<T> {
    let document = parse_bytes(data, options)?;
    let value = serde_json::to_value(&document)?;
    Ok(serde_json::from_value(value)?)
}

/// Decodes `data` into `target`, leaving it untouched on failure.
///
/// # Errors
///
/// Fails with [`Error::InvalidTarget`] if `target` is `None`, before looking at `data`.
/// Otherwise see [`decode`].
pub fn decode_into<T: DeserializeOwned>(data: &[u8], target: Option<&mut T>) -> Result<()> {
    decode_into_with(data, target, &ParseOptions::default())
}

/// Like [`decode_into`], with explicit options.
///
/// # Errors
///
/// See [`decode_into`].
pub fn decode_into_with<T: DeserializeOwned>(
    data: &[u8],
    target: Option<&mut T>,
    options: &ParseOptions,
) -> Result<()> {
    let target = target.ok_or(Error::InvalidTarget)?;
    *target = decode_with(data, options)?;
    Ok(())
}

/// Serializes `value` as INI text.
///
/// Writing INI is not supported; the returned buffer is always empty.
///
/// # Errors
///
/// Never fails at the moment.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    _ = value;
    Ok(Vec::new())
}
