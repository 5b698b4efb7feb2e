//! Bencode encoding and decoding.
//!
//! Bencode is the serialization format used by BitTorrent for `.torrent` files,
//! tracker responses and DHT messages. This module treats every value as generic
//! typed data and knows nothing about those protocols.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use bencoder::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use bencoder::{encode, Dictionary, Value};
//!
//! let mut items = Dictionary::new();
//! items.insert("peach", 4i64);
//!
//! let mut root = Dictionary::new();
//! root.insert("object", "counter");
//! root.insert("items", Value::List(vec![Value::Dict(items)]));
//!
//! assert_eq!(
//!     encode(&Value::Dict(root)),
//!     b"d6:object7:counter5:itemsld5:peachi4eeee"
//! );
//! ```
//!
//! # Dictionary order
//!
//! Dictionaries keep their pairs in insertion (or decode) order and are encoded
//! in that order, so `decode` followed by `encode` reproduces the input bytes.
//! Canonical bencode sorts keys; [`Value::into_canonical`] produces that form.
//!
//! # Error Handling
//!
//! Encoding cannot fail. Decoding can fail with:
//!
//! - [`BencodeError::UnexpectedEos`] - Input ended inside a value. This wins
//!   over a token mismatch.
//! - [`BencodeError::UnexpectedToken`] - A byte violates the grammar. Carries
//!   the byte and its offset.
//! - [`BencodeError::NestingTooDeep`] - Lists and dictionaries nest deeper than
//!   the configured bound, [`DEFAULT_MAX_DEPTH`] by default.

mod config;
mod cursor;
mod decode;
mod encode;
mod error;
mod value;

pub use config::{DecoderConfig, DEFAULT_MAX_DEPTH, STRICT_MAX_DEPTH};
pub use cursor::Cursor;
pub use decode::{decode, decode_iter, Decoder};
pub use encode::{encode, encode_to, ToBencode};
pub use error::{BencodeError, Expected};
pub use value::{Dictionary, Value};
