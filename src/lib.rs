//! bencoder - A Bencode codec
//!
//! This library converts between a small typed value model and the Bencode
//! byte format used by BitTorrent.
//!
//! # Modules
//!
//! - [`bencode`] - Value model, encoder, cursor and decoder
//!
//! # Example
//!
//! ```
//! use bencoder::{decode, encode, Value};
//!
//! let value = decode(b"l4:spami42ee").unwrap();
//! assert_eq!(
//!     value,
//!     Value::List(vec![Value::string("spam"), Value::Integer(42)])
//! );
//! assert_eq!(encode(&value), b"l4:spami42ee");
//! ```

pub mod bencode;

pub use bencode::{
    decode, decode_iter, encode, encode_to, BencodeError, Cursor, Decoder, DecoderConfig,
    Dictionary, Expected, ToBencode, Value,
};
