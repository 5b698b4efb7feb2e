use bytes::Bytes;

use super::config::DecoderConfig;
use super::cursor::Cursor;
use super::error::{BencodeError, Expected};
use super::value::{Dictionary, Value};

// Upper bound on speculative allocation for a declared string length.
const MAX_PREALLOC: usize = 64 * 1024;

/// Decodes a single bencode value from a byte slice with the default
/// configuration.
///
/// Bytes after the first complete value are ignored. Use a [`Decoder`] with
/// [`DecoderConfig::reject_trailing_data`] to refuse them.
///
/// # Errors
///
/// - [`BencodeError::UnexpectedEos`] if the input ends inside a value.
/// - [`BencodeError::UnexpectedToken`] if a byte violates the grammar.
/// - [`BencodeError::NestingTooDeep`] if lists and dictionaries nest deeper
///   than [`DEFAULT_MAX_DEPTH`](super::DEFAULT_MAX_DEPTH).
///
/// # Examples
///
/// ```
/// use bencoder::{decode, BencodeError, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
/// assert_eq!(decode(b"4:spam").unwrap(), Value::string("spam"));
///
/// let err = decode(b"i1337ae").unwrap_err();
/// assert_eq!(err.position(), 5);
///
/// assert!(matches!(
///     decode(b"16:not_long_enough"),
///     Err(BencodeError::UnexpectedEos { .. })
/// ));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    Decoder::new().decode(data)
}

/// Decodes a single bencode value from any byte iterator.
///
/// The iterator is read one byte at a time and never further than the
/// grammar requires to finish the value.
///
/// # Examples
///
/// ```
/// use bencoder::{decode_iter, Value};
///
/// let bytes = "i42e".bytes();
/// assert_eq!(decode_iter(bytes).unwrap(), Value::Integer(42));
/// ```
pub fn decode_iter<I: IntoIterator<Item = u8>>(input: I) -> Result<Value, BencodeError> {
    Decoder::new().decode_iter(input)
}

/// A recursive-descent bencode decoder.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn decode(&self, data: &[u8]) -> Result<Value, BencodeError> {
        self.decode_iter(data.iter().copied())
    }

    pub fn decode_iter<I: IntoIterator<Item = u8>>(&self, input: I) -> Result<Value, BencodeError> {
        let mut cursor = Cursor::new(input);
        let result = self
            .decode_from(&mut cursor)
            .and_then(|value| self.finish(&mut cursor).map(|()| value));

        match &result {
            Ok(_) => tracing::trace!(consumed = cursor.position(), "decoded bencode value"),
            Err(e) => tracing::trace!("bencode decode failed: {}", e),
        }
        result
    }

    /// Decodes the next value from `cursor`, leaving any following bytes unread.
    ///
    /// Call this repeatedly to read a stream of concatenated values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoder::{Cursor, Decoder, Value};
    ///
    /// let decoder = Decoder::new();
    /// let mut cursor = Cursor::new(b"i1e3:two".iter().copied());
    /// assert_eq!(decoder.decode_from(&mut cursor).unwrap(), Value::Integer(1));
    /// assert_eq!(decoder.decode_from(&mut cursor).unwrap(), Value::string("two"));
    /// assert!(cursor.is_exhausted());
    /// ```
    pub fn decode_from<I: Iterator<Item = u8>>(
        &self,
        cursor: &mut Cursor<I>,
    ) -> Result<Value, BencodeError> {
        self.parse(cursor, 0)
    }

    fn finish<I: Iterator<Item = u8>>(&self, cursor: &mut Cursor<I>) -> Result<(), BencodeError> {
        if cursor.is_exhausted() {
            return Ok(());
        }

        let position = cursor.position();
        if self.config.reject_trailing_data {
            return Err(BencodeError::UnexpectedToken {
                token: cursor.peek()?,
                position,
                expected: Expected::EndOfInput,
            });
        }

        tracing::debug!(position, "ignoring trailing data after bencode value");
        Ok(())
    }

    fn parse<I: Iterator<Item = u8>>(
        &self,
        cursor: &mut Cursor<I>,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        match cursor.peek()? {
            b'i' => {
                cursor.advance()?;
                let value = self.parse_integer(cursor)?;
                expect(cursor, b'e', Expected::DigitOrEnd)?;
                Ok(Value::Integer(value))
            }
            b'0'..=b'9' => self.parse_bytes(cursor).map(Value::Bytes),
            b'l' => self.parse_list(cursor, depth),
            b'd' => self.parse_dict(cursor, depth),
            token => Err(BencodeError::UnexpectedToken {
                token,
                position: cursor.position(),
                expected: Expected::Value,
            }),
        }
    }

    fn parse_integer<I: Iterator<Item = u8>>(
        &self,
        cursor: &mut Cursor<I>,
    ) -> Result<i64, BencodeError> {
        let strict = self.config.strict_integers;
        let negative = cursor.peek()? == b'-';
        if negative {
            cursor.advance()?;
        }

        let mut value: i64 = 0;
        let mut digits = 0usize;
        while let token @ b'0'..=b'9' = cursor.peek()? {
            let position = cursor.position();
            let leading_zero =
                (digits == 1 && value == 0) || (negative && digits == 0 && token == b'0');
            if strict && leading_zero {
                return Err(BencodeError::UnexpectedToken {
                    token,
                    position,
                    expected: Expected::CanonicalDigit,
                });
            }

            // Accumulate on the negative side so that `i64::MIN` is reachable.
            let digit = i64::from(token - b'0');
            value = value
                .checked_mul(10)
                .and_then(|v| {
                    if negative {
                        v.checked_sub(digit)
                    } else {
                        v.checked_add(digit)
                    }
                })
                .ok_or(BencodeError::UnexpectedToken {
                    token,
                    position,
                    expected: Expected::InRange,
                })?;
            cursor.advance()?;
            digits += 1;
        }

        if strict && digits == 0 {
            return Err(BencodeError::UnexpectedToken {
                token: cursor.peek()?,
                position: cursor.position(),
                expected: Expected::Digit,
            });
        }

        Ok(value)
    }

    fn parse_length<I: Iterator<Item = u8>>(
        &self,
        cursor: &mut Cursor<I>,
    ) -> Result<usize, BencodeError> {
        let mut length: usize = 0;
        let mut digits = 0usize;
        while let token @ b'0'..=b'9' = cursor.peek()? {
            let position = cursor.position();
            if self.config.strict_integers && digits == 1 && length == 0 {
                return Err(BencodeError::UnexpectedToken {
                    token,
                    position,
                    expected: Expected::CanonicalDigit,
                });
            }

            length = length
                .checked_mul(10)
                .and_then(|l| l.checked_add(usize::from(token - b'0')))
                .ok_or(BencodeError::UnexpectedToken {
                    token,
                    position,
                    expected: Expected::InRange,
                })?;
            cursor.advance()?;
            digits += 1;
        }
        Ok(length)
    }

    fn parse_bytes<I: Iterator<Item = u8>>(
        &self,
        cursor: &mut Cursor<I>,
    ) -> Result<Bytes, BencodeError> {
        let length = self.parse_length(cursor)?;
        expect(cursor, b':', Expected::Colon)?;

        let mut bytes = Vec::with_capacity(length.min(MAX_PREALLOC));
        for _ in 0..length {
            bytes.push(cursor.advance()?);
        }
        Ok(Bytes::from(bytes))
    }

    fn parse_list<I: Iterator<Item = u8>>(
        &self,
        cursor: &mut Cursor<I>,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        let depth = self.enter(cursor, depth)?;
        let mut list = Vec::new();

        while cursor.peek()? != b'e' {
            list.push(self.parse(cursor, depth)?);
        }

        cursor.advance()?;
        Ok(Value::List(list))
    }

    fn parse_dict<I: Iterator<Item = u8>>(
        &self,
        cursor: &mut Cursor<I>,
        depth: usize,
    ) -> Result<Value, BencodeError> {
        let depth = self.enter(cursor, depth)?;
        let mut dict = Dictionary::new();

        while cursor.peek()? != b'e' {
            let position = cursor.position();
            let token = cursor.peek()?;
            let key = match self.parse(cursor, depth)? {
                Value::Bytes(b) => b,
                _ => {
                    return Err(BencodeError::UnexpectedToken {
                        token,
                        position,
                        expected: Expected::Key,
                    })
                }
            };

            let value = self.parse(cursor, depth)?;
            dict.insert(key, value);
        }

        cursor.advance()?;
        Ok(Value::Dict(dict))
    }

    /// Consumes the opening marker of a list or dictionary and returns the
    /// nesting depth of its contents.
    fn enter<I: Iterator<Item = u8>>(
        &self,
        cursor: &mut Cursor<I>,
        depth: usize,
    ) -> Result<usize, BencodeError> {
        let depth = depth + 1;
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return Err(BencodeError::NestingTooDeep {
                position: cursor.position(),
            });
        }
        cursor.advance()?;
        Ok(depth)
    }
}

fn expect<I: Iterator<Item = u8>>(
    cursor: &mut Cursor<I>,
    byte: u8,
    expected: Expected,
) -> Result<(), BencodeError> {
    let position = cursor.position();
    match cursor.advance()? {
        token if token == byte => Ok(()),
        token => Err(BencodeError::UnexpectedToken {
            token,
            position,
            expected,
        }),
    }
}
