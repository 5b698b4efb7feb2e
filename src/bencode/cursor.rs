use std::iter::Peekable;

use super::error::BencodeError;

/// A forward-only reader over decode input that counts consumed bytes.
///
/// The cursor never buffers more than the single byte returned by
/// [`peek`](Cursor::peek), so it can sit on top of an incremental byte
/// iterator without pulling input the grammar has not asked for yet.
///
/// # Examples
///
/// ```
/// use bencoder::Cursor;
///
/// let mut cursor = Cursor::new(b"i7e".iter().copied());
/// assert_eq!(cursor.peek().unwrap(), b'i');
/// assert_eq!(cursor.advance().unwrap(), b'i');
/// assert_eq!(cursor.position(), 1);
/// ```
#[derive(Debug)]
pub struct Cursor<I: Iterator<Item = u8>> {
    input: Peekable<I>,
    position: usize,
}

impl<I: Iterator<Item = u8>> Cursor<I> {
    pub fn new(input: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            input: input.into_iter().peekable(),
            position: 0,
        }
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&mut self) -> Result<u8, BencodeError> {
        self.input
            .peek()
            .copied()
            .ok_or(BencodeError::UnexpectedEos {
                position: self.position,
            })
    }

    /// Consumes and returns the next byte.
    pub fn advance(&mut self) -> Result<u8, BencodeError> {
        let byte = self.input.next().ok_or(BencodeError::UnexpectedEos {
            position: self.position,
        })?;
        self.position += 1;
        Ok(byte)
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once every input byte has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.input.peek().is_none()
    }
}
