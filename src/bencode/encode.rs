use bytes::BufMut;

use super::value::{Dictionary, Value};

/// Encodes a bencode value to a byte vector.
///
/// The output follows the bencode format:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` (pairs in stored order)
///
/// Encoding cannot fail. Dictionary keys are written in the order they are
/// stored; use [`Value::into_canonical`] first for sorted output.
///
/// # Examples
///
/// ```
/// use bencoder::{encode, Dictionary, Value};
///
/// // Encode an integer
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
///
/// // Encode a string
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// // Encode a list
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// // Encode a dictionary
/// let mut dict = Dictionary::new();
/// dict.insert("b", 2i64);
/// dict.insert("a", 1i64);
/// assert_eq!(encode(&Value::Dict(dict)), b"d1:bi2e1:ai1ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.encoded_len());
    encode_to(value, &mut buf);
    buf
}

/// Encodes a bencode value into any [`BufMut`], such as a `BytesMut`.
///
/// # Examples
///
/// ```
/// use bencoder::{encode_to, Value};
/// use bytes::BytesMut;
///
/// let mut buf = BytesMut::new();
/// encode_to(&Value::Integer(7), &mut buf);
/// encode_to(&Value::string("x"), &mut buf);
/// assert_eq!(&buf[..], b"i7e1:x");
/// ```
pub fn encode_to<B: BufMut>(value: &Value, buf: &mut B) {
    match value {
        Value::Integer(i) => {
            buf.put_u8(b'i');
            buf.put_slice(i.to_string().as_bytes());
            buf.put_u8(b'e');
        }
        Value::Bytes(b) => encode_bytes(b, buf),
        Value::List(l) => {
            buf.put_u8(b'l');
            for item in l {
                encode_to(item, buf);
            }
            buf.put_u8(b'e');
        }
        Value::Dict(d) => encode_dict(d, buf),
    }
}

fn encode_dict<B: BufMut>(dict: &Dictionary, buf: &mut B) {
    buf.put_u8(b'd');
    for (key, val) in dict {
        encode_bytes(key, buf);
        encode_to(val, buf);
    }
    buf.put_u8(b'e');
}

fn encode_bytes<B: BufMut>(bytes: &[u8], buf: &mut B) {
    buf.put_slice(bytes.len().to_string().as_bytes());
    buf.put_u8(b':');
    buf.put_slice(bytes);
}

/// Types with a bencode representation.
///
/// # Examples
///
/// ```
/// use bencoder::{Dictionary, ToBencode, Value};
///
/// assert_eq!(Value::Integer(1337).to_bencode(), b"i1337e");
/// assert_eq!(Value::string("Atlas").to_bencode(), b"5:Atlas");
/// assert_eq!(Value::List(vec![]).to_bencode(), b"le");
/// assert_eq!(Dictionary::new().to_bencode(), b"de");
/// ```
pub trait ToBencode {
    fn to_bencode(&self) -> Vec<u8>;
}

impl ToBencode for Value {
    fn to_bencode(&self) -> Vec<u8> {
        encode(self)
    }
}

impl ToBencode for Dictionary {
    fn to_bencode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(dict_len(self));
        encode_dict(self, &mut buf);
        buf
    }
}

impl Value {
    /// Returns the exact number of bytes [`encode`] produces for this value.
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Integer(i) => 2 + usize::from(*i < 0) + digits(i.unsigned_abs()),
            Value::Bytes(b) => bytes_len(b),
            Value::List(l) => 2 + l.iter().map(Value::encoded_len).sum::<usize>(),
            Value::Dict(d) => dict_len(d),
        }
    }
}

fn dict_len(dict: &Dictionary) -> usize {
    2 + dict
        .iter()
        .map(|(k, v)| bytes_len(k) + v.encoded_len())
        .sum::<usize>()
}

fn bytes_len(bytes: &[u8]) -> usize {
    digits(bytes.len() as u64) + 1 + bytes.len()
}

fn digits(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
