use bytes::Bytes;

/// A bencode value.
///
/// Bencode has four data types: integers, byte strings, lists, and dictionaries.
/// This enum represents any bencode value and provides methods for type-safe access.
///
/// # Examples
///
/// ```
/// use bencoder::Value;
///
/// // Creating values directly
/// let int = Value::Integer(42);
/// let string = Value::string("hello");
/// let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
///
/// // Using From implementations
/// let int: Value = 42i64.into();
/// let string: Value = "hello".into();
///
/// // Accessing values
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(string.as_str(), Some("hello"));
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys, kept in insertion order.
    Dict(Dictionary),
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Returns the value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    pub fn into_dict(self) -> Option<Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns `None` if the value is not a dictionary or if the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoder::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Reorders the pairs of every dictionary in this value by raw key bytes.
    ///
    /// [`encode`](super::encode) writes dictionaries in stored order. Calling this
    /// first yields canonical bencode, where keys appear sorted. The sort is
    /// stable, so duplicate keys keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencoder::{encode, Dictionary, Value};
    ///
    /// let dict: Dictionary = [("b", 1i64), ("a", 2i64)].into_iter().collect();
    /// let value = Value::Dict(dict);
    /// assert_eq!(encode(&value), b"d1:bi1e1:ai2ee");
    /// assert_eq!(encode(&value.into_canonical()), b"d1:ai2e1:bi1ee");
    /// ```
    pub fn into_canonical(self) -> Self {
        match self {
            Value::List(l) => Value::List(l.into_iter().map(Value::into_canonical).collect()),
            Value::Dict(d) => {
                let mut pairs: Vec<(Bytes, Value)> = d
                    .pairs
                    .into_iter()
                    .map(|(k, v)| (k, v.into_canonical()))
                    .collect();
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                Value::Dict(Dictionary { pairs })
            }
            other => other,
        }
    }
}

/// The pairs of a bencode dictionary.
///
/// Pairs are stored in insertion order and encoded in that order. Keys are not
/// deduplicated: inserting an existing key appends a second pair, and lookups
/// return the first one. Equality ignores order, so two dictionaries are equal
/// when they hold the same pairs.
#[derive(Debug, Clone, Default, Eq)]
pub struct Dictionary {
    pairs: Vec<(Bytes, Value)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Appends a pair, even when `key` is already present.
    pub fn insert(&mut self, key: impl Into<Bytes>, value: impl Into<Value>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.pairs
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Bytes, &Value)> {
        self.pairs.iter().map(pair_refs)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Bytes> {
        self.pairs.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        if self.pairs.len() != other.pairs.len() {
            return false;
        }

        // Each pair must match a distinct pair on the other side.
        let mut matched = vec![false; other.pairs.len()];
        self.pairs.iter().all(|pair| {
            let found = other
                .pairs
                .iter()
                .enumerate()
                .position(|(i, candidate)| !matched[i] && candidate == pair);
            match found {
                Some(i) => {
                    matched[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<K: Into<Bytes>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Dictionary {
    type Item = (Bytes, Value);
    type IntoIter = std::vec::IntoIter<(Bytes, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a Bytes, &'a Value);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (Bytes, Value)>,
        fn(&'a (Bytes, Value)) -> (&'a Bytes, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs
            .iter()
            .map(pair_refs as fn(&'a (Bytes, Value)) -> (&'a Bytes, &'a Value))
    }
}

fn pair_refs(pair: &(Bytes, Value)) -> (&Bytes, &Value) {
    (&pair.0, &pair.1)
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bytes(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(b))
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Dict(d)
    }
}
