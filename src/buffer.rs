//! A stack-allocated destination large enough for any single emission.

use core::fmt;
use core::ops::Deref;

use arrayvec::{ArrayString, CapacityError};

use crate::constants::MAX_BUF_LEN;
use crate::sink::CharSink;

/// A fixed-capacity, stack-allocated [`CharSink`].
///
/// `Buffer` never allocates. Its capacity comfortably holds the longest
/// output any single emitter call produces, so formatting one value into a
/// fresh buffer cannot fail; accumulating many values may eventually
/// return a [`CapacityError`].
///
/// ```
/// use int_output::{append_i64_grouped, Buffer};
///
/// let mut buf = Buffer::new();
/// append_i64_grouped(&mut buf, 9876543210, ',').unwrap();
/// assert_eq!(buf.as_str(), "9,876,543,210");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Buffer {
    inner: ArrayString<MAX_BUF_LEN>,
}

impl Buffer {
    /// Returns a new, empty `Buffer`.
    pub fn new() -> Buffer {
        Buffer {
            inner: ArrayString::new(),
        }
    }

    /// Returns the contents as a `&str`.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Returns the contents as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Returns the length of the contents in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Empties the buffer for reuse.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl CharSink for Buffer {
    type Error = CapacityError<char>;

    fn append(&mut self, ch: char) -> Result<(), CapacityError<char>> {
        self.inner.try_push(ch)
    }
}

impl AsRef<str> for Buffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Buffer {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "with-serde")]
mod serde_impls {
    use core::fmt;

    use serde::{de, ser};

    use super::Buffer;
    use crate::sink::CharSink;

    impl ser::Serialize for Buffer {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> de::Deserialize<'de> for Buffer {
        fn deserialize<D>(deserializer: D) -> Result<Buffer, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            struct BufferVisitor;

            impl<'de> de::Visitor<'de> for BufferVisitor {
                type Value = Buffer;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "a string of at most {} bytes", Buffer::new().capacity())
                }

                fn visit_str<E>(self, s: &str) -> Result<Buffer, E>
                where
                    E: de::Error,
                {
                    let mut buf = Buffer::new();
                    buf.append_str(s)
                        .map_err(|_| E::invalid_length(s.len(), &self))?;
                    Ok(buf)
                }
            }

            deserializer.deserialize_str(BufferVisitor)
        }
    }
}
