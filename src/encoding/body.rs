use std::fmt;
use std::io::{self, Read};

use bytes::Bytes;
use serde::Serialize;

/// A value that writes its own serialized form.
pub trait WriteTo {
    /// Writes the value into `writer`, returning the number of bytes written.
    fn write_to(&mut self, writer: &mut dyn io::Write) -> io::Result<u64>;
}

/// A value handed back by a handler, ready to be written to the response.
///
/// Variants are listed in dispatch precedence: the cheapest, most specific
/// shapes first and the registry-backed structured shape last. Conversions
/// pick the earliest variant that fits, so a `String` is always `Text` even
/// though it could also be read as a stream.
pub enum Body {
    /// Written as its UTF-8 bytes.
    Text(String),
    /// Written verbatim.
    Bytes(Bytes),
    /// Asked to write itself into the response body.
    WriteTo(Box<dyn WriteTo + Send>),
    /// Copied into the response body until exhausted.
    Stream(Box<dyn Read + Send>),
    /// Encoded by the encoder registered for the response content type.
    Structured(serde_json::Value),
}

impl Body {
    pub fn writer(value: impl WriteTo + Send + 'static) -> Self {
        Body::WriteTo(Box::new(value))
    }

    pub fn stream(reader: impl Read + Send + 'static) -> Self {
        Body::Stream(Box::new(reader))
    }

    /// Captures any serializable value for content-type driven encoding.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Body::Structured)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Body::Text(_) => "text",
            Body::Bytes(_) => "bytes",
            Body::WriteTo(_) => "write_to",
            Body::Stream(_) => "stream",
            Body::Structured(_) => "structured",
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Body::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Body::WriteTo(_) => f.write_str("WriteTo(..)"),
            Body::Stream(_) => f.write_str("Stream(..)"),
            Body::Structured(v) => f.debug_tuple("Structured").field(v).finish(),
        }
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Text(s)
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Body::Text(s.to_owned())
    }
}

impl From<Vec<u8>> for Body {
    fn from(b: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(b))
    }
}

impl From<&[u8]> for Body {
    fn from(b: &[u8]) -> Self {
        Body::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Bytes> for Body {
    fn from(b: Bytes) -> Self {
        Body::Bytes(b)
    }
}

impl From<serde_json::Value> for Body {
    fn from(v: serde_json::Value) -> Self {
        Body::Structured(v)
    }
}
