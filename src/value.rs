use crate::errors::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of data the cache accepts. Numbers are coerced to their decimal
/// text form at the store boundary, the way the backing store itself would
/// hand them back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Value {
    /// Text
    Str(String),
    /// Raw bytes, stored untouched
    Bytes(Vec<u8>),
    /// Signed integer
    Int(i64),
    /// Floating point
    Float(f64),
}

impl Value {
    /// Encode for storage. The store only ever sees bytes.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Value::Str(s) => s.as_bytes().to_vec(),
            Value::Bytes(b) => b.clone(),
            Value::Int(i) => i.to_string().into_bytes(),
            Value::Float(f) => f.to_string().into_bytes(),
        }
    }

    /// Decode stored bytes back to text.
    pub fn decode_str(raw: Vec<u8>) -> Result<String> {
        Ok(String::from_utf8(raw)?)
    }

    /// Decode stored bytes back to an integer.
    pub fn decode_int(raw: Vec<u8>) -> Result<i64> {
        let text = String::from_utf8(raw)?;
        Ok(text.parse::<i64>()?)
    }

    /// Decode stored bytes back to a float.
    pub fn decode_float(raw: Vec<u8>) -> Result<f64> {
        let text = String::from_utf8(raw)?;
        Ok(text.parse::<f64>()?)
    }
}

impl fmt::Display for Value {
    /// Stringified form used by the call-history log.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bytes(b) => {
                write!(f, "0x")?;
                for byte in b {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Value {
        Value::Bytes(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_encode_as_decimal_text() {
        assert_eq!(Value::Int(-42).encode(), b"-42".to_vec());
        assert_eq!(Value::Float(1.5).encode(), b"1.5".to_vec());
    }

    #[test]
    fn text_and_bytes_pass_through() {
        assert_eq!(Value::from("hola").encode(), b"hola".to_vec());
        assert_eq!(Value::Bytes(vec![0, 255]).encode(), vec![0, 255]);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(Value::decode_int(b"not a number".to_vec()).is_err());
        assert!(Value::decode_str(vec![0xff, 0xfe]).is_err());
    }

    #[test]
    fn display_matches_store_coercion() {
        assert_eq!(Value::Int(7).to_string(), "7");
        assert_eq!(Value::Bytes(vec![0xab, 0x01]).to_string(), "0xab01");
    }
}
