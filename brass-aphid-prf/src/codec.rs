//! The `codec` module contains the decoding trait used for the few pieces of
//! TLS wire structure that key derivation cares about: protocol versions and
//! the `client_version` at the front of an RSA premaster secret.
//!
//! Decoding works on a plain byte slice and hands back whatever is left over,
//! so structs can be decoded field by field (see the `DecodeStruct` derive).

use byteorder::{BigEndian, ReadBytesExt};
use std::io::{ErrorKind, Read};

/// This trait defines a type that can be decoded from bytes.
pub trait DecodeValue: Sized {
    /// decode the value from a buffer of bytes, returning any remaining bytes.
    fn decode_from(buffer: &[u8]) -> std::io::Result<(Self, &[u8])>;

    /// decode the value from a buffer of bytes, consuming the entire buffer.
    ///
    /// If there is data remaining in the buffer after decoding the value, an
    /// error is returned.
    fn decode_from_exact(buffer: &[u8]) -> std::io::Result<Self> {
        let (value, remaining) = Self::decode_from(buffer)?;
        if remaining.is_empty() {
            Ok(value)
        } else {
            Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("{} unexpected bytes remaining", remaining.len()),
            ))
        }
    }
}

impl DecodeValue for u8 {
    fn decode_from(mut buffer: &[u8]) -> std::io::Result<(Self, &[u8])> {
        let value = buffer.read_u8()?;
        Ok((value, buffer))
    }
}

impl DecodeValue for u16 {
    fn decode_from(mut buffer: &[u8]) -> std::io::Result<(Self, &[u8])> {
        let value = buffer.read_u16::<BigEndian>()?;
        Ok((value, buffer))
    }
}

impl<const L: usize> DecodeValue for [u8; L] {
    fn decode_from(mut buffer: &[u8]) -> std::io::Result<(Self, &[u8])> {
        let mut value = [0; L];
        buffer.read_exact(&mut value)?;
        Ok((value, buffer))
    }
}
