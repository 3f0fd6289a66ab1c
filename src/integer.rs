//! NDN NonNegativeInteger bodies: an unsigned integer stored big-endian in 1, 2, 4, or 8 bytes.

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

/// Encode `n` using the fewest bytes allowed.
pub fn encode(n: u64) -> Vec<u8> {
    if n <= u8::MAX as u64 {
        vec![n as u8]
    } else if n <= u16::MAX as u64 {
        (n as u16).to_be_bytes().to_vec()
    } else if n <= u32::MAX as u64 {
        (n as u32).to_be_bytes().to_vec()
    } else {
        n.to_be_bytes().to_vec()
    }
}

/// Decode a complete NonNegativeInteger body. The body must be exactly 1, 2, 4, or 8 bytes.
pub fn decode(bytes: &[u8]) -> Result<u64> {
    let mut raw = bytes;
    // Length was checked by the match arm, so the reads can't run short.
    let n = match bytes.len() {
        1 => raw.read_u8().map(u64::from),
        2 => raw.read_u16::<BigEndian>().map(u64::from),
        4 => raw.read_u32::<BigEndian>().map(u64::from),
        8 => raw.read_u64::<BigEndian>(),
        len => {
            return Err(Error::BadEncode(format!(
                "not a recognized NonNegativeInteger length ({} bytes)",
                len
            )))
        }
    };
    n.map_err(|_| Error::LengthTooShort {
        step: "decode NonNegativeInteger",
        actual: bytes.len(),
        expected: bytes.len(),
    })
}
