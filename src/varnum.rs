//! NDN variable-length numbers, used for the type and length fields of every TLV block.
//!
//! | First byte | Followed by        | Range                   |
//! |------------|--------------------|-------------------------|
//! | 0-252      | nothing            | the byte itself         |
//! | 253        | 2 bytes, big-endian| up to `u16::MAX`        |
//! | 254        | 4 bytes, big-endian| up to `u32::MAX`        |
//! | 255        | 8 bytes, big-endian| up to `u64::MAX`        |

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

const MARKER_U16: u8 = 253;
const MARKER_U32: u8 = 254;
const MARKER_U64: u8 = 255;

/// Encoded size of `n`, in bytes.
pub fn size(n: u64) -> usize {
    if n < MARKER_U16 as u64 {
        1
    } else if n <= u16::MAX as u64 {
        3
    } else if n <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

/// Append the shortest encoding of `n` onto a byte vector.
pub fn encode(n: u64, buf: &mut Vec<u8>) {
    if n < MARKER_U16 as u64 {
        buf.push(n as u8);
    } else if n <= u16::MAX as u64 {
        buf.push(MARKER_U16);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= u32::MAX as u64 {
        buf.push(MARKER_U32);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(MARKER_U64);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Read one number off the front of `buf`, advancing it past the number.
pub fn decode(buf: &mut &[u8]) -> Result<u64> {
    let first = buf.read_u8().map_err(|_| Error::LengthTooShort {
        step: "decode VarNumber marker",
        actual: 0,
        expected: 1,
    })?;
    let n = match first {
        MARKER_U16 => buf.read_u16::<BigEndian>().map_err(|_| Error::LengthTooShort {
            step: "decode 2-byte VarNumber",
            actual: buf.len(),
            expected: 2,
        })? as u64,
        MARKER_U32 => buf.read_u32::<BigEndian>().map_err(|_| Error::LengthTooShort {
            step: "decode 4-byte VarNumber",
            actual: buf.len(),
            expected: 4,
        })? as u64,
        MARKER_U64 => buf.read_u64::<BigEndian>().map_err(|_| Error::LengthTooShort {
            step: "decode 8-byte VarNumber",
            actual: buf.len(),
            expected: 8,
        })?,
        v => v as u64,
    };
    Ok(n)
}
