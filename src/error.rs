use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Block carried a different TLV type than the entity decoding it expects.
    WrongType { expected: u64, actual: u64 },
    /// Block value was raw bytes where children were expected, or the reverse.
    WrongShape { tlv_type: u64, expected_nested: bool },
    /// Block had the wrong number of child blocks.
    ChildCount {
        tlv_type: u64,
        expected: &'static str,
        actual: usize,
    },
    /// Input ended before a complete field could be read.
    LengthTooShort {
        step: &'static str,
        actual: usize,
        expected: usize,
    },
    /// Basic TLV encoding failure
    BadEncode(String),
    /// A Name with zero components has no wire form.
    EmptyName,
    /// A URI string could not be turned into a Name or Component.
    BadUri(String),
    /// Decoding hit the nesting limit.
    ParseLimit(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::WrongType { expected, actual } => write!(
                f,
                "Expected TLV type {}, but block has type {}",
                expected, actual
            ),
            Error::WrongShape {
                tlv_type,
                expected_nested,
            } => {
                if expected_nested {
                    write!(f, "TLV type {} should hold child blocks, got raw bytes", tlv_type)
                } else {
                    write!(f, "TLV type {} should hold raw bytes, got child blocks", tlv_type)
                }
            }
            Error::ChildCount {
                tlv_type,
                expected,
                actual,
            } => write!(
                f,
                "TLV type {} expects {} child blocks, but has {}",
                tlv_type, expected, actual
            ),
            Error::LengthTooShort {
                step,
                actual,
                expected,
            } => write!(
                f,
                "Expected data length {}, but got {} on step [{}]",
                expected, actual, step
            ),
            Error::BadEncode(ref err) => write!(f, "Basic TLV encoding failure: {}", err),
            Error::EmptyName => f.write_str("A Name with no components cannot be encoded"),
            Error::BadUri(ref err) => write!(f, "Invalid NDN URI: {}", err),
            Error::ParseLimit(ref err) => write!(f, "Hit parsing limit: {}", err),
        }
    }
}

impl std::error::Error for Error {}
