//! ndn-packet maps Named Data Networking Name and Data packets to and from their TLV wire
//! encoding.
//!
//! Every packet field is a TLV [`Block`]: a type number, a length, and a value that is either
//! raw bytes or more blocks. Each packet entity implements [`TlvEntity`], which turns it into a
//! block and back. Decoding is all-or-nothing: if any part of a packet is malformed, the whole
//! packet fails to decode, and no partially-filled structure is returned.
//!
//! On top of the encoding rules, this crate provides:
//!
//! - The NDN canonical order for [`Component`]s and [`Name`]s, where shorter components sort
//!   first regardless of content.
//! - Conversion between names and their URI form, like `/example/data/1`.
//! - [`Data::signed_portion`], the exact bytes a signature over a Data packet must cover.
//! - [`DataReader`], for pulling several Data packets out of one buffer.
//!
//! ```
//! use ndn_packet::{Data, Name, TlvEntity};
//!
//! let mut data = Data::new(Name::from_uri("/example/data/1").unwrap());
//! data.set_content(b"hello".to_vec());
//! data.set_freshness_period(10_000u64);
//!
//! let wire = data.wire_encode().unwrap();
//! let decoded = Data::wire_decode(&wire).unwrap();
//! assert_eq!(decoded.name().to_uri(), "/example/data/1");
//! assert_eq!(decoded.content(), b"hello");
//! ```

mod block;
mod content;
mod data;
mod entity;
mod error;
mod meta_info;
mod name;
mod reader;
mod signature;
mod type_code;

pub mod integer;
pub mod varnum;

pub use self::block::{Block, BlockValue};
pub use self::content::Content;
pub use self::data::Data;
pub use self::entity::TlvEntity;
pub use self::error::{Error, Result};
pub use self::meta_info::{ContentType, FreshnessPeriod, MetaInfo};
pub use self::name::{Component, Name};
pub use self::reader::DataReader;
pub use self::signature::{KeyLocator, SignatureInfo, SignatureType, SignatureValue};
pub use self::type_code::TypeCode;

/// Maximum nesting depth accepted when decoding a block. A full Data packet only nests five
/// levels deep (Data, SignatureInfo, KeyLocator, Name, NameComponent).
pub const MAX_DEPTH: usize = 32;
