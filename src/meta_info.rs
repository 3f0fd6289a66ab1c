use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    block::Block,
    entity::TlvEntity,
    error::Result,
    integer,
    type_code::TypeCode,
};

/// What kind of payload a Data packet carries. Values outside the named constants are kept
/// as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType(pub u64);

impl ContentType {
    pub const BLOB: ContentType = ContentType(0);
    pub const LINK: ContentType = ContentType(1);
    pub const KEY: ContentType = ContentType(2);

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn block(self) -> Block {
        Block::new_raw(TypeCode::ContentType, integer::encode(self.0))
    }
}

impl From<u64> for ContentType {
    fn from(v: u64) -> Self {
        ContentType(v)
    }
}

impl TlvEntity for ContentType {
    fn to_block(&self) -> Result<Block> {
        Ok(self.block())
    }

    fn from_block(block: &Block) -> Result<Self> {
        integer::decode(block.expect_bytes(TypeCode::ContentType)?).map(ContentType)
    }
}

/// How long, in milliseconds, a Data packet stays fresh after arrival.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreshnessPeriod(pub u64);

impl FreshnessPeriod {
    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    pub fn block(self) -> Block {
        Block::new_raw(TypeCode::FreshnessPeriod, integer::encode(self.0))
    }
}

impl From<u64> for FreshnessPeriod {
    fn from(v: u64) -> Self {
        FreshnessPeriod(v)
    }
}

impl From<Duration> for FreshnessPeriod {
    /// Saturates at `u64::MAX` milliseconds.
    fn from(d: Duration) -> Self {
        FreshnessPeriod(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl TlvEntity for FreshnessPeriod {
    fn to_block(&self) -> Result<Block> {
        Ok(self.block())
    }

    fn from_block(block: &Block) -> Result<Self> {
        integer::decode(block.expect_bytes(TypeCode::FreshnessPeriod)?).map(FreshnessPeriod)
    }
}

/// Optional Data packet metadata. An empty MetaInfo is valid and still encodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freshness_period: Option<FreshnessPeriod>,
}

impl MetaInfo {
    pub fn new() -> MetaInfo {
        MetaInfo::default()
    }

    /// Encode to a block. This never fails; the signed portion of a Data packet relies on it.
    pub fn block(&self) -> Block {
        let mut blocks = Vec::with_capacity(2);
        if let Some(ct) = self.content_type {
            blocks.push(ct.block());
        }
        if let Some(fp) = self.freshness_period {
            blocks.push(fp.block());
        }
        Block::new_nested(TypeCode::MetaInfo, blocks)
    }
}

impl TlvEntity for MetaInfo {
    fn to_block(&self) -> Result<Block> {
        Ok(self.block())
    }

    /// Children are matched by type, in any order. Unrecognized children are skipped, and a
    /// repeated field keeps its last value.
    fn from_block(block: &Block) -> Result<Self> {
        let mut meta = MetaInfo::default();
        for child in block.expect_blocks(TypeCode::MetaInfo)? {
            if let Ok(ct) = ContentType::from_block(child) {
                meta.content_type = Some(ct);
            } else if let Ok(fp) = FreshnessPeriod::from_block(child) {
                meta.freshness_period = Some(fp);
            } else {
                trace!(tlv_type = child.tlv_type(), "skipping unrecognized MetaInfo field");
            }
        }
        Ok(meta)
    }
}
