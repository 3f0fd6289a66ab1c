//! The NDN Data packet.
//!
//! A Data packet is always exactly five blocks in a fixed order:
//!
//! ```text
//! Data
//!   Name
//!   MetaInfo
//!   Content
//!   SignatureInfo
//!   SignatureValue
//! ```
//!
//! Decoding goes strictly by position, so a packet with its fields reordered, missing, or
//! extended fails as a whole. The signature covers every field except the signature value
//! itself; [`Data::signed_portion`] produces exactly those bytes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    block::Block,
    content::Content,
    entity::TlvEntity,
    error::{Error, Result},
    meta_info::{ContentType, FreshnessPeriod, MetaInfo},
    name::Name,
    signature::{SignatureInfo, SignatureValue},
    type_code::TypeCode,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Data {
    name: Name,
    meta_info: MetaInfo,
    content: Content,
    signature_info: SignatureInfo,
    signature_value: SignatureValue,
}

impl Data {
    /// Start a new, unsigned Data packet with empty content.
    pub fn new(name: Name) -> Data {
        Data {
            name,
            ..Data::default()
        }
    }

    /// Decode a Data packet from the first block in `bytes`. Anything after that block is
    /// ignored; use [`DataReader`](crate::DataReader) to read several packets in a row.
    pub fn wire_decode(bytes: &[u8]) -> Result<Data> {
        <Data as TlvEntity>::wire_decode(bytes).map_err(|e| {
            debug!(error = %e, "failed to decode Data packet");
            e
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn meta_info(&self) -> &MetaInfo {
        &self.meta_info
    }

    pub fn set_meta_info(&mut self, meta_info: MetaInfo) {
        self.meta_info = meta_info;
    }

    pub fn content(&self) -> &[u8] {
        self.content.value()
    }

    pub fn set_content(&mut self, content: Vec<u8>) {
        self.content = Content::new(content);
    }

    pub fn freshness_period(&self) -> Option<FreshnessPeriod> {
        self.meta_info.freshness_period
    }

    /// Accepts milliseconds as a `u64` or a [`Duration`](std::time::Duration).
    pub fn set_freshness_period(&mut self, period: impl Into<FreshnessPeriod>) {
        self.meta_info.freshness_period = Some(period.into());
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.meta_info.content_type
    }

    pub fn set_content_type(&mut self, content_type: impl Into<ContentType>) {
        self.meta_info.content_type = Some(content_type.into());
    }

    pub fn signature_info(&self) -> &SignatureInfo {
        &self.signature_info
    }

    pub fn set_signature_info(&mut self, signature_info: SignatureInfo) {
        self.signature_info = signature_info;
    }

    pub fn signature_value(&self) -> &[u8] {
        self.signature_value.value()
    }

    pub fn set_signature_value(&mut self, signature: Vec<u8>) {
        self.signature_value = SignatureValue::new(signature);
    }

    /// The bytes a signature is computed over: the encoded Name, MetaInfo, Content, and
    /// SignatureInfo blocks back to back. The outer Data header and the SignatureValue are not
    /// included.
    ///
    /// Fails only if the name is empty.
    pub fn signed_portion(&self) -> Result<Vec<u8>> {
        let name = self.name.to_block()?;
        let signature_info = self.signature_info.to_block()?;
        let meta_info = self.meta_info.block();
        let content = self.content.block();

        let mut buf = Vec::with_capacity(
            name.wire_len() + meta_info.wire_len() + content.wire_len() + signature_info.wire_len(),
        );
        name.encode_vec(&mut buf);
        meta_info.encode_vec(&mut buf);
        content.encode_vec(&mut buf);
        signature_info.encode_vec(&mut buf);
        Ok(buf)
    }
}

impl TlvEntity for Data {
    /// Fails only if the name is empty.
    fn to_block(&self) -> Result<Block> {
        Ok(Block::new_nested(
            TypeCode::Data,
            vec![
                self.name.to_block()?,
                self.meta_info.block(),
                self.content.block(),
                self.signature_info.to_block()?,
                self.signature_value.block(),
            ],
        ))
    }

    fn from_block(block: &Block) -> Result<Self> {
        let blocks = block.expect_blocks(TypeCode::Data)?;
        let [name, meta_info, content, signature_info, signature_value] = blocks else {
            return Err(Error::ChildCount {
                tlv_type: block.tlv_type(),
                expected: "exactly 5",
                actual: blocks.len(),
            });
        };
        Ok(Data {
            name: Name::from_block(name)?,
            meta_info: MetaInfo::from_block(meta_info)?,
            content: Content::from_block(content)?,
            signature_info: SignatureInfo::from_block(signature_info)?,
            signature_value: SignatureValue::from_block(signature_value)?,
        })
    }
}
