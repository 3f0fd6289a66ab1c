//! The generic TLV block that every packet entity encodes to and decodes from.
//!
//! A block is a type number, a length, and a value. Whether the value is read back as raw
//! bytes or as a run of child blocks is decided by the type number: the container types
//! listed in [`TypeCode::is_nested`] hold children, everything else (including types this
//! crate does not know) holds raw bytes.

use crate::{
    error::{Error, Result},
    type_code::TypeCode,
    varnum, MAX_DEPTH,
};

/// The value carried by a [`Block`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockValue {
    RawBytes(Vec<u8>),
    Blocks(Vec<Block>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    tlv_type: u64,
    value: BlockValue,
}

impl Block {
    /// Create a block holding raw bytes.
    pub fn new_raw(tlv_type: impl Into<u64>, bytes: Vec<u8>) -> Block {
        Block {
            tlv_type: tlv_type.into(),
            value: BlockValue::RawBytes(bytes),
        }
    }

    /// Create a block holding child blocks.
    pub fn new_nested(tlv_type: impl Into<u64>, blocks: Vec<Block>) -> Block {
        Block {
            tlv_type: tlv_type.into(),
            value: BlockValue::Blocks(blocks),
        }
    }

    pub fn tlv_type(&self) -> u64 {
        self.tlv_type
    }

    pub fn value(&self) -> &BlockValue {
        &self.value
    }

    /// Raw bytes of the value, if this block doesn't hold children.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self.value {
            BlockValue::RawBytes(ref b) => Some(b),
            BlockValue::Blocks(_) => None,
        }
    }

    /// Child blocks, if this block holds children.
    pub fn blocks(&self) -> Option<&[Block]> {
        match self.value {
            BlockValue::Blocks(ref b) => Some(b),
            BlockValue::RawBytes(_) => None,
        }
    }

    /// Append a child block. A block holding an empty raw value becomes a nested block first;
    /// one holding raw bytes fails with [`Error::WrongShape`] and is left unchanged.
    pub fn append_block(&mut self, block: Block) -> Result<()> {
        match self.value {
            BlockValue::Blocks(ref mut blocks) => blocks.push(block),
            BlockValue::RawBytes(ref b) if b.is_empty() => {
                self.value = BlockValue::Blocks(vec![block])
            }
            BlockValue::RawBytes(_) => {
                return Err(Error::WrongShape {
                    tlv_type: self.tlv_type,
                    expected_nested: true,
                })
            }
        }
        Ok(())
    }

    /// Length of the encoded value, not counting the type and length fields.
    pub fn value_len(&self) -> usize {
        match self.value {
            BlockValue::RawBytes(ref b) => b.len(),
            BlockValue::Blocks(ref b) => b.iter().map(Block::wire_len).sum(),
        }
    }

    /// Total encoded length of the block.
    pub fn wire_len(&self) -> usize {
        let len = self.value_len();
        varnum::size(self.tlv_type) + varnum::size(len as u64) + len
    }

    /// Encode onto an existing byte vector.
    pub fn encode_vec(&self, buf: &mut Vec<u8>) {
        varnum::encode(self.tlv_type, buf);
        varnum::encode(self.value_len() as u64, buf);
        match self.value {
            BlockValue::RawBytes(ref b) => buf.extend_from_slice(b),
            BlockValue::Blocks(ref blocks) => {
                for block in blocks {
                    block.encode_vec(buf);
                }
            }
        }
    }

    pub fn wire_encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.wire_len());
        self.encode_vec(&mut buf);
        buf
    }

    /// Decode exactly one block from the front of `bytes`. Returns the block and the number of
    /// bytes it occupied, so that several blocks can be read out of one buffer.
    pub fn wire_decode(bytes: &[u8]) -> Result<(Block, usize)> {
        let mut buf = bytes;
        let block = Block::decode_depth(&mut buf, 0)?;
        Ok((block, bytes.len() - buf.len()))
    }

    fn decode_depth(buf: &mut &[u8], depth: usize) -> Result<Block> {
        if depth >= MAX_DEPTH {
            return Err(Error::ParseLimit("Depth limit exceeded".to_string()));
        }
        let tlv_type = varnum::decode(buf)?;
        let len = varnum::decode(buf)?;
        if len > buf.len() as u64 {
            return Err(Error::LengthTooShort {
                step: "get TLV value",
                actual: buf.len(),
                expected: usize::try_from(len).unwrap_or(usize::MAX),
            });
        }
        let (mut value, rest) = buf.split_at(len as usize);
        *buf = rest;

        if !TypeCode::is_nested_type(tlv_type) {
            return Ok(Block::new_raw(tlv_type, value.to_vec()));
        }
        let mut blocks = Vec::new();
        while !value.is_empty() {
            blocks.push(Block::decode_depth(&mut value, depth + 1)?);
        }
        Ok(Block::new_nested(tlv_type, blocks))
    }

    /// Fail unless this block has the given type.
    pub(crate) fn expect_type(&self, code: TypeCode) -> Result<()> {
        if code != self.tlv_type {
            return Err(Error::WrongType {
                expected: code.into(),
                actual: self.tlv_type,
            });
        }
        Ok(())
    }

    /// Check the type and get the raw bytes of the value.
    pub(crate) fn expect_bytes(&self, code: TypeCode) -> Result<&[u8]> {
        self.expect_type(code)?;
        self.bytes().ok_or(Error::WrongShape {
            tlv_type: self.tlv_type,
            expected_nested: false,
        })
    }

    /// Check the type and get the children of the value.
    pub(crate) fn expect_blocks(&self, code: TypeCode) -> Result<&[Block]> {
        self.expect_type(code)?;
        self.blocks().ok_or(Error::WrongShape {
            tlv_type: self.tlv_type,
            expected_nested: true,
        })
    }
}
