use crate::{block::Block, error::Result};

/// Anything that maps to and from a single TLV [`Block`].
///
/// Encoding fails only when a required part of the entity has no wire form. Decoding fails on
/// a type mismatch, a value of the wrong shape, or any required child failing to decode; no
/// partially-built entity is ever returned.
pub trait TlvEntity: Sized {
    fn to_block(&self) -> Result<Block>;

    fn from_block(block: &Block) -> Result<Self>;

    /// Encode straight to bytes.
    fn wire_encode(&self) -> Result<Vec<u8>> {
        Ok(self.to_block()?.wire_encode())
    }

    /// Decode the first block in `bytes` as this entity. Anything after that block is ignored.
    fn wire_decode(bytes: &[u8]) -> Result<Self> {
        let (block, _) = Block::wire_decode(bytes)?;
        Self::from_block(&block)
    }
}
