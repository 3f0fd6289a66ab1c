//! Signature metadata and signature bytes carried by a Data packet. Nothing here signs or
//! verifies; see [`Data::signed_portion`](crate::Data::signed_portion) for the bytes a signer
//! works over.

use educe::Educe;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    block::Block,
    entity::TlvEntity,
    error::{Error, Result},
    integer,
    name::Name,
    type_code::TypeCode,
};

/// Signature algorithm identifier. Values outside the named constants are kept as-is.
#[derive(Educe, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[educe(Default)]
#[serde(transparent)]
pub struct SignatureType(#[educe(Default = 1)] pub u64);

impl SignatureType {
    pub const DIGEST_SHA256: SignatureType = SignatureType(0);
    pub const SIGNATURE_SHA256_WITH_RSA: SignatureType = SignatureType(1);
    pub const SIGNATURE_SHA256_WITH_ECDSA: SignatureType = SignatureType(3);

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn block(self) -> Block {
        Block::new_raw(TypeCode::SignatureType, integer::encode(self.0))
    }
}

impl From<u64> for SignatureType {
    fn from(v: u64) -> Self {
        SignatureType(v)
    }
}

impl TlvEntity for SignatureType {
    fn to_block(&self) -> Result<Block> {
        Ok(self.block())
    }

    fn from_block(block: &Block) -> Result<Self> {
        integer::decode(block.expect_bytes(TypeCode::SignatureType)?).map(SignatureType)
    }
}

/// Names the key that should be used to verify a signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyLocator {
    name: Name,
}

impl KeyLocator {
    pub fn new(name: Name) -> KeyLocator {
        KeyLocator { name }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl From<Name> for KeyLocator {
    fn from(name: Name) -> Self {
        KeyLocator::new(name)
    }
}

impl TlvEntity for KeyLocator {
    /// Fails if the wrapped name is empty.
    fn to_block(&self) -> Result<Block> {
        Ok(Block::new_nested(
            TypeCode::KeyLocator,
            vec![self.name.to_block()?],
        ))
    }

    fn from_block(block: &Block) -> Result<Self> {
        let blocks = block.expect_blocks(TypeCode::KeyLocator)?;
        if blocks.len() != 1 {
            return Err(Error::ChildCount {
                tlv_type: block.tlv_type(),
                expected: "exactly 1",
                actual: blocks.len(),
            });
        }
        Ok(KeyLocator::new(Name::from_block(&blocks[0])?))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureInfo {
    pub signature_type: SignatureType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_locator: Option<KeyLocator>,
}

impl SignatureInfo {
    pub fn new(signature_type: SignatureType) -> SignatureInfo {
        SignatureInfo {
            signature_type,
            key_locator: None,
        }
    }

    pub fn with_key_locator(mut self, key_locator: KeyLocator) -> SignatureInfo {
        self.key_locator = Some(key_locator);
        self
    }
}

impl TlvEntity for SignatureInfo {
    /// A key locator that can't be encoded (one holding an empty name) is left out of the
    /// block rather than failing it.
    fn to_block(&self) -> Result<Block> {
        let mut blocks = vec![self.signature_type.to_block()?];
        if let Some(ref kl) = self.key_locator {
            match kl.to_block() {
                Ok(b) => blocks.push(b),
                Err(e) => trace!(error = %e, "leaving unencodable KeyLocator out of SignatureInfo"),
            }
        }
        Ok(Block::new_nested(TypeCode::SignatureInfo, blocks))
    }

    /// The first child must be the signature type. A key locator is only picked up when it is
    /// the second and last child and decodes cleanly; otherwise it is dropped.
    fn from_block(block: &Block) -> Result<Self> {
        let blocks = block.expect_blocks(TypeCode::SignatureInfo)?;
        let (first, rest) = blocks.split_first().ok_or(Error::ChildCount {
            tlv_type: block.tlv_type(),
            expected: "at least 1",
            actual: 0,
        })?;
        let signature_type = SignatureType::from_block(first)?;
        let key_locator = match rest {
            [kl] => KeyLocator::from_block(kl)
                .map_err(|e| trace!(error = %e, "dropping undecodable KeyLocator"))
                .ok(),
            [] => None,
            _ => {
                trace!(children = blocks.len(), "too many SignatureInfo fields, ignoring KeyLocator");
                None
            }
        };
        Ok(SignatureInfo {
            signature_type,
            key_locator,
        })
    }
}

/// Raw signature bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureValue {
    #[serde(with = "serde_bytes")]
    value: Vec<u8>,
}

impl SignatureValue {
    pub fn new(value: Vec<u8>) -> SignatureValue {
        SignatureValue { value }
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    pub fn block(&self) -> Block {
        Block::new_raw(TypeCode::SignatureValue, self.value.clone())
    }
}

impl From<Vec<u8>> for SignatureValue {
    fn from(value: Vec<u8>) -> Self {
        SignatureValue::new(value)
    }
}

impl TlvEntity for SignatureValue {
    fn to_block(&self) -> Result<Block> {
        Ok(self.block())
    }

    fn from_block(block: &Block) -> Result<Self> {
        let bytes = block.expect_bytes(TypeCode::SignatureValue)?;
        Ok(SignatureValue::new(bytes.to_vec()))
    }
}
