use serde::{Deserialize, Serialize};

use crate::{block::Block, entity::TlvEntity, error::Result, type_code::TypeCode};

/// The opaque payload of a Data packet. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content {
    #[serde(with = "serde_bytes")]
    value: Vec<u8>,
}

impl Content {
    pub fn new(value: Vec<u8>) -> Content {
        Content { value }
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    /// Encode to a block. This never fails; the signed portion of a Data packet relies on it.
    pub fn block(&self) -> Block {
        Block::new_raw(TypeCode::Content, self.value.clone())
    }
}

impl From<Vec<u8>> for Content {
    fn from(value: Vec<u8>) -> Self {
        Content::new(value)
    }
}

impl TlvEntity for Content {
    fn to_block(&self) -> Result<Block> {
        Ok(self.block())
    }

    fn from_block(block: &Block) -> Result<Self> {
        let bytes = block.expect_bytes(TypeCode::Content)?;
        Ok(Content::new(bytes.to_vec()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use rand::prelude::*;

    #[test]
    fn roundtrip() {
        let test_cases: Vec<usize> = vec![0, 1, 252, 253, 254, u16::MAX as usize + 1];
        let mut rng = thread_rng();
        for case in test_cases {
            let mut test = vec![0; case];
            rng.fill_bytes(test.as_mut());
            let content = Content::new(test.clone());
            let enc = content.wire_encode().unwrap();
            let dec = Content::wire_decode(&enc).unwrap();
            assert_eq!(dec.value(), &test[..]);
        }
    }

    #[test]
    fn empty() {
        assert_eq!(Content::default().block().wire_encode(), vec![0x15, 0x00]);
    }

    #[test]
    fn nested_rejected() {
        let block = Block::new_nested(TypeCode::Content, Vec::new());
        assert_eq!(
            Content::from_block(&block),
            Err(Error::WrongShape {
                tlv_type: 21,
                expected_nested: false
            })
        );
    }
}
