use tracing::debug;

use crate::{block::Block, data::Data, entity::TlvEntity, error::Result};

/// Reads consecutive Data packets out of one buffer.
///
/// Each call to `next` decodes one packet and moves past exactly the bytes it used. After the
/// first error the reader is finished and only returns `None`.
#[derive(Clone, Debug)]
pub struct DataReader<'a> {
    data: &'a [u8],
    errored: bool,
}

impl<'a> DataReader<'a> {
    pub fn new(data: &'a [u8]) -> DataReader<'a> {
        Self {
            data,
            errored: false,
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        self.data
    }

    fn read_one(&mut self) -> Result<Data> {
        let (block, used) = Block::wire_decode(self.data)?;
        self.data = &self.data[used..];
        Data::from_block(&block)
    }
}

impl<'a> std::iter::Iterator for DataReader<'a> {
    type Item = Result<Data>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.errored || self.data.is_empty() {
            return None;
        }
        let result = self.read_one();
        if let Err(ref e) = result {
            debug!(error = %e, remaining = self.data.len(), "stopped reading Data packets");
            self.errored = true;
        }
        Some(result)
    }
}
