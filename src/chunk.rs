//! Input chunking.

use std::io::prelude::*;
use std::marker::PhantomData;

use crate::codec::Codec;

/// Chunk bounding configuration.
///
/// At least one limit must be set for sorting to proceed. Only `chunk_size` actually bounds
/// chunk growth; the memory limits are accepted for configuration compatibility but are
/// advisory: when `chunk_size` is absent the whole input is accumulated into a single chunk.
// TODO: enforce chunk_mem/total_mem once a byte accounting strategy is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChunkLimits {
    /// Maximum number of items in a chunk.
    pub chunk_size: Option<usize>,
    /// Maximum memory size a single worker may use. Advisory, not enforced.
    pub chunk_mem: Option<u64>,
    /// Maximum memory size the whole sort may use. Advisory, not enforced.
    pub total_mem: Option<u64>,
}

impl ChunkLimits {
    /// Checks whether any limit is configured.
    pub fn is_bounded(&self) -> bool {
        self.chunk_size.is_some() || self.chunk_mem.is_some() || self.total_mem.is_some()
    }
}

/// Chunk reader. Consumes a byte stream through a codec, accumulating decoded items
/// into bounded chunks.
///
/// Each produced chunk holds at most `max_items` items in input order; the final chunk may be
/// smaller. Once the input is exhausted (or a decode error has been returned) the reader yields
/// no further chunks. A `max_items` of [`None`] accumulates the whole input into one chunk.
pub struct ChunkReader<'a, T, R, C>
where
    R: BufRead,
    C: Codec<T>,
{
    reader: R,
    codec: &'a C,
    max_items: Option<usize>,
    done: bool,

    item_type: PhantomData<T>,
}

impl<'a, T, R, C> ChunkReader<'a, T, R, C>
where
    R: BufRead,
    C: Codec<T>,
{
    /// Creates a chunk reader over an input stream.
    ///
    /// # Arguments
    /// * `reader` - Input stream items are decoded from
    /// * `codec` - Item codec
    /// * `max_items` - Maximum chunk length, unbounded if [`None`]
    pub fn new(reader: R, codec: &'a C, max_items: Option<usize>) -> Self {
        ChunkReader {
            reader,
            codec,
            max_items,
            done: false,
            item_type: PhantomData,
        }
    }

    /// Reads the next chunk from the input.
    /// Returns [`None`] once the input is exhausted and no partial chunk remains.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<T>>, C::DecodeError> {
        if self.done {
            return Ok(None);
        }

        let mut chunk = match self.max_items {
            Some(max_items) => Vec::with_capacity(max_items),
            None => Vec::new(),
        };

        loop {
            let item = match self.codec.decode(&mut self.reader) {
                Ok(item) => item,
                Err(err) => {
                    self.done = true;
                    return Err(err);
                }
            };

            match item {
                Some(item) => {
                    chunk.push(item);
                    if self.max_items.map_or(false, |max_items| chunk.len() >= max_items) {
                        break;
                    }
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if chunk.is_empty() {
            return Ok(None);
        } else {
            return Ok(Some(chunk));
        }
    }
}

impl<'a, T, R, C> Iterator for ChunkReader<'a, T, R, C>
where
    R: BufRead,
    C: Codec<T>,
{
    type Item = Result<Vec<T>, C::DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().transpose()
    }
}
