//! Item codecs.

use std::error::Error;
use std::io;
use std::io::prelude::*;
use std::marker::PhantomData;

use rmp_serde;
use serde;

/// Item encoding/decoding contract.
///
/// A codec turns an in-memory item into its persisted byte form and back, so that items of any
/// type can be spilled to disk and restored without change. The sorter uses one codec for the
/// whole pipeline: decoding the input stream, writing and reading chunk files and encoding the
/// merged result to the output stream.
///
/// Implementations must guarantee round-trip fidelity: an item written by [`Codec::encode`] and
/// read back by [`Codec::decode`] compares equal to the original under the sorting order.
pub trait Codec<T> {
    /// Encoding error type.
    type EncodeError: Error;
    /// Decoding error type.
    type DecodeError: Error;

    /// Encodes a single item and writes it to the writer.
    ///
    /// # Arguments
    /// * `writer` - Byte sink the encoded item is written to
    /// * `item` - Item to be encoded
    fn encode<W: Write>(&self, writer: &mut W, item: &T) -> Result<(), Self::EncodeError>;

    /// Decodes a single item from the reader.
    /// Returns [`None`] when the reader is exhausted. End of input is not an error;
    /// malformed data is.
    ///
    /// # Arguments
    /// * `reader` - Byte source the encoded item is read from
    fn decode<R: BufRead>(&self, reader: &mut R) -> Result<Option<T>, Self::DecodeError>;
}

/// Newline-delimited raw byte line codec. This is the default codec.
///
/// Each record is written as its raw bytes followed by a single newline delimiter; decoding
/// strips exactly one trailing newline. Record bytes must not themselves contain a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteLineCodec;

impl Codec<Vec<u8>> for ByteLineCodec {
    type EncodeError = io::Error;
    type DecodeError = io::Error;

    fn encode<W: Write>(&self, writer: &mut W, item: &Vec<u8>) -> Result<(), Self::EncodeError> {
        writer.write_all(item)?;
        writer.write_all(b"\n")?;

        return Ok(());
    }

    fn decode<R: BufRead>(&self, reader: &mut R) -> Result<Option<Vec<u8>>, Self::DecodeError> {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        if line.last() == Some(&b'\n') {
            line.pop();
        }

        return Ok(Some(line));
    }
}

/// RMP (Rust MessagePack) codec.
/// It persists any `serde` serializable item using the MessagePack serialization format.
/// For more information see <https://msgpack.org/>.
pub struct RmpCodec<T> {
    item_type: PhantomData<T>,
}

impl<T> RmpCodec<T> {
    /// Creates an RMP codec instance.
    pub fn new() -> Self {
        RmpCodec { item_type: PhantomData }
    }
}

impl<T> Default for RmpCodec<T> {
    fn default() -> Self {
        RmpCodec::new()
    }
}

impl<T> Clone for RmpCodec<T> {
    fn clone(&self) -> Self {
        RmpCodec::new()
    }
}

impl<T> Codec<T> for RmpCodec<T>
where
    T: serde::ser::Serialize + serde::de::DeserializeOwned,
{
    type EncodeError = rmp_serde::encode::Error;
    type DecodeError = rmp_serde::decode::Error;

    fn encode<W: Write>(&self, writer: &mut W, item: &T) -> Result<(), Self::EncodeError> {
        rmp_serde::encode::write(writer, item)
    }

    fn decode<R: BufRead>(&self, reader: &mut R) -> Result<Option<T>, Self::DecodeError> {
        let exhausted = reader
            .fill_buf()
            .map_err(rmp_serde::decode::Error::InvalidMarkerRead)?
            .is_empty();
        if exhausted {
            return Ok(None);
        }

        rmp_serde::decode::from_read(reader).map(Some)
    }
}
