//! Chunk sorting task.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display};
use std::io;
use std::io::prelude::*;

use log;

use crate::codec::Codec;
use crate::spill::{self, SortedFile, SpillFile};

/// Chunk sorting task error.
#[derive(Debug)]
pub enum TaskError<E: Error, D: Error> {
    /// Common I/O error.
    IO(io::Error),
    /// Item encoding error.
    EncodeError(E),
    /// Item decoding error.
    DecodeError(D),
}

impl<E, D> Error for TaskError<E, D>
where
    E: Error + 'static,
    D: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(match &self {
            TaskError::IO(err) => err,
            TaskError::EncodeError(err) => err,
            TaskError::DecodeError(err) => err,
        })
    }
}

impl<E: Error, D: Error> Display for TaskError<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            TaskError::IO(err) => write!(f, "I/O operation failed: {}", err),
            TaskError::EncodeError(err) => write!(f, "data encoding error: {}", err),
            TaskError::DecodeError(err) => write!(f, "data decoding error: {}", err),
        }
    }
}

/// Sorts one spilled chunk.
///
/// This is the worker task body: it decodes the whole spill file into memory, sorts the items
/// using the provided compare function and encodes them in sorted order to the derived sorted
/// file. The payload is self-contained (a file handle plus a codec reference), so tasks share
/// no item memory and may run on any worker in any order. The in-memory sort is not stable
/// across equal items.
///
/// # Arguments
/// * `spill` - Spill file holding one unsorted chunk
/// * `codec` - Item codec
/// * `compare` - Function to be used to compare items
/// * `rw_buf_size` - Chunk file read/write buffer size
pub fn sort_task<T, C, F>(
    spill: &SpillFile,
    codec: &C,
    compare: F,
    rw_buf_size: Option<usize>,
) -> Result<SortedFile, TaskError<C::EncodeError, C::DecodeError>>
where
    C: Codec<T>,
    F: Fn(&T, &T) -> Ordering,
{
    log::debug!("sorting spill file '{}' ...", spill.path().display());

    let mut reader = spill::open_reader(spill.path(), rw_buf_size).map_err(|err| TaskError::IO(err))?;

    let mut items = Vec::new();
    while let Some(item) = codec.decode(&mut reader).map_err(|err| TaskError::DecodeError(err))? {
        items.push(item);
    }

    items.sort_unstable_by(|a, b| compare(a, b));

    let sorted = spill.sorted_file();
    let mut writer = spill::create_writer(sorted.path(), rw_buf_size).map_err(|err| TaskError::IO(err))?;

    for item in &items {
        codec.encode(&mut writer, item).map_err(|err| TaskError::EncodeError(err))?;
    }
    writer.flush().map_err(|err| TaskError::IO(err))?;

    log::debug!("spill file '{}' sorted", spill.path().display());

    return Ok(sorted);
}
