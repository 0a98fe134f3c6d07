//! `spillsort` is a rust parallel external sort implementation.
//!
//! External sorting is a class of sorting algorithms that can handle massive amounts of data. External sorting
//! is required when the data being sorted does not fit into the main memory (RAM) of a computer and instead must
//! be resided in slower external memory, usually a hard disk drive. The input stream is split into chunks, each
//! chunk is spilled to a temporary file and sorted there, afterwards the sorted files are merged into a single
//! sorted output stream. For more information see
//! [External Sorting](https://en.wikipedia.org/wiki/External_sorting).
//!
//! # Overview
//!
//! `spillsort` supports the following features:
//!
//! * **Data agnostic:**
//!   it sorts newline-delimited byte records out of the box and supports any item type through the [`Codec`]
//!   trait. A `serde`-based `MessagePack` codec is included.
//! * **Parallel sorting:**
//!   chunks are sorted on a worker thread pool utilizing maximum CPU resources and reducing sorting time.
//! * **Bounded memory:**
//!   at most one chunk is decoded in memory at a time, the rest of the data resides in temporary spill files
//!   that are removed when sorting completes.
//! * **Deterministic output:**
//!   for a fixed chunk limit the output is byte-identical no matter how many workers are used.
//!
//! # Example
//!
//! ```no_run
//! use std::fs;
//! use std::io::{self, prelude::*};
//! use std::path;
//!
//! use spillsort::{ExternalSorter, ExternalSorterBuilder};
//!
//! fn main() {
//!     let input_reader = io::BufReader::new(fs::File::open("input.txt").unwrap());
//!     let mut output_writer = io::BufWriter::new(fs::File::create("output.txt").unwrap());
//!
//!     let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
//!         .with_chunk_size(1_000_000)
//!         .with_tmp_dir(path::Path::new("./"))
//!         .build()
//!         .unwrap();
//!
//!     sorter.sort(input_reader, &mut output_writer).unwrap();
//!     output_writer.flush().unwrap();
//! }
//! ```

pub mod chunk;
pub mod codec;
pub mod merger;
pub mod sort;
pub mod spill;
pub mod worker;

pub use chunk::{ChunkLimits, ChunkReader};
pub use codec::{ByteLineCodec, Codec, RmpCodec};
pub use merger::{BinaryHeapMerger, MergeSource};
pub use sort::{ConfigError, ExternalSorter, ExternalSorterBuilder, SortError};
pub use spill::{SortedFile, SpillFile, SpillStore};
pub use worker::TaskError;
