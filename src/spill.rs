//! Spill file management.
//!
//! All temporary files produced by a sort call live in one scoped directory owned by a
//! [`SpillStore`]. Files are never deleted individually: the whole directory is removed when
//! the store is closed or dropped, on success and failure alike.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile;

/// Scoped temporary file store.
///
/// Owns one temporary directory created per sort invocation and hands out uniquely named
/// spill file handles. Names are allocated from a counter by the single producer thread;
/// sorted file names are derived from spill names, so concurrently running workers never
/// create colliding files.
pub struct SpillStore {
    dir: tempfile::TempDir,
    next_id: u64,
}

impl SpillStore {
    /// Creates a store with a fresh scoped directory.
    ///
    /// # Arguments
    /// * `parent` - Directory the scoped directory is created in. If the parameter is [`None`]
    ///   the platform default temporary directory is used.
    pub fn create(parent: Option<&Path>) -> io::Result<Self> {
        let dir = match parent {
            Some(parent) => tempfile::tempdir_in(parent)?,
            None => tempfile::tempdir()?,
        };

        return Ok(SpillStore { dir, next_id: 0 });
    }

    /// Returns the scoped directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Allocates a new uniquely named spill file handle.
    /// The file itself is not created until a producer writes it.
    pub fn new_spill_file(&mut self) -> SpillFile {
        let id = self.next_id;
        self.next_id += 1;

        SpillFile {
            path: self.dir.path().join(format!("chunk-{:06}", id)),
        }
    }

    /// Removes the scoped directory and everything in it.
    /// Dropping the store removes the directory as well; closing explicitly surfaces
    /// removal errors instead of ignoring them.
    pub fn close(self) -> io::Result<()> {
        self.dir.close()
    }
}

/// Handle to an unsorted chunk spilled to disk. Written once by the producer,
/// read once by the worker that sorts it.
#[derive(Debug)]
pub struct SpillFile {
    path: PathBuf,
}

impl SpillFile {
    /// Returns the spill file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Derives the handle of the sorted counterpart of this spill file.
    pub fn sorted_file(&self) -> SortedFile {
        let mut path = self.path.clone().into_os_string();
        path.push(".sorted");

        SortedFile { path: path.into() }
    }
}

/// Handle to a sorted chunk file. Written once by a worker, read once by the merge stage.
#[derive(Debug)]
pub struct SortedFile {
    path: PathBuf,
}

impl SortedFile {
    /// Returns the sorted file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub(crate) fn open_reader(path: &Path, buf_size: Option<usize>) -> io::Result<io::BufReader<fs::File>> {
    let file = fs::File::open(path)?;

    let reader = match buf_size {
        Some(buf_size) => io::BufReader::with_capacity(buf_size, file),
        None => io::BufReader::new(file),
    };

    return Ok(reader);
}

pub(crate) fn create_writer(path: &Path, buf_size: Option<usize>) -> io::Result<io::BufWriter<fs::File>> {
    let file = fs::File::create(path)?;

    let writer = match buf_size {
        Some(buf_size) => io::BufWriter::with_capacity(buf_size, file),
        None => io::BufWriter::new(file),
    };

    return Ok(writer);
}
