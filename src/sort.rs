//! External sorter.

use log;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display};
use std::io;
use std::io::prelude::*;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::mpsc;

use crate::chunk::{ChunkLimits, ChunkReader};
use crate::codec::{ByteLineCodec, Codec};
use crate::merger::{BinaryHeapMerger, MergeSource};
use crate::spill::{self, SortedFile, SpillFile, SpillStore};
use crate::worker::{self, TaskError};

/// Configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// None of the chunk limits is set.
    MissingChunkLimit,
    /// Chunk item count limit is set to zero.
    ZeroChunkSize,
    /// Worker count is set to zero.
    ZeroWorkers,
}

impl Error for ConfigError {}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            ConfigError::MissingChunkLimit => {
                write!(f, "no chunk limit provided: chunk_size, chunk_mem or total_mem must be set")
            }
            ConfigError::ZeroChunkSize => write!(f, "chunk_size must be greater than zero"),
            ConfigError::ZeroWorkers => write!(f, "workers_cnt must be greater than zero"),
        }
    }
}

/// Sorting error.
#[derive(Debug)]
pub enum SortError<E: Error, D: Error> {
    /// Invalid sorter configuration.
    Config(ConfigError),
    /// Temporary directory or file creation error.
    TempDir(io::Error),
    /// Workers thread pool initialization error.
    ThreadPoolBuildError(rayon::ThreadPoolBuildError),
    /// Common I/O error.
    IO(io::Error),
    /// Item encoding error.
    EncodeError(E),
    /// Item decoding error.
    DecodeError(D),
}

impl<E, D> Error for SortError<E, D>
where
    E: Error + 'static,
    D: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(match &self {
            SortError::Config(err) => err,
            SortError::TempDir(err) => err,
            SortError::ThreadPoolBuildError(err) => err,
            SortError::IO(err) => err,
            SortError::EncodeError(err) => err,
            SortError::DecodeError(err) => err,
        })
    }
}

impl<E: Error, D: Error> Display for SortError<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            SortError::Config(err) => write!(f, "invalid configuration: {}", err),
            SortError::TempDir(err) => write!(f, "temporary directory or file not created: {}", err),
            SortError::ThreadPoolBuildError(err) => write!(f, "thread pool initialization failed: {}", err),
            SortError::IO(err) => write!(f, "I/O operation failed: {}", err),
            SortError::EncodeError(err) => write!(f, "data encoding error: {}", err),
            SortError::DecodeError(err) => write!(f, "data decoding error: {}", err),
        }
    }
}

/// External sorter builder. Provides methods for [`ExternalSorter`] initialization.
#[derive(Clone)]
pub struct ExternalSorterBuilder<T, C = ByteLineCodec>
where
    C: Codec<T>,
{
    /// Chunk item count limit.
    chunk_size: Option<usize>,
    /// Chunk memory limit in bytes.
    chunk_mem: Option<u64>,
    /// Total memory limit in bytes.
    total_mem: Option<u64>,
    /// Number of workers to be used to sort chunks in parallel.
    workers_cnt: Option<usize>,
    /// Directory to be used to store temporary data.
    tmp_dir: Option<Box<Path>>,
    /// Chunk file read/write buffer size.
    rw_buf_size: Option<usize>,
    /// Item codec.
    codec: C,

    /// Input item type.
    item_type: PhantomData<T>,
}

impl<T, C> ExternalSorterBuilder<T, C>
where
    C: Codec<T>,
{
    /// Creates an instance of a builder with default parameters.
    pub fn new() -> Self
    where
        C: Default,
    {
        ExternalSorterBuilder::default()
    }

    /// Builds an [`ExternalSorter`] instance using provided configuration.
    pub fn build(self) -> Result<ExternalSorter<T, C>, SortError<C::EncodeError, C::DecodeError>> {
        ExternalSorter::new(
            ChunkLimits {
                chunk_size: self.chunk_size,
                chunk_mem: self.chunk_mem,
                total_mem: self.total_mem,
            },
            self.workers_cnt,
            self.tmp_dir.as_deref(),
            self.rw_buf_size,
            self.codec,
        )
    }

    /// Sets chunk item count limit.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> ExternalSorterBuilder<T, C> {
        self.chunk_size = Some(chunk_size);
        return self;
    }

    /// Sets chunk memory limit.
    pub fn with_chunk_mem(mut self, chunk_mem: u64) -> ExternalSorterBuilder<T, C> {
        self.chunk_mem = Some(chunk_mem);
        return self;
    }

    /// Sets total memory limit.
    pub fn with_total_mem(mut self, total_mem: u64) -> ExternalSorterBuilder<T, C> {
        self.total_mem = Some(total_mem);
        return self;
    }

    /// Sets number of workers to be used to sort chunks in parallel.
    pub fn with_workers_cnt(mut self, workers_cnt: usize) -> ExternalSorterBuilder<T, C> {
        self.workers_cnt = Some(workers_cnt);
        return self;
    }

    /// Sets directory to be used to store temporary data.
    pub fn with_tmp_dir(mut self, path: &Path) -> ExternalSorterBuilder<T, C> {
        self.tmp_dir = Some(path.into());
        return self;
    }

    /// Sets chunk read/write buffer size.
    pub fn with_rw_buf_size(mut self, buf_size: usize) -> ExternalSorterBuilder<T, C> {
        self.rw_buf_size = Some(buf_size);
        return self;
    }

    /// Sets item codec.
    pub fn with_codec(mut self, codec: C) -> ExternalSorterBuilder<T, C> {
        self.codec = codec;
        return self;
    }
}

impl<T, C> Default for ExternalSorterBuilder<T, C>
where
    C: Codec<T> + Default,
{
    fn default() -> Self {
        ExternalSorterBuilder {
            chunk_size: None,
            chunk_mem: None,
            total_mem: None,
            workers_cnt: None,
            tmp_dir: None,
            rw_buf_size: None,
            codec: C::default(),
            item_type: PhantomData,
        }
    }
}

/// External sorter.
pub struct ExternalSorter<T, C = ByteLineCodec>
where
    C: Codec<T>,
{
    /// Workers thread pool.
    thread_pool: rayon::ThreadPool,
    /// Chunk limits.
    limits: ChunkLimits,
    /// Directory to be used to store temporary data.
    tmp_dir: Option<Box<Path>>,
    /// Chunk file read/write buffer size.
    rw_buf_size: Option<usize>,
    /// Item codec.
    codec: C,

    /// Input item type.
    item_type: PhantomData<T>,
}

impl<T, C> ExternalSorter<T, C>
where
    C: Codec<T>,
{
    /// Creates a new external sorter instance.
    ///
    /// # Arguments
    /// * `limits` - Chunk limits. At least one of them must be set.
    /// * `workers_cnt` - Number of workers to be used to sort chunks in parallel. If the parameter is [`None`]
    ///   workers number will be selected based on available CPU core number.
    /// * `tmp_path` - Directory to be used to store temporary data. If the parameter is [`None`] default OS temporary
    ///   directory will be used.
    /// * `rw_buf_size` - Chunk file read/write buffer size.
    /// * `codec` - Item codec.
    pub fn new(
        limits: ChunkLimits,
        workers_cnt: Option<usize>,
        tmp_path: Option<&Path>,
        rw_buf_size: Option<usize>,
        codec: C,
    ) -> Result<Self, SortError<C::EncodeError, C::DecodeError>> {
        Self::validate_config(&limits, workers_cnt)?;

        return Ok(ExternalSorter {
            limits,
            rw_buf_size,
            codec,
            thread_pool: Self::init_thread_pool(workers_cnt)?,
            tmp_dir: tmp_path.map(|path| path.into()),
            item_type: PhantomData,
        });
    }

    fn validate_config(
        limits: &ChunkLimits,
        workers_cnt: Option<usize>,
    ) -> Result<(), SortError<C::EncodeError, C::DecodeError>> {
        if !limits.is_bounded() {
            return Err(SortError::Config(ConfigError::MissingChunkLimit));
        }
        if limits.chunk_size == Some(0) {
            return Err(SortError::Config(ConfigError::ZeroChunkSize));
        }
        if workers_cnt == Some(0) {
            return Err(SortError::Config(ConfigError::ZeroWorkers));
        }

        return Ok(());
    }

    fn init_thread_pool(
        workers_cnt: Option<usize>,
    ) -> Result<rayon::ThreadPool, SortError<C::EncodeError, C::DecodeError>> {
        let mut thread_pool_builder = rayon::ThreadPoolBuilder::new();

        if let Some(workers_cnt) = workers_cnt {
            log::info!("initializing thread-pool (workers: {})", workers_cnt);
            thread_pool_builder = thread_pool_builder.num_threads(workers_cnt);
        } else {
            log::info!("initializing thread-pool (workers: default)");
        }
        let thread_pool = thread_pool_builder
            .thread_name(|idx| format!("spillsort-worker-{}", idx))
            .build()
            .map_err(|err| SortError::ThreadPoolBuildError(err))?;

        return Ok(thread_pool);
    }

    /// Sorts data from the input stream and writes the result to the output stream.
    /// Items are compared using their natural order.
    ///
    /// # Arguments
    /// * `input` - Input stream data to be fetched from
    /// * `output` - Output stream sorted data to be written to
    pub fn sort<R, W>(&self, input: R, output: W) -> Result<(), SortError<C::EncodeError, C::DecodeError>>
    where
        T: Ord,
        R: io::BufRead,
        W: io::Write,
        C: Sync,
        C::EncodeError: Send,
        C::DecodeError: Send,
    {
        return self.sort_by(input, output, T::cmp);
    }

    /// Sorts data from the input stream using a custom compare function and writes the result
    /// to the output stream.
    ///
    /// The input is split into chunks, each chunk is spilled to a temporary file and sorted by
    /// a pool worker, afterwards the sorted files are merged to the output. Temporary files are
    /// removed before the call returns. For a fixed chunk limit the output does not depend on
    /// the worker count.
    ///
    /// # Arguments
    /// * `input` - Input stream data to be fetched from
    /// * `output` - Output stream sorted data to be written to
    /// * `compare` - Function to be used to compare items
    pub fn sort_by<R, W, F>(
        &self,
        input: R,
        mut output: W,
        compare: F,
    ) -> Result<(), SortError<C::EncodeError, C::DecodeError>>
    where
        R: io::BufRead,
        W: io::Write,
        F: Fn(&T, &T) -> Ordering + Sync + Send + Copy,
        C: Sync,
        C::EncodeError: Send,
        C::DecodeError: Send,
    {
        let mut store = SpillStore::create(self.tmp_dir.as_deref()).map_err(|err| SortError::TempDir(err))?;
        log::info!("using {} as a temporary directory", store.path().display());

        let sorted_files = self.sort_chunks(input, &mut store, compare)?;
        self.merge_files(&sorted_files, &mut output, compare)?;

        store.close().map_err(|err| SortError::TempDir(err))?;
        log::debug!("external sort done");

        return Ok(());
    }

    /// Splits the input into chunks and sorts them on the thread pool.
    /// Chunks are spilled and submitted one by one so at most one chunk is held in memory,
    /// the workers operate on the spilled files only. Returns the sorted files in chunk
    /// submission order. On failure the error of the earliest submitted chunk is returned.
    fn sort_chunks<R, F>(
        &self,
        input: R,
        store: &mut SpillStore,
        compare: F,
    ) -> Result<Vec<SortedFile>, SortError<C::EncodeError, C::DecodeError>>
    where
        R: io::BufRead,
        F: Fn(&T, &T) -> Ordering + Sync + Send + Copy,
        C: Sync,
        C::EncodeError: Send,
        C::DecodeError: Send,
    {
        let codec = &self.codec;
        let rw_buf_size = self.rw_buf_size;

        let (result_tx, result_rx) = mpsc::channel();

        let submitted = self.thread_pool.in_place_scope(
            |scope| -> Result<usize, SortError<C::EncodeError, C::DecodeError>> {
                let mut chunk_reader = ChunkReader::new(input, codec, self.limits.chunk_size);
                let mut task_id = 0;

                while let Some(chunk) = chunk_reader.next_chunk().map_err(|err| SortError::DecodeError(err))? {
                    let spill = self.flush_chunk(store, &chunk)?;
                    let result_tx = result_tx.clone();

                    scope.spawn(move |_| {
                        let result = worker::sort_task(&spill, codec, compare, rw_buf_size);
                        let _ = result_tx.send((task_id, result));
                    });

                    task_id += 1;
                }

                return Ok(task_id);
            },
        );
        drop(result_tx);

        let submitted = submitted?;

        let mut results: Vec<(usize, Result<SortedFile, TaskError<_, _>>)> = Vec::with_capacity(submitted);
        results.extend(result_rx.iter());
        results.sort_unstable_by_key(|(task_id, _)| *task_id);

        let mut sorted_files = Vec::with_capacity(results.len());
        for (_, result) in results {
            let sorted_file = result.map_err(|err| match err {
                TaskError::IO(err) => SortError::IO(err),
                TaskError::EncodeError(err) => SortError::EncodeError(err),
                TaskError::DecodeError(err) => SortError::DecodeError(err),
            })?;
            sorted_files.push(sorted_file);
        }

        return Ok(sorted_files);
    }

    /// Writes a chunk to a new spill file.
    fn flush_chunk(
        &self,
        store: &mut SpillStore,
        chunk: &[T],
    ) -> Result<SpillFile, SortError<C::EncodeError, C::DecodeError>> {
        let spill = store.new_spill_file();
        log::debug!("spilling chunk ({} items) to '{}' ...", chunk.len(), spill.path().display());

        let mut writer = spill::create_writer(spill.path(), self.rw_buf_size).map_err(|err| SortError::IO(err))?;
        for item in chunk {
            self.codec.encode(&mut writer, item).map_err(|err| SortError::EncodeError(err))?;
        }
        writer.flush().map_err(|err| SortError::IO(err))?;

        return Ok(spill);
    }

    /// Merges the sorted files to the output stream and flushes it.
    fn merge_files<W, F>(
        &self,
        files: &[SortedFile],
        output: &mut W,
        compare: F,
    ) -> Result<(), SortError<C::EncodeError, C::DecodeError>>
    where
        W: io::Write,
        F: Fn(&T, &T) -> Ordering + Copy,
    {
        log::debug!("merging {} sorted files ...", files.len());

        let mut sources = Vec::with_capacity(files.len());
        for file in files {
            let source =
                MergeSource::open(file, &self.codec, self.rw_buf_size).map_err(|err| SortError::IO(err))?;
            sources.push(source);
        }

        let merger = BinaryHeapMerger::new(sources, compare);
        for item in merger {
            let item = item.map_err(|err| SortError::DecodeError(err))?;
            self.codec.encode(output, &item).map_err(|err| SortError::EncodeError(err))?;
        }
        output.flush().map_err(|err| SortError::IO(err))?;

        return Ok(());
    }
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::io;
    use std::io::prelude::*;

    use rand::seq::SliceRandom;
    use rstest::*;

    use super::{ConfigError, ExternalSorter, ExternalSorterBuilder, SortError};
    use crate::codec::{Codec, RmpCodec};

    /// Line codec whose decoder rejects every record its own encoder produced.
    #[derive(Default)]
    struct OneWayLineCodec;

    impl Codec<Vec<u8>> for OneWayLineCodec {
        type EncodeError = io::Error;
        type DecodeError = io::Error;

        fn encode<W: Write>(&self, writer: &mut W, item: &Vec<u8>) -> io::Result<()> {
            writer.write_all(b"!")?;
            writer.write_all(item)?;
            writer.write_all(b"\n")
        }

        fn decode<R: io::BufRead>(&self, reader: &mut R) -> io::Result<Option<Vec<u8>>> {
            let mut line = Vec::new();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            if line.starts_with(b"!") {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "marked record"));
            }
            if line.ends_with(b"\n") {
                line.pop();
            }
            Ok(Some(line))
        }
    }

    #[rstest]
    fn test_sort_exact_output() {
        let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
            .with_chunk_size(2)
            .with_workers_cnt(1)
            .with_rw_buf_size(64)
            .build()
            .unwrap();

        let mut output = Vec::new();
        sorter.sort(&b"3\n1\n2\n"[..], &mut output).unwrap();

        assert_eq!(output, b"1\n2\n3\n");
    }

    #[rstest]
    fn test_sort_shuffled(
        #[values(10, 30, 50, 100, 150)] chunk_size: usize,
        #[values(None, Some(1), Some(2), Some(4))] workers_cnt: Option<usize>,
    ) {
        let sorted = Vec::from_iter((100..200).map(|num| format!("{}\n", num).into_bytes()));

        let mut shuffled = sorted.clone();
        shuffled.shuffle(&mut rand::thread_rng());
        let input = shuffled.concat();

        let mut builder = ExternalSorterBuilder::new().with_chunk_size(chunk_size);
        if let Some(workers_cnt) = workers_cnt {
            builder = builder.with_workers_cnt(workers_cnt);
        }
        let sorter: ExternalSorter<Vec<u8>> = builder.build().unwrap();

        let mut output = Vec::new();
        sorter.sort(input.as_slice(), &mut output).unwrap();

        assert_eq!(output, sorted.concat());
    }

    #[rstest]
    fn test_sort_empty_input() {
        let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
            .with_chunk_size(100)
            .build()
            .unwrap();

        let mut output = Vec::new();
        sorter.sort(io::empty(), &mut output).unwrap();

        assert!(output.is_empty());
    }

    #[rstest]
    fn test_sort_duplicates() {
        let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
            .with_chunk_size(2)
            .with_workers_cnt(2)
            .build()
            .unwrap();

        let mut output = Vec::new();
        sorter.sort(&b"b\na\nb\na\nb\n"[..], &mut output).unwrap();

        assert_eq!(output, b"a\na\nb\nb\nb\n");
    }

    #[rstest]
    fn test_sort_by_custom_order() {
        let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
            .with_chunk_size(2)
            .build()
            .unwrap();

        let mut output = Vec::new();
        sorter
            .sort_by(&b"b\nc\na\n"[..], &mut output, |a: &Vec<u8>, b: &Vec<u8>| b.cmp(a))
            .unwrap();

        assert_eq!(output, b"c\nb\na\n");
    }

    #[rstest]
    fn test_sort_workers_invariance() {
        let mut shuffled = Vec::from_iter((100..200).map(|num| format!("{}\n", num).into_bytes()));
        shuffled.shuffle(&mut rand::thread_rng());
        let input = shuffled.concat();

        let mut outputs = Vec::new();
        for workers_cnt in [1, 2, 8] {
            let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
                .with_chunk_size(16)
                .with_workers_cnt(workers_cnt)
                .build()
                .unwrap();

            let mut output = Vec::new();
            sorter.sort(input.as_slice(), &mut output).unwrap();
            outputs.push(output);
        }

        assert_eq!(outputs[0], outputs[1]);
        assert_eq!(outputs[0], outputs[2]);
    }

    #[rstest]
    fn test_mem_limits_accepted() {
        let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
            .with_chunk_mem(64 * 1024)
            .build()
            .unwrap();

        let mut output = Vec::new();
        sorter.sort(&b"b\na\n"[..], &mut output).unwrap();

        assert_eq!(output, b"a\nb\n");
    }

    #[rstest]
    fn test_missing_chunk_limit() {
        let result = ExternalSorterBuilder::<Vec<u8>>::new().build();
        assert!(matches!(result, Err(SortError::Config(ConfigError::MissingChunkLimit))));
    }

    #[rstest]
    fn test_zero_chunk_size() {
        let result = ExternalSorterBuilder::<Vec<u8>>::new().with_chunk_size(0).build();
        assert!(matches!(result, Err(SortError::Config(ConfigError::ZeroChunkSize))));
    }

    #[rstest]
    fn test_zero_workers() {
        let result = ExternalSorterBuilder::<Vec<u8>>::new()
            .with_chunk_size(10)
            .with_workers_cnt(0)
            .build();
        assert!(matches!(result, Err(SortError::Config(ConfigError::ZeroWorkers))));
    }

    #[rstest]
    fn test_invalid_config_no_tmp_dir() {
        let parent = tempfile::tempdir().unwrap();

        let result = ExternalSorterBuilder::<Vec<u8>>::new().with_tmp_dir(parent.path()).build();

        assert!(matches!(result, Err(SortError::Config(ConfigError::MissingChunkLimit))));
        assert!(fs::read_dir(parent.path()).unwrap().next().is_none());
    }

    #[rstest]
    fn test_tmp_dir_cleanup() {
        let parent = tempfile::tempdir().unwrap();

        let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
            .with_chunk_size(1)
            .with_tmp_dir(parent.path())
            .build()
            .unwrap();

        let mut output = Vec::new();
        sorter.sort(&b"c\nb\na\n"[..], &mut output).unwrap();

        assert_eq!(output, b"a\nb\nc\n");
        assert!(fs::read_dir(parent.path()).unwrap().next().is_none());
    }

    #[rstest]
    fn test_tmp_dir_cleanup_after_failure() {
        let parent = tempfile::tempdir().unwrap();

        let sorter: ExternalSorter<i32, RmpCodec<i32>> = ExternalSorterBuilder::new()
            .with_chunk_size(4)
            .with_tmp_dir(parent.path())
            .build()
            .unwrap();

        let mut output = Vec::new();
        let result = sorter.sort(&[0xc1u8][..], &mut output);

        assert!(matches!(result, Err(SortError::DecodeError(_))));
        assert!(fs::read_dir(parent.path()).unwrap().next().is_none());
    }

    #[rstest]
    fn test_sort_task_failure() {
        let parent = tempfile::tempdir().unwrap();

        // the input decodes fine, the task decoding the spilled records does not
        let sorter: ExternalSorter<Vec<u8>, OneWayLineCodec> = ExternalSorterBuilder::new()
            .with_chunk_size(2)
            .with_workers_cnt(2)
            .with_tmp_dir(parent.path())
            .build()
            .unwrap();

        let mut output = Vec::new();
        let result = sorter.sort(&b"c\nb\ne\na\nd\n"[..], &mut output);

        assert!(matches!(result, Err(SortError::DecodeError(_))));
        assert!(output.is_empty());
        assert!(fs::read_dir(parent.path()).unwrap().next().is_none());
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn test_sort_rmp_items(#[case] reversed: bool) {
        let input_sorted = 0..100;

        let mut input_shuffled = Vec::from_iter(input_sorted.clone());
        input_shuffled.shuffle(&mut rand::thread_rng());

        let codec = RmpCodec::default();
        let mut input = Vec::new();
        for item in &input_shuffled {
            codec.encode(&mut input, item).unwrap();
        }

        let sorter: ExternalSorter<i32, RmpCodec<i32>> = ExternalSorterBuilder::new()
            .with_codec(codec.clone())
            .with_chunk_size(8)
            .with_workers_cnt(2)
            .build()
            .unwrap();

        let compare = if reversed {
            |a: &i32, b: &i32| a.cmp(b).reverse()
        } else {
            |a: &i32, b: &i32| a.cmp(b)
        };

        let mut output = Vec::new();
        sorter.sort_by(input.as_slice(), &mut output, compare).unwrap();

        let mut reader = io::BufReader::new(output.as_slice());
        let mut actual_result = Vec::new();
        while let Some(item) = codec.decode(&mut reader).unwrap() {
            actual_result.push(item);
        }

        let expected_result = if reversed {
            Vec::from_iter(input_sorted.clone().rev())
        } else {
            Vec::from_iter(input_sorted.clone())
        };

        assert_eq!(actual_result, expected_result)
    }
}
