//! Binary heap merger.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fs;
use std::io;
use std::marker::PhantomData;

use crate::codec::Codec;
use crate::spill::{self, SortedFile};

/// Sorted file reader used as a merge input.
/// Iterates over the file items decoding them one by one.
pub struct MergeSource<'c, T, C> {
    reader: io::BufReader<fs::File>,
    codec: &'c C,
    item_type: PhantomData<T>,
}

impl<'c, T, C> MergeSource<'c, T, C>
where
    C: Codec<T>,
{
    /// Opens a sorted file for reading.
    ///
    /// # Arguments
    /// * `file` - Sorted file to be read
    /// * `codec` - Item codec
    /// * `rw_buf_size` - Read buffer size
    pub fn open(file: &SortedFile, codec: &'c C, rw_buf_size: Option<usize>) -> io::Result<Self> {
        let reader = spill::open_reader(file.path(), rw_buf_size)?;

        return Ok(MergeSource {
            reader,
            codec,
            item_type: PhantomData,
        });
    }
}

impl<'c, T, C> Iterator for MergeSource<'c, T, C>
where
    C: Codec<T>,
{
    type Item = Result<T, C::DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        return self.codec.decode(&mut self.reader).transpose();
    }
}

// Binary heap is a max-heap so both comparisons are reversed: the entry with the smallest
// item is popped first and ties are broken by the lowest input index. The tie-break keeps
// the merge result deterministic no matter how the inputs were produced.
struct HeapEntry<T, F> {
    item: T,
    source: usize,
    compare: F,
}

impl<T, F> PartialEq for HeapEntry<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, F> Eq for HeapEntry<T, F> where F: Fn(&T, &T) -> Ordering {}

impl<T, F> PartialOrd for HeapEntry<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, F> Ord for HeapEntry<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, other: &Self) -> Ordering {
        (self.compare)(&other.item, &self.item).then_with(|| other.source.cmp(&self.source))
    }
}

/// Binary heap merger implementation.
/// Merges multiple sorted inputs into a single sorted output using the provided compare function.
/// Time complexity is *m* \* log(*n*) in worst case where *m* is the number of items,
/// *n* is the number of inputs.
pub struct BinaryHeapMerger<T, E, F, C>
where
    E: Error,
    F: Fn(&T, &T) -> Ordering + Copy,
    C: IntoIterator<Item = Result<T, E>>,
{
    items: BinaryHeap<HeapEntry<T, F>>,
    chunks: Vec<C::IntoIter>,
    compare: F,
    initiated: bool,
}

impl<T, E, F, C> BinaryHeapMerger<T, E, F, C>
where
    E: Error,
    F: Fn(&T, &T) -> Ordering + Copy,
    C: IntoIterator<Item = Result<T, E>>,
{
    /// Creates an instance of a binary heap merger using chunks as inputs.
    /// Chunk items should be sorted by the same compare function otherwise the result
    /// is undefined.
    ///
    /// # Arguments
    /// * `chunks` - Chunks to be merged in a single sorted one
    /// * `compare` - Function the chunk items are sorted by
    pub fn new<I>(chunks: I, compare: F) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        let chunks = Vec::from_iter(chunks.into_iter().map(|c| c.into_iter()));
        let items = BinaryHeap::with_capacity(chunks.len());

        return BinaryHeapMerger {
            chunks,
            items,
            compare,
            initiated: false,
        };
    }
}

impl<T, E, F, C> Iterator for BinaryHeapMerger<T, E, F, C>
where
    E: Error,
    F: Fn(&T, &T) -> Ordering + Copy,
    C: IntoIterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    /// Returns the next smallest item from the inputs.
    fn next(&mut self) -> Option<Self::Item> {
        if !self.initiated {
            for (idx, chunk) in self.chunks.iter_mut().enumerate() {
                if let Some(item) = chunk.next() {
                    match item {
                        Ok(item) => self.items.push(HeapEntry {
                            item,
                            source: idx,
                            compare: self.compare,
                        }),
                        Err(err) => return Some(Err(err)),
                    }
                }
            }
            self.initiated = true;
        }

        let entry = self.items.pop()?;
        if let Some(item) = self.chunks[entry.source].next() {
            match item {
                Ok(item) => self.items.push(HeapEntry {
                    item,
                    source: entry.source,
                    compare: self.compare,
                }),
                Err(err) => return Some(Err(err)),
            }
        }

        return Some(Ok(entry.item));
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;
    use std::fs;
    use std::io::{self, ErrorKind};

    use rstest::*;

    use super::{BinaryHeapMerger, MergeSource};
    use crate::codec::ByteLineCodec;
    use crate::spill::SpillStore;

    #[rstest]
    #[case(
        vec![],
        vec![],
    )]
    #[case(
        vec![
            vec![],
            vec![]
        ],
        vec![],
    )]
    #[case(
        vec![
            vec![Ok(4), Ok(5), Ok(7)],
            vec![Ok(1), Ok(6)],
            vec![Ok(3)],
            vec![],
        ],
        vec![Ok(1), Ok(3), Ok(4), Ok(5), Ok(6), Ok(7)],
    )]
    #[case(
        vec![
            vec![Ok(1), Ok(3), Ok(3)],
            vec![Ok(3), Ok(5)],
        ],
        vec![Ok(1), Ok(3), Ok(3), Ok(3), Ok(5)],
    )]
    #[case(
        vec![
            vec![Result::Err(io::Error::new(ErrorKind::Other, "test error"))]
        ],
        vec![
            Result::Err(io::Error::new(ErrorKind::Other, "test error"))
        ],
    )]
    #[case(
        vec![
            vec![Ok(3), Result::Err(io::Error::new(ErrorKind::Other, "test error"))],
            vec![Ok(1), Ok(2)],
        ],
        vec![
            Ok(1),
            Ok(2),
            Result::Err(io::Error::new(ErrorKind::Other, "test error")),
        ],
    )]
    fn test_merger(
        #[case] chunks: Vec<Vec<Result<i32, io::Error>>>,
        #[case] expected_result: Vec<Result<i32, io::Error>>,
    ) {
        let merger = BinaryHeapMerger::new(chunks, i32::cmp);
        let actual_result = merger.collect();
        assert!(
            compare_vectors_of_result::<_, io::Error>(&actual_result, &expected_result),
            "actual={:?}, expected={:?}",
            actual_result,
            expected_result
        );
    }

    #[rstest]
    fn test_merger_custom_order() {
        let chunks: Vec<Vec<Result<i32, io::Error>>> = vec![
            vec![Ok(7), Ok(5), Ok(4)],
            vec![Ok(6), Ok(1)],
            vec![Ok(3)],
        ];

        let compare = |a: &i32, b: &i32| b.cmp(a);
        let merger = BinaryHeapMerger::new(chunks, compare);

        let actual_result: Vec<i32> = merger.map(|item| item.unwrap()).collect();
        assert_eq!(actual_result, vec![7, 6, 5, 4, 3, 1]);
    }

    #[rstest]
    fn test_merge_source() {
        let mut store = SpillStore::create(None).unwrap();
        let codec = ByteLineCodec;

        let first = store.new_spill_file().sorted_file();
        fs::write(first.path(), b"apple\ncherry\n").unwrap();
        let second = store.new_spill_file().sorted_file();
        fs::write(second.path(), b"banana\n").unwrap();

        let sources = vec![
            MergeSource::open(&first, &codec, None).unwrap(),
            MergeSource::open(&second, &codec, Some(16)).unwrap(),
        ];

        let compare = |a: &Vec<u8>, b: &Vec<u8>| a.cmp(b);
        let result: Result<Vec<Vec<u8>>, io::Error> = BinaryHeapMerger::new(sources, compare).collect();

        assert_eq!(
            result.unwrap(),
            vec![b"apple".to_vec(), b"banana".to_vec(), b"cherry".to_vec()]
        );
    }

    fn compare_vectors_of_result<T: PartialEq, E: Error + 'static>(
        actual: &Vec<Result<T, E>>,
        expected: &Vec<Result<T, E>>,
    ) -> bool {
        actual.len() == expected.len()
            && actual
                .into_iter()
                .zip(expected)
                .all(
                    |(actual_result, expected_result)| match (actual_result, expected_result) {
                        (Ok(actual_result), Ok(expected_result)) if actual_result == expected_result => true,
                        (Err(actual_err), Err(expected_err)) => actual_err.to_string() == expected_err.to_string(),
                        _ => false,
                    },
                )
    }
}
