use std::fs;
use std::io::{self, prelude::*};
use std::path;

use env_logger;
use log;

use spillsort::{Codec, ExternalSorter, ExternalSorterBuilder};

#[derive(Default)]
struct U32Codec;

impl Codec<u32> for U32Codec {
    type EncodeError = io::Error;
    type DecodeError = io::Error;

    fn encode<W: Write>(&self, writer: &mut W, item: &u32) -> Result<(), Self::EncodeError> {
        writer.write_all(&item.to_le_bytes())
    }

    fn decode<R: BufRead>(&self, reader: &mut R) -> Result<Option<u32>, Self::DecodeError> {
        if reader.fill_buf()?.is_empty() {
            return Ok(None);
        }

        let mut buf: [u8; 4] = [0; 4];
        reader.read_exact(&mut buf)?;

        return Ok(Some(u32::from_le_bytes(buf)));
    }
}

fn main() {
    env_logger::Builder::new().filter_level(log::LevelFilter::Debug).init();

    let input_reader = io::BufReader::new(fs::File::open("input.bin").unwrap());
    let mut output_writer = io::BufWriter::new(fs::File::create("output.bin").unwrap());

    let sorter: ExternalSorter<u32, U32Codec> = ExternalSorterBuilder::new()
        .with_chunk_size(1_000_000)
        .with_tmp_dir(path::Path::new("./"))
        .build()
        .unwrap();

    sorter.sort(input_reader, &mut output_writer).unwrap();
    output_writer.flush().unwrap();
}
