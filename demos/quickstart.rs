use std::fs;
use std::io::{self, prelude::*};
use std::path;

use env_logger;
use log;

use spillsort::{ExternalSorter, ExternalSorterBuilder};

fn main() {
    env_logger::Builder::new().filter_level(log::LevelFilter::Debug).init();

    let input_reader = io::BufReader::new(fs::File::open("input.txt").unwrap());
    let mut output_writer = io::BufWriter::new(fs::File::create("output.txt").unwrap());

    let sorter: ExternalSorter<Vec<u8>> = ExternalSorterBuilder::new()
        .with_chunk_size(1_000_000)
        .with_workers_cnt(4)
        .with_tmp_dir(path::Path::new("./"))
        .build()
        .unwrap();

    sorter.sort(input_reader, &mut output_writer).unwrap();
    output_writer.flush().unwrap();
}
