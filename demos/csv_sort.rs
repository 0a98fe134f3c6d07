use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, prelude::*};
use std::path;

use env_logger;
use log;

use spillsort::{Codec, ExternalSorter, ExternalSorterBuilder};

#[derive(Debug)]
enum CsvParseError {
    IoError(io::Error),
    RowError(String),
    ColumnError(String),
}

impl Display for CsvParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvParseError::IoError(err) => write!(f, "I/O error: {}", err),
            CsvParseError::ColumnError(err) => write!(f, "column format error: {}", err),
            CsvParseError::RowError(err) => write!(f, "row format error: {}", err),
        }
    }
}

impl Error for CsvParseError {}

impl From<io::Error> for CsvParseError {
    fn from(err: io::Error) -> Self {
        CsvParseError::IoError(err)
    }
}

#[derive(PartialEq, Eq)]
struct Person {
    name: String,
    surname: String,
    age: u8,
}

impl Person {
    fn as_csv(&self) -> String {
        format!("{},{},{}", self.name, self.surname, self.age)
    }

    fn from_str(s: &str) -> Result<Self, CsvParseError> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            Err(CsvParseError::RowError("wrong columns number".to_string()))
        } else {
            Ok(Person {
                name: parts[0].to_string(),
                surname: parts[1].to_string(),
                age: parts[2]
                    .parse()
                    .map_err(|err| CsvParseError::ColumnError(format!("age field format error: {}", err)))?,
            })
        }
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(&other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.surname
            .cmp(&other.surname)
            .then(self.name.cmp(&other.name))
            .then(self.age.cmp(&other.age))
    }
}

#[derive(Default)]
struct CsvCodec;

impl Codec<Person> for CsvCodec {
    type EncodeError = CsvParseError;
    type DecodeError = CsvParseError;

    fn encode<W: Write>(&self, writer: &mut W, item: &Person) -> Result<(), Self::EncodeError> {
        writeln!(writer, "{}", item.as_csv())?;
        return Ok(());
    }

    fn decode<R: BufRead>(&self, reader: &mut R) -> Result<Option<Person>, Self::DecodeError> {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Person::from_str(line.trim_end()).map(Some)
    }
}

fn main() {
    env_logger::Builder::new().filter_level(log::LevelFilter::Debug).init();

    let mut input_reader = io::BufReader::new(fs::File::open("input.csv").unwrap());
    let mut output_writer = io::BufWriter::new(fs::File::create("output.csv").unwrap());

    // the header line is not part of the data, carry it over as is
    let mut header = String::new();
    input_reader.read_line(&mut header).unwrap();
    output_writer.write_all(header.as_bytes()).unwrap();

    let sorter: ExternalSorter<Person, CsvCodec> = ExternalSorterBuilder::new()
        .with_chunk_size(1_000_000)
        .with_tmp_dir(path::Path::new("./"))
        .build()
        .unwrap();

    sorter.sort(input_reader, &mut output_writer).unwrap();
    output_writer.flush().unwrap();
}
