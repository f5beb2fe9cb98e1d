//! `foodcast-datasets` reads the reference dataset the encoders and the scaler are fitted on.
//!
//! ## The Big Picture
//!
//! The reference dataset is a headed CSV file with one row per historical customer. Every cell
//! is read as text into a [`foodcast::Table`](../foodcast/dataset/struct.Table.html); which
//! columns are numeric is decided later by the schema of the preprocessor.
//!
//! ## Using the sample dataset
//!
//! A small sample of the online food dataset is embedded behind the `onlinefoods` feature:
//! ```ignore
//! foodcast-datasets = { version = "0.1.0", features = ["onlinefoods"] }
//! ```
//! and then use it in your example or tests as
//! ```ignore
//! let table = foodcast_datasets::onlinefoods();
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use foodcast::Table;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Table(#[from] foodcast::error::Error),
}

/// Convert Gzipped CSV bytes into a table
pub fn table_from_gz_csv<R: Read>(gz: R, separator: u8) -> Result<Table, ReadError> {
    // unzip file
    let file = GzDecoder::new(gz);
    table_from_csv(file, separator)
}

/// Convert headed CSV bytes into a table
pub fn table_from_csv<R: Read>(csv: R, separator: u8) -> Result<Table, ReadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(separator)
        .from_reader(csv);

    let names = reader
        .headers()?
        .iter()
        .map(String::from)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(String::from).collect());
    }

    Ok(Table::new(names, rows)?)
}

/// Read a comma separated file, decompressing it first if the name ends in `.gz`
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    if path.extension().map_or(false, |ext| ext == "gz") {
        table_from_gz_csv(file, b',')
    } else {
        table_from_csv(file, b',')
    }
}

#[cfg(feature = "onlinefoods")]
/// Read in a sample of the online food dataset
pub fn onlinefoods() -> Table {
    let data = include_bytes!("../data/onlinefoods.csv.gz");
    table_from_gz_csv(&data[..], b',').unwrap()
}
