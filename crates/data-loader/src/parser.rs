//! Parser for the comma-separated movie table.
//!
//! The file has a header row naming its columns. Quoting follows the usual
//! CSV rules (`""` escapes, commas and newlines inside quotes) and is left
//! to the `csv` reader. Columns other than the ones listed in [`ColumnMap`]
//! are ignored.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Positions of the columns we read, resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    index: Option<usize>,
    title: usize,
    /// Aligned with `FeatureField::ALL`
    features: [usize; 4],
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| DataLoadError::MissingColumn {
                column: name.to_string(),
            })
        };

        let title = require("title")?;
        let mut features = [0; 4];
        for (slot, field) in features.iter_mut().zip(FeatureField::ALL) {
            *slot = require(field.column_name())?;
        }

        Ok(Self {
            index: find("index"),
            title,
            features,
        })
    }
}

/// Parse the movie table at `path`
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let handle = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    parse_movies_from_reader(handle, &file)
}

/// Parse movie rows from CSV text.
///
/// `file` is only used to label errors.
pub fn parse_movies_from_str(text: &str, file: &str) -> Result<Vec<MovieRecord>> {
    parse_movies_from_reader(text.as_bytes(), file)
}

/// Parse movie rows from any byte source.
///
/// Fields are read as bytes and decoded lossily, so a stray non-UTF-8 byte
/// costs one character instead of the whole load.
pub fn parse_movies_from_reader<R: io::Read>(source: R, file: &str) -> Result<Vec<MovieRecord>> {
    // Flexible so short rows can be padded; long rows are rejected below
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);

    let header: Vec<String> = reader
        .byte_headers()
        .map_err(|e| csv_error(e, file))?
        .iter()
        .map(decode)
        .collect();
    if header.is_empty() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: 1,
            reason: "Missing header row".to_string(),
        });
    }
    let columns = ColumnMap::from_header(&header)?;

    let mut movies = Vec::new();
    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record).map_err(|e| csv_error(e, file))? {
        let line = record.position().map_or(0, |p| p.line() as usize);
        if is_blank(&record) {
            continue;
        }
        if record.len() > header.len() {
            return Err(DataLoadError::FieldCountMismatch {
                expected: header.len(),
                found: record.len(),
                line,
            });
        }

        // Short rows are padded: absent trailing fields count as missing
        let fields: Vec<String> = record.iter().map(decode).collect();
        let value = |col: usize| fields.get(col).map(String::as_str);

        let index = match columns.index {
            Some(col) => parse_index(value(col).unwrap_or_default())?,
            None => movies.len(),
        };

        let [keywords, cast, genres, director] = columns.features.map(value);
        movies.push(MovieRecord::new(
            index,
            value(columns.title).unwrap_or_default(),
            keywords,
            cast,
            genres,
            director,
        ));
    }

    Ok(movies)
}

fn decode(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

/// A whitespace-only line reads as a single blank field
fn is_blank(record: &csv::ByteRecord) -> bool {
    record.len() == 1 && record[0].iter().all(u8::is_ascii_whitespace)
}

fn csv_error(err: csv::Error, file: &str) -> DataLoadError {
    let line = err.position().map_or(1, |p| p.line() as usize);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => DataLoadError::IoError(e),
        _ => DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason,
        },
    }
}

fn parse_index(raw: &str) -> Result<MovieIndex> {
    raw.trim().parse().map_err(|_| DataLoadError::InvalidValue {
        field: "index".to_string(),
        value: raw.to_string(),
    })
}
