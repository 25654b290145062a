//! CSV ingestion for catalogs and profile pools.
//!
//! Input files carry one record per line: the key (title or name) first,
//! then the skills, either as one quoted comma-separated field or as the
//! remaining unquoted fields. Quote handling is the `csv` crate's job;
//! this module only cleans what comes out: trims fields, drops blank
//! lines and records with an empty key.
//!
//! The engine never sees a file. It consumes the `(key, skills)` pairs
//! this module produces.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::error::Result;

/// Read `(key, comma-separated skills)` pairs from CSV data.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<(String, String)>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut fields = row.iter();
        let key = match fields.next() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => {
                debug!("skipping record with empty key");
                continue;
            }
        };
        // A quoted skill field arrives as one fragment; unquoted skills
        // arrive as the remaining fields. Rejoining covers both shapes.
        let skills = fields.collect::<Vec<_>>().join(",");
        records.push((key, skills));
    }
    debug!("read {} records", records.len());
    Ok(records)
}

/// Read records from a CSV file on disk.
pub fn read_records_file(path: &Path) -> Result<Vec<(String, String)>> {
    let file = File::open(path)?;
    read_records(file)
}
