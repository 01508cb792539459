//! CSV file reading.

use std::{collections::HashMap, path::Path};

use crate::{Error, RawRecord, Result};

/// Read every row of a delimited export into [`RawRecord`]s.
///
/// Headers are taken verbatim from the first row. Rows shorter than the
/// header are tolerated (trailing cells absent); rows longer than the header
/// have their surplus cells dropped, matching how the legacy platform's own
/// exporter behaved on embedded delimiters it failed to quote.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
  if !path.exists() {
    return Err(Error::MissingExport(path.to_path_buf()));
  }

  let wrap = |source: csv::Error| Error::Csv {
    path: path.to_path_buf(),
    source,
  };

  let mut reader = csv::ReaderBuilder::new()
    .flexible(true)
    .from_path(path)
    .map_err(wrap)?;

  let headers: Vec<String> = reader
    .headers()
    .map_err(wrap)?
    .iter()
    .map(str::to_string)
    .collect();

  let mut records = Vec::new();
  for row in reader.records() {
    let row = row.map_err(wrap)?;
    let fields: HashMap<String, String> = headers
      .iter()
      .zip(row.iter())
      .map(|(h, v)| (h.clone(), v.to_string()))
      .collect();
    records.push(RawRecord::new(fields));
  }

  Ok(records)
}
