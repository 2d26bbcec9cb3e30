//! The immutable battle statistics table.
//!
//! A [`Dataset`] is built once at startup, either from CSV text embedded at
//! compile time (the dashboard) or from a file path (the CLI), and is then
//! shared by reference. Cloning is cheap: all clones point at the same rows.
//!
//! # CSV Format
//!
//! Header row required. Columns are matched by name:
//! `Type.1,Tier,Generation,Stat Total,HP,Attack,Defense,Sp.Atk,Sp.Def,Speed`.
//! Extra columns are ignored.
//!
//! ```text
//! Name,Type.1,Type.2,Stat Total,HP,Attack,Defense,Sp.Atk,Sp.Def,Speed,Generation,Tier
//! Charizard,Fire,Flying,534,78,84,78,109,85,100,1,OU
//! ```

use crate::error::DatasetError;
use crate::record::{CsvRow, Record, REQUIRED_COLUMNS};
use crate::tier::Tier;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Read-only table of records, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    /// Wrap already-built records. No validation is applied.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Parse CSV text, typically embedded via `include_str!`.
    pub fn from_csv_str(csv_data: &str) -> Result<Self, DatasetError> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Open and parse a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("dataset: reading {}", path.display());
        Self::from_reader(file)
    }

    /// Parse CSV from any reader.
    ///
    /// Fails on a missing column, an unparsable value or an unknown tier. A
    /// header with no data rows gives an empty dataset.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(DatasetError::MissingColumn(*missing));
        }

        let mut records = Vec::new();
        for result in rdr.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let parsed: CsvRow = row.deserialize(Some(&headers))?;
            let tier: Tier = parsed
                .tier
                .parse()
                .map_err(|_| DatasetError::UnknownTier {
                    line,
                    tier: parsed.tier.clone(),
                })?;
            records.push(parsed.into_record(tier));
        }

        let dataset = Self::from_records(records);
        let mismatched = dataset.inconsistent_totals().len();
        if mismatched > 0 {
            log::warn!(
                "dataset: {} rows have a Stat Total that differs from the sum of their base stats",
                mismatched
            );
        }
        log::info!("dataset: loaded {} records", dataset.len());
        Ok(dataset)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row indices whose `Stat Total` is not the sum of the base stats.
    pub fn inconsistent_totals(&self) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.total_is_consistent())
            .map(|(i, _)| i)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
