//! CSV intake of vendor attribute sheets for batch assessment.

mod parser;

use crate::workflows::assessment::VendorData;
use crate::workflows::category::{Category, CategoryError};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use parser::Columns;

/// One vendor row: identity, scrutiny tier, and every remaining column as an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorRecord {
    pub vendor: String,
    pub category: Category,
    pub data: VendorData,
}

#[derive(Debug)]
pub enum VendorImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
    MissingVendor { line: u64 },
    InvalidCategory { line: u64, source: CategoryError },
}

impl std::fmt::Display for VendorImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorImportError::Io(err) => write!(f, "failed to read vendor sheet: {}", err),
            VendorImportError::Csv(err) => write!(f, "invalid vendor CSV data: {}", err),
            VendorImportError::MissingColumn(column) => {
                write!(f, "vendor sheet is missing the '{}' column", column)
            }
            VendorImportError::MissingVendor { line } => {
                write!(f, "line {}: vendor name is empty", line)
            }
            VendorImportError::InvalidCategory { line, source } => {
                write!(f, "line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for VendorImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VendorImportError::Io(err) => Some(err),
            VendorImportError::Csv(err) => Some(err),
            VendorImportError::InvalidCategory { source, .. } => Some(source),
            VendorImportError::MissingColumn(_) | VendorImportError::MissingVendor { .. } => None,
        }
    }
}

impl From<std::io::Error> for VendorImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for VendorImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct VendorCsvImporter;

impl VendorCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<VendorRecord>, VendorImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<VendorRecord>, VendorImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns =
            Columns::resolve(csv_reader.headers()?).map_err(VendorImportError::MissingColumn)?;
        let mut records = Vec::new();

        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            // Header occupies line 1.
            let line = row
                .position()
                .map(|position| position.line())
                .unwrap_or(index as u64 + 2);
            records.push(read_row(&columns, &row, line)?);
        }

        debug!(vendors = records.len(), "vendor sheet imported");
        Ok(records)
    }
}

fn read_row(
    columns: &Columns,
    row: &csv::StringRecord,
    line: u64,
) -> Result<VendorRecord, VendorImportError> {
    let vendor = row.get(columns.vendor).unwrap_or_default().trim();
    if vendor.is_empty() {
        return Err(VendorImportError::MissingVendor { line });
    }

    let category = row
        .get(columns.category)
        .unwrap_or_default()
        .parse::<Category>()
        .map_err(|source| VendorImportError::InvalidCategory { line, source })?;

    let data = columns
        .attributes
        .iter()
        .filter_map(|(index, key)| {
            let value = parser::parse_cell(row.get(*index)?)?;
            Some((key.clone(), value))
        })
        .collect::<VendorData>();

    Ok(VendorRecord {
        vendor: vendor.to_string(),
        category,
        data,
    })
}
