use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::datamap::Datamap;
use crate::error::{Error, Result};
use crate::excel::{Workbook, open_workbook};
use crate::utils::parse_cell_reference;
use crate::validate::CellRefValidator;

/// One resolved extraction result: the sheet and cell reference echoed from
/// the datamap line, plus the raw value read from the workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLine {
    pub sheet: String,
    pub cell_ref: String,
    pub value: String,
}

impl ReturnLine {
    /// Strict validating constructor: all three fields must be non-empty
    /// and the cell reference must pass the A1 check. The extraction
    /// engine builds its lines directly from already-resolved coordinates
    /// and does not pass through here.
    pub fn new(
        validator: &CellRefValidator,
        sheet: impl Into<String>,
        cell_ref: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let sheet = sheet.into();
        let cell_ref = cell_ref.into();
        let value = value.into();

        if sheet.is_empty() {
            return Err(Error::Validation("sheet parameter is required".into()));
        }
        if cell_ref.is_empty() {
            return Err(Error::Validation("cellRef parameter is required".into()));
        }
        if value.is_empty() {
            return Err(Error::Validation("value parameter is required".into()));
        }
        if !validator.is_valid(&cell_ref) {
            return Err(Error::Validation("cellRef must be A1 format".into()));
        }

        Ok(Self {
            sheet,
            cell_ref,
            value,
        })
    }
}

/// The output artifact of resolving a datamap against one workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    pub name: String,
    #[serde(rename = "returnLines")]
    pub return_lines: Vec<ReturnLine>,
}

impl Return {
    /// The datamap parameter is accepted for future use and not inspected.
    pub fn new(
        name: impl Into<String>,
        _datamap: &Datamap,
        return_lines: Vec<ReturnLine>,
    ) -> Result<Self> {
        if return_lines.is_empty() {
            return Err(Error::Validation(
                "ReturnLines must contain at least one ReturnLine".into(),
            ));
        }

        Ok(Self {
            name: name.into(),
            return_lines,
        })
    }
}

/// Open the workbook at `path` and resolve every datamap line against it.
///
/// The returned `Return` is named after the workbook's base file name and
/// carries one line per datamap line, in datamap order. Extraction is
/// all-or-nothing: a missing sheet, an undecodable cell reference, or a
/// failed cell read aborts the whole run with no partial result.
pub fn extract<P: AsRef<Path>>(path: P, datamap: &Datamap) -> Result<Return> {
    let workbook = open_workbook(path)?;
    extract_from_workbook(&workbook, datamap)
}

/// Resolve every datamap line against an already-opened workbook.
pub fn extract_from_workbook(workbook: &Workbook, datamap: &Datamap) -> Result<Return> {
    let sheets = datamap.sheets();

    let mut return_lines = Vec::with_capacity(datamap.lines.len());

    for dml in &datamap.lines {
        // The set is derived from this same datamap, so today this filter
        // never skips anything. Kept so that a caller-supplied sheet
        // subset keeps working if one is introduced.
        if !sheets.contains(&dml.sheet) {
            continue;
        }

        let sheet = workbook
            .sheet(&dml.sheet)
            .ok_or_else(|| Error::SheetNotFound(dml.sheet.clone()))?;

        let (row, col) = parse_cell_reference(&dml.cell_ref)
            .ok_or_else(|| Error::InvalidCellReference(dml.cell_ref.clone()))?;

        let cell = sheet.cell(row, col).ok_or_else(|| Error::CellRead {
            sheet: dml.sheet.clone(),
            cell_ref: dml.cell_ref.clone(),
        })?;

        debug!(key = %dml.key, sheet = %dml.sheet, cell_ref = %dml.cell_ref, "resolved cell");

        return_lines.push(ReturnLine {
            sheet: dml.sheet.clone(),
            cell_ref: dml.cell_ref.clone(),
            value: cell.value.clone(),
        });
    }

    info!(
        workbook = %workbook.file_name(),
        lines = return_lines.len(),
        "extraction complete"
    );

    Return::new(workbook.file_name(), datamap, return_lines)
}
