use calamine::{DataType, Reader, open_workbook_auto};
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};

/// A decoded workbook: named sheets holding raw cell values.
#[derive(Debug)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    file_path: String,
}

#[derive(Debug)]
pub struct Sheet {
    pub name: String,
    /// Grid of cells, 1-indexed in both dimensions; row 0 and column 0 are
    /// padding so that coordinates line up with spreadsheet numbering.
    pub data: Vec<Vec<Cell>>,
    pub max_rows: usize,
    pub max_cols: usize,
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub value: String,
}

impl Cell {
    pub fn new(value: String) -> Self {
        Self { value }
    }

    pub fn empty() -> Self {
        Self {
            value: String::new(),
        }
    }
}

/// Open and fully decode the workbook at `path`. Any decoder failure is
/// surfaced as [`Error::WorkbookOpen`].
pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path_str = path.as_ref().to_string_lossy().to_string();

    let mut workbook = open_workbook_auto(&path).map_err(|source| Error::WorkbookOpen {
        path: path_str.clone(),
        source,
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::new();

    for name in &sheet_names {
        let range = match workbook.worksheet_range(name) {
            Some(Ok(range)) => range,
            Some(Err(source)) => {
                return Err(Error::WorkbookOpen {
                    path: path_str.clone(),
                    source,
                });
            }
            // sheet_names() produced the name, so a missing range only
            // happens for chart-only sheets; represent those as empty.
            None => calamine::Range::empty(),
        };
        sheets.push(create_sheet_from_range(name, range));
    }

    info!(path = %path_str, sheets = sheets.len(), "opened workbook");

    Ok(Workbook {
        sheets,
        file_path: path_str,
    })
}

fn create_sheet_from_range(name: &str, range: calamine::Range<DataType>) -> Sheet {
    let height = range.height();
    let width = range.width();

    let mut data = vec![vec![Cell::empty(); width + 1]; height + 1];

    for (row_idx, row) in range.rows().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let value = match cell {
                DataType::Empty => String::new(),
                DataType::String(s) => s.to_string(),
                DataType::Float(f) => f.to_string(),
                DataType::Int(i) => i.to_string(),
                DataType::Bool(b) => b.to_string(),
                DataType::Error(e) => format!("Error: {e:?}"),
                DataType::DateTime(dt) => format!("{dt}"),
                DataType::Duration(d) => format!("{d}"),
                DataType::DateTimeIso(s) => s.to_string(),
                DataType::DurationIso(s) => s.to_string(),
            };

            data[row_idx + 1][col_idx + 1] = Cell::new(value);
        }
    }

    Sheet {
        name: name.to_string(),
        data,
        max_rows: height,
        max_cols: width,
    }
}

impl Workbook {
    /// Assemble a workbook from already-decoded sheets.
    pub fn new(sheets: Vec<Sheet>, file_path: impl Into<String>) -> Self {
        Self {
            sheets,
            file_path: file_path.into(),
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Base name of the workbook file, without any directory component.
    pub fn file_name(&self) -> String {
        Path::new(&self.file_path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.file_path.clone())
    }
}

impl Sheet {
    /// Build a sheet from rows of raw values, padding the grid so that
    /// coordinates stay 1-indexed.
    pub fn from_rows(name: &str, rows: Vec<Vec<&str>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut data = vec![vec![Cell::empty(); width + 1]; height + 1];
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                data[row_idx + 1][col_idx + 1] = Cell::new((*value).to_string());
            }
        }

        Sheet {
            name: name.to_string(),
            data,
            max_rows: height,
            max_cols: width,
        }
    }

    /// Cell at zero-based (row, col), or `None` outside the decoded grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.data.get(row + 1).and_then(|r| r.get(col + 1))
    }
}
