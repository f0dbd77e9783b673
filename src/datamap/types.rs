use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::validate::CellRefValidator;

/// One extraction instruction: a logical key mapped to a sheet and cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatamapLine {
    pub key: String,
    pub sheet: String,
    #[serde(rename = "datatype")]
    pub data_type: String,
    #[serde(rename = "cellref")]
    pub cell_ref: String,
}

impl DatamapLine {
    /// Validating constructor: key and sheet must be non-empty and the cell
    /// reference must be in A1 form. The bulk CSV ingestion path in
    /// [`crate::datamap::parse_datamap_lines`] deliberately does not go
    /// through this check and accepts every 4-field record verbatim.
    pub fn new(
        validator: &CellRefValidator,
        key: impl Into<String>,
        sheet: impl Into<String>,
        data_type: impl Into<String>,
        cell_ref: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let sheet = sheet.into();
        let cell_ref = cell_ref.into();

        if key.is_empty() {
            return Err(Error::Validation("key parameter is required".into()));
        }
        if sheet.is_empty() {
            return Err(Error::Validation("sheet parameter is required".into()));
        }
        if !validator.is_valid(&cell_ref) {
            return Err(Error::Validation("cellRef must be A1 format".into()));
        }

        Ok(Self {
            key,
            sheet,
            data_type: data_type.into(),
            cell_ref,
        })
    }
}

/// A named, described collection of [`DatamapLine`]s in CSV row order.
/// Duplicate keys are permitted and not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Datamap {
    pub name: String,
    pub description: String,
    pub created: DateTime<Utc>,
    #[serde(rename = "datamap_lines")]
    pub lines: Vec<DatamapLine>,
}

impl Datamap {
    /// Assemble a datamap from header metadata and parsed lines. The
    /// creation timestamp is captured here. Header fields may be empty.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        lines: Vec<DatamapLine>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            created: Utc::now(),
            lines,
        }
    }

    /// The distinct sheet names referenced by this datamap. The result is
    /// a set: unordered, and independent of line order or duplication.
    #[must_use]
    pub fn sheets(&self) -> HashSet<String> {
        self.lines.iter().map(|line| line.sheet.clone()).collect()
    }
}
