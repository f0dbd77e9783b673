use regex::Regex;

/// Checks that a cell reference string is in A1 form: one or more uppercase
/// column letters followed by a 1-based row number with no leading zero.
///
/// The pattern is compiled once at construction; build one validator and
/// share it by reference rather than compiling per call.
#[derive(Debug, Clone)]
pub struct CellRefValidator {
    pattern: Regex,
}

impl Default for CellRefValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CellRefValidator {
    pub fn new() -> Self {
        Self {
            // The pattern is a fixed literal, so compilation cannot fail.
            pattern: Regex::new(r"^[A-Z]+[1-9][0-9]*$").unwrap(),
        }
    }

    #[must_use]
    pub fn is_valid(&self, cell_ref: &str) -> bool {
        self.pattern.is_match(cell_ref)
    }
}
