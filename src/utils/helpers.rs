#[must_use]
pub fn index_to_col_name(index: usize) -> String {
    let mut col_name = String::new();
    let mut n = index;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    if col_name.is_empty() {
        col_name.push('A');
    }

    col_name
}

/// 1-based column index for a column name ("A" -> 1, "AA" -> 27).
#[must_use]
pub fn col_name_to_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let mut result: usize = 0;

    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        let val = (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        // Absurdly long column names would overflow; treat them as malformed.
        result = result.checked_mul(26)?.checked_add(val)?;
    }

    Some(result)
}

// Format cell reference (e.g., A1, B2) from 1-based (row, col)
#[must_use]
pub fn cell_reference(cell: (usize, usize)) -> String {
    format!("{}{}", index_to_col_name(cell.1), cell.0)
}

/// Decode an A1-style reference into zero-based (row, col) coordinates.
/// Returns `None` for anything that is not column letters followed by a
/// row number of at least 1.
#[must_use]
pub fn parse_cell_reference(cell_ref: &str) -> Option<(usize, usize)> {
    let split = cell_ref.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = cell_ref.split_at(split);

    let col = col_name_to_index(letters)?;
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }

    Some((row - 1, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_round_trip() {
        assert_eq!(index_to_col_name(1), "A");
        assert_eq!(index_to_col_name(26), "Z");
        assert_eq!(index_to_col_name(27), "AA");
        assert_eq!(col_name_to_index("A"), Some(1));
        assert_eq!(col_name_to_index("Z"), Some(26));
        assert_eq!(col_name_to_index("AA"), Some(27));
        assert_eq!(col_name_to_index(""), None);
        assert_eq!(col_name_to_index("A1"), None);
    }

    #[test]
    fn parses_references_to_zero_based_coords() {
        assert_eq!(parse_cell_reference("A1"), Some((0, 0)));
        assert_eq!(parse_cell_reference("B3"), Some((2, 1)));
        assert_eq!(parse_cell_reference("AA100"), Some((99, 26)));
    }

    #[test]
    fn rejects_malformed_references() {
        assert_eq!(parse_cell_reference(""), None);
        assert_eq!(parse_cell_reference("A"), None);
        assert_eq!(parse_cell_reference("13"), None);
        assert_eq!(parse_cell_reference("A0"), None);
        assert_eq!(parse_cell_reference("A1C"), None);
    }

    #[test]
    fn rejects_column_names_too_long_to_index() {
        let long = "A".repeat(40);
        assert_eq!(col_name_to_index(&long), None);
        assert_eq!(parse_cell_reference(&format!("{long}1")), None);
    }

    #[test]
    fn formats_cell_references() {
        assert_eq!(cell_reference((1, 1)), "A1");
        assert_eq!(cell_reference((12, 2)), "B12");
    }
}
