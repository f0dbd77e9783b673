use datamap_cli::datamap::{Datamap, parse_datamap_lines};
use datamap_cli::error::Error;
use datamap_cli::extract::extract;

use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use std::path::PathBuf;

const DATAMAP_CSV: &str = "\
first value,Sheet1,TEXT,A1
second value,Sheet1,TEXT,B1
third value,Sheet2,TEXT,C1
project total,Sheet2,NUMBER,A2
";

fn write_fixture_workbook(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("q2-return.xlsx");

    let mut workbook = Workbook::new();

    let sheet1 = workbook.add_worksheet();
    sheet1.set_name("Sheet1").unwrap();
    sheet1.write_string(0, 0, "Value 1").unwrap();
    sheet1.write_string(0, 1, "Value 2").unwrap();

    let sheet2 = workbook.add_worksheet();
    sheet2.set_name("Sheet2").unwrap();
    sheet2.write_string(0, 2, "Value 3").unwrap();
    sheet2.write_number(1, 0, 78.5).unwrap();

    workbook.save(&path).unwrap();
    path
}

fn fixture_datamap() -> Datamap {
    let lines = parse_datamap_lines(DATAMAP_CSV.as_bytes()).unwrap();
    Datamap::new("integration dm", "end to end fixture", lines)
}

#[test]
fn extracts_datamap_values_from_real_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let workbook_path = write_fixture_workbook(dir.path());

    let ret = extract(&workbook_path, &fixture_datamap()).unwrap();

    assert_eq!(ret.name, "q2-return.xlsx");
    assert_eq!(ret.return_lines.len(), 4);

    let values: Vec<&str> = ret.return_lines.iter().map(|l| l.value.as_str()).collect();
    assert_eq!(values, vec!["Value 1", "Value 2", "Value 3", "78.5"]);

    assert_eq!(ret.return_lines[2].sheet, "Sheet2");
    assert_eq!(ret.return_lines[2].cell_ref, "C1");
}

#[test]
fn sheet_missing_from_workbook_fails_whole_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let workbook_path = write_fixture_workbook(dir.path());

    let csv = "value,Sheet1,TEXT,A1\nother,NotThere,TEXT,A1\n";
    let lines = parse_datamap_lines(csv.as_bytes()).unwrap();
    let dm = Datamap::new("dm", "", lines);

    let err = extract(&workbook_path, &dm).unwrap_err();
    assert!(matches!(err, Error::SheetNotFound(s) if s == "NotThere"));
}

#[test]
fn unreadable_workbook_path_is_an_open_error() {
    let err = extract("/no/such/workbook.xlsx", &fixture_datamap()).unwrap_err();
    assert!(matches!(err, Error::WorkbookOpen { .. }));
}

#[test]
fn return_json_matches_wire_shape() {
    let dir = tempfile::tempdir().unwrap();
    let workbook_path = write_fixture_workbook(dir.path());

    let ret = extract(&workbook_path, &fixture_datamap()).unwrap();
    let json = serde_json::to_value(&ret).unwrap();

    assert_eq!(json["name"], "q2-return.xlsx");
    let lines = json["returnLines"].as_array().unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["sheet"], "Sheet1");
    assert_eq!(lines[0]["cellRef"], "A1");
    assert_eq!(lines[0]["value"], "Value 1");
}
