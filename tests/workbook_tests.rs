use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::PathBuf;
use visitsheet::source::{RecordSource, WorkbookSource, open_source};

mod common;
use common::test_dir;

/// A workbook with a `base` sheet: native date and time cells, plain numbers.
fn write_workbook(name: &str) -> PathBuf {
    let path = test_dir(name).join("records.xlsx");

    let mut workbook = Workbook::new();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");
    let time_fmt = Format::new().set_num_format("hh:mm");

    let other = workbook.add_worksheet();
    other.set_name("notes").expect("sheet name");
    other.write_string(0, 0, "ignored").expect("write");

    let sheet = workbook.add_worksheet();
    sheet.set_name("base").expect("sheet name");
    for (col, title) in ["날짜", "시작 시간", "종료 시간", "장소", "내용"].iter().enumerate() {
        sheet.write_string(0, col as u16, *title).expect("write");
    }

    // row 1: native date, native times
    let day = ExcelDateTime::from_ymd(2025, 5, 5).expect("date");
    let start = ExcelDateTime::from_hms(9, 30, 0).expect("time");
    let end = ExcelDateTime::from_hms(12, 0, 0).expect("time");
    sheet.write_datetime_with_format(1, 0, &day, &date_fmt).expect("write");
    sheet.write_datetime_with_format(1, 1, &start, &time_fmt).expect("write");
    sheet.write_datetime_with_format(1, 2, &end, &time_fmt).expect("write");
    sheet.write_string(1, 3, "치료센터").expect("write");
    sheet.write_string(1, 4, "언어 치료").expect("write");

    // row 2: date typed as text, hours as numbers
    sheet.write_string(2, 0, "2025-05-06").expect("write");
    sheet.write_number(2, 1, 13).expect("write");
    sheet.write_number(2, 2, 15.5).expect("write");
    sheet.write_string(2, 3, "일상생활").expect("write");
    sheet.write_string(2, 4, "식사").expect("write");

    workbook.save(&path).expect("save workbook");
    path
}

#[test]
fn test_workbook_rows_are_rendered_as_text() {
    let path = write_workbook("workbook_rows");
    let rows = WorkbookSource::new(&path, "base").fetch_rows().expect("rows");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][0], "2025-05-05");
    assert_eq!(rows[1][1], "9.5");
    assert_eq!(rows[1][2], "12");
    assert_eq!(rows[2][1], "13");
    assert_eq!(rows[2][2], "15.5");
}

#[test]
fn test_workbook_records() {
    let path = write_workbook("workbook_records");
    let recs = open_source(&path, "base")
        .expect("workbook adapter")
        .fetch_records()
        .expect("records");

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].start_hour, 9.5);
    assert_eq!(recs[0].work_hours(), 2.5);
    assert_eq!(recs[0].location_code, "치료센터");
    assert_eq!(recs[1].date.to_string(), "2025-05-06");
    assert_eq!(recs[1].work_hours(), 2.5);
}

#[test]
fn test_missing_worksheet_is_an_error() {
    let path = write_workbook("workbook_missing_sheet");
    let err = WorkbookSource::new(&path, "visits")
        .fetch_records()
        .unwrap_err();
    assert!(err.to_string().contains("worksheet 'visits' not found"));
}
