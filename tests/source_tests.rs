use chrono::NaiveDate;
use visitsheet::errors::AppError;
use visitsheet::source::{CsvSource, MemorySource, RecordSource, open_source, records_from_rows};

mod common;
use common::{SIX_VISITS, rows, to_csv, write_file};

#[test]
fn test_header_row_is_dropped() {
    let recs = records_from_rows(rows(&SIX_VISITS)).expect("records");
    assert_eq!(recs.len(), 6);
    assert_eq!(recs[0].date, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap());
    assert_eq!(recs[0].start_hour, 9.0);
    assert_eq!(recs[0].end_hour, 12.0);
    assert_eq!(recs[0].location_code, "이용자가정");
    assert_eq!(recs[5].detail, "귀가 전 휴식");
}

#[test]
fn test_header_only_gives_no_records() {
    let recs = records_from_rows(rows(&[])).expect("records");
    assert!(recs.is_empty());
}

#[test]
fn test_empty_source_is_an_error() {
    let err = records_from_rows(Vec::new()).unwrap_err();
    assert!(matches!(err, AppError::InvalidHeader(_)));
}

#[test]
fn test_short_header_is_an_error() {
    let src = MemorySource::new(vec![vec!["날짜", "시작 시간"]]);
    let err = src.fetch_records().unwrap_err();
    assert!(matches!(err, AppError::InvalidHeader(_)));
}

#[test]
fn test_bad_hour_is_fatal() {
    let err = records_from_rows(rows(&[
        ("2025-05-05", "9", "12", "이용자가정", "ok"),
        ("2025-05-06", "nine", "12", "이용자가정", "bad"),
    ]))
    .unwrap_err();

    match err {
        AppError::InvalidHour { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, "nine");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_date_is_fatal() {
    let err = records_from_rows(rows(&[("05/05/2025", "9", "12", "이용자가정", "")])).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate { row: 1, .. }));

    let err = records_from_rows(rows(&[("2025-02-30", "9", "12", "이용자가정", "")])).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate { row: 1, .. }));
}

#[test]
fn test_end_must_follow_start() {
    let err = records_from_rows(rows(&[("2025-05-05", "12", "12", "이용자가정", "")])).unwrap_err();
    assert!(matches!(err, AppError::InvalidRecord { row: 1, .. }));
}

#[test]
fn test_short_data_row_is_fatal() {
    let src = MemorySource::new(vec![
        vec!["날짜", "시작 시간", "종료 시간", "장소", "내용"],
        vec!["2025-05-05", "9", "12"],
    ]);
    let err = src.fetch_records().unwrap_err();
    assert!(matches!(err, AppError::InvalidRecord { row: 1, .. }));
}

#[test]
fn test_decimal_hours_and_blank_rows() {
    let src = MemorySource::new(vec![
        vec!["날짜", "시작 시간", "종료 시간", "장소", "내용"],
        vec!["2025-05-05", " 9.5 ", "11", "이용자가정", "a"],
        vec!["", "", "", "", ""],
        vec!["2025-05-07", "13", "14.25", "모름", "b"],
    ]);
    let recs = src.fetch_records().expect("records");

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].start_hour, 9.5);
    assert_eq!(recs[0].work_hours(), 1.5);
    assert_eq!(recs[1].work_hours(), 1.25);
    // unknown locations are kept, binding reports them later
    assert_eq!(recs[1].location_code, "모름");
    assert!(recs[1].location().is_none());
    // records remember the data row they came from, blank rows included
    assert_eq!(recs[0].row, 1);
    assert_eq!(recs[1].row, 3);
}

#[test]
fn test_csv_source() {
    let mut csv = String::from("\u{feff}");
    csv.push_str(&to_csv(&SIX_VISITS));
    let path = write_file("source_csv", "records.csv", &csv);

    let recs = CsvSource::new(&path).fetch_records().expect("csv records");
    assert_eq!(recs.len(), 6);
    assert_eq!(recs[3].location_code, "학습/놀이");

    let rows = CsvSource::new(&path).fetch_rows().expect("csv rows");
    assert_eq!(rows[0][0], "날짜");
}

#[test]
fn test_csv_quoted_detail() {
    let csv = "date,start,end,location,detail\n2025-05-05,9,12,이용자가정,\"놀이, 산책\n그리고 간식\"\n";
    let path = write_file("source_csv_quoted", "records.csv", csv);

    let recs = CsvSource::new(&path).fetch_records().expect("csv records");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].detail, "놀이, 산책\n그리고 간식");
}

#[test]
fn test_missing_csv_is_an_error() {
    let err = CsvSource::new("/definitely/not/here.csv")
        .fetch_records()
        .unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_open_source_by_extension() {
    let path = write_file("source_ext", "records.CSV", &to_csv(&SIX_VISITS));
    let recs = open_source(&path, "base")
        .expect("csv adapter")
        .fetch_records()
        .expect("records");
    assert_eq!(recs.len(), 6);

    let err = open_source(std::path::Path::new("records.txt"), "base").err();
    assert!(matches!(err, Some(AppError::UnsupportedSource(_))));
}

#[test]
fn test_missing_workbook_is_an_error() {
    let src = open_source(std::path::Path::new("/definitely/not/here.xlsx"), "base")
        .expect("workbook adapter");
    assert!(src.fetch_records().is_err());
}
