#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use visitsheet::models::Record;
use visitsheet::source::records_from_rows;

pub fn vs() -> Command {
    let mut cmd = cargo_bin_cmd!("visitsheet");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Number of grid cells in one page: 5 slots of 20 cells after the header.
pub const CELLS_PER_PAGE: usize = 114;

/// Labels of the location checkboxes, by their cell index in the first slot.
const LOCATION_LABELS: [(usize, &str); 8] = [
    (17, "이용자가정"),
    (21, "돌보미가정"),
    (23, "치료센터"),
    (25, "이동동반"),
    (27, "일상생활"),
    (29, "외출/산책"),
    (31, "신변처리"),
    (33, "학습/놀이"),
];

fn wrap_cell(idx: usize, inner: &str) -> String {
    format!(
        "<div class=\"hce hce{idx}\" style=\"left:{}mm;\"><div class=\"hcD\"><div class=\"hcI\">{inner}</div></div></div>\n",
        idx % 20
    )
}

fn cell_inner(idx: usize) -> String {
    match idx {
        1 => "<div class=\"hls\"><span>이용기간</span></div><div class=\"hls\"><span>(&nbsp;&nbsp;)월</span></div>".into(),
        3 | 5 | 7 => "<div class=\"hls\"><span>&nbsp;</span></div>".into(),
        1..=14 => format!("<div class=\"hls\"><span>항목 {idx}</span></div>"),
        _ => {
            let k = (idx - 15) % 20 + 15;
            match k {
                15 => "<div class=\"hls\"><span>&nbsp;월&nbsp;일</span></div><div class=\"hls\"><span>/</span></div><div class=\"hls\"><span>요일</span></div>".into(),
                16 => "<div class=\"hls\"><span class=\"hrt\">&nbsp;</span><span>시간</span></div><div class=\"hls\"><span>(&nbsp;&nbsp;:&nbsp;&nbsp;~</span></div><div class=\"hls\"><span>&nbsp;&nbsp;:&nbsp;&nbsp;)</span></div>".into(),
                18 | 22 | 24 | 26 | 28 | 30 | 32 | 34 => "<div class=\"hls\"></div>".into(),
                19 => "<div class=\"hls\"><span></span></div>".into(),
                _ => {
                    let label = LOCATION_LABELS
                        .iter()
                        .find(|(c, _)| *c == k)
                        .map(|(_, l)| *l)
                        .unwrap_or("&nbsp;");
                    format!("<div class=\"hls\"><span>{label}</span></div>")
                }
            }
        }
    }
}

/// One template page with the given id.
pub fn page_html(id: &str) -> String {
    let mut cells = String::new();
    for idx in 1..=CELLS_PER_PAGE {
        cells.push_str(&wrap_cell(idx, &cell_inner(idx)));
    }
    format!(
        "<div id=\"{id}\" class=\"hpa\" style=\"width:210mm;height:297mm;\">\n<div class=\"hcD\">\n<div class=\"hcI\"><img src=\"bg.png\" alt=\"\"></div>\n<div class=\"hcI\">\n{cells}</div>\n</div>\n</div>\n"
    )
}

/// The visit sheet template, with a single `page_1`.
pub fn template_html() -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n<title>활동일지</title>\n<style>\n.hpa {{ position:relative; }}\n</style>\n</head>\n<body>\n<!-- generated page -->\n{}</body>\n</html>\n",
        page_html("page_1")
    )
}

fn temp_path(name: &str, file: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push(format!("visitsheet_{}", name));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir.push(file);
    dir
}

/// A clean per-test directory inside the system temp dir.
pub fn test_dir(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push(format!("visitsheet_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

pub fn write_file(name: &str, file: &str, content: &str) -> PathBuf {
    let path = temp_path(name, file);
    fs::write(&path, content).expect("write fixture");
    path
}

/// Header + one row per `(date, start, end, location, detail)`.
pub fn rows(data: &[(&str, &str, &str, &str, &str)]) -> Vec<Vec<String>> {
    let mut out = vec![
        ["날짜", "시작 시간", "종료 시간", "장소", "내용"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
    ];
    for (d, s, e, l, t) in data {
        out.push(vec![
            d.to_string(),
            s.to_string(),
            e.to_string(),
            l.to_string(),
            t.to_string(),
        ]);
    }
    out
}

pub fn records(data: &[(&str, &str, &str, &str, &str)]) -> Vec<Record> {
    records_from_rows(rows(data)).expect("valid rows")
}

pub fn to_csv(data: &[(&str, &str, &str, &str, &str)]) -> String {
    rows(data)
        .iter()
        .map(|r| r.join(","))
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

/// Six visits over two days in May 2025, three hours each.
pub const SIX_VISITS: [(&str, &str, &str, &str, &str); 6] = [
    ("2025-05-05", "9", "12", "이용자가정", "놀이 활동"),
    ("2025-05-05", "13", "16", "치료센터", "언어 치료 동행"),
    ("2025-05-05", "16", "19", "외출/산책", "공원 산책"),
    ("2025-05-06", "9", "12", "학습/놀이", "숙제 도움"),
    ("2025-05-06", "13", "16", "신변처리", "식사 지원"),
    ("2025-05-06", "16", "19", "돌보미가정", "귀가 전 휴식"),
];
