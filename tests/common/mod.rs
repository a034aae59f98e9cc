use std::path::Path;

/// Character widths of the 8 statement fields, as printed by the bank.
pub const FIELD_WIDTHS: [usize; 8] = [20, 6, 7, 8, 22, 4, 17, 17];

/// Page separator; the real report uses a full-width dash run.
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------";

/// Page-break filler the bank prints between statement pages.
pub const PAGE_BREAK: &str = "***************************************";

/// Pads each cell to its fixed field width and joins them into one report line.
pub fn fixed_row(cells: [&str; 8]) -> String {
    cells
        .iter()
        .zip(FIELD_WIDTHS)
        .map(|(cell, width)| pad(cell, width))
        .collect()
}

fn pad(cell: &str, width: usize) -> String {
    let mut out: String = cell.chars().take(width).collect();
    let missing = width - out.chars().count();
    out.push_str(&" ".repeat(missing));
    out
}

/// Wraps data lines into a full report page: banner, separator, column
/// titles, separator, data, separator, footer.
pub fn report_page(data_lines: &[String]) -> String {
    let mut lines = vec![
        "ОТЧЕТ ПО СЧЕТУ КАРТЫ".to_string(),
        SEPARATOR.to_string(),
        "ДАТА    ДАТА ОБР   СУММА".to_string(),
        SEPARATOR.to_string(),
    ];
    lines.extend_from_slice(data_lines);
    lines.push(SEPARATOR.to_string());
    lines.push("стр. 1  продолжение на следующей странице".to_string());
    lines.join("\n")
}

/// Encodes report text the way the bank ships it: windows-1251 bytes.
pub fn encode_cp1251(text: &str) -> Vec<u8> {
    encoding_rs::WINDOWS_1251.encode(text).0.into_owned()
}

pub fn write_report(path: &Path, text: &str) {
    std::fs::write(path, encode_cp1251(text)).expect("report fixture should be written");
}
