use chrono::{Datelike, NaiveDate};

use crate::model::Table;

/// Column parsed as day + abbreviated month, no year.
const DAY_MONTH_COLUMN: usize = 0;

/// Column parsed as day + abbreviated month + 2-digit year.
const DAY_MONTH_YEAR_COLUMN: usize = 1;

/// Yearless dates are first validated against this year and only then moved
/// to the effective year, so a yearless Feb 29 never parses.
const PLACEHOLDER_YEAR: i32 = 1900;

/// Abbreviated month names for one locale, lowercase, calendar order.
pub(crate) struct MonthNames {
    abbreviated: [&'static str; 12],
}

impl MonthNames {
    fn month_number(&self, name: &str) -> Option<u32> {
        self.abbreviated
            .iter()
            .position(|&abbreviated| abbreviated == name)
            .and_then(|index| u32::try_from(index + 1).ok())
    }
}

const RU_ABBREVIATED: MonthNames = MonthNames {
    abbreviated: [
        "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
    ],
};

/// Explicit month-name lookup replaces the process-wide locale switch the
/// report's original consumer relied on. Codeset suffixes like `.utf-8` are
/// ignored.
pub(crate) fn month_names_for(locale: &str) -> Option<&'static MonthNames> {
    let key = locale.split('.').next().unwrap_or(locale);
    match key {
        "ru_RU" | "ru" => Some(&RU_ABBREVIATED),
        _ => None,
    }
}

/// Rewrites the two date columns as `YYYY-MM-DD`. Cells that fail to parse
/// keep their original text.
pub(crate) fn normalize_dates(table: Table, months: &MonthNames, default_year: i32) -> Table {
    table
        .into_iter()
        .map(|mut row| {
            rewrite_cell(&mut row[DAY_MONTH_COLUMN], |cell| {
                parse_day_month(cell, months, default_year)
            });
            rewrite_cell(&mut row[DAY_MONTH_YEAR_COLUMN], |cell| {
                parse_day_month_year(cell, months)
            });
            row
        })
        .collect()
}

fn rewrite_cell(cell: &mut String, parse: impl Fn(&str) -> Option<NaiveDate>) {
    if let Some(date) = parse(cell.as_str()) {
        *cell = date.format("%Y-%m-%d").to_string();
    }
}

fn parse_day_month(cell: &str, months: &MonthNames, default_year: i32) -> Option<NaiveDate> {
    let lowered = cell.to_lowercase();
    let (day, rest) = split_leading_day(&lowered)?;
    let month = months.month_number(rest)?;
    NaiveDate::from_ymd_opt(PLACEHOLDER_YEAR, month, day)?.with_year(default_year)
}

fn parse_day_month_year(cell: &str, months: &MonthNames) -> Option<NaiveDate> {
    let lowered = cell.to_lowercase();
    let (day, rest) = split_leading_day(&lowered)?;

    let split = rest.len().checked_sub(2)?;
    if !rest.is_char_boundary(split) {
        return None;
    }
    let (month_part, year_part) = rest.split_at(split);
    if !year_part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let month = months.month_number(month_part)?;
    let two_digit: i32 = year_part.parse().ok()?;
    // 00-68 land in the 2000s, 69-99 in the 1900s
    let year = if two_digit < 69 {
        2000 + two_digit
    } else {
        1900 + two_digit
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Splits a 1- or 2-digit day prefix off the cell.
fn split_leading_day(text: &str) -> Option<(u32, &str)> {
    let digits = text.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || digits > 2 {
        return None;
    }
    let day = text[..digits].parse().ok()?;
    Some((day, &text[digits..]))
}
