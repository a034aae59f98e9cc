//! Flattens Sberbank's fixed-width card account statement export into a
//! single tab-delimited table: pagination artifacts are dropped, multi-line
//! records are reassembled, the compound description column is split, and the
//! two date columns are rewritten as ISO-8601.

mod dates;
mod decode;
mod describe;
mod error;
mod model;
mod normalize;
mod options;
mod page_parse;
mod slice;
mod squash;
mod tsv_out;
mod warning;

use std::path::Path;

use chrono::{Datelike, Local};

use crate::dates::{month_names_for, normalize_dates};
use crate::decode::decode_report_bytes;
use crate::describe::expand_description;
use crate::normalize::trim_cells;
use crate::page_parse::parse_pages;
use crate::squash::{horizontal_squash, vertical_squash};
use crate::tsv_out::write_table_to_string;

pub use error::TransformError;
pub use model::{Row, Table};
pub use options::TransformOptions;
pub use warning::{TransformWarning, WarningCode};

#[derive(Debug, Clone, PartialEq)]
pub struct TransformReport {
    pub row_count: usize,
    pub page_count: usize,
    pub warnings: Vec<TransformWarning>,
}

/// Runs the whole pipeline over a raw windows-1251 statement export and
/// returns the tab-delimited table together with a run report.
pub fn transform_report_bytes(
    input: &[u8],
    options: &TransformOptions,
) -> Result<(String, TransformReport), TransformError> {
    let text = decode_report_bytes(input);
    let mut warnings = Vec::new();

    let pages = parse_pages(&text);
    let page_count = pages.page_count;
    tracing::debug!(rows = pages.rows.len(), page_count, "parsed data regions");

    let table = horizontal_squash(pages.rows);
    let table = vertical_squash(table)?;
    let table = expand_description(table);
    let table = trim_cells(table);

    let table = match month_names_for(&options.locale) {
        Some(months) => {
            let default_year = options
                .default_year
                .unwrap_or_else(|| Local::now().year());
            normalize_dates(table, months, default_year)
        }
        None => {
            warnings.push(TransformWarning::new(
                WarningCode::LocaleUnavailable,
                format!(
                    "no month-name table for locale '{}'; date columns left as-is",
                    options.locale
                ),
            ));
            table
        }
    };

    if table.is_empty() {
        warnings.push(TransformWarning::new(
            WarningCode::NoDataRows,
            "no data-region rows were captured from the input",
        ));
    }

    let tsv = write_table_to_string(&table, options.delimiter)?;
    Ok((
        tsv,
        TransformReport {
            row_count: table.len(),
            page_count,
            warnings,
        },
    ))
}

/// File-path convenience wrapper around [`transform_report_bytes`].
pub fn transform_report_file(
    input: &Path,
    options: &TransformOptions,
) -> Result<(String, TransformReport), TransformError> {
    let bytes = std::fs::read(input)?;
    transform_report_bytes(&bytes, options)
}
