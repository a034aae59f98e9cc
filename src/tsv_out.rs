use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::TransformError;
use crate::model::Row;

/// Writes the table with the given delimiter, one row per line. The output
/// contract is plain delimiter-joined lines, so quoting is disabled outright.
pub(crate) fn write_table(
    writer: impl Write,
    table: &[Row],
    delimiter: u8,
) -> Result<(), TransformError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    for row in table {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_table_to_string(table: &[Row], delimiter: u8) -> Result<String, TransformError> {
    let mut bytes = Vec::new();
    write_table(&mut bytes, table, delimiter)?;
    Ok(String::from_utf8(bytes)?)
}
