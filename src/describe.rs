use crate::model::Table;
use crate::slice::fixed_slices;

/// Column holding the compound description after the horizontal squash.
const DESCRIPTION_COLUMN: usize = 3;

/// Character widths of the four sub-fields packed into the description.
/// Reassembled multi-line descriptions routinely exceed the on-page column
/// width, which is why these add up to more than the field itself.
const DESCRIPTION_WIDTHS: [usize; 4] = [25, 14, 2, 50];

/// Re-slices the description cell: the first sub-field replaces the original
/// cell, the other three append as new trailing columns.
pub(crate) fn expand_description(table: Table) -> Table {
    table
        .into_iter()
        .map(|mut row| {
            let mut parts = fixed_slices(&row[DESCRIPTION_COLUMN], &DESCRIPTION_WIDTHS);
            row[DESCRIPTION_COLUMN] = parts.remove(0);
            row.extend(parts);
            row
        })
        .collect()
}
