use crate::error::TransformError;
use crate::model::{Row, Table};

/// Drops the leading unused field from every row.
pub(crate) fn horizontal_squash(table: Table) -> Table {
    table
        .into_iter()
        .map(|row| row.into_iter().skip(1).collect())
        .collect()
}

/// Folds continuation rows (blank leading cell) into the preceding logical
/// row. A continuation arriving before any logical row is malformed input
/// and fails the whole run.
pub(crate) fn vertical_squash(table: Table) -> Result<Table, TransformError> {
    let mut out: Table = Vec::with_capacity(table.len());

    for (index, row) in table.into_iter().enumerate() {
        let is_continuation = row.first().is_some_and(|cell| cell.trim().is_empty());
        if is_continuation {
            let Some(owner) = out.last_mut() else {
                return Err(TransformError::OrphanContinuation { row: index });
            };
            merge_rows(owner, &row);
        } else {
            out.push(row);
        }
    }

    Ok(out)
}

/// Appends each non-blank continuation cell to the owning row's cell in the
/// same column. No separator goes between the fragments.
fn merge_rows(owner: &mut Row, continuation: &Row) {
    for (cell, fragment) in owner.iter_mut().zip(continuation) {
        if !fragment.trim().is_empty() {
            cell.push_str(fragment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{horizontal_squash, vertical_squash};
    use crate::error::TransformError;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn horizontal_squash_drops_first_cell_of_every_row() {
        let table = vec![row(&["unused", "a", "b"]), row(&["unused", "c", "d"])];
        let squashed = horizontal_squash(table);
        assert_eq!(squashed, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn continuation_cells_concatenate_without_separator() {
        let table = vec![row(&["A", "B"]), row(&["", "C"])];
        let squashed = vertical_squash(table).expect("squash should succeed");
        assert_eq!(squashed, vec![row(&["A", "BC"])]);
    }

    #[test]
    fn blank_continuation_cells_leave_owner_untouched() {
        let table = vec![row(&["A", "B", "X"]), row(&["   ", "  ", "Y"])];
        let squashed = vertical_squash(table).expect("squash should succeed");
        assert_eq!(squashed, vec![row(&["A", "B", "XY"])]);
    }

    #[test]
    fn whitespace_only_leading_cell_marks_a_continuation() {
        let table = vec![row(&["A", "B"]), row(&["   ", "C"]), row(&["D", "E"])];
        let squashed = vertical_squash(table).expect("squash should succeed");
        assert_eq!(squashed, vec![row(&["A", "BC"]), row(&["D", "E"])]);
    }

    #[test]
    fn continuation_without_predecessor_is_fatal() {
        let table = vec![row(&["", "C"])];
        let error = vertical_squash(table).expect_err("orphan continuation should fail");
        assert!(matches!(
            error,
            TransformError::OrphanContinuation { row: 0 }
        ));
    }

    #[test]
    fn row_count_never_grows() {
        let table = vec![
            row(&["A", "1"]),
            row(&["", "2"]),
            row(&["", "3"]),
            row(&["B", "4"]),
        ];
        let squashed = vertical_squash(table).expect("squash should succeed");
        assert_eq!(squashed.len(), 2);
        assert_eq!(squashed[0], row(&["A", "123"]));
    }
}
