use crate::model::Table;

/// Trims leading and trailing whitespace from every cell. Interior
/// whitespace stays as-is.
pub(crate) fn trim_cells(table: Table) -> Table {
    table
        .into_iter()
        .map(|row| row.into_iter().map(|cell| cell.trim().to_string()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::trim_cells;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn trims_every_cell() {
        let table = vec![row(&["  a ", "\tb", "c  "])];
        assert_eq!(trim_cells(table), vec![row(&["a", "b", "c"])]);
    }

    #[test]
    fn interior_whitespace_is_untouched() {
        let table = vec![row(&[" a  b "])];
        assert_eq!(trim_cells(table), vec![row(&["a  b"])]);
    }

    #[test]
    fn trimming_is_idempotent() {
        let trimmed = trim_cells(vec![row(&["  x  ", "y"])]);
        assert_eq!(trim_cells(trimmed.clone()), trimmed);
    }
}
