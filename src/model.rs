/// A transaction row; column meaning is positional, arity changes between
/// pipeline stages.
pub type Row = Vec<String>;

pub type Table = Vec<Row>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedPages {
    pub rows: Table,
    pub page_count: usize,
}
