#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Output delimiter byte.
    pub delimiter: u8,

    /// Key into the built-in abbreviated month-name tables. An unknown key
    /// skips the date-normalization stage entirely.
    pub locale: String,

    /// Year substituted into dates whose input carries no year; `None` means
    /// the current local year.
    pub default_year: Option<i32>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            locale: "ru_RU".to_string(),
            default_year: None,
        }
    }
}
