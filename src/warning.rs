#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    LocaleUnavailable,
    NoDataRows,
}

/// A non-fatal condition noticed during a run. Warnings never alter the
/// emitted table; the silently-degrading policies of the report format stay
/// silent in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformWarning {
    pub code: WarningCode,
    pub message: String,
}

impl TransformWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
