//! Domain error types.

use crate::domain::ledger::Column;

/// Top-level error type for rledger.
///
/// Undefined ratios (division by a zero denominator in profit factor,
/// payoff ratio, or risk-in-currency) are NOT errors: they propagate as
/// `f64::INFINITY` / `f64::NAN` sentinels in metric results.
#[derive(Debug, thiserror::Error)]
pub enum RledgerError {
    #[error("column '{column}' is required")]
    MissingColumn { column: Column },

    #[error("column '{column}' is not numeric")]
    InvalidColumnType { column: Column },

    #[error("CSV error in {file}: {reason}")]
    Csv { file: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RledgerError> for std::process::ExitCode {
    fn from(err: &RledgerError) -> Self {
        let code: u8 = match err {
            RledgerError::Io(_) => 1,
            RledgerError::Csv { .. } => 2,
            RledgerError::MissingColumn { .. } | RledgerError::InvalidColumnType { .. } => 3,
        };
        std::process::ExitCode::from(code)
    }
}
