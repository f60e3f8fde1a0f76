//! Trade-data ingestion port trait.

use crate::domain::error::RledgerError;
use crate::domain::ledger::Ledger;

pub trait DataPort {
    /// Load a complete, validated trade ledger from the external source.
    fn load_trades(&self) -> Result<Ledger, RledgerError>;
}
