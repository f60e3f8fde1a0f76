//! Broker-report CSV adapter.
//!
//! Reads a closed-trades export with the headers `Symbol`, `Volume`,
//! `Price Entry`, `S / L`, `Price Exit`, `Profit` (extra columns are
//! ignored) and builds a [`Ledger`] in file row order.

use crate::domain::error::RledgerError;
use crate::domain::ledger::{Column, Ledger, TradeRecord};
use crate::ports::data_port::DataPort;
use std::fs;
use std::path::PathBuf;

const REQUIRED: [Column; 6] = [
    Column::Symbol,
    Column::Volume,
    Column::PriceEntry,
    Column::StopLoss,
    Column::PriceExit,
    Column::Profit,
];

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn csv_error(&self, reason: String) -> RledgerError {
        RledgerError::Csv {
            file: self.path.display().to_string(),
            reason,
        }
    }

    fn field_f64(
        &self,
        record: &csv::StringRecord,
        index: usize,
        column: Column,
        row: usize,
    ) -> Result<f64, RledgerError> {
        let raw = record
            .get(index)
            .ok_or_else(|| self.csv_error(format!("row {row}: missing '{column}' field")))?;
        raw.trim().parse().map_err(|e| {
            self.csv_error(format!("row {row}: invalid '{column}' value '{raw}': {e}"))
        })
    }
}

impl DataPort for CsvAdapter {
    fn load_trades(&self) -> Result<Ledger, RledgerError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.csv_error(format!("failed to read file: {e}")))?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let headers = rdr
            .headers()
            .map_err(|e| self.csv_error(format!("header parse error: {e}")))?
            .clone();

        let index_of = |column: Column| -> Result<usize, RledgerError> {
            headers
                .iter()
                .position(|h| h.trim() == column.name())
                .ok_or(RledgerError::MissingColumn { column })
        };

        let mut indices = [0usize; 6];
        for (slot, column) in indices.iter_mut().zip(REQUIRED) {
            *slot = index_of(column)?;
        }
        let [symbol_i, volume_i, entry_i, stop_i, exit_i, profit_i] = indices;

        let mut records = Vec::new();
        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| self.csv_error(format!("row {row}: {e}")))?;

            let symbol = record
                .get(symbol_i)
                .ok_or_else(|| self.csv_error(format!("row {row}: missing 'Symbol' field")))?
                .trim()
                .to_string();

            records.push(TradeRecord {
                symbol,
                volume: self.field_f64(&record, volume_i, Column::Volume, row)?,
                price_entry: self.field_f64(&record, entry_i, Column::PriceEntry, row)?,
                stop_loss: self.field_f64(&record, stop_i, Column::StopLoss, row)?,
                price_exit: self.field_f64(&record, exit_i, Column::PriceExit, row)?,
                profit: self.field_f64(&record, profit_i, Column::Profit, row)?,
                risk_usd: None,
                r_multiple: None,
            });
        }

        Ok(Ledger::new(records))
    }
}
