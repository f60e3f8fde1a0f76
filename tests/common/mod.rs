#![allow(dead_code)]

pub use rledger::domain::ledger::{Column, Ledger, TradeRecord};
use rledger::domain::error::RledgerError;
use rledger::ports::data_port::DataPort;

/// In-memory data port handing out a fixed record set.
pub struct MockDataPort {
    pub records: Vec<TradeRecord>,
}

impl MockDataPort {
    pub fn new(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }
}

impl DataPort for MockDataPort {
    fn load_trades(&self) -> Result<Ledger, RledgerError> {
        Ok(Ledger::from_records(&self.records))
    }
}

pub fn trade(
    symbol: &str,
    profit: f64,
    entry: f64,
    stop: f64,
    exit: f64,
    volume: f64,
) -> TradeRecord {
    TradeRecord {
        symbol: symbol.to_string(),
        volume,
        price_entry: entry,
        stop_loss: stop,
        price_exit: exit,
        profit,
        risk_usd: None,
        r_multiple: None,
    }
}

/// Ledger with `R_multiple` already committed, one row per value.
pub fn ledger_with_r(r_multiples: &[f64]) -> Ledger {
    Ledger::new(
        r_multiples
            .iter()
            .map(|&r| TradeRecord {
                symbol: "X".to_string(),
                volume: 1.0,
                price_entry: 100.0,
                stop_loss: 95.0,
                price_exit: 105.0,
                profit: r * 50.0,
                risk_usd: Some(50.0),
                r_multiple: Some(r),
            })
            .collect(),
    )
}

/// A small broker-report export: all trades on one symbol with point value
/// 1.0, so risk and R-multiples come out in round numbers.
pub const SAMPLE_CSV: &str = "\
Symbol,Volume,Price Entry,S / L,Price Exit,Profit
XAUUSD,10.0,100.0,95.0,105.0,50.0
XAUUSD,10.0,100.0,95.0,95.0,-50.0
XAUUSD,10.0,100.0,95.0,110.0,100.0
XAUUSD,10.0,100.0,0,103.0,30.0
XAUUSD,10.0,100.0,97.5,97.5,-25.0
XAUUSD,10.0,100.0,95.0,102.5,25.0
";
