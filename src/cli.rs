//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::domain::error::RledgerError;
use crate::domain::ledger::{Column, Ledger};
use crate::domain::metrics::DEFAULT_BREAKEVEN;
use crate::domain::normalize::add_r_multiples;
use crate::domain::point_value::point_values;
use crate::domain::summary::{summarize, Summary, SummaryConfig};
use crate::domain::transform::{trim_extremes, trim_quantile};
use crate::ports::data_port::DataPort;

#[derive(Parser, Debug)]
#[command(name = "rledger", about = "Risk-normalized trade-ledger statistics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a trade ledger to R-multiples and print its metric summary
    Summary {
        /// Broker-report CSV of closed trades
        file: PathBuf,
        /// Evaluate raw Profit instead of normalizing to R-multiples
        #[arg(long)]
        raw: bool,
        /// Breakeven threshold for win/breakeven classification
        #[arg(long, default_value_t = DEFAULT_BREAKEVEN)]
        breakeven: f64,
        /// Keep only rows inside this quantile band of the evaluated column
        #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
        trim_quantile: Option<Vec<f64>>,
        /// Drop this fraction of rows from each tail of the evaluated column
        #[arg(long, value_name = "PERCENT")]
        trim_extremes: Option<f64>,
    },
    /// Print the estimated per-symbol point values of a ledger
    PointValues {
        /// Broker-report CSV of closed trades
        file: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Summary {
            file,
            raw,
            breakeven,
            trim_quantile,
            trim_extremes,
        } => run_summary(&file, raw, breakeven, trim_quantile, trim_extremes),
        Command::PointValues { file } => run_point_values(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    }
}

fn run_summary(
    file: &PathBuf,
    raw: bool,
    breakeven: f64,
    quantile_band: Option<Vec<f64>>,
    extremes_percent: Option<f64>,
) -> Result<(), RledgerError> {
    let ledger = CsvAdapter::new(file.clone()).load_trades()?;

    let (mut ledger, column): (Ledger, Column) = if raw {
        (ledger, Column::Profit)
    } else {
        (add_r_multiples(&ledger), Column::RMultiple)
    };

    if let Some(band) = quantile_band {
        ledger = trim_quantile(&ledger, column, band[0], band[1])?;
    }
    if let Some(percent) = extremes_percent {
        ledger = trim_extremes(&ledger, column, percent)?;
    }

    let summary = summarize(&ledger, column, &SummaryConfig { breakeven })?;
    print_summary(&summary, column, ledger.len());
    Ok(())
}

fn run_point_values(file: &PathBuf) -> Result<(), RledgerError> {
    let ledger = CsvAdapter::new(file.clone()).load_trades()?;
    let table = point_values(&ledger);

    if table.is_empty() {
        println!("no trades");
        return Ok(());
    }
    for (symbol, value) in &table {
        println!("{symbol:<12} {value:>10.2}");
    }
    Ok(())
}

fn print_summary(summary: &Summary, column: Column, rows: usize) {
    println!("Column: {column} ({rows} trades)");
    println!("  Profit factor   {:>8.2}", summary.profit_factor);
    println!("  Expectancy      {:>8.2}", summary.expectancy);
    println!("  Expectancy (WL) {:>8.2}", summary.expectancy_decomposed);
    println!("  Payoff ratio    {:>8.2}", summary.payoff_ratio);
    println!("  Avg win / loss  {:>8.2} / {:.2}", summary.avg_win, summary.avg_loss);
    println!("  Max drawdown    {:>8.2}", summary.max_drawdown);
    println!("  Avg drawdown    {:>8.2}", summary.avg_drawdown);

    let rates = &summary.rates;
    match (rates.breakeven_pct, rates.breakevens) {
        (Some(be_pct), Some(be_count)) => println!(
            "  Win {:.2}% ({}) / BE {:.2}% ({}) / Loss {:.2}% ({}) of {}",
            rates.win_pct, rates.wins, be_pct, be_count, rates.loss_pct, rates.losses, rates.total
        ),
        _ => println!(
            "  Win {:.2}% ({}) / Loss {:.2}% ({}) of {}",
            rates.win_pct, rates.wins, rates.loss_pct, rates.losses, rates.total
        ),
    }
}
