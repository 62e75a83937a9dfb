//! Batch harness: reads a transaction CSV and writes CSV reports.
//!
//! Input columns are `type,account,tx,amount`, where `type` is `credit` or
//! `debit`. Padding around fields is trimmed.

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::{
    config::{EngineConfig, DEFAULT_EXCESS_MULTIPLIER},
    engine::{Assessment, Engine},
    error::Result,
    pattern::{PatternDetector, StructuringSignal},
    transaction::{AccountId, Transaction, TransactionId, TransactionRecord},
};

/// Scores transaction batches for excessive debits and structuring.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Debits above this multiple of the account's prior average are scored.
    #[clap(long, global = true, value_parser, default_value_t = DEFAULT_EXCESS_MULTIPLIER)]
    pub multiplier: u64,

    /// Emit logs as JSON lines on stderr.
    #[clap(long, global = true)]
    pub json_logs: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record every transaction and print its fraud score.
    Score {
        #[clap(value_parser)]
        file: PathBuf,
    },

    /// Record every transaction and print each account's average.
    Averages {
        #[clap(value_parser)]
        file: PathBuf,
    },

    /// Record every transaction and print accounts matching the structuring pattern.
    Structuring {
        #[clap(value_parser)]
        file: PathBuf,

        /// Both transactions of a flagged account must be at least this amount.
        #[clap(long, value_parser)]
        threshold: u64,
    },
}

impl Command {
    pub fn input(&self) -> &Path {
        match self {
            Command::Score { file } | Command::Averages { file } | Command::Structuring { file, .. } => file,
        }
    }
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::with_multiplier(self.multiplier)
    }
}

#[derive(Debug, Serialize)]
struct AssessmentRow {
    tx: TransactionId,
    account: AccountId,
    status: &'static str,
    score: u64,
}

#[derive(Debug, Serialize)]
struct AverageRow {
    account: AccountId,
    transactions: usize,
    average: u64,
}

#[derive(Debug, Serialize)]
struct StructuringRow {
    account: AccountId,
    amount: u64,
}

/// Runs `command` over the CSV in `input`, writing the report to `output`.
pub fn run<R: Read, W: Write>(command: &Command, config: EngineConfig, input: R, output: W) -> Result<()> {
    let mut engine = Engine::new(config)?;
    let mut rdr = reader(input);
    let mut wtr = csv::WriterBuilder::new().from_writer(output);

    match command {
        Command::Score { .. } => {
            for tx in transactions(&mut rdr) {
                let tx = tx?;
                let assessment = engine.ingest_and_score(tx);
                wtr.serialize(AssessmentRow {
                    tx: tx.tx_id(),
                    account: tx.account_id(),
                    status: match assessment {
                        Assessment::Duplicate => "duplicate",
                        Assessment::Recorded(_) => "recorded",
                    },
                    score: assessment.score(),
                })?;
            }
        }
        Command::Averages { .. } => {
            ingest_all(&mut engine, &mut rdr)?;
            for account in engine.ledger().accounts() {
                wtr.serialize(AverageRow {
                    account: account.account_id(),
                    transactions: account.len(),
                    average: engine.average(account.account_id()),
                })?;
            }
        }
        Command::Structuring { threshold, .. } => {
            ingest_all(&mut engine, &mut rdr)?;
            let flagged = PatternDetector::new(engine.ledger()).flagged_accounts(*threshold);
            tracing::info!(threshold, flagged = flagged.len(), "structuring scan complete");
            for signal in flagged {
                if let StructuringSignal::Flagged { account_id, amount } = signal {
                    wtr.serialize(StructuringRow {
                        account: account_id,
                        amount,
                    })?;
                }
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn transactions<R: Read>(rdr: &mut csv::Reader<R>) -> impl Iterator<Item = Result<Transaction>> + '_ {
    rdr.deserialize::<TransactionRecord>()
        .map(|record| Transaction::try_from(record?))
}

fn ingest_all<R: Read>(engine: &mut Engine, rdr: &mut csv::Reader<R>) -> Result<()> {
    for tx in transactions(rdr) {
        engine.ingest_and_score(tx?);
    }
    tracing::debug!(recorded = engine.ledger().len(), "input consumed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    const INPUT: &str = "\
type,   account, tx, amount
credit, 1,       1,  100
credit, 1,       2,  50
credit, 2,       3,  200
debit,  2,       4,  500
credit, 1,       2,  50
";

    fn report(command: Command) -> String {
        let mut out = Vec::new();
        run(&command, EngineConfig::default(), INPUT.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn score_reports_every_row() {
        let out = report(Command::Score { file: PathBuf::new() });

        assert_eq!(
            out,
            "\
tx,account,status,score
1,1,recorded,0
2,1,recorded,0
3,2,recorded,0
4,2,recorded,100
2,1,duplicate,0
"
        );
    }

    #[test]
    fn averages_follow_first_seen_order() {
        let out = report(Command::Averages { file: PathBuf::new() });

        assert_eq!(out, "account,transactions,average\n1,2,75\n2,2,350\n");
    }

    #[test]
    fn structuring_lists_flagged_accounts() {
        let out = report(Command::Structuring {
            file: PathBuf::new(),
            threshold: 50,
        });

        assert_eq!(out, "account,amount\n1,100\n2,200\n");
    }

    #[test]
    fn negative_amount_aborts() {
        let input = "type,account,tx,amount\ndebit,1,1,-10\n";
        let mut out = Vec::new();
        let err = run(
            &Command::Score { file: PathBuf::new() },
            EngineConfig::default(),
            input.as_bytes(),
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, LedgerError::NegativeAmount { tx_id: 1, amount: -10 }));
    }

    #[test]
    fn unknown_type_is_a_csv_error() {
        let input = "type,account,tx,amount\nrefund,1,1,10\n";
        let mut out = Vec::new();
        let err = run(
            &Command::Averages { file: PathBuf::new() },
            EngineConfig::default(),
            input.as_bytes(),
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, LedgerError::Csv(_)));
    }

    #[test]
    fn parses_subcommands_and_global_flags() {
        let cli = Cli::parse_from(["structuring-ledger", "structuring", "tx.csv", "--threshold", "50", "--multiplier", "3"]);

        assert_eq!(cli.engine_config(), EngineConfig::with_multiplier(3));
        assert!(!cli.json_logs);
        assert!(matches!(cli.command, Command::Structuring { threshold: 50, .. }));
        assert_eq!(cli.command.input(), Path::new("tx.csv"));
    }
}
