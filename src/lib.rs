//! In-memory transaction ledger with two fraud heuristics: excessive debits
//! relative to an account's average, and a two-transaction structuring pattern.

pub mod account;
pub mod average;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod pattern;
pub mod scorer;
pub mod telemetry;
pub mod transaction;


pub use account::AccountLedger;
pub use average::AverageCalculator;
pub use config::EngineConfig;
pub use engine::{Assessment, Engine, SharedEngine};
pub use error::{LedgerError, Result};
pub use ledger::{Admission, Ledger};
pub use pattern::{PatternDetector, StructuringSignal};
pub use scorer::{FraudScore, FraudScorer};
pub use transaction::{AccountId, Transaction, TransactionId, TransactionKind, TransactionRecord};
