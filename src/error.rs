use thiserror::Error;

use crate::transaction::TransactionId;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures surfaced while loading transactions or configuring an engine.
///
/// Ledger queries themselves never fail: unknown accounts read as zero and
/// duplicate ids are reported through [`crate::Admission`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A raw record carried an amount below zero.
    #[error("transaction {tx_id} has negative amount {amount}")]
    NegativeAmount { tx_id: TransactionId, amount: i64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
