use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::error::LedgerError;

pub type TransactionId = u32;
pub type AccountId = u16;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A credit adds money to the account. Credits count towards the
    /// account's average but are never scored.
    ///
    /// A credit looks like
    ///
    /// |type       |account |tx     |amount |
    /// |-----------|--------|-------|-------|
    /// |credit     |1       |1      |100    |
    Credit,

    /// A debit takes money out of the account. Debits are scored against
    /// the account's average as it stood before the debit arrived.
    ///
    /// A debit looks like
    ///
    /// |type       |account |tx     |amount |
    /// |-----------|--------|-------|-------|
    /// |debit      |1       |2      |400    |
    Debit,
}

/// Row shape of a transaction CSV file, before validation.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    #[serde(rename = "account")]
    pub account_id: AccountId,

    #[serde(rename = "tx")]
    pub tx_id: TransactionId,

    pub amount: i64,
}

/// An accepted-or-about-to-be-accepted monetary movement.
///
/// Two transactions are the same transaction when their ids match; the
/// remaining fields do not take part in equality.
#[derive(Debug, Clone, Copy)]
pub struct Transaction {
    tx_id: TransactionId,
    account_id: AccountId,
    amount: u64,
    kind: TransactionKind,
}

impl Transaction {
    pub fn new(tx_id: TransactionId, account_id: AccountId, amount: u64, kind: TransactionKind) -> Self {
        Transaction {
            tx_id,
            account_id,
            amount,
            kind,
        }
    }

    pub fn credit(tx_id: TransactionId, account_id: AccountId, amount: u64) -> Self {
        Self::new(tx_id, account_id, amount, TransactionKind::Credit)
    }

    pub fn debit(tx_id: TransactionId, account_id: AccountId, amount: u64) -> Self {
        Self::new(tx_id, account_id, amount, TransactionKind::Debit)
    }

    pub fn tx_id(&self) -> TransactionId {
        self.tx_id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.tx_id == other.tx_id
    }
}

impl Eq for Transaction {}

impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tx_id.hash(state);
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = LedgerError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let amount = u64::try_from(record.amount).map_err(|_| LedgerError::NegativeAmount {
            tx_id: record.tx_id,
            amount: record.amount,
        })?;

        Ok(Transaction::new(record.tx_id, record.account_id, amount, record.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_when_ids_match() {
        let a = Transaction::credit(1, 1, 100);
        let b = Transaction::debit(1, 7, 5);

        assert_eq!(a, b);
    }

    #[test]
    fn different_ids_are_not_equal() {
        assert_ne!(Transaction::credit(1, 1, 100), Transaction::credit(2, 1, 100));
    }

    #[test]
    fn only_debits_report_is_debit() {
        assert!(Transaction::debit(1, 1, 10).is_debit());
        assert!(!Transaction::credit(2, 1, 10).is_debit());
    }

    #[test]
    fn negative_record_amount_is_rejected() {
        let record = TransactionRecord {
            kind: TransactionKind::Debit,
            account_id: 3,
            tx_id: 9,
            amount: -5,
        };

        match Transaction::try_from(record) {
            Err(LedgerError::NegativeAmount { tx_id, amount }) => {
                assert_eq!(tx_id, 9);
                assert_eq!(amount, -5);
            }
            other => panic!("expected NegativeAmount, got {:?}", other),
        }
    }

    #[test]
    fn record_converts_field_for_field() {
        let record = TransactionRecord {
            kind: TransactionKind::Credit,
            account_id: 2,
            tx_id: 4,
            amount: 250,
        };

        let tx = Transaction::try_from(record).unwrap();
        assert_eq!(tx.tx_id(), 4);
        assert_eq!(tx.account_id(), 2);
        assert_eq!(tx.amount(), 250);
        assert_eq!(tx.kind(), TransactionKind::Credit);
    }
}
