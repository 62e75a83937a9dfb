use std::collections::{HashMap, HashSet};

use crate::{
    account::{AccountLedger, Sequence},
    transaction::{AccountId, Transaction, TransactionId},
};

/// Result of offering a transaction to the [`Ledger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The transaction was appended to its account's history.
    Accepted,

    /// A transaction with the same id was accepted earlier. Nothing changed.
    Duplicate,
}

impl Admission {
    pub fn is_accepted(self) -> bool {
        self == Admission::Accepted
    }
}

/// Append-only store of accepted transactions, bucketed by account.
///
/// Ids are deduplicated across the whole ledger, not per account: once an id
/// has been accepted for any account it can never be accepted again.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, AccountLedger>,
    // Accounts in the order they were first seen.
    opened: Vec<AccountId>,
    seen: HashSet<TransactionId>,
    next_seq: Sequence,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tx` to its account unless its id was already accepted.
    pub fn ingest(&mut self, tx: Transaction) -> Admission {
        if !self.seen.insert(tx.tx_id()) {
            tracing::debug!(tx = tx.tx_id(), account = tx.account_id(), "duplicate transaction ignored");
            return Admission::Duplicate;
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        let account_id = tx.account_id();
        let opened = &mut self.opened;
        self.accounts
            .entry(account_id)
            .or_insert_with(|| {
                opened.push(account_id);
                AccountLedger::new(account_id)
            })
            .push(tx, seq);

        tracing::trace!(tx = tx.tx_id(), account = account_id, seq, "transaction accepted");
        Admission::Accepted
    }

    /// Transactions held for `account_id` in arrival order. Empty for unknown accounts.
    pub fn transactions_for(&self, account_id: AccountId) -> &[Transaction] {
        self.accounts
            .get(&account_id)
            .map(AccountLedger::transactions)
            .unwrap_or(&[])
    }

    pub fn account(&self, account_id: AccountId) -> Option<&AccountLedger> {
        self.accounts.get(&account_id)
    }

    /// Every account in the order it was first seen.
    pub fn accounts(&self) -> impl Iterator<Item = &AccountLedger> + '_ {
        self.opened.iter().filter_map(move |id| self.accounts.get(id))
    }

    pub fn contains(&self, tx_id: TransactionId) -> bool {
        self.seen.contains(&tx_id)
    }

    /// Number of accepted transactions across all accounts.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
