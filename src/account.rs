use crate::transaction::{AccountId, Transaction};

/// Position of an accepted transaction in the ledger-wide arrival order.
pub type Sequence = u64;

/// Ordered history of the transactions accepted for one account.
#[derive(Debug, Clone)]
pub struct AccountLedger {
    account_id: AccountId,
    transactions: Vec<Transaction>,
    arrivals: Vec<Sequence>,
}

impl AccountLedger {
    pub fn new(account_id: AccountId) -> Self {
        AccountLedger {
            account_id,
            transactions: Vec::new(),
            arrivals: Vec::new(),
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Arrival sequence of the transaction at `index` in this account's history.
    pub fn arrival(&self, index: usize) -> Option<Sequence> {
        self.arrivals.get(index).copied()
    }

    /// Arrival sequence of the account's first transaction.
    pub fn opened_at(&self) -> Option<Sequence> {
        self.arrival(0)
    }

    pub(crate) fn push(&mut self, tx: Transaction, seq: Sequence) {
        debug_assert_eq!(tx.account_id(), self.account_id);
        self.transactions.push(tx);
        self.arrivals.push(seq);
    }
}
