use crate::{ledger::Ledger, transaction::AccountId};

/// Per-account mean transaction amount over a ledger's current contents.
pub struct AverageCalculator<'a> {
    ledger: &'a Ledger,
}

impl<'a> AverageCalculator<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        AverageCalculator { ledger }
    }

    /// Truncating integer mean of every amount held for `account_id`, or 0
    /// when the account has no transactions.
    pub fn average(&self, account_id: AccountId) -> u64 {
        let transactions = self.ledger.transactions_for(account_id);
        if transactions.is_empty() {
            return 0;
        }

        let sum: u128 = transactions.iter().map(|tx| u128::from(tx.amount())).sum();
        let count = transactions.len() as u128;

        // The mean of u64 values always fits in a u64.
        (sum / count) as u64
    }
}
