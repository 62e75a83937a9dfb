//! Structuring detection.
//!
//! An account is flagged when its entire history is exactly two transactions
//! and both amounts reach the threshold. Accounts with zero, one, or three or
//! more transactions never qualify, whatever their amounts.

use crate::{
    account::{AccountLedger, Sequence},
    ledger::Ledger,
    transaction::AccountId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuringSignal {
    None,
    Flagged {
        account_id: AccountId,
        /// Amount of the earlier of the account's two transactions.
        amount: u64,
    },
}

impl StructuringSignal {
    /// The flagged amount, or 0 when nothing was flagged.
    pub fn amount(&self) -> u64 {
        match self {
            StructuringSignal::None => 0,
            StructuringSignal::Flagged { amount, .. } => *amount,
        }
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, StructuringSignal::Flagged { .. })
    }
}

pub struct PatternDetector<'a> {
    ledger: &'a Ledger,
}

impl<'a> PatternDetector<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        PatternDetector { ledger }
    }

    /// The first qualifying account, ranked by when its second transaction arrived.
    pub fn pattern_above_threshold(&self, threshold: u64) -> StructuringSignal {
        self.qualifying(threshold)
            .min_by_key(|(completed_at, _)| *completed_at)
            .map(|(_, signal)| signal)
            .unwrap_or(StructuringSignal::None)
    }

    /// Every qualifying account, earliest completed pair first.
    pub fn flagged_accounts(&self, threshold: u64) -> Vec<StructuringSignal> {
        let mut flagged: Vec<(Sequence, StructuringSignal)> = self.qualifying(threshold).collect();
        flagged.sort_by_key(|(completed_at, _)| *completed_at);
        flagged.into_iter().map(|(_, signal)| signal).collect()
    }

    fn qualifying(&self, threshold: u64) -> impl Iterator<Item = (Sequence, StructuringSignal)> + 'a {
        let ledger: &'a Ledger = self.ledger;
        ledger
            .accounts()
            .filter_map(move |account| Self::check(account, threshold))
    }

    fn check(account: &AccountLedger, threshold: u64) -> Option<(Sequence, StructuringSignal)> {
        let [first, second] = account.transactions() else {
            return None;
        };

        if first.amount() < threshold || second.amount() < threshold {
            return None;
        }

        let completed_at = account.arrival(1)?;
        Some((
            completed_at,
            StructuringSignal::Flagged {
                account_id: account.account_id(),
                amount: first.amount(),
            },
        ))
    }
}
