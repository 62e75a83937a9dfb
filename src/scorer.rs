use crate::transaction::Transaction;

/// Outcome of scoring a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudScore {
    Clear,
    /// The debit exceeded the allowed multiple of the prior average by `excess`.
    Excessive { excess: u64 },
}

impl FraudScore {
    /// Numeric score, 0 when clear.
    pub fn value(&self) -> u64 {
        match self {
            FraudScore::Clear => 0,
            FraudScore::Excessive { excess } => *excess,
        }
    }

    pub fn is_excessive(&self) -> bool {
        matches!(self, FraudScore::Excessive { .. })
    }
}

/// Scores debits that are large relative to the account's history.
#[derive(Debug, Clone, Copy)]
pub struct FraudScorer {
    multiplier: u64,
}

impl FraudScorer {
    pub fn new(multiplier: u64) -> Self {
        FraudScorer { multiplier }
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Scores `tx` against `average_before`, which must not include `tx` itself.
    ///
    /// A debit whose amount is above `multiplier * average_before` scores the
    /// excess over that limit. Credits and debits at or below the limit are clear.
    pub fn score(&self, tx: &Transaction, average_before: u64) -> FraudScore {
        if !tx.is_debit() {
            return FraudScore::Clear;
        }

        let limit = u128::from(average_before) * u128::from(self.multiplier);
        let amount = u128::from(tx.amount());
        if amount <= limit {
            return FraudScore::Clear;
        }

        // amount - limit < amount, so it fits back into a u64.
        FraudScore::Excessive {
            excess: (amount - limit) as u64,
        }
    }
}

impl Default for FraudScorer {
    fn default() -> Self {
        FraudScorer::new(crate::config::DEFAULT_EXCESS_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excessive_debit_scores_the_excess() {
        let score = FraudScorer::default().score(&Transaction::debit(5, 1, 400), 116);
        assert_eq!(score, FraudScore::Excessive { excess: 168 });
    }

    #[test]
    fn debit_at_the_limit_is_clear() {
        let score = FraudScorer::default().score(&Transaction::debit(5, 1, 232), 116);
        assert_eq!(score, FraudScore::Clear);
    }

    #[test]
    fn credits_are_never_scored() {
        let score = FraudScorer::default().score(&Transaction::credit(5, 1, 10_000), 1);
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn first_debit_on_empty_account_scores_full_amount() {
        let score = FraudScorer::default().score(&Transaction::debit(1, 1, 300), 0);
        assert_eq!(score.value(), 300);
    }

    #[test]
    fn multiplier_is_configurable() {
        let scorer = FraudScorer::new(3);
        assert_eq!(scorer.score(&Transaction::debit(1, 1, 400), 100).value(), 100);
        assert!(!scorer.score(&Transaction::debit(2, 1, 300), 100).is_excessive());
    }

    #[test]
    fn huge_average_does_not_overflow() {
        let score = FraudScorer::default().score(&Transaction::debit(1, 1, u64::MAX), u64::MAX);
        assert_eq!(score, FraudScore::Clear);
    }
}
