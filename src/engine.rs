use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    average::AverageCalculator,
    config::EngineConfig,
    error::Result,
    ledger::{Admission, Ledger},
    pattern::{PatternDetector, StructuringSignal},
    scorer::{FraudScore, FraudScorer},
    transaction::{AccountId, Transaction},
};

/// Outcome of [`Engine::ingest_and_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    /// The id was already recorded. No scoring took place.
    Duplicate,
    Recorded(FraudScore),
}

impl Assessment {
    /// Numeric score, 0 for duplicates and clear transactions.
    pub fn score(&self) -> u64 {
        match self {
            Assessment::Duplicate => 0,
            Assessment::Recorded(score) => score.value(),
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, Assessment::Recorded(_))
    }
}

/// Owns a ledger and scores transactions as they are recorded.
#[derive(Debug, Default)]
pub struct Engine {
    ledger: Ledger,
    scorer: FraudScorer,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Engine {
            ledger: Ledger::new(),
            scorer: FraudScorer::new(config.excess_multiplier),
        })
    }

    /// Records `tx` and scores it against the account's average from before it arrived.
    pub fn ingest_and_score(&mut self, tx: Transaction) -> Assessment {
        let average_before = self.average(tx.account_id());

        if self.ledger.ingest(tx) == Admission::Duplicate {
            return Assessment::Duplicate;
        }

        let score = self.scorer.score(&tx, average_before);
        if let FraudScore::Excessive { excess } = score {
            tracing::info!(
                tx = tx.tx_id(),
                account = tx.account_id(),
                amount = tx.amount(),
                average = average_before,
                excess,
                "excessive debit recorded"
            );
        }

        Assessment::Recorded(score)
    }

    /// Scores `tx` against the current average without recording it.
    pub fn score_candidate(&self, tx: &Transaction) -> FraudScore {
        self.scorer.score(tx, self.average(tx.account_id()))
    }

    pub fn average(&self, account_id: AccountId) -> u64 {
        AverageCalculator::new(&self.ledger).average(account_id)
    }

    pub fn pattern_above_threshold(&self, threshold: u64) -> StructuringSignal {
        PatternDetector::new(&self.ledger).pattern_above_threshold(threshold)
    }

    pub fn transactions_for(&self, account_id: AccountId) -> &[Transaction] {
        self.ledger.transactions_for(account_id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// An [`Engine`] behind a lock, for callers on several threads.
///
/// Every call holds the lock for its whole duration, so the average read and
/// the append inside `ingest_and_score` are never interleaved with another call.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        SharedEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn ingest_and_score(&self, tx: Transaction) -> Assessment {
        self.inner.lock().ingest_and_score(tx)
    }

    pub fn score_candidate(&self, tx: &Transaction) -> FraudScore {
        self.inner.lock().score_candidate(tx)
    }

    pub fn average(&self, account_id: AccountId) -> u64 {
        self.inner.lock().average(account_id)
    }

    pub fn pattern_above_threshold(&self, threshold: u64) -> StructuringSignal {
        self.inner.lock().pattern_above_threshold(threshold)
    }

    /// Runs `f` against a consistent snapshot of the engine.
    pub fn with<R>(&self, f: impl FnOnce(&Engine) -> R) -> R {
        f(&self.inner.lock())
    }
}
