use super::table::Table;
use crate::equity::equity::Equity;
use crate::evaluation::evaluation::Evaluation;
use crate::strategy::context::Position;
use crate::strategy::strategy::Strategy;
use crate::Probability;

/// Evaluations depend on nothing but the card set, so the 52-bit union
/// of hole and board is the whole key.
pub type EvaluationKey = u64;
/// Equities also depend on how hard we sampled.
pub type EquityKey = (u64, u64, u32);
/// Strategies additionally depend on pot, stack (in hundredths), and position.
pub type StrategyKey = (u64, u64, u64, u64, Position);

/// The three result caches of one engine instance.
///
/// Keys are canonical card-set encodings plus whatever context the
/// result depends on, so permuted inputs land on the same entry and
/// different contexts never collide.
pub struct Caches {
    evaluations: Table<EvaluationKey, Evaluation>,
    equities: Table<EquityKey, Equity>,
    strategies: Table<StrategyKey, Strategy>,
}

impl Caches {
    pub fn new(evaluations: usize, equities: usize, strategies: usize) -> Self {
        Self {
            evaluations: Table::new(evaluations),
            equities: Table::new(equities),
            strategies: Table::new(strategies),
        }
    }

    pub fn evaluations(&self) -> &Table<EvaluationKey, Evaluation> {
        &self.evaluations
    }
    pub fn equities(&self) -> &Table<EquityKey, Equity> {
        &self.equities
    }
    pub fn strategies(&self) -> &Table<StrategyKey, Strategy> {
        &self.strategies
    }

    /// Total resident entries across the three tables.
    pub fn size(&self) -> usize {
        self.evaluations.len() + self.equities.len() + self.strategies.len()
    }
    pub fn clear(&self) {
        self.evaluations.clear();
        self.equities.clear();
        self.strategies.clear();
    }
    /// Mean confidence of the resident equity estimates, zero when empty.
    pub fn average_confidence(&self) -> Probability {
        let confidences = self
            .equities
            .snapshot()
            .iter()
            .map(Equity::confidence)
            .collect::<Vec<Probability>>();
        match confidences.len() {
            0 => 0.,
            n => confidences.iter().sum::<Probability>() / n as Probability,
        }
    }
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            evaluations: self.evaluations.len(),
            equities: self.equities.len(),
            strategies: self.strategies.len(),
            average_confidence: self.average_confidence(),
        }
    }
}

/// A point-in-time summary of cache residency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CacheStats {
    pub evaluations: usize,
    pub equities: usize,
    pub strategies: usize,
    pub average_confidence: Probability,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} evaluations, {} equities, {} strategies, avg confidence {:.3}",
            self.evaluations, self.equities, self.strategies, self.average_confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    #[test]
    fn distinct_tables_do_not_interfere() {
        let caches = Caches::new(4, 4, 4);
        let hand = Hand::try_from("As Ah").unwrap();
        caches
            .evaluations()
            .put(u64::from(hand), Evaluation::from(hand));
        assert_eq!(caches.evaluations().len(), 1);
        assert_eq!(caches.equities().len(), 0);
        assert_eq!(caches.size(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let caches = Caches::new(4, 4, 4);
        let hand = Hand::try_from("Kd Kc").unwrap();
        caches
            .evaluations()
            .put(u64::from(hand), Evaluation::from(hand));
        caches
            .equities()
            .put((u64::from(hand), 0, 100), Equity::from((50, 0, 100)));
        caches.clear();
        assert_eq!(caches.size(), 0);
    }

    #[test]
    fn average_confidence_means_over_equities() {
        let caches = Caches::new(4, 4, 4);
        assert_eq!(caches.average_confidence(), 0.);
        caches.equities().put((1, 0, 100), Equity::from((50, 0, 100)));
        caches
            .equities()
            .put((2, 0, 10_000), Equity::from((5000, 0, 10_000)));
        let expected = (0.9 + 0.99) / 2.;
        assert!((caches.average_confidence() - expected).abs() < 1e-6);
    }

    #[test]
    fn stats_reflect_residency() {
        let caches = Caches::new(4, 4, 4);
        caches.equities().put((1, 0, 100), Equity::from((50, 0, 100)));
        let stats = caches.stats();
        assert_eq!(stats.equities, 1);
        assert_eq!(stats.evaluations, 0);
        assert!(stats.average_confidence > 0.);
    }
}
