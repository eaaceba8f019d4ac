use crate::Probability;

/// Showdown equity estimated by Monte Carlo sampling.
///
/// Win, tie, and lose rates partition the trials, so they sum to one
/// up to float rounding. Confidence grows with the number of trials
/// and only with the number of trials, so downsampled estimates are
/// visibly less trustworthy than full runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Equity {
    win: Probability,
    tie: Probability,
    lose: Probability,
    confidence: Probability,
    iterations: u32,
}

impl Equity {
    pub fn win(&self) -> Probability {
        self.win
    }
    pub fn tie(&self) -> Probability {
        self.tie
    }
    pub fn lose(&self) -> Probability {
        self.lose
    }
    pub fn confidence(&self) -> Probability {
        self.confidence
    }
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
    /// Expected pot share, counting a chopped pot as half a win.
    pub fn strength(&self) -> Probability {
        self.win + self.tie / 2.
    }
}

/// (wins, ties, trials) tallies
impl From<(u32, u32, u32)> for Equity {
    fn from((wins, ties, trials): (u32, u32, u32)) -> Self {
        assert!(trials > 0);
        assert!(wins + ties <= trials);
        let n = trials as Probability;
        Self {
            win: wins as Probability / n,
            tie: ties as Probability / n,
            lose: (trials - wins - ties) as Probability / n,
            confidence: 1. - 1. / n.sqrt(),
            iterations: trials,
        }
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "win {:5.2}% tie {:5.2}% lose {:5.2}% ({} trials)",
            self.win * 100.,
            self.tie * 100.,
            self.lose * 100.,
            self.iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_partition_unity() {
        let equity = Equity::from((8512, 43, 10_000));
        let total = equity.win() + equity.tie() + equity.lose();
        assert!((total - 1.).abs() < 1e-6);
    }

    #[test]
    fn strength_counts_half_the_ties() {
        let equity = Equity::from((40, 20, 100));
        assert!((equity.strength() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn confidence_grows_with_trials() {
        let small = Equity::from((50, 0, 100));
        let large = Equity::from((5000, 0, 10_000));
        assert!(small.confidence() < large.confidence());
        assert!(large.confidence() < 1.);
    }
}
