use super::equity::Equity;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::evaluation::strength::Strength;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Monte Carlo showdown sampler for one hand against one random opponent.
///
/// Each trial deals the opponent two cards and completes the board to
/// five from a deck that excludes every card already seen, so no card
/// appears twice within a trial. Hero and villain are compared at full
/// strength on the completed board.
pub struct Simulator {
    hole: Hand,
    board: Hand,
    rng: SmallRng,
}

impl Simulator {
    /// Seeded construction replays identical deals. Unseeded draws from OS entropy.
    pub fn new(hole: Hand, board: Hand, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self { hole, board, rng }
    }

    /// At least one trial always runs, so a zero request stays defined.
    pub fn simulate(&mut self, trials: u32) -> Equity {
        let trials = trials.max(1);
        let mut wins = 0;
        let mut ties = 0;
        for _ in 0..trials {
            match self.trial() {
                std::cmp::Ordering::Greater => wins += 1,
                std::cmp::Ordering::Equal => ties += 1,
                std::cmp::Ordering::Less => continue,
            }
        }
        Equity::from((wins, ties, trials))
    }

    /// One full deal-to-showdown comparison.
    fn trial(&mut self) -> std::cmp::Ordering {
        let mut deck = Deck::remaining(Hand::add(self.hole, self.board));
        let villain = deck.deal(2, &mut self.rng);
        let runout = deck.deal(5 - self.board.size(), &mut self.rng);
        let board = Hand::add(self.board, runout);
        let hero = Strength::from(Hand::add(self.hole, board));
        let villain = Strength::from(Hand::add(villain, board));
        hero.cmp(&villain)
    }
}
