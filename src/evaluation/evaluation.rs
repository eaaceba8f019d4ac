use super::ranking::Category;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::Probability;

/// The reportable outcome of evaluating two to seven cards.
///
/// Wraps a Strength in presentation form: a category, a normalized
/// score in [0, 1] that is monotone across categories, a human
/// description, and the kickers from high to low. Fewer than two
/// cards produce the empty evaluation rather than an error.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Evaluation {
    category: Category,
    strength: Probability,
    description: String,
    kickers: Vec<Rank>,
}

impl Evaluation {
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn strength(&self) -> Probability {
        self.strength
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }

    /// The degenerate evaluation for empty or single-card input.
    pub fn none() -> Self {
        Self {
            category: Category::HighCard,
            strength: 0.,
            description: String::from("no hand"),
            kickers: Vec::new(),
        }
    }

    /// Collapse a Ranking into a score on [0, 1].
    ///
    /// Categories occupy disjoint bands in index order, and the decisive
    /// ranks position the hand within its band. A royal flush is exactly 1.
    fn score(ranking: Ranking) -> Probability {
        match ranking {
            Ranking::RoyalFlush => 1.,
            ranking => {
                let index = Category::from(&ranking).index() as Probability;
                let (primary, secondary) = ranking.decisive();
                let fraction = (primary as Probability * 13. + secondary as Probability) / 169.;
                (index + fraction) / 9.
            }
        }
    }
}

impl From<Hand> for Evaluation {
    fn from(hand: Hand) -> Self {
        if hand.size() < 2 {
            return Self::none();
        }
        let strength = Strength::from(hand);
        let ranking = strength.ranking();
        let kickers = Vec::<Rank>::from(strength.kickers())
            .into_iter()
            .rev()
            .collect();
        Self {
            category: Category::from(&ranking),
            strength: Self::score(ranking),
            description: ranking.to_string(),
            kickers,
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({:.4})", self.description, self.strength)
    }
}
