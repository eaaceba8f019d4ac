use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::cards::hands::SubsetIterator;

/// The absolute strength of a made hand, totally ordered.
///
/// Comparison is lexicographic over (Ranking, Kickers), so any two
/// strengths from anywhere in the deck compare the way a showdown
/// would settle them. Hands of six or seven cards are reduced to
/// their best five-card subset before ranking.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        match hand.size() {
            0..=5 => Self::from(Evaluator::from(hand)),
            _ => SubsetIterator::from((5usize, hand))
                .map(Evaluator::from)
                .map(Self::from)
                .max()
                .expect("at least one five card subset"),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn stronger_category_wins() {
        let flush = Strength::from(Hand::try_from("As Ks Qs Js 9s").unwrap());
        let straight = Strength::from(Hand::try_from("Ts Jh Qd Kc Ah").unwrap());
        assert!(flush > straight);
    }

    #[test]
    fn kickers_break_ties() {
        let better = Strength::from(Hand::try_from("As Ah Kd Qc Js").unwrap());
        let worse = Strength::from(Hand::try_from("Ac Ad Kh Qs Ts").unwrap());
        assert!(better > worse);
    }

    #[test]
    fn identical_ranks_tie_across_suits() {
        let spades = Strength::from(Hand::try_from("As Ks Qd Jc 9h").unwrap());
        let hearts = Strength::from(Hand::try_from("Ah Kh Qc Jd 9s").unwrap());
        assert_eq!(spades, hearts);
    }

    #[test]
    fn seven_cards_reduce_to_best_five() {
        let seven = Strength::from(Hand::try_from("As Ks Qs Js Ts 2h 3d").unwrap());
        assert_eq!(seven.ranking(), Ranking::RoyalFlush);
    }

    #[test]
    fn six_cards_reduce_to_best_five() {
        let six = Strength::from(Hand::try_from("As Ah Ad Kc Kh 2s").unwrap());
        assert_eq!(six.ranking(), Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn subset_search_agrees_with_direct_evaluation() {
        let hand = Hand::try_from("As Ah Kd Kc Qs Jh 9d").unwrap();
        let direct = Strength::from(Evaluator::from(hand));
        let searched = Strength::from(hand);
        assert_eq!(direct, searched);
    }

    #[test]
    fn best_subset_dominates_all_subsets() {
        let hand = Hand::try_from("2c 7d 9h Js Qs Kh Ah").unwrap();
        let best = Strength::from(hand);
        for subset in SubsetIterator::from((5usize, hand)) {
            assert!(Strength::from(Evaluator::from(subset)) <= best);
        }
    }
}
