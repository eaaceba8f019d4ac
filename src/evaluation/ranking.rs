use crate::cards::rank::Rank;

/// The ten hand categories in canonical poker order.
///
/// The discriminants give each category its index in the hierarchy,
/// used for the per-category baseline of the strength score.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::HighCard => write!(f, "high card"),
            Category::OnePair => write!(f, "one pair"),
            Category::TwoPair => write!(f, "two pair"),
            Category::ThreeOfAKind => write!(f, "three of a kind"),
            Category::Straight => write!(f, "straight"),
            Category::Flush => write!(f, "flush"),
            Category::FullHouse => write!(f, "full house"),
            Category::FourOfAKind => write!(f, "four of a kind"),
            Category::StraightFlush => write!(f, "straight flush"),
            Category::RoyalFlush => write!(f, "royal flush"),
        }
    }
}

/// A hand's category together with its decisive rank(s).
///
/// Ordered by category first, then by the decisive ranks within the
/// category. Kicker cards are not part of this value; ties at equal
/// Ranking are broken by Kickers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, suit-restricted
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
    RoyalFlush,            // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) => 4,
            Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// Rank bits NOT consumed by the decisive ranks, i.e. kicker candidates.
    /// Flush kickers are suit-restricted and resolved by the evaluator.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !(u16::from(hi)),
            Ranking::Flush(..)
            | Ranking::FullHouse(..)
            | Ranking::StraightFlush(..)
            | Ranking::Straight(..)
            | Ranking::RoyalFlush => unreachable!(),
        }
    }

    /// Decisive ranks as (primary, secondary), zero where absent.
    pub fn decisive(&self) -> (u8, u8) {
        match *self {
            Ranking::RoyalFlush => (0, 0),
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => (u8::from(r), 0),
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => {
                (u8::from(hi), u8::from(lo))
            }
        }
    }
}

impl From<&Ranking> for Category {
    fn from(ranking: &Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOfAKind,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOfAKind,
            Ranking::StraightFlush(_) => Category::StraightFlush,
            Ranking::RoyalFlush => Category::RoyalFlush,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "{} high", r.name()),
            Ranking::OnePair(r) => write!(f, "pair of {}", r.plural()),
            Ranking::TwoPair(hi, lo) => {
                write!(f, "two pair, {} and {}", hi.plural(), lo.plural())
            }
            Ranking::ThreeOAK(r) => write!(f, "three of a kind, {}", r.plural()),
            Ranking::Straight(r) => write!(f, "{}-high straight", r.name()),
            Ranking::Flush(r) => write!(f, "{}-high flush", r.name()),
            Ranking::FullHouse(t, p) => {
                write!(f, "full house, {} full of {}", t.plural(), p.plural())
            }
            Ranking::FourOAK(r) => write!(f, "four of a kind, {}", r.plural()),
            Ranking::StraightFlush(r) => write!(f, "{}-high straight flush", r.name()),
            Ranking::RoyalFlush => write!(f, "royal flush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_is_canonical() {
        assert!(Ranking::HighCard(Rank::Ace) < Ranking::OnePair(Rank::Two));
        assert!(Ranking::OnePair(Rank::Ace) < Ranking::TwoPair(Rank::Two, Rank::Three));
        assert!(Ranking::Straight(Rank::Ace) < Ranking::Flush(Rank::Seven));
        assert!(Ranking::Flush(Rank::Ace) < Ranking::FullHouse(Rank::Two, Rank::Three));
        assert!(Ranking::FourOAK(Rank::Ace) < Ranking::StraightFlush(Rank::Five));
        assert!(Ranking::StraightFlush(Rank::King) < Ranking::RoyalFlush);
    }

    #[test]
    fn decisive_ranks_break_ties_within_category() {
        assert!(Ranking::OnePair(Rank::King) < Ranking::OnePair(Rank::Ace));
        assert!(
            Ranking::FullHouse(Rank::King, Rank::Eight)
                < Ranking::FullHouse(Rank::King, Rank::Nine)
        );
    }

    #[test]
    fn category_indices_cover_zero_to_nine() {
        assert_eq!(Category::HighCard.index(), 0);
        assert_eq!(Category::RoyalFlush.index(), 9);
        assert!(Category::Flush < Category::FullHouse);
    }

    #[test]
    fn descriptions_read_naturally() {
        let full = Ranking::FullHouse(Rank::King, Rank::Eight);
        assert_eq!(full.to_string(), "full house, kings full of eights");
        assert_eq!(Ranking::RoyalFlush.to_string(), "royal flush");
        assert_eq!(Ranking::HighCard(Rank::Ace).to_string(), "ace high");
    }
}
