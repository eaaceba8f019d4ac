use super::card::Card;
use super::hand::Hand;

/// Iterates over all k-card subsets of a source hand.
///
/// Gosper's hack walks bit combinations in a compressed index space of
/// one bit per source card; each combination is expanded back through
/// the source's sorted card list. It is deterministic (always the same
/// order), exhaustive (every subset exactly once), and allocates only
/// the source card list.
pub struct SubsetIterator {
    cards: Vec<Card>,
    next: u64,
}

impl SubsetIterator {
    pub fn combinations(&self) -> usize {
        let n = self.cards.len();
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >= 1 << self.cards.len()
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn current(&self) -> Hand {
        self.cards
            .iter()
            .enumerate()
            .filter(|(i, _)| self.next & (1 << i) != 0)
            .map(|(_, card)| Hand::from(*card))
            .fold(Hand::empty(), Hand::add)
    }

    fn advance(&mut self) {
        self.next = self.permute();
    }
}

impl Iterator for SubsetIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.current();
            self.advance();
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let combos = self.combinations();
        (combos, Some(combos))
    }
}

/// subset size and source hand are immutable and decided at construction
impl From<(usize, Hand)> for SubsetIterator {
    fn from((k, source): (usize, Hand)) -> Self {
        assert!(k <= source.size());
        Self {
            cards: source.into_iter().collect(),
            next: (1u64 << k) - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let source = Hand::try_from("2c 3c 4c 5c 6c").unwrap();
        let mut iter = SubsetIterator::from((3, source));
        assert_eq!(iter.next(), Hand::try_from("2c 3c 4c").ok());
        assert_eq!(iter.next(), Hand::try_from("2c 3c 5c").ok());
        assert_eq!(iter.next(), Hand::try_from("2c 4c 5c").ok());
        assert_eq!(iter.next(), Hand::try_from("3c 4c 5c").ok());
        assert_eq!(iter.next(), Hand::try_from("2c 3c 6c").ok());
        assert_eq!(iter.next(), Hand::try_from("2c 4c 6c").ok());
        assert_eq!(iter.next(), Hand::try_from("3c 4c 6c").ok());
        assert_eq!(iter.next(), Hand::try_from("2c 5c 6c").ok());
        assert_eq!(iter.next(), Hand::try_from("3c 5c 6c").ok());
        assert_eq!(iter.next(), Hand::try_from("4c 5c 6c").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn seven_choose_five() {
        let source = Hand::try_from("2c 5d 8h Js Qc Kd Ah").unwrap();
        let subsets = SubsetIterator::from((5, source)).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 21);
        for subset in subsets {
            assert_eq!(subset.size(), 5);
            assert!(!subset.collides(&source.complement()));
        }
    }

    #[test]
    fn counts_match_size_hint() {
        let source = Hand::try_from("2c 5d 8h Js Qc Kd").unwrap();
        let iter = SubsetIterator::from((5, source));
        assert_eq!(iter.combinations(), 6);
        assert_eq!(iter.count(), 6);
    }
}
