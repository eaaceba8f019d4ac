use super::card::Card;
use super::hand::Hand;

/// The cards still available to be dealt.
///
/// Wraps a [`Hand`] of remaining cards with uniform random draws for
/// Monte Carlo sampling. Draws are without replacement: a drawn card
/// leaves the deck, so no card can ever be dealt twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// The deck with all already-known cards removed.
    pub fn remaining(known: Hand) -> Self {
        Self(known.complement())
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Draws and removes a uniformly random card.
    ///
    /// Unlike `Hand::next()` which is deterministic, this samples
    /// uniformly by walking to the i-th set bit.
    pub fn draw(&mut self, rng: &mut impl rand::Rng) -> Card {
        debug_assert!(self.0.size() > 0);
        let i = rng.random_range(0..self.0.size());
        let mut ones = 0;
        let mut deck = u64::from(self.0);
        let mut card = deck.trailing_zeros() as u8;
        while ones < i {
            deck = deck & (deck - 1);
            card = deck.trailing_zeros() as u8;
            ones = ones + 1;
        }
        let card = Card::from(card);
        self.0.remove(card);
        card
    }
    /// Draws n cards as a hand.
    pub fn deal(&mut self, n: usize, rng: &mut impl rand::Rng) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
