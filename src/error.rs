use crate::cards::card::Card;

/// Everything that can go wrong at the engine boundary.
///
/// Degenerate-but-legal inputs (fewer than two known cards) are not errors;
/// they yield the defined "no hand" evaluation. Worker unavailability and
/// worker timeouts are recovered internally by synchronous fallback and
/// never surface through this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A token failed to parse as a rank-suit pair.
    #[error("invalid card token: {0}")]
    InvalidCard(String),
    /// The same card appears more than once across the supplied sets.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    /// More cards than the position allows (2 hole, 5 board).
    #[error("too many cards: {count} where at most {limit} fit")]
    TooManyCards { count: usize, limit: usize },
}
