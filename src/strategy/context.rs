use crate::Chips;

/// Seat position relative to the button.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Early,
    Middle,
    Late,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Position::Early => write!(f, "early"),
            Position::Middle => write!(f, "middle"),
            Position::Late => write!(f, "late"),
        }
    }
}

/// The table state a recommendation is conditioned on.
///
/// Pot and stack are single-number chip amounts. Callers that have no
/// opinion take the default of a 100 chip pot behind a 1000 chip stack
/// from middle position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GameContext {
    pub pot: Chips,
    pub stack: Chips,
    pub position: Position,
}

impl Default for GameContext {
    fn default() -> Self {
        Self {
            pot: 100.,
            stack: 1000.,
            position: Position::Middle,
        }
    }
}

impl std::fmt::Display for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "pot {:.0} stack {:.0} {}",
            self.pot, self.stack, self.position
        )
    }
}
