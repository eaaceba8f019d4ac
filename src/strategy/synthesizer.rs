use super::action::Action;
use super::action::Choice;
use super::context::GameContext;
use super::context::Position;
use super::strategy::Strategy;
use crate::cards::street::Street;
use crate::Chips;
use crate::Probability;
use crate::Utility;

/// Banded heuristic mapping a strength estimate onto a mixed strategy.
///
/// Overlapping strength bands each volunteer one candidate action with
/// a raw weight: fold below, call and check through the middle, raise
/// above. The bands cover all of [0, 1] between them, so synthesis
/// always yields at least one action. Weights normalize into
/// frequencies. This is an explainable approximation of balanced play
/// and makes no equilibrium claim.
pub struct Synthesizer {
    strength: Probability,
    context: GameContext,
    street: Street,
}

impl From<(Probability, GameContext, Street)> for Synthesizer {
    fn from((strength, context, street): (Probability, GameContext, Street)) -> Self {
        Self {
            strength,
            context,
            street,
        }
    }
}

impl Synthesizer {
    pub fn synthesize(&self) -> Strategy {
        let mut actions = [
            self.find_fold(),
            self.find_check(),
            self.find_call(),
            self.find_raise(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<Choice>>();
        let total = actions.iter().map(|c| c.frequency).sum::<Probability>();
        for choice in actions.iter_mut() {
            choice.frequency /= total;
        }
        let expected_value = actions
            .iter()
            .map(|c| c.frequency * c.expected_value)
            .sum::<Utility>();
        Strategy {
            actions,
            expected_value,
            exploitability: self.exploitability(),
        }
    }

    fn find_fold(&self) -> Option<Choice> {
        let weight = crate::FOLD_CEILING - self.strength;
        match weight > 0. {
            false => None,
            true => Some(Choice {
                action: Action::Fold,
                frequency: weight,
                sizing: None,
                expected_value: crate::FOLD_EV_FACTOR * self.context.pot,
                reasoning: format!(
                    "{:.0}% equity is too thin to continue",
                    self.strength * 100.
                ),
            }),
        }
    }
    /// Pot control is only on the menu once a board is out.
    fn find_check(&self) -> Option<Choice> {
        if self.street == Street::Pref {
            return None;
        }
        let below = self.strength - crate::CHECK_FLOOR;
        let above = crate::CHECK_CEILING - self.strength;
        let weight = below.min(above);
        match weight > 0. {
            false => None,
            true => Some(Choice {
                action: Action::Check,
                frequency: weight,
                sizing: None,
                expected_value: self.strength * self.context.pot * 0.5,
                reasoning: String::from("pot control with a marginal holding"),
            }),
        }
    }
    fn find_call(&self) -> Option<Choice> {
        let below = self.strength - crate::CALL_FLOOR;
        let above = crate::CALL_CEILING - self.strength;
        let weight = below.min(above);
        match weight > 0. {
            false => None,
            true => Some(Choice {
                action: Action::Call,
                frequency: weight,
                sizing: None,
                expected_value: self.strength * self.context.pot
                    - (1. - self.strength) * self.context.pot * 0.5,
                reasoning: format!(
                    "{:.0}% equity prices in a call",
                    self.strength * 100.
                ),
            }),
        }
    }
    fn find_raise(&self) -> Option<Choice> {
        let floor = match self.context.position {
            Position::Late => crate::RAISE_FLOOR - crate::LATE_SHIFT,
            _ => crate::RAISE_FLOOR,
        };
        let weight = self.strength - floor;
        match weight > 0. {
            false => None,
            true => {
                let sizing = self.sizing();
                Some(Choice {
                    action: Action::Raise,
                    frequency: weight,
                    sizing: Some(sizing),
                    expected_value: self.strength * (self.context.pot + sizing)
                        - (1. - self.strength) * sizing,
                    reasoning: match self.context.position {
                        Position::Late => format!(
                            "{:.0}% equity plays up in position, raise for value",
                            self.strength * 100.
                        ),
                        _ => format!("{:.0}% equity, raise for value", self.strength * 100.),
                    },
                })
            }
        }
    }

    /// A pot fraction growing with strength, capped by the stack.
    fn sizing(&self) -> Chips {
        (self.context.pot * (0.5 + self.strength)).min(self.context.stack)
    }
    /// Peaks for middling strengths where mixed play is hardest to
    /// balance, strictly below 0.1.
    fn exploitability(&self) -> Probability {
        0.02 + 0.07 * (1. - (2. * self.strength - 1.).abs())
    }
}
