use crate::Chips;
use crate::Probability;
use crate::Utility;

/// The closed set of moves a recommendation can name.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Raise => write!(f, "raise"),
        }
    }
}

/// One weighted entry in a mixed strategy.
///
/// Sizing is present only for raises and never exceeds the stack the
/// strategy was synthesized against.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Choice {
    pub action: Action,
    pub frequency: Probability,
    pub sizing: Option<Chips>,
    pub expected_value: Utility,
    pub reasoning: String,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.sizing {
            Some(sizing) => write!(
                f,
                "{:<6} {:>5.1}% sizing {:>6.1} ev {:>+7.2}",
                self.action,
                self.frequency * 100.,
                sizing,
                self.expected_value
            ),
            None => write!(
                f,
                "{:<6} {:>5.1}% {:>13} ev {:>+7.2}",
                self.action,
                self.frequency * 100.,
                "",
                self.expected_value
            ),
        }
    }
}
