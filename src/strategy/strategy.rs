use super::action::Choice;
use crate::Probability;
use crate::Utility;

/// A mixed recommendation over the closed action set.
///
/// Frequencies are normalized to sum to one and every listed action
/// carries strictly positive weight. The aggregate expected value is
/// the frequency-weighted sum over the actions, and exploitability is
/// a small heuristic distance from balance, not an equilibrium gap.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Strategy {
    pub actions: Vec<Choice>,
    pub expected_value: Utility,
    pub exploitability: Probability,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for choice in &self.actions {
            writeln!(f, "{}", choice)?;
        }
        write!(
            f,
            "ev {:>+7.2} exploitability {:.3}",
            self.expected_value, self.exploitability
        )
    }
}
