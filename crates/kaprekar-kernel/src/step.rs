//! Routine steps and the record of why a routine stopped.

use serde::{Deserialize, Serialize};

/// One iteration of the routine: `descending - ascending = result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub descending: u64,
    pub ascending: u64,
    pub result: u64,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} = {}",
            self.descending, self.ascending, self.result
        )
    }
}

/// Why the sequence stopped growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The current value is the constant for the configured width.
    ReachedConstant,

    /// The current value has a single distinct digit.
    IgnoredRepeatingDigits,

    /// The iteration cap was hit first.
    IterationCapReached,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReachedConstant => write!(f, "reached constant"),
            Self::IgnoredRepeatingDigits => write!(f, "ignored repeating digits"),
            Self::IterationCapReached => write!(f, "iteration cap reached"),
        }
    }
}

/// A completed routine: the seed, the steps taken, and why it stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub seed: u64,
    pub width: u32,
    pub steps: Vec<Step>,
    pub termination: Termination,
}

impl Routine {
    /// The value the routine stopped at: the last result, or the seed when
    /// no step was taken.
    pub fn final_value(&self) -> u64 {
        self.steps.last().map_or(self.seed, |s| s.result)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_display() {
        let step = Step {
            descending: 8730,
            ascending: 378,
            result: 8352,
        };
        assert_eq!(step.to_string(), "8730 - 378 = 8352");
    }

    #[test]
    fn final_value_falls_back_to_seed() {
        let routine = Routine {
            seed: 6174,
            width: 4,
            steps: Vec::new(),
            termination: Termination::ReachedConstant,
        };
        assert!(routine.is_empty());
        assert_eq!(routine.final_value(), 6174);
    }

    #[test]
    fn termination_serializes_snake_case() {
        let json = serde_json::to_string(&Termination::IgnoredRepeatingDigits).unwrap();
        assert_eq!(json, "\"ignored_repeating_digits\"");
    }
}
