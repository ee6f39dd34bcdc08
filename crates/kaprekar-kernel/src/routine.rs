//! The routine engine.
//!
//! Starting from a seed, each iteration arranges the current value's
//! digits descending and ascending, subtracts, and continues from the
//! difference. Before every iteration the current value is checked
//! against three halting conditions, in order:
//!
//! 1. a repeating-digit value for the width → [`Termination::IgnoredRepeatingDigits`]
//! 2. the width's constant → [`Termination::ReachedConstant`]
//! 3. the iteration cap → [`Termination::IterationCapReached`]
//!
//! A seed that halts on the first check yields an empty sequence.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_WIDTH, is_repeating_digit, kaprekar_constant};
use crate::digits::{Digits, Padding, digit_count};
use crate::error::RoutineError;
use crate::step::{Routine, Step, Termination};

/// Iteration cap used when none is given.
pub const DEFAULT_MAX_ITERATIONS: u32 = 8;

/// Parameters of a routine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineConfig {
    /// Digit width used for padding, constants, and repeating-digit sets.
    pub width: u32,
    pub max_iterations: u32,
    #[serde(default)]
    pub padding: Padding,
}

impl RoutineConfig {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            padding: Padding::default(),
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn validate(&self) -> Result<(), RoutineError> {
        if self.width == 0 {
            return Err(RoutineError::invalid("width", "must be at least 1"));
        }
        if self.width > MAX_WIDTH {
            return Err(RoutineError::invalid(
                "width",
                format!("{} exceeds the maximum of {MAX_WIDTH}", self.width),
            ));
        }
        if self.max_iterations == 0 {
            return Err(RoutineError::invalid(
                "max_iterations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Validated, reusable routine runner.
///
/// Holds no state between runs; a single engine can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineEngine {
    config: RoutineConfig,
}

impl RoutineEngine {
    pub fn new(config: RoutineConfig) -> Result<Self, RoutineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RoutineConfig {
        &self.config
    }

    /// Run the routine from `number`, recording why it stopped.
    pub fn run(&self, number: i64) -> Result<Routine, RoutineError> {
        let seed = validate_seed(number)?;
        let RoutineConfig {
            width,
            max_iterations,
            padding,
        } = self.config;

        let mut steps = Vec::new();
        let mut current = seed;
        let termination = loop {
            if let Some(reason) = self.halt_reason(current, steps.len()) {
                log::trace!(
                    "seed {seed}: stopped at {current} after {} steps ({reason})",
                    steps.len()
                );
                break reason;
            }

            let digits = Digits::of(current);
            let ascending = digits.ascending();
            let descending = digits.descending(width, padding);
            let result = descending
                .checked_sub(ascending)
                .ok_or(RoutineError::InvariantViolation {
                    descending,
                    ascending,
                })?;

            log::debug!(
                "seed {seed} step {}: {descending} - {ascending} = {result}",
                steps.len() + 1
            );
            steps.push(Step {
                descending,
                ascending,
                result,
            });
            current = result;
        };

        debug_assert!(steps.len() <= max_iterations as usize);
        Ok(Routine {
            seed,
            width,
            steps,
            termination,
        })
    }

    /// Run the routine from `number`, returning only the steps.
    pub fn steps(&self, number: i64) -> Result<Vec<Step>, RoutineError> {
        self.run(number).map(Routine::into_steps)
    }

    fn halt_reason(&self, current: u64, taken: usize) -> Option<Termination> {
        if is_repeating_digit(current, self.config.width) {
            Some(Termination::IgnoredRepeatingDigits)
        } else if kaprekar_constant(self.config.width) == Some(current) {
            Some(Termination::ReachedConstant)
        } else if taken >= self.config.max_iterations as usize {
            Some(Termination::IterationCapReached)
        } else {
            None
        }
    }
}

fn validate_seed(number: i64) -> Result<u64, RoutineError> {
    let seed = u64::try_from(number)
        .map_err(|_| RoutineError::invalid("number", format!("{number} is negative")))?;
    if digit_count(seed) > MAX_WIDTH {
        return Err(RoutineError::invalid(
            "number",
            format!("{seed} has more than {MAX_WIDTH} digits"),
        ));
    }
    Ok(seed)
}

/// Compute the routine's steps for `number` at `width`, capped at
/// `max_iterations`, with the default padding policy.
pub fn compute_routine(
    number: i64,
    width: u32,
    max_iterations: u32,
) -> Result<Vec<Step>, RoutineError> {
    RoutineEngine::new(RoutineConfig::new(width).with_max_iterations(max_iterations))?
        .steps(number)
}
