use crate::cli::RoutineArgs;
use crate::support::{exit_with, print_json, run_or_exit, settings_or_exit};
use kaprekar_kernel::{Routine, Termination};
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RangeSummary {
    pub seeds: usize,
    pub reached_constant: usize,
    pub ignored_repeating_digits: usize,
    pub iteration_cap_reached: usize,
    /// Sequence length → number of seeds with that length.
    pub lengths: BTreeMap<usize, usize>,
    /// First seed with the longest sequence.
    pub longest: Option<(u64, usize)>,
}

impl RangeSummary {
    pub fn record(&mut self, routine: &Routine) {
        self.seeds += 1;
        match routine.termination {
            Termination::ReachedConstant => self.reached_constant += 1,
            Termination::IgnoredRepeatingDigits => self.ignored_repeating_digits += 1,
            Termination::IterationCapReached => self.iteration_cap_reached += 1,
        }
        *self.lengths.entry(routine.len()).or_default() += 1;
        if self.longest.is_none_or(|(_, len)| routine.len() > len) {
            self.longest = Some((routine.seed, routine.len()));
        }
    }
}

pub fn run(from: i64, to: i64, args: RoutineArgs, json_output: bool) {
    if from > to {
        exit_with(format!("empty range: {from} > {to}"));
    }
    let settings = settings_or_exit(&args);
    for bound in [from, to] {
        if let Err(e) = settings.check_bounds(bound) {
            exit_with(e);
        }
    }

    let mut summary = RangeSummary::default();
    for seed in from..=to {
        summary.record(&run_or_exit(&settings, seed));
    }

    if json_output {
        let lengths: BTreeMap<String, usize> = summary
            .lengths
            .iter()
            .map(|(len, count)| (len.to_string(), *count))
            .collect();
        let payload = json!({
            "from": from,
            "to": to,
            "width": settings.width,
            "max_iterations": settings.max_iterations,
            "padding": settings.padding,
            "seeds": summary.seeds,
            "reached_constant": summary.reached_constant,
            "ignored_repeating_digits": summary.ignored_repeating_digits,
            "iteration_cap_reached": summary.iteration_cap_reached,
            "lengths": lengths,
            "longest": summary.longest.map(|(seed, length)| json!({
                "seed": seed,
                "length": length,
            })),
        });
        print_json(&payload);
        return;
    }

    println!("kaprekar range {from}..={to}");
    println!("  Seeds: {}", summary.seeds);
    println!("  Reached constant: {}", summary.reached_constant);
    println!(
        "  Ignored repeating digits: {}",
        summary.ignored_repeating_digits
    );
    println!("  Iteration cap reached: {}", summary.iteration_cap_reached);
    if let Some((seed, length)) = summary.longest {
        println!("  Longest: {seed} ({length} steps)");
    }
    println!("  Lengths:");
    for (length, count) in &summary.lengths {
        println!("    - {length}: {count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaprekar_kernel::{RoutineConfig, RoutineEngine};

    #[test]
    fn summary_counts_three_digit_seeds() {
        let engine = RoutineEngine::new(RoutineConfig::new(3)).unwrap();
        let mut summary = RangeSummary::default();
        for seed in 100..=999 {
            summary.record(&engine.run(seed).unwrap());
        }
        assert_eq!(summary.seeds, 900);
        assert_eq!(summary.ignored_repeating_digits, 9);
        assert_eq!(summary.iteration_cap_reached, 0);
        assert_eq!(summary.reached_constant, 891);
        assert_eq!(summary.lengths.get(&0), Some(&10));
        assert_eq!(summary.longest.map(|(_, len)| len), Some(6));
    }
}
