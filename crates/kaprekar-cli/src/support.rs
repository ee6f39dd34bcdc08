use crate::cli::RoutineArgs;
use kaprekar_kernel::{
    DEFAULT_MAX_ITERATIONS, Padding, Routine, RoutineConfig, RoutineEngine, Step,
    kaprekar_constant, digit_count,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Smallest seed accepted without `--unbounded`.
pub const INPUT_MIN: i64 = 100;
/// Largest seed accepted without `--unbounded`.
pub const INPUT_MAX: i64 = 9999;

/// On-disk routine configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutineConfigFile {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub max_iterations: Option<u32>,
    #[serde(default)]
    pub padding: Option<Padding>,
}

impl RoutineConfigFile {
    pub fn parse(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
        Self::parse(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
    }
}

/// Routine settings after merging flags over the config file over defaults.
///
/// `width` stays unset when neither source names one; each seed then runs
/// at its own digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub width: Option<u32>,
    pub max_iterations: u32,
    pub padding: Padding,
    pub unbounded: bool,
}

impl Settings {
    pub fn merge(args: &RoutineArgs, file: RoutineConfigFile) -> Self {
        Self {
            width: args.width.or(file.width),
            max_iterations: args
                .max_iterations
                .or(file.max_iterations)
                .unwrap_or(DEFAULT_MAX_ITERATIONS),
            padding: args
                .padding
                .map(Padding::from)
                .or(file.padding)
                .unwrap_or_default(),
            unbounded: args.unbounded,
        }
    }

    pub fn width_for(&self, seed: i64) -> u32 {
        self.width
            .unwrap_or_else(|| digit_count(seed.unsigned_abs()))
    }

    pub fn engine_for(&self, seed: i64) -> Result<RoutineEngine, String> {
        let config = RoutineConfig::new(self.width_for(seed))
            .with_max_iterations(self.max_iterations)
            .with_padding(self.padding);
        RoutineEngine::new(config).map_err(|e| e.to_string())
    }

    pub fn check_bounds(&self, seed: i64) -> Result<(), String> {
        if self.unbounded || (INPUT_MIN..=INPUT_MAX).contains(&seed) {
            return Ok(());
        }
        Err(format!(
            "number {seed} is outside {INPUT_MIN}..={INPUT_MAX}; pass --unbounded to allow it"
        ))
    }
}

pub fn settings_or_exit(args: &RoutineArgs) -> Settings {
    let file = match &args.config {
        Some(path) => RoutineConfigFile::load(path).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        }),
        None => RoutineConfigFile::default(),
    };
    let settings = Settings::merge(args, file);
    log::debug!("resolved routine settings: {settings:?}");
    settings
}

pub fn run_or_exit(settings: &Settings, seed: i64) -> Routine {
    settings
        .engine_for(seed)
        .and_then(|engine| engine.run(seed).map_err(|e| e.to_string()))
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        })
}

pub fn exit_with(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn print_json(payload: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

/// Render one numbered step row, right-aligning each column to `column`
/// characters and marking a constant result with `*`.
pub fn format_step(index: usize, step: &Step, width: u32, column: usize) -> String {
    let marker = if kaprekar_constant(width) == Some(step.result) {
        "*"
    } else {
        ""
    };
    format!(
        "{:>3}. {:>column$} - {:>column$} = {:>column$}{marker}",
        index + 1,
        step.descending,
        step.ascending,
        step.result,
    )
}

/// Widest rendered value among the steps.
pub fn column_width(steps: &[Step]) -> usize {
    steps
        .iter()
        .flat_map(|s| [s.descending, s.ascending, s.result])
        .map(|v| digit_count(v) as usize)
        .max()
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PaddingArg;

    #[test]
    fn config_file_parses_all_keys() {
        let file = RoutineConfigFile::parse(
            "width = 4\nmax_iterations = 5\npadding = \"full-width\"\n",
        )
        .unwrap();
        assert_eq!(
            file,
            RoutineConfigFile {
                width: Some(4),
                max_iterations: Some(5),
                padding: Some(Padding::FullWidth),
            }
        );
    }

    #[test]
    fn config_file_rejects_unknown_keys() {
        assert!(RoutineConfigFile::parse("depth = 3\n").is_err());
    }

    #[test]
    fn flags_override_file_over_defaults() {
        let args = RoutineArgs {
            width: Some(3),
            padding: Some(PaddingArg::SingleTrailingZero),
            ..RoutineArgs::default()
        };
        let file = RoutineConfigFile {
            width: Some(4),
            max_iterations: Some(6),
            padding: Some(Padding::FullWidth),
        };
        let settings = Settings::merge(&args, file);
        assert_eq!(settings.width, Some(3));
        assert_eq!(settings.max_iterations, 6);
        assert_eq!(settings.padding, Padding::SingleTrailingZero);

        let defaults = Settings::merge(&RoutineArgs::default(), RoutineConfigFile::default());
        assert_eq!(defaults.width, None);
        assert_eq!(defaults.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(defaults.padding, Padding::SingleTrailingZero);
    }

    #[test]
    fn width_defaults_to_seed_digit_count() {
        let settings = Settings::merge(&RoutineArgs::default(), RoutineConfigFile::default());
        assert_eq!(settings.width_for(495), 3);
        assert_eq!(settings.width_for(3524), 4);
    }

    #[test]
    fn bounds_follow_input_range() {
        let settings = Settings::merge(&RoutineArgs::default(), RoutineConfigFile::default());
        assert!(settings.check_bounds(100).is_ok());
        assert!(settings.check_bounds(9999).is_ok());
        assert!(settings.check_bounds(99).is_err());
        assert!(settings.check_bounds(10000).is_err());

        let unbounded = Settings {
            unbounded: true,
            ..settings
        };
        assert!(unbounded.check_bounds(12).is_ok());
    }

    #[test]
    fn step_rows_mark_the_constant() {
        let step = Step {
            descending: 8532,
            ascending: 2358,
            result: 6174,
        };
        assert_eq!(format_step(2, &step, 4, 4), "  3. 8532 - 2358 = 6174*");
        let step = Step {
            descending: 8730,
            ascending: 378,
            result: 8352,
        };
        assert_eq!(format_step(1, &step, 4, 4), "  2. 8730 -  378 = 8352");
    }
}
