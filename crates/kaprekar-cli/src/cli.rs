use clap::{Args, Parser, Subcommand, ValueEnum};
use kaprekar_kernel::Padding;

#[derive(Parser)]
#[command(
    name = "kaprekar",
    about = "Kaprekar's routine: sort digits, subtract, repeat until 495 or 6174",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the routine for one seed and print each step
    Run {
        /// Seed number (100 to 9999 unless --unbounded)
        #[arg(allow_negative_numbers = true)]
        number: i64,

        #[command(flatten)]
        routine: RoutineArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the routine for every seed in an inclusive range and summarize
    Range {
        /// First seed
        #[arg(allow_negative_numbers = true)]
        from: i64,

        /// Last seed (inclusive)
        #[arg(allow_negative_numbers = true)]
        to: i64,

        #[command(flatten)]
        routine: RoutineArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Routine parameters shared by every subcommand.
#[derive(Args, Clone, Debug, Default)]
pub struct RoutineArgs {
    /// Digit width (defaults to the seed's own digit count)
    #[arg(long)]
    pub width: Option<u32>,

    /// Iteration cap
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Padding policy for width-deficient descending arrangements
    #[arg(long)]
    pub padding: Option<PaddingArg>,

    /// TOML file supplying width, max_iterations, and padding
    #[arg(long)]
    pub config: Option<String>,

    /// Accept seeds outside 100..=9999
    #[arg(long)]
    pub unbounded: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PaddingArg {
    #[value(name = "single-trailing-zero")]
    SingleTrailingZero,
    #[value(name = "full-width")]
    FullWidth,
}

impl From<PaddingArg> for Padding {
    fn from(arg: PaddingArg) -> Self {
        match arg {
            PaddingArg::SingleTrailingZero => Padding::SingleTrailingZero,
            PaddingArg::FullWidth => Padding::FullWidth,
        }
    }
}
