//! Decimal digit extraction and arrangement.

use serde::{Deserialize, Serialize};

/// How the descending arrangement of a width-deficient number is padded.
///
/// The two policies agree whenever the number is exactly one digit short,
/// which covers every deficient value the 3- and 4-digit routines meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Padding {
    /// Append one trailing zero, however many digits are missing.
    #[default]
    SingleTrailingZero,

    /// Append zeros until the arrangement has exactly `width` digits.
    FullWidth,
}

impl std::fmt::Display for Padding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleTrailingZero => write!(f, "single-trailing-zero"),
            Self::FullWidth => write!(f, "full-width"),
        }
    }
}

impl std::str::FromStr for Padding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single-trailing-zero" | "single_trailing_zero" | "single" => {
                Ok(Self::SingleTrailingZero)
            }
            "full-width" | "full_width" | "full" => Ok(Self::FullWidth),
            _ => Err(format!("unknown padding policy: {s}")),
        }
    }
}

/// Base-10 digits of a number, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(Vec<u8>);

impl Digits {
    pub fn of(number: u64) -> Self {
        if number == 0 {
            return Self(vec![0]);
        }
        let mut digits = Vec::new();
        let mut n = number;
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        digits.reverse();
        Self(digits)
    }

    pub fn count(&self) -> u32 {
        self.0.len() as u32
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Digits sorted non-decreasing, read as an integer (leading zeros drop).
    pub fn ascending(&self) -> u64 {
        let mut sorted = self.0.clone();
        sorted.sort_unstable();
        numeral(&sorted, 0)
    }

    /// Digits sorted non-increasing, padded per `padding` when the number
    /// has fewer than `width` digits.
    pub fn descending(&self, width: u32, padding: Padding) -> u64 {
        let mut sorted = self.0.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let count = self.count();
        let zeros = if count >= width {
            0
        } else {
            match padding {
                Padding::SingleTrailingZero => 1,
                Padding::FullWidth => width - count,
            }
        };
        numeral(&sorted, zeros)
    }
}

/// Concatenate `digits` followed by `trailing_zeros` zeros.
fn numeral(digits: &[u8], trailing_zeros: u32) -> u64 {
    let value = digits
        .iter()
        .fold(0u64, |acc, &d| acc * 10 + u64::from(d));
    value * 10u64.pow(trailing_zeros)
}

/// Number of base-10 digits in `number` (`0` has one).
pub fn digit_count(number: u64) -> u32 {
    number.checked_ilog10().map_or(1, |log| log + 1)
}
