//! Seed classification.
//!
//! Presentation layers special-case two kinds of seed: the width's own
//! constant, and repeating-digit values. Both produce an empty routine.

use serde::{Deserialize, Serialize};

use crate::constants::{is_repeating_digit, kaprekar_constant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Classification {
    /// The seed is Kaprekar's constant for `width` digits.
    Constant { width: u32 },

    /// Every digit of the seed is the same.
    RepeatingDigits,

    /// The seed runs through the routine.
    Ordinary,
}

impl Classification {
    pub fn is_ordinary(self) -> bool {
        matches!(self, Self::Ordinary)
    }
}

pub fn classify(number: u64, width: u32) -> Classification {
    if is_repeating_digit(number, width) {
        Classification::RepeatingDigits
    } else if kaprekar_constant(width) == Some(number) {
        Classification::Constant { width }
    } else {
        Classification::Ordinary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_constants() {
        assert_eq!(classify(495, 3), Classification::Constant { width: 3 });
        assert_eq!(classify(6174, 4), Classification::Constant { width: 4 });
        assert_eq!(classify(495, 4), Classification::Ordinary);
    }

    #[test]
    fn classifies_repeating_digits() {
        assert_eq!(classify(222, 3), Classification::RepeatingDigits);
        assert_eq!(classify(9999, 4), Classification::RepeatingDigits);
        assert!(classify(3524, 4).is_ordinary());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Classification::Constant { width: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "constant", "width": 4}));
    }
}
