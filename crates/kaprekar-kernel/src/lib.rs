//! # Kaprekar Kernel
//!
//! Kaprekar's routine: arrange a number's digits descending and
//! ascending, subtract, and repeat on the difference. Three-digit seeds
//! settle at 495 and four-digit seeds at 6174, provided the seed has at
//! least two distinct digits.
//!
//! The kernel is pure: no I/O, no shared state, no randomness. Every call
//! with the same arguments returns the same sequence.
//!
//! ## Architecture
//!
//! ```text
//! constants        ← 495, 6174, repeating-digit sets per width
//!     │
//! Digits           ← extraction, ascending/descending arrangement, Padding
//!     │
//! RoutineEngine    ← halt check → arrange → subtract → advance
//!     │
//! Routine          ← Vec<Step> + Termination
//! ```
//!
//! ```
//! use kaprekar_kernel::compute_routine;
//!
//! let steps = compute_routine(3524, 4, 8).unwrap();
//! assert_eq!(steps.last().unwrap().result, 6174);
//! ```

pub mod classify;
pub mod constants;
pub mod digits;
pub mod error;
pub mod routine;
pub mod step;

pub use classify::{Classification, classify};
pub use constants::{
    KAPREKAR_CONSTANT_3, KAPREKAR_CONSTANT_4, MAX_WIDTH, is_repeating_digit, kaprekar_constant,
    repdigit, repdigits,
};
pub use digits::{Digits, Padding, digit_count};
pub use error::RoutineError;
pub use routine::{DEFAULT_MAX_ITERATIONS, RoutineConfig, RoutineEngine, compute_routine};
pub use step::{Routine, Step, Termination};
