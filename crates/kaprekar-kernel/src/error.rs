//! Error types for Kaprekar kernel operations.

/// Errors arising from invalid routine arguments or broken arrangement invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutineError {
    /// A caller-supplied argument is outside the routine's domain.
    #[error("invalid argument `{argument}`: {description}")]
    InvalidArgument {
        argument: &'static str,
        description: String,
    },

    /// A descending arrangement came out smaller than its ascending
    /// counterpart. Unreachable unless digit arrangement is broken.
    #[error("invariant violation: descending {descending} < ascending {ascending}")]
    InvariantViolation { descending: u64, ascending: u64 },
}

impl RoutineError {
    pub(crate) fn invalid(argument: &'static str, description: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            description: description.into(),
        }
    }
}
