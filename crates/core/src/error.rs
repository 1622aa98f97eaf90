//! Error types for the magball core.

use thiserror::Error;

/// Errors produced by engine operations.
///
/// All of these are programmer or configuration errors: the physics step is
/// deterministic, so none of them is recoverable by retrying.
#[derive(Debug, Error)]
pub enum SimError {
    /// Domain extent was non-positive or non-finite at construction.
    #[error("invalid domain extent ({width}, {height}): both sides must be positive and finite")]
    InvalidDomain { width: f64, height: f64 },

    /// The activity vector length did not match the number of sources.
    #[error("activity vector length mismatch: engine has {expected} sources, got {got} flags")]
    ActivityLengthMismatch { expected: usize, got: usize },

    /// A non-positive or non-finite time step was passed to `step`.
    #[error("invalid time step {0}: dt must be positive and finite")]
    InvalidTimeStep(f64),

    /// The boundary-reflection loop failed to bring the ball back inside the
    /// domain within the configured pass limit.
    #[error("collision resolution did not converge after {passes} reflection passes")]
    CollisionDivergence { passes: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_domain_includes_both_extents() {
        let err = SimError::InvalidDomain {
            width: -5.0,
            height: 0.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("-5"), "missing width in: {msg}");
        assert!(msg.contains('0'), "missing height in: {msg}");
    }

    #[test]
    fn activity_length_mismatch_includes_both_lengths() {
        let err = SimError::ActivityLengthMismatch {
            expected: 4,
            got: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains('4'), "missing expected length in: {msg}");
        assert!(msg.contains('3'), "missing actual length in: {msg}");
    }

    #[test]
    fn invalid_time_step_includes_value() {
        let err = SimError::InvalidTimeStep(-0.5);
        let msg = format!("{err}");
        assert!(msg.contains("-0.5"), "missing dt in: {msg}");
    }

    #[test]
    fn collision_divergence_includes_pass_count() {
        let err = SimError::CollisionDivergence { passes: 100 };
        let msg = format!("{err}");
        assert!(msg.contains("100"), "missing pass count in: {msg}");
    }

    #[test]
    fn sim_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimError>();
    }

    #[test]
    fn sim_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<SimError>();
    }
}
