//! The uniform stage contract.
//!
//! Every analysis stage runs against the shared [`NormalizedText`] and
//! always produces a value: either the capability's output or the stage's
//! documented fallback. No error crosses a stage boundary, which is what
//! keeps the orchestrator total once normalization has succeeded.

use super::normalize::NormalizedText;

/// Outcome of one stage. Both variants carry a usable value; `Degraded`
/// marks that the value is the stage's fallback rather than capability
/// output.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutcome<T> {
    Completed(T),
    Degraded(T),
}

impl<T> StageOutcome<T> {
    pub fn into_inner(self) -> T {
        match self {
            StageOutcome::Completed(value) | StageOutcome::Degraded(value) => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, StageOutcome::Degraded(_))
    }
}

/// One independent analysis step with its own input policy and fallback.
pub trait AnalysisStage {
    type Output;

    /// Stage name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the stage. Must be total: capability failures are converted to
    /// `Degraded` carrying the stage's fallback value.
    fn run(&self, text: &NormalizedText) -> StageOutcome<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_inner_unwraps_both_variants() {
        assert_eq!(StageOutcome::Completed(5).into_inner(), 5);
        assert_eq!(StageOutcome::Degraded(7).into_inner(), 7);
    }

    #[test]
    fn degraded_flag() {
        assert!(!StageOutcome::Completed(()).is_degraded());
        assert!(StageOutcome::Degraded(()).is_degraded());
    }
}
