//! Planner error types.

use std::fmt;

/// Why a planning call failed.
///
/// `C` is the category id type, so callers can match on the exhausted
/// category directly.
#[derive(Debug, thiserror::Error)]
pub enum PlanError<C> {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A remaining category had no unvisited place and the options ask to stop.
    #[error("no unvisited place left in category {category:?}")]
    NoCandidateFound { category: C },

    #[error("place repository failed: {0}")]
    Repository(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("planning cancelled")]
    Cancelled,
}

/// A failed planning call together with the route built before the failure.
///
/// The partial route is the longest consistent prefix; entries already
/// appended are never rolled back.
#[derive(Debug)]
pub struct PlanFailure<T, C> {
    pub error: PlanError<C>,
    pub partial: T,
}

impl<T, C> PlanFailure<T, C> {
    pub fn new(error: PlanError<C>, partial: T) -> Self {
        Self { error, partial }
    }
}

impl<T, C: fmt::Debug> fmt::Display for PlanFailure<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route planning stopped early: {}", self.error)
    }
}

impl<T: fmt::Debug, C: fmt::Debug + 'static> std::error::Error for PlanFailure<T, C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_failure_display_and_source() {
        let failure = PlanFailure::new(PlanError::<i64>::Cancelled, vec![1, 2]);
        assert_eq!(failure.to_string(), "route planning stopped early: planning cancelled");
        let source = failure.source().expect("source");
        assert_eq!(source.to_string(), "planning cancelled");
        assert_eq!(failure.partial, vec![1, 2]);
    }

    #[test]
    fn test_repository_error_keeps_source() {
        let error: PlanError<i64> =
            PlanError::Repository(Box::new(std::io::Error::other("timed out")));
        assert_eq!(error.to_string(), "place repository failed: timed out");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_no_candidate_keeps_typed_category() {
        let error = PlanError::NoCandidateFound { category: 42_i64 };
        assert_eq!(error.to_string(), "no unvisited place left in category 42");
        assert!(matches!(error, PlanError::NoCandidateFound { category: 42 }));
    }
}
