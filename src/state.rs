//! Submission lifecycle state

/// The state of a submission controller
///
/// There is no terminal state: every accepted submission moves `Idle ->
/// Pending`, and the dispatch outcome (success or error alike) moves it back.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmitState {
    /// No submission in flight
    #[default]
    Idle,
    /// A submission has been dispatched and its outcome not yet observed
    Pending,
}

impl SubmitState {
    /// Returns true when no submission is in flight
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitState::Idle)
    }

    /// Returns true while a submission's outcome has not yet been observed
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variants() {
        assert!(SubmitState::Idle.is_idle());
        assert!(!SubmitState::Idle.is_pending());
        assert!(SubmitState::Pending.is_pending());
        assert_eq!(SubmitState::default(), SubmitState::Idle);
    }
}
