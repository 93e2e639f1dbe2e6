/// Lifecycle of one login attempt. A single tagged state, so pending and
/// success can never hold at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failure,
}

/// Events that move the submission lifecycle forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEvent {
    Submitted,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    /// Transition function. A submit while a request is in flight and an
    /// outcome delivered outside of `Pending` leave the state unchanged.
    pub fn step(self, event: SubmitEvent) -> SubmitStatus {
        use SubmitEvent::*;
        use SubmitStatus::*;
        match (self, event) {
            (Idle | Success | Failure, Submitted) => Pending,
            (Pending, Succeeded) => Success,
            (Pending, Failed) => Failure,
            (current, _) => current,
        }
    }

    pub fn is_pending(self) -> bool {
        self == SubmitStatus::Pending
    }

    pub fn is_failure(self) -> bool {
        self == SubmitStatus::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitEvent::*;
    use super::SubmitStatus::*;

    #[test]
    fn submit_moves_every_settled_state_to_pending() {
        for status in [Idle, Success, Failure] {
            assert_eq!(status.step(Submitted), Pending);
        }
    }

    #[test]
    fn pending_settles_on_its_outcome() {
        assert_eq!(Pending.step(Succeeded), Success);
        assert_eq!(Pending.step(Failed), Failure);
    }

    #[test]
    fn submit_while_pending_is_ignored() {
        assert_eq!(Pending.step(Submitted), Pending);
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        for status in [Idle, Success, Failure] {
            assert_eq!(status.step(Succeeded), status);
            assert_eq!(status.step(Failed), status);
        }
    }

    #[test]
    fn resubmission_is_allowed_after_either_outcome() {
        assert_eq!(Pending.step(Failed).step(Submitted), Pending);
        assert_eq!(Pending.step(Succeeded).step(Submitted), Pending);
    }

    #[test]
    fn initial_status_is_idle() {
        assert_eq!(super::SubmitStatus::default(), Idle);
    }
}
