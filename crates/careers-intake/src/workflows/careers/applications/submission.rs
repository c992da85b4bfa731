use serde::Serialize;

use super::gateway::DeliveryResult;

/// Lifecycle of one form's submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// Only reachable under [`OutcomePolicy::SurfaceFailures`].
    Failed { reason: String },
}

impl SubmissionState {
    pub const fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Submitted => "submitted",
            SubmissionState::Failed { .. } => "failed",
        }
    }

    /// Whether the submit control is enabled.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed { .. })
    }
}

/// How a completed network attempt settles the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutcomePolicy {
    /// Any completed attempt, including transport errors and error statuses,
    /// counts as submitted. This is what visitors see on the live site today.
    #[default]
    AlwaysAcknowledge,
    /// Transport errors and non-2xx statuses land in `Failed`, which can be retried.
    SurfaceFailures,
}

impl OutcomePolicy {
    pub fn from_flag(surface_failures: bool) -> Self {
        if surface_failures {
            Self::SurfaceFailures
        } else {
            Self::AlwaysAcknowledge
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("this form has already been submitted")]
    AlreadySubmitted,
    #[error("no submission is in flight")]
    NotSubmitting,
    #[error("the response belongs to an abandoned submission")]
    StaleAttempt,
}

/// Identifies one `begin`; only the latest attempt may settle the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// `Idle -> Submitting -> Submitted`, with an optional retryable `Failed` branch.
#[derive(Debug, Clone, Default)]
pub struct SubmissionMachine {
    state: SubmissionState,
    policy: OutcomePolicy,
    generation: u64,
}

impl SubmissionMachine {
    pub fn new(policy: OutcomePolicy) -> Self {
        Self {
            state: SubmissionState::Idle,
            policy,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn policy(&self) -> OutcomePolicy {
        self.policy
    }

    /// Move into `Submitting`. Callers validate the draft first.
    pub fn begin(&mut self) -> Result<AttemptId, TransitionError> {
        match self.state {
            SubmissionState::Idle | SubmissionState::Failed { .. } => {
                self.state = SubmissionState::Submitting;
                self.generation += 1;
                Ok(AttemptId(self.generation))
            }
            SubmissionState::Submitting => Err(TransitionError::AlreadySubmitting),
            SubmissionState::Submitted => Err(TransitionError::AlreadySubmitted),
        }
    }

    /// Settle the in-flight `attempt` with the gateway's result. Results for
    /// attempts abandoned by a reset or superseded by a later `begin` are refused.
    pub fn settle(
        &mut self,
        attempt: AttemptId,
        result: &DeliveryResult,
    ) -> Result<&SubmissionState, TransitionError> {
        if attempt.0 != self.generation {
            return Err(TransitionError::StaleAttempt);
        }
        if self.state != SubmissionState::Submitting {
            return Err(TransitionError::NotSubmitting);
        }

        self.state = match (self.policy, result) {
            (OutcomePolicy::AlwaysAcknowledge, _) => SubmissionState::Submitted,
            (OutcomePolicy::SurfaceFailures, Ok(receipt)) if receipt.is_success() => {
                SubmissionState::Submitted
            }
            (OutcomePolicy::SurfaceFailures, Ok(receipt)) => SubmissionState::Failed {
                reason: format!("the server responded with status {}", receipt.status),
            },
            (OutcomePolicy::SurfaceFailures, Err(err)) => SubmissionState::Failed {
                reason: err.to_string(),
            },
        };

        Ok(&self.state)
    }

    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
        self.generation += 1;
    }
}
