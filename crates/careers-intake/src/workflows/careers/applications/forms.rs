use super::attachment::AttachmentLimit;
use super::draft::{ApplicationDraft, AttachmentRequirement, DraftViolation};
use super::gateway::{
    field, ApplicationGateway, DeliveryReceipt, DeliveryResult, Endpoint, OutboundSubmission,
    PayloadField,
};
use super::submission::{
    AttemptId, OutcomePolicy, SubmissionMachine, SubmissionState, TransitionError,
};
use crate::config::IntakeConfig;
use crate::workflows::careers::listing::JobPosting;

/// Behavior shared by every form instance on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormSettings {
    pub outcome_policy: OutcomePolicy,
    pub attachment_limit: AttachmentLimit,
}

impl From<&IntakeConfig> for FormSettings {
    fn from(config: &IntakeConfig) -> Self {
        Self {
            outcome_policy: config.outcome_policy,
            attachment_limit: config.attachment_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] DraftViolation),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// A validated payload waiting on the network, tagged with the attempt that
/// must be handed back to `complete_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub attempt: AttemptId,
    pub submission: OutboundSubmission,
}

/// Draft, machine, and validation rules common to both form variants.
#[derive(Debug, Clone)]
struct FormCore {
    draft: ApplicationDraft,
    machine: SubmissionMachine,
    requirement: AttachmentRequirement,
    limit: AttachmentLimit,
    last_receipt: Option<DeliveryReceipt>,
}

impl FormCore {
    fn new(settings: FormSettings, requirement: AttachmentRequirement) -> Self {
        Self {
            draft: ApplicationDraft::default(),
            machine: SubmissionMachine::new(settings.outcome_policy),
            requirement,
            limit: settings.attachment_limit,
            last_receipt: None,
        }
    }

    /// Guard order mirrors the page: a disabled button first, then field validation.
    fn begin(
        &mut self,
        build: impl FnOnce(&ApplicationDraft) -> OutboundSubmission,
    ) -> Result<PendingSubmission, FormError> {
        match self.machine.state() {
            SubmissionState::Submitting => return Err(TransitionError::AlreadySubmitting.into()),
            SubmissionState::Submitted => return Err(TransitionError::AlreadySubmitted.into()),
            SubmissionState::Idle | SubmissionState::Failed { .. } => {}
        }

        if let Err(violation) = self.draft.validate(self.requirement, &self.limit) {
            tracing::debug!(%violation, "submission blocked by validation");
            return Err(violation.into());
        }

        let submission = build(&self.draft);
        let attempt = self.machine.begin()?;
        tracing::info!(endpoint = %submission.endpoint, ?attempt, "application submitting");
        Ok(PendingSubmission {
            attempt,
            submission,
        })
    }

    fn complete(
        &mut self,
        attempt: AttemptId,
        result: DeliveryResult,
    ) -> Result<&SubmissionState, FormError> {
        if let Err(err) = self.machine.settle(attempt, &result) {
            tracing::warn!(?attempt, error = %err, "delivery result discarded");
            return Err(err.into());
        }
        let state = self.machine.state();
        tracing::info!(state = state.label(), "application settled");
        self.last_receipt = result.ok();
        Ok(state)
    }

    fn reset(&mut self) {
        self.draft.reset();
        self.machine.reset();
        self.last_receipt = None;
    }
}

/// The form inside the apply modal. Requires a resume and carries the job's details.
#[derive(Debug, Clone)]
pub struct JobApplicationForm {
    core: FormCore,
}

impl JobApplicationForm {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            core: FormCore::new(settings, AttachmentRequirement::Required),
        }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.core.draft
    }

    pub fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.core.draft
    }

    pub fn state(&self) -> &SubmissionState {
        self.core.machine.state()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state().accepts_submit()
    }

    pub fn last_receipt(&self) -> Option<&DeliveryReceipt> {
        self.core.last_receipt.as_ref()
    }

    /// Validate and move to `Submitting`, returning the `/apply-job` payload.
    pub fn begin_submit(&mut self, job: &JobPosting) -> Result<PendingSubmission, FormError> {
        self.core.begin(|draft| job_payload(draft, job))
    }

    pub fn complete_submit(
        &mut self,
        attempt: AttemptId,
        result: DeliveryResult,
    ) -> Result<&SubmissionState, FormError> {
        self.core.complete(attempt, result)
    }

    pub async fn submit<G>(
        &mut self,
        job: &JobPosting,
        gateway: &G,
    ) -> Result<&SubmissionState, FormError>
    where
        G: ApplicationGateway + ?Sized,
    {
        let PendingSubmission {
            attempt,
            submission,
        } = self.begin_submit(job)?;
        let result = gateway.deliver(submission).await;
        self.complete_submit(attempt, result)
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }
}

/// The standalone "Send Us Your Resume" form. The resume is optional.
#[derive(Debug, Clone)]
pub struct GeneralApplicationForm {
    core: FormCore,
}

impl GeneralApplicationForm {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            core: FormCore::new(settings, AttachmentRequirement::Optional),
        }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.core.draft
    }

    pub fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.core.draft
    }

    pub fn state(&self) -> &SubmissionState {
        self.core.machine.state()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state().accepts_submit()
    }

    /// Once submitted, the section shows the thank-you panel for the rest of the visit.
    pub fn shows_thank_you(&self) -> bool {
        *self.state() == SubmissionState::Submitted
    }

    pub fn last_receipt(&self) -> Option<&DeliveryReceipt> {
        self.core.last_receipt.as_ref()
    }

    /// Validate and move to `Submitting`, returning the `/general-application` payload.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, FormError> {
        self.core.begin(general_payload)
    }

    pub fn complete_submit(
        &mut self,
        attempt: AttemptId,
        result: DeliveryResult,
    ) -> Result<&SubmissionState, FormError> {
        self.core.complete(attempt, result)
    }

    pub async fn submit<G>(&mut self, gateway: &G) -> Result<&SubmissionState, FormError>
    where
        G: ApplicationGateway + ?Sized,
    {
        let PendingSubmission {
            attempt,
            submission,
        } = self.begin_submit()?;
        let result = gateway.deliver(submission).await;
        self.complete_submit(attempt, result)
    }
}

fn job_payload(draft: &ApplicationDraft, job: &JobPosting) -> OutboundSubmission {
    let mut fields = vec![
        PayloadField::text(field::NAME, draft.name().trim()),
        PayloadField::text(field::EMAIL, draft.email().trim()),
        PayloadField::text(field::MESSAGE, draft.message()),
        PayloadField::text(field::JOB_TITLE, job.title.as_str()),
        PayloadField::text(field::JOB_LOCATION, job.location.as_str()),
        PayloadField::text(field::JOB_TYPE, job.employment_type.as_str()),
    ];
    if let Some(resume) = draft.attachment().current() {
        fields.push(PayloadField::file(field::RESUME, resume.clone()));
    }

    OutboundSubmission {
        endpoint: Endpoint::ApplyJob,
        fields,
    }
}

fn general_payload(draft: &ApplicationDraft) -> OutboundSubmission {
    let mut fields = vec![
        PayloadField::text(field::NAME, draft.name().trim()),
        PayloadField::text(field::EMAIL, draft.email().trim()),
    ];
    if let Some(resume) = draft.attachment().current() {
        fields.push(PayloadField::file(field::RESUME, resume.clone()));
    }

    OutboundSubmission {
        endpoint: Endpoint::GeneralApplication,
        fields,
    }
}
