use super::draft::ApplicationDraft;
use super::forms::{FormError, FormSettings, JobApplicationForm, PendingSubmission};
use super::gateway::{ApplicationGateway, DeliveryResult};
use super::submission::{AttemptId, SubmissionState};
use crate::workflows::careers::listing::JobPosting;

/// Whether the apply dialog is showing, and for which job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(JobPosting),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    #[error("the application dialog is closed")]
    Closed,
    #[error(transparent)]
    Form(#[from] FormError),
}

/// What the open dialog renders.
#[derive(Debug, Clone, Copy)]
pub struct ModalView<'a> {
    pub job: &'a JobPosting,
    pub draft: &'a ApplicationDraft,
    pub state: &'a SubmissionState,
    pub submit_enabled: bool,
    /// The confirmation panel replaces the form once submitted.
    pub show_confirmation: bool,
}

/// Owns the per-job application form and its visibility.
///
/// A single instance serves every posting. Closing always discards the draft
/// and the submission state so the next opening starts clean; a response for
/// an attempt begun before the close is refused when it finally arrives.
#[derive(Debug, Clone)]
pub struct ApplyModal {
    state: ModalState,
    form: JobApplicationForm,
}

impl ApplyModal {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            state: ModalState::Closed,
            form: JobApplicationForm::new(settings),
        }
    }

    /// Show the dialog for `job`. Replacing the job while open keeps the draft.
    pub fn open_for(&mut self, job: JobPosting) {
        tracing::debug!(job_id = %job.id, title = %job.title, "apply dialog opened");
        self.state = ModalState::Open(job);
    }

    /// Follow the page's selected job: `None` closes the dialog.
    pub fn open_for_selection(&mut self, job: Option<JobPosting>) {
        match job {
            Some(job) => self.open_for(job),
            None => self.close(),
        }
    }

    /// Hide the dialog and discard everything entered.
    pub fn close(&mut self) {
        if let ModalState::Open(job) = &self.state {
            tracing::debug!(job_id = %job.id, "apply dialog closed");
        }
        self.state = ModalState::Closed;
        self.form.reset();
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn job(&self) -> Option<&JobPosting> {
        match &self.state {
            ModalState::Open(job) => Some(job),
            ModalState::Closed => None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Nothing renders while closed.
    pub fn view(&self) -> Option<ModalView<'_>> {
        let job = self.job()?;
        let state = self.form.state();
        Some(ModalView {
            job,
            draft: self.form.draft(),
            state,
            submit_enabled: self.form.is_submit_enabled(),
            show_confirmation: *state == SubmissionState::Submitted,
        })
    }

    pub fn form(&self) -> &JobApplicationForm {
        &self.form
    }

    /// Form inputs are only reachable while the dialog is showing.
    pub fn form_mut(&mut self) -> Option<&mut JobApplicationForm> {
        if self.is_open() {
            Some(&mut self.form)
        } else {
            None
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ApplicationDraft> {
        self.form_mut().map(JobApplicationForm::draft_mut)
    }

    pub fn begin_submit(&mut self) -> Result<PendingSubmission, ModalError> {
        let ModalState::Open(job) = &self.state else {
            return Err(ModalError::Closed);
        };
        Ok(self.form.begin_submit(job)?)
    }

    pub fn complete_submit(
        &mut self,
        attempt: AttemptId,
        result: DeliveryResult,
    ) -> Result<&SubmissionState, ModalError> {
        Ok(self.form.complete_submit(attempt, result)?)
    }

    pub async fn submit<G>(&mut self, gateway: &G) -> Result<&SubmissionState, ModalError>
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

impl Default for ApplyModal {
    fn default() -> Self {
        Self::new(FormSettings::default())
    }
}
