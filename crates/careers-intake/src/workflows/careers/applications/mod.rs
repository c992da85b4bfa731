//! Application intake for the careers page.
//!
//! Two forms share the same machinery: the per-job form shown inside the
//! apply modal and the standalone "Send Us Your Resume" form. Each form owns
//! an [`ApplicationDraft`] (fields plus an [`AttachmentPicker`]) and a
//! [`SubmissionMachine`]; submitting validates the draft, builds an explicit
//! multipart payload, and hands it to an [`ApplicationGateway`].

pub mod attachment;
pub mod draft;
pub mod forms;
pub mod gateway;
pub mod modal;
pub mod submission;

#[cfg(test)]
mod tests;

pub use attachment::{
    AttachmentError, AttachmentLimit, AttachmentPicker, DocumentKind, FileAttachment,
    ACCEPTED_EXTENSIONS, ADVISORY_LIMIT_LABEL, DEFAULT_MAX_ATTACHMENT_BYTES,
};
pub use draft::{is_valid_email, ApplicationDraft, AttachmentRequirement, DraftViolation};
pub use forms::{
    FormError, FormSettings, GeneralApplicationForm, JobApplicationForm, PendingSubmission,
};
pub use gateway::{
    field, ApplicationGateway, DeliveryReceipt, DeliveryResult, Endpoint, GatewayError,
    HttpApplicationGateway, OutboundSubmission, PayloadField, PayloadValue,
};
pub use modal::{ApplyModal, ModalError, ModalState, ModalView};
pub use submission::{
    AttemptId, OutcomePolicy, SubmissionMachine, SubmissionState, TransitionError,
};
