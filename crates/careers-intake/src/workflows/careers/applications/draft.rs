use std::sync::OnceLock;

use regex::Regex;

use super::attachment::{AttachmentLimit, AttachmentPicker, FileAttachment};

/// Valid e-mail address as defined for `<input type="email">`.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

pub fn is_valid_email(candidate: &str) -> bool {
    email_regex().is_some_and(|regex| regex.is_match(candidate.trim()))
}

/// Whether a form refuses to submit without a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentRequirement {
    Required,
    Optional,
}

/// First field that blocks a submission, in form order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftViolation {
    #[error("full name is required")]
    MissingName,
    #[error("email address is required")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    MalformedEmail(String),
    #[error("a resume attachment is required")]
    MissingAttachment,
    #[error("'{name}' is {size} bytes, over the {limit} byte limit")]
    AttachmentTooLarge { name: String, size: u64, limit: u64 },
}

/// In-progress field values for one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    name: String,
    email: String,
    message: String,
    attachment: AttachmentPicker,
}

impl ApplicationDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn attachment(&self) -> &AttachmentPicker {
        &self.attachment
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    pub fn select_attachment(&mut self, file: FileAttachment) {
        self.attachment.select(file);
    }

    pub fn clear_attachment(&mut self) {
        self.attachment.clear();
    }

    /// True when nothing has been entered or selected.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(
        &self,
        requirement: AttachmentRequirement,
        limit: &AttachmentLimit,
    ) -> Result<(), DraftViolation> {
        if self.name.trim().is_empty() {
            return Err(DraftViolation::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(DraftViolation::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(DraftViolation::MalformedEmail(email.to_string()));
        }

        match self.attachment.current() {
            None if requirement == AttachmentRequirement::Required => {
                Err(DraftViolation::MissingAttachment)
            }
            Some(file) if limit.exceeded_by(file) => Err(DraftViolation::AttachmentTooLarge {
                name: file.name().to_string(),
                size: file.size(),
                limit: limit.max_bytes,
            }),
            _ => Ok(()),
        }
    }
}
