use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::workflows::careers::applications::{
    ApplicationGateway, AttachmentLimit, DeliveryReceipt, DeliveryResult, Endpoint,
    FileAttachment, FormSettings, GatewayError, OutboundSubmission, OutcomePolicy,
};
use crate::workflows::careers::listing::{JobCatalog, JobPosting};

pub(super) fn devops_engineer() -> JobPosting {
    JobCatalog::standard()
        .find("3")
        .cloned()
        .expect("standard catalog lists the DevOps role")
}

pub(super) fn project_manager() -> JobPosting {
    JobCatalog::standard()
        .find("4")
        .cloned()
        .expect("standard catalog lists the PM role")
}

pub(super) fn resume_pdf() -> FileAttachment {
    FileAttachment::new("résumé.pdf", b"%PDF-1.7 sample".to_vec()).expect("pdf is accepted")
}

pub(super) fn oversized_docx(limit: u64) -> FileAttachment {
    let bytes = vec![0_u8; limit as usize + 1];
    FileAttachment::new("portfolio.docx", bytes).expect("docx is accepted")
}

pub(super) fn surface_failures() -> FormSettings {
    FormSettings {
        outcome_policy: OutcomePolicy::SurfaceFailures,
        ..FormSettings::default()
    }
}

pub(super) fn enforced_limit(max_bytes: u64) -> FormSettings {
    FormSettings {
        attachment_limit: AttachmentLimit::enforced(max_bytes),
        ..FormSettings::default()
    }
}

/// Records every submission and answers with a fixed status.
#[derive(Clone)]
pub(super) struct RecordingGateway {
    status: u16,
    sent: Arc<Mutex<Vec<OutboundSubmission>>>,
}

impl RecordingGateway {
    pub(super) fn with_status(status: u16) -> Self {
        Self {
            status,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn sent(&self) -> Vec<OutboundSubmission> {
        self.sent.lock().expect("gateway lock").clone()
    }
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::with_status(200)
    }
}

#[async_trait]
impl ApplicationGateway for RecordingGateway {
    async fn deliver(&self, submission: OutboundSubmission) -> DeliveryResult {
        self.sent.lock().expect("gateway lock").push(submission);
        Ok(DeliveryReceipt::new(self.status))
    }
}

/// Simulates an unreachable intake service.
pub(super) struct OfflineGateway;

#[async_trait]
impl ApplicationGateway for OfflineGateway {
    async fn deliver(&self, submission: OutboundSubmission) -> DeliveryResult {
        Err(GatewayError::Transport {
            endpoint: submission.endpoint,
            message: "connection refused".to_string(),
        })
    }
}

pub(super) fn timeout(endpoint: Endpoint) -> DeliveryResult {
    Err(GatewayError::Timeout { endpoint })
}
