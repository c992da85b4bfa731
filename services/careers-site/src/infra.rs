use async_trait::async_trait;
use careers_intake::config::IntakeConfig;
use careers_intake::workflows::careers::applications::{
    ApplicationGateway, DeliveryReceipt, DeliveryResult, GatewayError, HttpApplicationGateway,
    OutboundSubmission, PayloadValue,
};
use careers_intake::workflows::careers::{CatalogError, JobCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The configured catalog file, or the built-in listings.
pub(crate) fn load_catalog(config: &IntakeConfig) -> Result<JobCatalog, CatalogError> {
    match &config.job_catalog_path {
        Some(path) => JobCatalog::from_path(path),
        None => Ok(JobCatalog::standard()),
    }
}

pub(crate) fn build_gateway(
    config: &IntakeConfig,
    dry_run: bool,
) -> Result<Box<dyn ApplicationGateway>, GatewayError> {
    if dry_run {
        Ok(Box::new(DryRunGateway::default()))
    } else {
        Ok(Box::new(HttpApplicationGateway::from_config(config)?))
    }
}

/// Logs payloads instead of sending them and answers `200`.
#[derive(Default, Clone)]
pub(crate) struct DryRunGateway {
    deliveries: Arc<Mutex<Vec<OutboundSubmission>>>,
}

impl DryRunGateway {
    pub(crate) fn deliveries(&self) -> Vec<OutboundSubmission> {
        self.deliveries.lock().expect("dry-run gateway lock").clone()
    }
}

#[async_trait]
impl ApplicationGateway for DryRunGateway {
    async fn deliver(&self, submission: OutboundSubmission) -> DeliveryResult {
        for field in &submission.fields {
            match &field.value {
                PayloadValue::Text(text) => {
                    tracing::info!(endpoint = %submission.endpoint, field = field.name, value = %text, "dry-run field");
                }
                PayloadValue::File(file) => {
                    tracing::info!(
                        endpoint = %submission.endpoint,
                        field = field.name,
                        file = file.name(),
                        size = file.size(),
                        "dry-run attachment"
                    );
                }
            }
        }

        self.deliveries
            .lock()
            .expect("dry-run gateway lock")
            .push(submission);
        Ok(DeliveryReceipt::new(200))
    }
}

/// One line per payload field, as printed by the CLI.
pub(crate) fn describe_submission(submission: &OutboundSubmission) -> Vec<String> {
    submission
        .fields
        .iter()
        .map(|field| match &field.value {
            PayloadValue::Text(text) => format!("{}: {}", field.name, text),
            PayloadValue::File(file) => format!(
                "{}: {} ({}, {} bytes)",
                field.name,
                file.name(),
                file.content_type(),
                file.size()
            ),
        })
        .collect()
}
