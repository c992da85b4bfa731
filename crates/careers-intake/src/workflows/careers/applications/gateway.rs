use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use url::Url;

use super::attachment::FileAttachment;
use crate::config::IntakeConfig;

/// Multipart field names expected by the intake service.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const MESSAGE: &str = "message";
    pub const JOB_TITLE: &str = "jobTitle";
    pub const JOB_LOCATION: &str = "jobLocation";
    pub const JOB_TYPE: &str = "jobType";
    pub const RESUME: &str = "resume";
}

/// Intake endpoints, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ApplyJob,
    GeneralApplication,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::ApplyJob => "apply-job",
            Endpoint::GeneralApplication => "general-application",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadValue {
    Text(String),
    File(FileAttachment),
}

/// One entry of a form's field-to-payload mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadField {
    pub name: &'static str,
    pub value: PayloadValue,
}

impl PayloadField {
    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: PayloadValue::Text(value.into()),
        }
    }

    pub fn file(name: &'static str, file: FileAttachment) -> Self {
        Self {
            name,
            value: PayloadValue::File(file),
        }
    }
}

/// A fully assembled multipart submission, ready for the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundSubmission {
    pub endpoint: Endpoint,
    pub fields: Vec<PayloadField>,
}

impl OutboundSubmission {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|field| match &field.value {
            PayloadValue::Text(value) if field.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn file(&self, name: &str) -> Option<&FileAttachment> {
        self.fields.iter().find_map(|field| match &field.value {
            PayloadValue::File(file) if field.name == name => Some(file),
            _ => None,
        })
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }
}

/// Proof that the intake service answered. The body is never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub completed_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            completed_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: Endpoint },
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: Endpoint, message: String },
    #[error("invalid intake url: {0}")]
    InvalidUrl(String),
    #[error("unable to build http client: {0}")]
    Client(String),
}

pub type DeliveryResult = Result<DeliveryReceipt, GatewayError>;

/// The network boundary receiving applications.
#[async_trait]
pub trait ApplicationGateway: Send + Sync {
    async fn deliver(&self, submission: OutboundSubmission) -> DeliveryResult;
}

/// Multipart HTTP client for the intake service.
#[derive(Debug, Clone)]
pub struct HttpApplicationGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApplicationGateway {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| GatewayError::Client(err.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &IntakeConfig) -> Result<Self, GatewayError> {
        Self::new(config.api_base_url.clone(), config.submit_timeout)
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, GatewayError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let raw = format!("{base}/{}", endpoint.path());
        Url::parse(&raw).map_err(|err| GatewayError::InvalidUrl(format!("{raw}: {err}")))
    }

    fn multipart(endpoint: Endpoint, fields: Vec<PayloadField>) -> Result<Form, GatewayError> {
        let mut form = Form::new();
        for PayloadField { name, value } in fields {
            form = match value {
                PayloadValue::Text(text) => form.text(name, text),
                PayloadValue::File(file) => {
                    let part = Part::bytes(file.bytes().to_vec())
                        .file_name(file.name().to_string())
                        .mime_str(file.content_type().as_ref())
                        .map_err(|err| GatewayError::Transport {
                            endpoint,
                            message: err.to_string(),
                        })?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl ApplicationGateway for HttpApplicationGateway {
    async fn deliver(&self, submission: OutboundSubmission) -> DeliveryResult {
        let OutboundSubmission { endpoint, fields } = submission;
        let url = self.endpoint_url(endpoint)?;
        let form = Self::multipart(endpoint, fields)?;

        tracing::info!(%endpoint, %url, "posting application");
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    GatewayError::Timeout { endpoint }
                } else {
                    GatewayError::Transport {
                        endpoint,
                        message: err.to_string(),
                    }
                }
            });

        match response {
            Ok(response) => {
                let receipt = DeliveryReceipt::new(response.status().as_u16());
                tracing::info!(%endpoint, status = receipt.status, "application delivered");
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(%endpoint, error = %err, "application delivery failed");
                Err(err)
            }
        }
    }
}
