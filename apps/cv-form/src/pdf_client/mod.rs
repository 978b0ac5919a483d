//! PDF service client. The only place that talks to the generation service.
//!
//! One request per submission: the full form as JSON in, raw PDF bytes out.
//! No retries; a failed attempt is reported to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client};
use tracing::debug;

use crate::errors::SubmissionError;
use crate::models::CvForm;

pub const PROCESS_CV_PATH: &str = "/process-cv";

/// Turns a completed form into a document.
#[async_trait]
pub trait PdfService: Send + Sync {
    async fn generate(&self, form: &CvForm) -> Result<Bytes, SubmissionError>;
}

#[derive(Clone)]
pub struct HttpPdfService {
    client: Client,
    endpoint: String,
}

impl HttpPdfService {
    /// `base_url` is the service root, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, SubmissionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), PROCESS_CV_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PdfService for HttpPdfService {
    async fn generate(&self, form: &CvForm) -> Result<Bytes, SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/pdf")
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SubmissionError::EmptyBody);
        }

        debug!("PDF service returned {} bytes", bytes.len());
        Ok(bytes)
    }
}
