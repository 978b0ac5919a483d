#![allow(dead_code)]

//! Form controller: the single owner of the session's [`CvForm`].
//!
//! Edits go through the reducers and swap in a new snapshot. Submission is
//! gated by [`SubmitStatus`]; while a request is outstanding every edit is a
//! no-op and a second submit is refused.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::download::{DownloadSink, DOWNLOAD_FILENAME};
use crate::errors::{FormError, SubmissionError};
use crate::form::reducers;
use crate::models::{CvForm, ExperienceField, ScalarField};
use crate::pdf_client::PdfService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// A submission is in flight; the form was left as it was.
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Downloaded(PathBuf),
    /// Logged and recorded in [`FormController::last_error`].
    Failed,
    /// Another submission was already in flight. Nothing was sent.
    Busy,
}

pub struct FormController {
    form: CvForm,
    status: watch::Sender<SubmitStatus>,
    service: Arc<dyn PdfService>,
    sink: Arc<dyn DownloadSink>,
    last_error: Option<String>,
}

impl FormController {
    pub fn new(service: Arc<dyn PdfService>, sink: Arc<dyn DownloadSink>) -> Self {
        let (status, _) = watch::channel(SubmitStatus::Idle);
        Self {
            form: CvForm::new(),
            status,
            service,
            sink,
            last_error: None,
        }
    }

    pub fn form(&self) -> &CvForm {
        &self.form
    }

    pub fn status(&self) -> SubmitStatus {
        *self.status.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.status() == SubmitStatus::Submitting
    }

    /// Receiver that observes every status transition.
    pub fn subscribe(&self) -> watch::Receiver<SubmitStatus> {
        self.status.subscribe()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn edit_field(&mut self, field: ScalarField, value: impl Into<String>) -> EditOutcome {
        if self.blocked("edit_field") {
            return EditOutcome::Blocked;
        }
        debug!(%field, "edit field");
        self.form = reducers::edit_field(&self.form, field, value);
        EditOutcome::Applied
    }

    /// Same as [`edit_field`](Self::edit_field) with the field given by its wire name.
    pub fn edit_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<EditOutcome, FormError> {
        let field = name.parse::<ScalarField>()?;
        Ok(self.edit_field(field, value))
    }

    pub fn edit_experience_field(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<EditOutcome, FormError> {
        if self.blocked("edit_experience_field") {
            return Ok(EditOutcome::Blocked);
        }
        debug!(index, %field, "edit experience field");
        self.form = reducers::edit_experience_field(&self.form, index, field, value)?;
        Ok(EditOutcome::Applied)
    }

    pub fn add_experience(&mut self) -> EditOutcome {
        if self.blocked("add_experience") {
            return EditOutcome::Blocked;
        }
        self.form = reducers::add_experience(&self.form);
        debug!(entries = self.form.experience().len(), "experience added");
        EditOutcome::Applied
    }

    /// Sends the current form to the PDF service and saves the result.
    ///
    /// Never fails toward the caller: errors are logged, kept in `last_error`
    /// and the status is always back at `Idle` when this returns (unless it
    /// returned `Busy`, in which case the outstanding submission owns it).
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(snapshot) = self.begin_submit() else {
            return SubmitOutcome::Busy;
        };
        let result = self.service.generate(&snapshot).await;
        self.finish_submit(result)
    }

    /// First half of [`submit`](Self::submit): enters `Submitting` and hands out
    /// the snapshot to send. Returns `None` if a submission is already in flight.
    ///
    /// Front ends that keep processing input while the request runs drive the
    /// two halves themselves.
    pub fn begin_submit(&mut self) -> Option<CvForm> {
        if self.is_loading() {
            warn!("Submit ignored: a submission is already in flight");
            return None;
        }
        info!(
            entries = self.form.experience().len(),
            "Submitting CV to PDF service"
        );
        self.status.send_replace(SubmitStatus::Submitting);
        Some(self.form.clone())
    }

    /// Second half of [`submit`](Self::submit): saves or reports the service
    /// result and returns to `Idle`.
    pub fn finish_submit(&mut self, result: Result<Bytes, SubmissionError>) -> SubmitOutcome {
        let outcome = match result.and_then(|bytes| self.sink.save(DOWNLOAD_FILENAME, &bytes)) {
            Ok(path) => {
                info!("CV generated: {}", path.display());
                self.last_error = None;
                SubmitOutcome::Downloaded(path)
            }
            Err(e) => {
                error!("Failed to submit CV: {e}");
                self.last_error = Some(e.to_string());
                SubmitOutcome::Failed
            }
        };
        self.status.send_replace(SubmitStatus::Idle);
        outcome
    }

    fn blocked(&self, op: &str) -> bool {
        if self.is_loading() {
            warn!("{op} ignored while submitting");
            true
        } else {
            false
        }
    }
}
