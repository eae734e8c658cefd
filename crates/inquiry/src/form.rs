use tracing::{debug, warn};
use validator::Validate;

use crate::{Inquiry, IntakeDispatcher, SubmitStatus};

/// Lead-capture form controller: one [`Inquiry`] plus the status of its
/// most recent submission attempt.
///
/// State machine: `idle -> submitting -> success | error`, with both
/// terminal outcomes immediately resubmittable. A successful delivery
/// clears the fields; a failed one keeps them so the visitor can correct
/// and resubmit without retyping.
#[derive(Debug, Default)]
pub struct LeadForm {
    inquiry: Inquiry,
    status: SubmitStatus,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the form from already-entered field values.
    pub fn with_inquiry(inquiry: Inquiry) -> Self {
        Self {
            inquiry,
            status: SubmitStatus::Idle,
        }
    }

    pub fn inquiry(&self) -> &Inquiry {
        &self.inquiry
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Attempt to deliver the current inquiry.
    ///
    /// Returns without dispatching while an attempt is already in flight,
    /// or while any field is empty or malformed; a blocked submission
    /// leaves the status untouched rather than reporting an error. No
    /// automatic retry: a failed attempt waits for the visitor to resubmit.
    pub async fn submit(&mut self, intake: &dyn IntakeDispatcher) -> SubmitStatus {
        if self.status.is_submitting() {
            return self.status;
        }

        if let Err(err) = self.inquiry.validate() {
            debug!(%err, "incomplete inquiry, submission blocked");
            return self.status;
        }

        self.status = SubmitStatus::Submitting;

        match intake.dispatch(&self.inquiry).await {
            Ok(()) => {
                self.inquiry.clear();
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                warn!(%err, "inquiry dispatch failed");
                self.status = SubmitStatus::Error;
            }
        }

        self.status
    }

    /// Back to a fresh form: empty fields, `idle` status.
    pub fn reset(&mut self) {
        self.inquiry.clear();
        self.status = SubmitStatus::Idle;
    }
}
