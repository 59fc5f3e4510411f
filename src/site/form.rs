//! src/site/form.rs
use crate::waitlist::{SubmissionResult, WaitlistClient};

/// Where a form instance stands. `Failure` carries the displayable message
/// from the submission result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Failure(String),
}

/// State owned by a single signup form. Display components only ever see
/// immutable [`FormSnapshot`]s of it, and every form instance is independent:
/// nothing is shared across sessions.
#[derive(Debug, Default)]
pub struct SignupForm {
    email: String,
    status: FormStatus,
    is_submitting: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// The gate on the trigger control: returns `false` while a submission is
    /// already in flight, in which case nothing happens.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        true
    }

    /// Folds a submission outcome into the tri-state and reopens the gate.
    pub fn complete(&mut self, result: &SubmissionResult) {
        self.is_submitting = false;
        self.status = if result.success {
            FormStatus::Success
        } else {
            FormStatus::Failure(result.message.clone())
        };
    }

    /// One full submit cycle: gate, call, fold. At most one submission is in
    /// flight per form instance.
    pub async fn submit(&mut self, client: &WaitlistClient, source: &str) {
        if !self.begin_submit() {
            return;
        }
        let result = client.submit(&self.email, source).await;
        self.complete(&result);
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            email: self.email.clone(),
            status: self.status.clone(),
            is_submitting: self.is_submitting,
        }
    }
}

/// An immutable view of a form, handed to the display layer.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub email: String,
    pub status: FormStatus,
    pub is_submitting: bool,
}
