use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use serde::Serialize;

use super::{FieldErrors, StatePatch, Step, WizardState, validate};
use crate::error::SubmitError;
use crate::submit::{self, DEFAULT_SOURCE_TAG, Payload, WebhookTransport, assemble};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Completed,
    Failed,
}

/// "Step n of 4" plus a percentage for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: u8,
    pub total: u8,
    pub percent: u8,
}

/// What the user is told after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    pub submitted_at: String,
    pub email: String,
}

type StatusCell = Arc<Mutex<SubmissionStatus>>;

fn store_status(cell: &Mutex<SubmissionStatus>, status: SubmissionStatus) {
    *cell.lock().unwrap_or_else(PoisonError::into_inner) = status;
}

/// A started submission that owns its payload and a handle to the transport,
/// so the controller stays free while the webhook answers.
///
/// Dropping the ticket before [`SubmitTicket::send`] resolves (a timeout, a
/// cancelled select, Ctrl-C) records the attempt as `Failed` so the user can
/// retry.
#[must_use = "a submission does nothing until it is sent"]
pub struct SubmitTicket<T: WebhookTransport> {
    payload: Payload,
    transport: Arc<T>,
    status: StatusCell,
    settled: bool,
}

impl<T: WebhookTransport> SubmitTicket<T> {
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub async fn send(mut self) -> Result<SubmitReceipt, SubmitError> {
        let result = submit::deliver(&self.payload, self.transport.as_ref()).await;
        let outcome = if result.is_ok() {
            SubmissionStatus::Completed
        } else {
            SubmissionStatus::Failed
        };
        store_status(&self.status, outcome);
        self.settled = true;
        result.map(|()| SubmitReceipt {
            submitted_at: self.payload.timestamp.clone(),
            email: self.payload.email.clone(),
        })
    }
}

impl<T: WebhookTransport> Drop for SubmitTicket<T> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!(
                transport = self.transport.name(),
                "submission abandoned before the webhook answered"
            );
            store_status(&self.status, SubmissionStatus::Failed);
        }
    }
}

/// Owns the wizard state and is the only thing that moves between steps.
pub struct WizardController<T: WebhookTransport> {
    state: WizardState,
    transport: Arc<T>,
    source_tag: String,
    status: StatusCell,
    lock_back_while_submitting: bool,
}

impl<T: WebhookTransport> WizardController<T> {
    pub fn new(transport: T) -> Self {
        Self::with_state(transport, WizardState::new())
    }

    /// Resumes from a previously collected state, starting on step 1.
    pub fn with_state(transport: T, mut state: WizardState) -> Self {
        state.set_step(Step::Basics);
        Self {
            state,
            transport: Arc::new(transport),
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
            status: StatusCell::default(),
            lock_back_while_submitting: false,
        }
    }

    pub fn source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tag = tag.into();
        self
    }

    pub fn lock_back_while_submitting(mut self, lock: bool) -> Self {
        self.lock_back_while_submitting = lock;
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WizardState {
        &mut self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn status(&self) -> SubmissionStatus {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn update(&mut self, patch: StatePatch) -> &WizardState {
        self.state.update(patch)
    }

    pub fn progress(&self) -> Progress {
        let current = self.step().number();
        let percent = u16::from(current) * 100 / u16::from(Step::TOTAL);
        Progress {
            current,
            total: Step::TOTAL,
            percent: u8::try_from(percent).unwrap_or(100),
        }
    }

    /// Validates the current step and advances when it is clean. The final
    /// step has nowhere to go and simply reports itself.
    pub fn next(&mut self) -> Result<Step, FieldErrors> {
        let current = self.step();
        let errors = validate(current, &self.state);
        if !errors.is_empty() {
            tracing::warn!(step = %current, errors = errors.len(), "step validation failed");
            return Err(errors);
        }
        if let Some(next) = current.next() {
            self.state.set_step(next);
            tracing::debug!(from = %current, to = %next, "step advanced");
        }
        Ok(self.step())
    }

    /// Advances until the review step or the first step with errors.
    pub fn fast_forward(&mut self) -> Result<Step, FieldErrors> {
        while !self.step().is_terminal() {
            self.next()?;
        }
        Ok(self.step())
    }

    pub fn back(&mut self) -> Step {
        if self.lock_back_while_submitting && self.status() == SubmissionStatus::InFlight {
            tracing::debug!("back ignored while submission is in flight");
            return self.step();
        }
        let current = self.step();
        if let Some(prev) = current.prev() {
            self.state.set_step(prev);
            tracing::debug!(from = %current, to = %prev, "step back");
        }
        self.step()
    }

    /// Stamps the payload and marks the wizard as submitting. Allowed only
    /// from the final step and never twice at once. The returned ticket does
    /// the network call, so the wizard can still be navigated meanwhile.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket<T>, SubmitError> {
        if self.status() == SubmissionStatus::InFlight {
            return Err(SubmitError::InFlight);
        }
        if !self.step().is_terminal() {
            return Err(SubmitError::NotReady(self.step()));
        }
        store_status(&self.status, SubmissionStatus::InFlight);
        Ok(SubmitTicket {
            payload: assemble(&self.state, &self.source_tag, Utc::now()),
            transport: Arc::clone(&self.transport),
            status: Arc::clone(&self.status),
            settled: false,
        })
    }

    /// Sends the report in one go. A failure leaves the wizard on the final
    /// step for a manual retry.
    pub async fn submit(&mut self) -> Result<SubmitReceipt, SubmitError> {
        self.begin_submit()?.send().await
    }
}
