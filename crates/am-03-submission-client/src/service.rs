//! Submission Client service.
//!
//! Owns the form state of one contact form instance together with its
//! sending guard. Attempts run strictly in the order
//! validate → token → send → interpret, and each one ends with exactly one
//! notification.

use crate::domain::SubmissionError;
use crate::ports::{BotCheckProvider, ContactTransport, TransportResponse};
use am_01_notifications::{NotificationCenter, NotificationKind};
use am_02_contact_form::{ContactForm, Field, FieldUpdate};
use parking_lot::Mutex;
use shared_types::{messages, ErrorBody, BOT_CHECK_ACTION};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sending state of a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SendPhase {
    Idle,
    InFlight,
}

/// Returns the phase to idle when the attempt resolves, on every path.
struct InFlightGuard<'a> {
    phase: &'a Mutex<SendPhase>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.phase.lock() = SendPhase::Idle;
    }
}

/// Contact form controller with submission.
pub struct SubmissionClient {
    form: Mutex<ContactForm>,
    phase: Mutex<SendPhase>,
    bot_check: Arc<dyn BotCheckProvider>,
    transport: Arc<dyn ContactTransport>,
    notifications: NotificationCenter,
}

impl SubmissionClient {
    pub fn new(
        bot_check: Arc<dyn BotCheckProvider>,
        transport: Arc<dyn ContactTransport>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            form: Mutex::new(ContactForm::new()),
            phase: Mutex::new(SendPhase::Idle),
            bot_check,
            transport,
            notifications,
        }
    }

    // =========================================================================
    // FORM ACCESS
    // =========================================================================

    pub fn set_field(&self, field: Field, value: impl Into<String>) -> FieldUpdate {
        self.form.lock().set(field, value)
    }

    /// Apply several edits under one lock.
    pub fn edit<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut self.form.lock())
    }

    /// Snapshot of the current form state.
    pub fn form(&self) -> ContactForm {
        self.form.lock().clone()
    }

    /// True while an attempt is in flight (the submit trigger is disabled).
    pub fn is_sending(&self) -> bool {
        *self.phase.lock() == SendPhase::InFlight
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Run one submission attempt.
    ///
    /// Returns [`SubmissionError::AlreadySending`] without side effects when
    /// another attempt is in flight. Otherwise pushes exactly one
    /// notification and, on success, resets the form.
    pub async fn submit(&self) -> Result<(), SubmissionError> {
        let Some(_guard) = self.begin_attempt() else {
            debug!("Submit ignored, attempt already in flight");
            return Err(SubmissionError::AlreadySending);
        };

        let outcome = self.attempt().await;
        match &outcome {
            Ok(()) => {
                info!("Contact submission accepted");
                self.notifications
                    .push(NotificationKind::Success, messages::MESSAGE_SENT);
                self.form.lock().reset();
            }
            Err(e) => {
                warn!(error = ?e, "Contact submission failed");
                self.notifications.push(NotificationKind::Error, e.to_string());
            }
        }

        outcome
    }

    fn begin_attempt(&self) -> Option<InFlightGuard<'_>> {
        let mut phase = self.phase.lock();
        if *phase == SendPhase::InFlight {
            return None;
        }
        *phase = SendPhase::InFlight;
        Some(InFlightGuard { phase: &self.phase })
    }

    async fn attempt(&self) -> Result<(), SubmissionError> {
        let form = self.form();
        if !form.validate() {
            debug!(missing = ?form.missing_fields(), "Form incomplete");
            return Err(SubmissionError::Validation);
        }

        if !self.bot_check.is_ready() {
            return Err(SubmissionError::ProviderUnavailable);
        }
        let token = self
            .bot_check
            .token(BOT_CHECK_ACTION)
            .await
            .map_err(|e| {
                warn!(error = %e, "Bot-check token unavailable");
                SubmissionError::ProviderUnavailable
            })?;

        let submission = form.to_submission(token);
        let response = self
            .transport
            .post(&submission)
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        interpret_response(&response)
    }
}

/// Map an endpoint response onto the attempt outcome.
///
/// Error text comes from the body's `error` field, falling back to the
/// generic send-failure message when the body does not parse or carries no
/// message.
pub fn interpret_response(response: &TransportResponse) -> Result<(), SubmissionError> {
    if response.is_success() {
        return Ok(());
    }

    let message = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .map(|body| body.error)
        .filter(|error| !error.trim().is_empty())
        .unwrap_or_else(|| messages::SEND_FAILED.to_string());

    Err(match response.status {
        400 => SubmissionError::ServerValidation(message),
        403 => SubmissionError::BotCheck(message),
        _ => SubmissionError::ServerFault(message),
    })
}
