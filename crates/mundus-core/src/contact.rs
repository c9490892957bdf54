//! Contact form payload and submission state.
//!
//! The transport is a collaborator: the web layer fires one request and
//! reports ok/error back. No retry, no idempotency key; a failed submission
//! is surfaced inline and the user resubmits manually.

use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl ContactForm {
    /// First/last name, email and message are mandatory; the rest optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (value, field) in [
            (&self.first_name, "firstName"),
            (&self.last_name, "lastName"),
            (&self.email, "email"),
            (&self.message, "message"),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmitState {
    /// Move into `Sending`. Refused while a request is already in flight,
    /// which is the machine's double-submit protection.
    pub fn begin(&mut self) -> bool {
        if *self == SubmitState::Sending {
            return false;
        }
        *self = SubmitState::Sending;
        true
    }

    /// Resolve the in-flight request.
    pub fn finish(&mut self, ok: bool) {
        *self = if ok {
            SubmitState::Success
        } else {
            SubmitState::Error
        };
    }

    pub fn is_sending(&self) -> bool {
        *self == SubmitState::Sending
    }
}
