//! Login form state and its transitions.
//!
//! `FormState` is the only owner of field values, error messages and the
//! flags the view renders from. Every mutation goes through a method here;
//! the view layer just forwards events and drives timers.

use thiserror::Error;

use crate::code::{CodeGenerator, CodeService, CodeStore, StoreError};
use crate::countdown::{Countdown, CountdownEpoch, Tick};
use crate::text;
use crate::validate::{validate_code, validate_mobile, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub mobile: Option<ValidationError>,
    pub code: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.mobile.is_none() && self.code.is_none()
    }

    pub fn mobile_message(&self) -> Option<&'static str> {
        self.mobile.map(|e| e.message())
    }

    pub fn code_message(&self) -> Option<&'static str> {
        self.code.map(|e| e.message())
    }
}

/// Success is shown optimistically: the dialog opens in `PendingConfirm`,
/// and the delayed completion moves to `Confirmed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    PendingConfirm,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both fields empty; caller shows the blocking alert. Errors untouched.
    BothEmpty,
    /// At least one field failed validation; errors recorded.
    Invalid,
    /// Well-formed input but the code does not match the stored one.
    Mismatch,
    /// A previous submission is still pending.
    Busy,
    /// Dialog open, completion due after the configured delay.
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("a code request is already in flight")]
    InFlight,
    #[error("code requested too soon, {remaining}s remaining")]
    CoolingDown { remaining: u32 },
    #[error("invalid mobile number: {0}")]
    InvalidMobile(ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    mobile: String,
    code: String,
    errors: FieldErrors,
    submitting: bool,
    dialog_open: bool,
    getting_code: bool,
    countdown: Countdown,
    phase: SubmitPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mobile(&mut self, value: impl Into<String>) {
        self.mobile = value.into();
    }

    pub fn set_code(&mut self, value: impl Into<String>) {
        self.code = value.into();
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn getting_code(&self) -> bool {
        self.getting_code
    }

    pub fn countdown(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Whether the "get code" button is enabled.
    pub fn can_request_code(&self) -> bool {
        validate_mobile(&self.mobile).is_ok() && !self.getting_code && !self.countdown.is_active()
    }

    pub fn code_button_label(&self) -> String {
        if self.getting_code {
            text::CODE_SPINNER.to_string()
        } else if self.countdown.is_active() {
            text::retry_in(self.countdown.remaining())
        } else {
            text::GET_CODE.to_string()
        }
    }

    pub fn submit_button_label(&self) -> &'static str {
        if self.submitting {
            text::SUBMITTING
        } else {
            text::SUBMIT
        }
    }

    /// Issue a new code and start the cooldown.
    ///
    /// The returned epoch must accompany every [`FormState::tick_countdown`]
    /// call made by the timer for this run.
    pub fn request_code<S, G>(
        &mut self,
        service: &mut CodeService<S, G>,
        countdown_secs: u32,
    ) -> Result<CountdownEpoch, RequestError>
    where
        S: CodeStore,
        G: CodeGenerator,
    {
        if self.getting_code {
            return Err(RequestError::InFlight);
        }
        if self.countdown.is_active() {
            return Err(RequestError::CoolingDown {
                remaining: self.countdown.remaining(),
            });
        }
        validate_mobile(&self.mobile).map_err(RequestError::InvalidMobile)?;

        self.getting_code = true;
        let issued = service.issue();
        self.getting_code = false;
        issued?;

        Ok(self.countdown.start(countdown_secs))
    }

    /// One-second step of the cooldown, applied to live state.
    pub fn tick_countdown(&mut self, epoch: CountdownEpoch) -> Tick {
        self.countdown.tick(epoch)
    }

    /// Drop any running cooldown, e.g. when the view is torn down.
    pub fn cancel_countdown(&mut self) {
        self.countdown.cancel();
    }

    pub fn submit<S, G>(&mut self, service: &CodeService<S, G>) -> SubmitOutcome
    where
        S: CodeStore,
        G: CodeGenerator,
    {
        if self.phase == SubmitPhase::PendingConfirm {
            return SubmitOutcome::Busy;
        }
        if self.mobile.is_empty() && self.code.is_empty() {
            return SubmitOutcome::BothEmpty;
        }

        let mobile = validate_mobile(&self.mobile).err();
        let code = validate_code(&self.code).err();
        if mobile.is_some() || code.is_some() {
            self.errors = FieldErrors { mobile, code };
            return SubmitOutcome::Invalid;
        }

        if !service.verify(&self.code) {
            self.errors = FieldErrors {
                mobile: None,
                code: Some(ValidationError::CodeMismatch),
            };
            return SubmitOutcome::Mismatch;
        }

        self.errors = FieldErrors::default();
        self.dialog_open = true;
        self.submitting = true;
        self.phase = SubmitPhase::PendingConfirm;
        SubmitOutcome::Accepted
    }

    /// Second phase of an accepted submission: runs after the simulated
    /// latency. Returns `false` when nothing was pending.
    pub fn complete_submission<S, G>(&mut self, service: &mut CodeService<S, G>) -> bool
    where
        S: CodeStore,
        G: CodeGenerator,
    {
        if self.phase != SubmitPhase::PendingConfirm {
            return false;
        }
        tracing::info!(mobile = %self.mobile, code = %self.code, "login submitted");
        self.submitting = false;
        service.clear();
        self.phase = SubmitPhase::Confirmed;
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }
}
