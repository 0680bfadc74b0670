//! SMS-code login form: validation, simulated code service and form state.
//!
//! Everything here is plain Rust with no browser dependency, so the whole
//! flow can be exercised natively. The `login-ui` crate binds it to Dioxus
//! signals, timers and `localStorage`.

pub mod code;
pub mod config;
pub mod countdown;
pub mod form;
pub mod text;
pub mod validate;

pub use code::{
    CodeGenerator, CodeService, CodeStore, MemoryCodeStore, RandomCodeGenerator, StoreError,
    VerificationCode,
};
pub use config::LoginConfig;
pub use countdown::{Countdown, CountdownEpoch, Tick};
pub use form::{FieldErrors, FormState, RequestError, SubmitOutcome, SubmitPhase};
pub use validate::{validate_code, validate_mobile, ValidationError};
