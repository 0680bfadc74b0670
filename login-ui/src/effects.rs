use dioxus::prelude::{Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;
use login_form::{CodeService, CountdownEpoch, FormState};

use crate::storage::LocalStorageCodeStore;

pub type LoginService = CodeService<LocalStorageCodeStore>;

const TICK_MS: u32 = 1_000;

/// Drive one countdown run until it finishes or a newer run replaces it.
pub async fn run_countdown(mut form: Signal<FormState>, epoch: CountdownEpoch) {
    loop {
        TimeoutFuture::new(TICK_MS).await;
        if !form.write().tick_countdown(epoch).keep_running() {
            break;
        }
    }
}

/// Second phase of an accepted login: wait out the simulated latency, then
/// clear the submitting flag and consume the stored code.
pub async fn finish_submission(
    mut form: Signal<FormState>,
    mut service: Signal<LoginService>,
    delay_ms: u32,
) {
    TimeoutFuture::new(delay_ms).await;

    let mut service = service.write();
    if !form.write().complete_submission(&mut *service) {
        dioxus_logger::tracing::debug!("No pending submission to complete");
    }
}
