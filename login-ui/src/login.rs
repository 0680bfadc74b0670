//! The login form view.
//!
//! All state lives in one `Signal<FormState>`; handlers call its methods and
//! the view re-renders from it. The two timers (resend countdown and the
//! delayed submit completion) are Dioxus tasks whose handles this component
//! owns: a new countdown cancels the previous one, and both are cancelled
//! when the component is dropped.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use login_form::{text, CodeService, FormState, LoginConfig, SubmitOutcome};

use crate::dialog::SuccessDialog;
use crate::effects::{finish_submission, run_countdown, LoginService};
use crate::interop::show_alert;
use crate::storage::LocalStorageCodeStore;
use crate::styles::LOGIN_STYLES;

/// Replace the task held in `slot`, cancelling whatever ran there before.
fn replace_task(slot: &Cell<Option<Task>>, task: Task) {
    if let Some(previous) = slot.replace(Some(task)) {
        previous.cancel();
    }
}

#[component]
pub fn LoginForm(config: LoginConfig) -> Element {
    let mut form = use_signal(FormState::new);
    let storage_key = config.storage_key.clone();
    let mut service = use_signal(move || -> LoginService {
        CodeService::with_store(LocalStorageCodeStore::new(storage_key))
    });

    let countdown_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    let submit_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    {
        let countdown_task = countdown_task.clone();
        let submit_task = submit_task.clone();
        use_drop(move || {
            if let Some(task) = countdown_task.take() {
                task.cancel();
            }
            if let Some(task) = submit_task.take() {
                task.cancel();
            }
        });
    }

    let on_request_code = {
        let countdown_task = countdown_task.clone();
        let countdown_secs = config.countdown_secs;
        move |_: MouseEvent| {
            let result = {
                let mut service = service.write();
                form.write().request_code(&mut *service, countdown_secs)
            };
            match result {
                Ok(epoch) => {
                    replace_task(&countdown_task, spawn(run_countdown(form, epoch)));
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("Verification code not issued: {}", e);
                }
            }
        }
    };

    let on_submit = {
        let submit_task = submit_task.clone();
        let delay_ms = config.submit_delay_ms;
        move |evt: FormEvent| {
            evt.prevent_default();
            let outcome = form.write().submit(&*service.read());
            match outcome {
                SubmitOutcome::BothEmpty => show_alert(text::BOTH_EMPTY_ALERT),
                SubmitOutcome::Accepted => {
                    replace_task(
                        &submit_task,
                        spawn(finish_submission(form, service, delay_ms)),
                    );
                }
                SubmitOutcome::Invalid | SubmitOutcome::Mismatch | SubmitOutcome::Busy => {}
            }
        }
    };

    let state = form.read();
    let mobile = state.mobile().to_string();
    let code = state.code().to_string();
    let mobile_error = state.errors().mobile_message();
    let code_error = state.errors().code_message();
    let can_request_code = state.can_request_code();
    let getting_code = state.getting_code();
    let code_label = state.code_button_label();
    let submitting = state.submitting();
    let submit_label = state.submit_button_label();
    let dialog_open = state.dialog_open();
    drop(state);

    rsx! {
        style { {LOGIN_STYLES} }
        div {
            class: "login-page",
            form {
                "data-testid": "login-form",
                class: "login-card",
                onsubmit: on_submit,

                div {
                    class: "login-field",
                    input {
                        "data-testid": "login-mobile",
                        class: "login-input",
                        name: "mobile",
                        placeholder: text::MOBILE_PLACEHOLDER,
                        value: "{mobile}",
                        oninput: move |e| form.write().set_mobile(e.value()),
                    }
                    if let Some(err) = mobile_error {
                        p { class: "login-error", "{err}" }
                    }
                }

                div {
                    class: "login-field",
                    div {
                        class: "login-code-row",
                        input {
                            "data-testid": "login-code",
                            class: "login-input login-code-input",
                            name: "code",
                            placeholder: text::CODE_PLACEHOLDER,
                            value: "{code}",
                            oninput: move |e| form.write().set_code(e.value()),
                        }
                        button {
                            "data-testid": "login-get-code",
                            r#type: "button",
                            class: "login-code-button",
                            disabled: !can_request_code,
                            onclick: on_request_code,
                            if getting_code {
                                span { class: "login-spinner", "{code_label}" }
                            } else {
                                "{code_label}"
                            }
                        }
                    }
                    if let Some(err) = code_error {
                        p { class: "login-error", "{err}" }
                    }
                }

                button {
                    "data-testid": "login-submit",
                    r#type: "submit",
                    class: "login-submit",
                    disabled: submitting,
                    "{submit_label}"
                }
            }

            if dialog_open {
                SuccessDialog { on_close: move |_| form.write().close_dialog() }
            }
        }
    }
}
