//! End-to-end login flow against the in-memory code store.
//!
//! Timers are driven by hand: one `tick_countdown` per elapsed second and a
//! `complete_submission` call where the view would wake up after the delay.

use login_form::{
    text, CodeService, FormState, LoginConfig, MemoryCodeStore, SubmitOutcome, SubmitPhase, Tick,
};

#[test]
fn request_code_then_log_in() {
    let config = LoginConfig::default();
    let mut service = CodeService::with_store(MemoryCodeStore::default());
    let mut form = FormState::new();

    form.set_mobile("13800138000");
    assert!(form.can_request_code());

    let epoch = form
        .request_code(&mut service, config.countdown_secs)
        .expect("code request should succeed");
    assert_eq!(form.countdown(), 60);
    assert_eq!(form.code_button_label(), "60秒后重试");

    let stored = service.stored().expect("code stored after request");
    assert_eq!(stored.len(), 6);
    assert!(stored.chars().all(|c| c.is_ascii_digit()));

    // A few seconds pass before the user types the code.
    for expected in [59, 58, 57] {
        assert_eq!(form.tick_countdown(epoch), Tick::Running(expected));
    }

    form.set_code(stored.clone());
    assert_eq!(form.submit(&service), SubmitOutcome::Accepted);
    assert!(form.dialog_open());
    assert!(form.submitting());
    assert_eq!(text::DIALOG_BODY, "登录成功");

    // Delay elapses.
    assert!(form.complete_submission(&mut service));
    assert!(!form.submitting());
    assert_eq!(form.phase(), SubmitPhase::Confirmed);
    assert_eq!(service.stored(), None);

    form.close_dialog();
    assert!(!form.dialog_open());

    // The countdown keeps running independently of the login.
    assert_eq!(form.tick_countdown(epoch), Tick::Running(56));
}

#[test]
fn empty_submit_then_correction() {
    let mut service = CodeService::with_store(MemoryCodeStore::default());
    let mut form = FormState::new();

    assert_eq!(form.submit(&service), SubmitOutcome::BothEmpty);
    assert!(form.errors().is_empty());

    form.set_mobile("13800138000");
    assert_eq!(form.submit(&service), SubmitOutcome::Invalid);
    assert_eq!(form.errors().code_message(), Some(text::CODE_EMPTY));
    assert_eq!(form.errors().mobile_message(), None);

    form.request_code(&mut service, 60).expect("request");
    // Generated codes are never below 100000.
    form.set_code("000000");
    assert_eq!(form.submit(&service), SubmitOutcome::Mismatch);
    assert_eq!(form.errors().code_message(), Some(text::CODE_MISMATCH));
    assert!(!form.dialog_open());
}
