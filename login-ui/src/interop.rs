/// Blocking browser alert. No-op outside a window context.
pub fn show_alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        dioxus_logger::tracing::warn!("Failed to show alert: {:?}", e);
    }
}
