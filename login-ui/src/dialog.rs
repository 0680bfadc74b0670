use dioxus::prelude::*;

use login_form::text;

/// Success modal shown once a login is accepted.
#[component]
pub fn SuccessDialog(on_close: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            "data-testid": "success-dialog",
            class: "login-dialog",
            div { class: "login-dialog-scrim" }
            div {
                class: "login-dialog-card",
                h2 { class: "login-dialog-title", {text::DIALOG_TITLE} }
                p { class: "login-dialog-body", {text::DIALOG_BODY} }
                div {
                    class: "login-dialog-actions",
                    button {
                        "data-testid": "success-dialog-close",
                        class: "login-dialog-close",
                        onclick: move |evt| on_close.call(evt),
                        {text::DIALOG_CLOSE}
                    }
                }
            }
        }
    }
}
