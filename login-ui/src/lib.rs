pub mod dialog;
pub mod effects;
pub mod interop;
pub mod login;
pub mod storage;
pub mod styles;

pub use dialog::SuccessDialog;
pub use interop::show_alert;
pub use login::LoginForm;
pub use storage::LocalStorageCodeStore;
