//! User-facing strings. Kept verbatim; tests compare against them.

pub const MOBILE_EMPTY: &str = "请输入手机号";
pub const MOBILE_FORMAT: &str = "手机号格式错误,请输入中国大陆11位手机号";
pub const CODE_EMPTY: &str = "请输入验证码";
pub const CODE_FORMAT: &str = "验证码格式错误,请输入六位数字且正确验证码";
pub const CODE_MISMATCH: &str = "验证码错误，请重新输入";
pub const BOTH_EMPTY_ALERT: &str = "请输入手机号码和验证码";

pub const MOBILE_PLACEHOLDER: &str = "手机号";
pub const CODE_PLACEHOLDER: &str = "验证码";

pub const GET_CODE: &str = "获取验证码";
pub const CODE_SPINNER: &str = "\u{25E0}";
pub const SUBMIT: &str = "登录";
pub const SUBMITTING: &str = "submitting......";

pub const DIALOG_TITLE: &str = "🎉 提交成功";
pub const DIALOG_BODY: &str = "登录成功";
pub const DIALOG_CLOSE: &str = "关闭";

/// "{n}秒后重试"
pub fn retry_in(seconds: u32) -> String {
    format!("{seconds}秒后重试")
}
