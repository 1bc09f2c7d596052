//! # Status Messages
//!
//! Fixed user-facing text for transport failures.

/// Generic failure text, used when nothing more specific is known.
pub const FALLBACK_MESSAGE: &str = "请求失败";

/// Text for requests that got no response at all.
pub const NETWORK_ERROR_MESSAGE: &str = "网络异常，请检查网络连接";

/// Status a request timeout is classified as.
pub const TIMEOUT_STATUS: u16 = 408;

/// Fixed message for an HTTP status, if the status is in the table.
pub fn status_message(status: u16) -> Option<&'static str> {
    let message = match status {
        400 => "请求错误",
        401 => "未授权，请重新登录",
        403 => "拒绝访问",
        404 => "请求地址出错",
        408 => "请求超时",
        500 => "服务器内部错误",
        501 => "服务未实现",
        502 => "网关错误",
        503 => "服务不可用",
        504 => "网关超时",
        505 => "HTTP版本不受支持",
        _ => return None,
    };
    Some(message)
}
