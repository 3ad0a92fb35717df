use std::fmt;

use crate::web::http::HttpError;

/// 网关调用失败的原因
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 请求未完成（离线、CORS、DNS 等）
    Transport(HttpError),
    /// 非 2xx 响应；`message` 为后端的 `error` 字段（若有）
    Status { status: u16, message: Option<String> },
    /// 2xx 响应但响应体不是预期的 JSON
    Decode(String),
    /// 请求体序列化失败
    Encode(String),
    /// 未登录时调用了需要认证的端点
    MissingToken,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "{}", e),
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "invalid response body: {}", msg),
            ApiError::Encode(msg) => write!(f, "invalid request body: {}", msg),
            ApiError::MissingToken => write!(f, "not signed in"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Transport(e)
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let with_msg = ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(with_msg.to_string(), "HTTP 401: Invalid credentials");
        assert_eq!(with_msg.server_message(), Some("Invalid credentials"));
        assert_eq!(with_msg.status(), Some(401));

        let bare = ApiError::Status { status: 500, message: None };
        assert_eq!(bare.to_string(), "HTTP 500");
        assert_eq!(bare.server_message(), None);

        let offline = ApiError::from(HttpError::NetworkError("Failed to fetch".to_string()));
        assert_eq!(offline.to_string(), "network error: Failed to fetch");
        assert_eq!(offline.status(), None);
    }
}
