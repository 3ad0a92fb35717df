//! 构建期配置
//!
//! 静态前端没有运行时环境变量，覆盖值在编译期读取
//! (`MITHAI_API_URL=... trunk build`)。

const DEFAULT_API_URL: &str = "http://localhost:3000/api";
const DEFAULT_SESSION_KEY: &str = "auth";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API 根地址，不含结尾斜杠
    pub api_base_url: String,
    /// 保存序列化会话的 LocalStorage 键
    pub session_key: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("MITHAI_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("MITHAI_SESSION_KEY").unwrap_or(DEFAULT_SESSION_KEY),
        )
    }

    fn new(api_base_url: &str, session_key: &str) -> Self {
        let api_base_url = api_base_url.trim().trim_end_matches('/');
        let session_key = session_key.trim();
        Self {
            api_base_url: if api_base_url.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                api_base_url.to_string()
            },
            session_key: if session_key.is_empty() {
                DEFAULT_SESSION_KEY.to_string()
            } else {
                session_key.to_string()
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_SESSION_KEY)
    }
}
