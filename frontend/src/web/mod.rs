//! 浏览器 API 封装模块
//!
//! fetch、LocalStorage 与 alert 的轻量封装，以及视图路由。

pub mod http;
pub mod router;
pub mod storage;
pub mod view;

pub use http::BrowserHttpClient;
pub use storage::LocalSessionStore;

/// 阻塞式 `window.alert`，弹窗被拒绝时改写诊断日志
pub fn alert(message: &str) {
    let shown = leptos::prelude::window()
        .alert_with_message(message)
        .is_ok();
    if !shown {
        log_error!("Alert", "{}", message);
    }
}
