//! 诊断日志宏
//!
//! wasm 下输出到浏览器控制台，本机（测试）输出到 stdout/stderr。
//! 每行都带有产生它的组件标签。

macro_rules! log_info {
    ($tag:literal, $($t:tt)*) => {
        ::leptos::logging::log!("[{}] {}", $tag, format_args!($($t)*))
    };
}

macro_rules! log_error {
    ($tag:literal, $($t:tt)*) => {
        ::leptos::logging::error!("[{}] {}", $tag, format_args!($($t)*))
    };
}
