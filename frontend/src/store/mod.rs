//! 纯状态层
//!
//! 只含转换方法的普通结构体，不依赖信号与 DOM。

pub mod catalog;
pub mod fallback;
pub mod session;

pub use catalog::{CatalogState, RefreshOutcome};
pub use session::{SessionState, auth_failure_message};
