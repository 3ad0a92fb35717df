//! LocalStorage 封装模块
//!
//! 会话以 `{user, token}` JSON 形式保存在单个键下；键不存在即表示未登录。

use gloo_storage::Storage;
use mithai_shared::Session;

/// 已登录会话的持久化
pub trait SessionStore {
    /// 未保存或保存的值无法解码时返回 `None`
    fn load(&self) -> Option<Session>;
    /// 写入失败（配额、隐私模式）时返回 `false`
    fn save(&self, session: &Session) -> bool;
    fn clear(&self);
}

/// 浏览器 LocalStorage 实现
#[derive(Debug, Clone)]
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        gloo_storage::LocalStorage::get::<Session>(&self.key).ok()
    }

    fn save(&self, session: &Session) -> bool {
        gloo_storage::LocalStorage::set(&self.key, session).is_ok()
    }

    fn clear(&self) {
        gloo_storage::LocalStorage::delete(&self.key);
    }
}

// =========================================================
// 测试工具: MemorySessionStore
// =========================================================

/// 保存序列化后的 JSON，与 LocalStorage 使用相同编码
#[cfg(test)]
#[derive(Default)]
pub struct MemorySessionStore {
    pub raw: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: std::cell::RefCell::new(Some(raw.to_string())),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        let raw = self.raw.borrow();
        serde_json::from_str(raw.as_deref()?).ok()
    }

    fn save(&self, session: &Session) -> bool {
        match serde_json::to_string(session) {
            Ok(json) => {
                *self.raw.borrow_mut() = Some(json);
                true
            }
            Err(_) => false,
        }
    }

    fn clear(&self) {
        *self.raw.borrow_mut() = None;
    }
}
