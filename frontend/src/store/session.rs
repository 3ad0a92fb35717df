//! 会话状态
//!
//! 内存中的会话，同步写入 `SessionStore`。
//! 每次状态转换都直接写穿到存储，内存与存储始终一致。

use mithai_shared::{Role, Session, User};

use crate::error::ApiError;
use crate::web::storage::SessionStore;

const GENERIC_AUTH_FAILURE: &str = "Authentication failed";
const TRANSPORT_AUTH_FAILURE: &str = "Authentication failed. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
}

impl SessionState {
    /// 从存储恢复；不检查过期，也不校验 token
    pub fn restore(store: &impl SessionStore) -> Self {
        Self {
            session: store.load(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }

    /// 将新认证的会话写入内存与 `store`
    ///
    /// 持久化失败时返回 `false`，内存中的会话照常设置。
    pub fn sign_in(&mut self, session: Session, store: &impl SessionStore) -> bool {
        let persisted = store.save(&session);
        self.session = Some(session);
        persisted
    }

    pub fn sign_out(&mut self, store: &impl SessionStore) {
        self.session = None;
        store.clear();
    }
}

/// 认证失败时阻塞提示的文本
pub fn auth_failure_message(err: &ApiError) -> String {
    match err.status() {
        Some(_) => err
            .server_message()
            .unwrap_or(GENERIC_AUTH_FAILURE)
            .to_string(),
        None => TRANSPORT_AUTH_FAILURE.to_string(),
    }
}
