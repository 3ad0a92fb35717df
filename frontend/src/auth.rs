//! 认证模块
//!
//! 管理会话状态，与视图路由解耦：
//! 路由服务只通过注入的角色信号观察会话变化。

use leptos::prelude::*;
use mithai_shared::{AuthMode, Credentials, Role};

use crate::api::BrowserApi;
use crate::store::{SessionState, auth_failure_message};
use crate::web::LocalSessionStore;

/// 认证上下文
///
/// 包含读写信号与持久化位置，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
    store: StoredValue<LocalSessionStore>,
}

impl AuthContext {
    pub fn new(session_key: &str) -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self {
            state,
            set_state,
            store: StoredValue::new(LocalSessionStore::new(session_key)),
        }
    }

    /// 当前角色信号（用于路由服务注入）
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.with(SessionState::role))
    }

    /// 当前会话的 Bearer token（不追踪依赖）
    pub fn token(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.token().map(str::to_string))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 从 LocalStorage 恢复上次的会话
pub fn init_auth(ctx: &AuthContext) {
    let restored = ctx.store.with_value(|store| SessionState::restore(store));
    if let Some(user) = restored.user() {
        log_info!("Auth", "restored session for {} ({})", user.email, user.role.as_str());
    }
    ctx.set_state.set(restored);
}

/// 登录或注册
///
/// 失败时弹出带服务端信息的阻塞提示并返回该信息。
/// 成功后回到商店由路由的会话监听完成。
pub async fn authenticate(
    ctx: &AuthContext,
    api: &BrowserApi,
    mode: AuthMode,
    credentials: Credentials,
) -> Result<(), String> {
    match api.authenticate(mode, credentials).await {
        Ok(session) => {
            log_info!("Auth", "signed in as {}", session.user.email);
            let store = ctx.store;
            ctx.set_state.update(|state| {
                if !store.with_value(|store| state.sign_in(session, store)) {
                    log_error!("Auth", "session could not be persisted");
                }
            });
            Ok(())
        }
        Err(e) => {
            log_error!("Auth", "{:?} failed: {}", mode, e);
            let message = auth_failure_message(&e);
            crate::web::alert(&message);
            Err(message)
        }
    }
}

/// 注销并清除状态
pub fn logout(ctx: &AuthContext) {
    let store = ctx.store;
    ctx.set_state
        .update(|state| store.with_value(|store| state.sign_out(store)));
    log_info!("Auth", "signed out");
}
