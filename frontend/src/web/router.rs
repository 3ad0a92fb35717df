//! 视图路由服务
//!
//! 没有 History/深链接：当前视图只是一个信号。
//! 导航流程为"请求 -> 验证(Guard) -> 更新"，角色信号由外部注入，
//! 与认证模块解耦。

use leptos::prelude::*;
use mithai_shared::Role;

use super::view::ViewMode;

/// 视图路由器
#[derive(Clone, Copy)]
pub struct ViewRouter {
    current_view: ReadSignal<ViewMode>,
    set_view: WriteSignal<ViewMode>,
    /// 当前会话角色（注入的信号，实现解耦）
    role: Signal<Option<Role>>,
}

impl ViewRouter {
    fn new(role: Signal<Option<Role>>) -> Self {
        let (current_view, set_view) = signal(ViewMode::default());
        Self {
            current_view,
            set_view,
            role,
        }
    }

    pub fn current_view(&self) -> ReadSignal<ViewMode> {
        self.current_view
    }

    /// 实际渲染的视图（渲染期再做一次角色检查）
    pub fn rendered_view(&self) -> Signal<ViewMode> {
        let current_view = self.current_view;
        let role = self.role;
        Signal::derive(move || current_view.get().resolve(role.get()))
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, target: ViewMode) {
        let role = self.role.get_untracked();

        if !target.is_allowed_for(role) {
            log_info!("Router", "access to {} denied, staying on shop", target);
            self.set_view.set(ViewMode::denied_redirect());
            return;
        }

        self.set_view.set(target);
    }

    /// 登录/注销后强制回到商店
    fn setup_session_redirect(&self) {
        let current_view = self.current_view;
        let set_view = self.set_view;
        let role = self.role;

        Effect::new(move |previous: Option<Option<Role>>| {
            let now = role.get();
            let current = current_view.get_untracked();
            let next = current.on_role_change(previous, now);
            if next != current {
                log_info!("Router", "session changed, {} -> {}", current, next);
                set_view.set(next);
            }
            now
        });
    }
}

fn provide_router(role: Signal<Option<Role>>) -> ViewRouter {
    let router = ViewRouter::new(role);
    router.setup_session_redirect();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> ViewRouter {
    use_context::<ViewRouter>()
        .expect("ViewRouter not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 会话角色信号
    role: Signal<Option<Role>>,
    children: Children,
) -> impl IntoView {
    provide_router(role);
    children()
}

/// 路由出口组件
///
/// 根据守卫后的视图渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 视图匹配函数：接收当前视图，返回对应视图组件
    matcher: fn(ViewMode) -> AnyView,
) -> impl IntoView {
    let rendered = use_router().rendered_view();
    move || matcher(rendered.get())
}
