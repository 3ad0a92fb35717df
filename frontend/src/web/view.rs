//! 视图定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了三个互斥的视图及其访问规则。

use std::fmt::Display;

use mithai_shared::Role;

/// 应用视图枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// 商品浏览 (默认视图)
    #[default]
    Shop,
    /// 登录 / 注册表单
    Auth,
    /// 管理面板 (需要 ADMIN 角色)
    Admin,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shop => "shop",
            Self::Auth => "auth",
            Self::Admin => "admin",
        }
    }

    /// **核心守卫逻辑：该视图对当前角色是否开放**
    pub fn is_allowed_for(&self, role: Option<Role>) -> bool {
        match self {
            Self::Shop | Self::Auth => true,
            Self::Admin => role == Some(Role::Admin),
        }
    }

    /// 渲染时的最终视图：无权访问时退回商店
    pub fn resolve(self, role: Option<Role>) -> Self {
        if self.is_allowed_for(role) {
            self
        } else {
            Self::denied_redirect()
        }
    }

    /// 守卫拒绝时的重定向目标
    pub fn denied_redirect() -> Self {
        Self::Shop
    }

    /// 会话角色变化后的视图
    ///
    /// `previous` 为 `None` 表示首次运行（尚无旧值），此时保持当前视图。
    /// 登录、注册或注销（角色发生变化）之后一律回到商店。
    pub fn on_role_change(self, previous: Option<Option<Role>>, now: Option<Role>) -> Self {
        match previous {
            Some(before) if before != now => Self::Shop,
            _ => self,
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 某角色可见的顶栏按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTabs {
    pub admin: bool,
    pub login: bool,
    pub logout: bool,
}

impl NavTabs {
    pub fn for_role(role: Option<Role>) -> Self {
        Self {
            admin: ViewMode::Admin.is_allowed_for(role),
            login: role.is_none(),
            logout: role.is_some(),
        }
    }
}
