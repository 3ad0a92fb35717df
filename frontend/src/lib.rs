//! Mithai Junction 店面前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `store`: 纯状态与转换（不依赖 DOM，可直接测试）
//! - `web::view`: 视图定义（领域模型）
//! - `web::router`: 视图路由服务
//! - `auth` / `catalog`: 包装状态的 Leptos 上下文
//! - `components`: UI 组件层

#[macro_use]
mod diag;

mod api;
mod auth;
mod catalog;
mod config;
mod error;
mod store;
mod web;
mod components {
    pub mod admin;
    pub mod auth_page;
    pub mod header;
    mod icons;
    mod product_card;
    mod product_form;
    pub mod shop;
}

use crate::api::StorefrontApi;
use crate::auth::{AuthContext, init_auth};
use crate::catalog::CatalogContext;
use crate::components::admin::AdminPanel;
use crate::components::auth_page::AuthPage;
use crate::components::header::Header;
use crate::components::shop::ShopPage;
use crate::config::AppConfig;

use leptos::prelude::*;

use web::BrowserHttpClient;
use web::router::{Router, RouterOutlet};
use web::view::ViewMode;

/// 视图匹配函数
fn view_matcher(view: ViewMode) -> AnyView {
    match view {
        ViewMode::Shop => view! { <ShopPage /> }.into_any(),
        ViewMode::Auth => view! { <AuthPage /> }.into_any(),
        ViewMode::Admin => view! { <AdminPanel /> }.into_any(),
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-r from-orange-600 via-pink-600 to-purple-700 text-white mt-16 py-8">
            <div class="max-w-7xl mx-auto px-4 text-center">
                <p class="text-lg font-semibold mb-2">"🍬 Mithai Junction - Sweetening Lives Since 1990 🍬"</p>
                <p class="text-white/80">"Made with ❤️ and lots of sugar"</p>
            </div>
        </footer>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log_info!("App", "backend at {}", config.api_base_url);

    // 1. API 网关
    let api = StorefrontApi::new(config.api_base_url.clone(), BrowserHttpClient);
    provide_context(api.clone());

    // 2. 认证上下文：从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new(&config.session_key);
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 3. 商品目录：先展示样例数据，再尝试拉取
    let catalog = CatalogContext::new(api);
    provide_context(catalog);
    catalog.refresh();

    // 4. 角色信号注入路由服务
    let role = auth_ctx.role_signal();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-pink-50 to-purple-50">
            <Router role=role>
                <Header />
                <main class="max-w-7xl mx-auto px-4 py-8">
                    <RouterOutlet matcher=view_matcher />
                </main>
            </Router>
            <Footer />
        </div>
    }
}
