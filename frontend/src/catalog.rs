//! 商品目录上下文
//!
//! 用信号包装 `CatalogState`，在浏览器任务队列上执行刷新与管理员变更的网络部分。

use leptos::prelude::*;
use leptos::task::spawn_local;
use mithai_shared::{NewProduct, Product, ProductId};

use crate::api::BrowserApi;
use crate::error::ApiResult;
use crate::store::{CatalogState, RefreshOutcome};

#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub state: RwSignal<CatalogState>,
    api: StoredValue<BrowserApi>,
}

impl CatalogContext {
    pub fn new(api: BrowserApi) -> Self {
        Self {
            state: RwSignal::new(CatalogState::with_fallback()),
            api: StoredValue::new(api),
        }
    }

    /// 过滤后的商品；搜索词或列表变化时重新计算
    pub fn visible(&self) -> Memo<Vec<Product>> {
        let state = self.state;
        Memo::new(move |_| state.with(CatalogState::visible))
    }

    pub fn all(&self) -> Memo<Vec<Product>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.products().to_vec()))
    }

    pub fn search_term(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_term().to_string()))
    }

    pub fn set_search_term(&self, term: String) {
        self.state.update(|s| s.set_search_term(term));
    }

    /// 重新拉取商品列表；失败时保留现有数据
    pub fn refresh(&self) {
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api.get_value();
            let (generation, result) = api.reload(|| ctx.begin_refresh()).await;
            ctx.apply(generation, result);
        });
    }

    /// 创建商品，完成后无条件刷新
    pub fn create(&self, token: Option<String>, product: NewProduct) {
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api.get_value();
            let (generation, result) = api
                .mutate_then_reload(
                    "create product",
                    api.create_product(token.as_deref(), product),
                    || ctx.begin_refresh(),
                )
                .await;
            ctx.apply(generation, result);
        });
    }

    /// 删除商品，完成后无条件刷新
    pub fn delete(&self, token: Option<String>, id: ProductId) {
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api.get_value();
            let (generation, result) = api
                .mutate_then_reload(
                    "delete product",
                    api.delete_product(token.as_deref(), id),
                    || ctx.begin_refresh(),
                )
                .await;
            ctx.apply(generation, result);
        });
    }

    /// 所属作用域已销毁时返回 `None`
    fn begin_refresh(&self) -> Option<u64> {
        self.state.try_update(CatalogState::begin_refresh)
    }

    fn apply(&self, generation: Option<u64>, result: ApiResult<Vec<Product>>) {
        let Some(generation) = generation else {
            return;
        };
        let outcome = self
            .state
            .try_update(|s| s.finish_refresh(generation, result));

        match outcome {
            Some(RefreshOutcome::Replaced(count)) => {
                log_info!("Catalog", "loaded {} products", count)
            }
            Some(RefreshOutcome::Kept(e)) => {
                log_error!("Catalog", "refresh failed, keeping current list: {}", e)
            }
            Some(RefreshOutcome::Superseded) => {
                log_info!("Catalog", "dropped superseded refresh #{}", generation)
            }
            // 作用域已销毁
            None => {}
        }
    }
}

pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext should be provided")
}
