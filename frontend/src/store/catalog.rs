//! 商品目录状态
//!
//! 保存商品列表、搜索词以及按顺序应用刷新结果所需的记录。
//! 不含响应式类型，由 `crate::catalog` 中的 Leptos 上下文包装成信号。

use mithai_shared::Product;

use super::fallback::sample_catalog;
use crate::error::ApiError;

/// 当前商品数据的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// 内置样例数据（后端尚未或从未响应）
    Fallback,
    /// 后端返回的最新列表
    Remote,
}

/// 一次刷新完成后对状态的影响
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// 列表已替换，包含这么多商品
    Replaced(usize),
    /// 刷新失败，继续显示原列表
    Kept(ApiError),
    /// 期间已发起更新的刷新，本次结果被丢弃
    Superseded,
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
    search_term: String,
    source: CatalogSource,
    last_error: Option<ApiError>,
    /// 最近一次发起的刷新代号
    issued: u64,
}

impl CatalogState {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            search_term: String::new(),
            source: CatalogSource::Fallback,
            last_error: None,
            issued: 0,
        }
    }

    pub fn with_fallback() -> Self {
        Self::new(sample_catalog())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// 因后端失败而仍在显示样例数据
    pub fn is_offline(&self) -> bool {
        self.source == CatalogSource::Fallback && self.last_error.is_some()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// 匹配当前搜索词的商品，保持目录顺序
    pub fn visible(&self) -> Vec<Product> {
        filter_by_name(&self.products, &self.search_term)
    }

    /// 发起一次刷新并返回其代号
    pub fn begin_refresh(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// 应用代号为 `generation` 的刷新结果
    ///
    /// 只有最近发起的刷新可以改变状态。
    pub fn finish_refresh(
        &mut self,
        generation: u64,
        result: Result<Vec<Product>, ApiError>,
    ) -> RefreshOutcome {
        if generation != self.issued {
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                self.source = CatalogSource::Remote;
                self.last_error = None;
                RefreshOutcome::Replaced(count)
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                RefreshOutcome::Kept(e)
            }
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::with_fallback()
    }
}

/// 按商品名做大小写不敏感的子串过滤
pub fn filter_by_name(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.name_matches(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::http::HttpError;
    use mithai_shared::NewProduct;

    fn product(id: i64, name: &str) -> Product {
        Product::new(
            id,
            NewProduct {
                name: name.to_string(),
                category: "Traditional".to_string(),
                price: 100.0,
                stock: 20,
                description: String::new(),
                image_url: None,
            },
        )
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name()).collect()
    }

    fn offline() -> ApiError {
        ApiError::Transport(HttpError::NetworkError("Failed to fetch".to_string()))
    }

    #[test]
    fn test_empty_term_shows_everything() {
        let state = CatalogState::with_fallback();
        assert_eq!(state.visible(), sample_catalog());
    }

    #[test]
    fn test_lad_matches_only_motichoor_ladoo() {
        let mut state = CatalogState::with_fallback();
        state.set_search_term("lad");
        assert_eq!(names(&state.visible()), vec!["Motichoor Ladoo"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut state = CatalogState::with_fallback();
        state.set_search_term("BARFI");
        assert_eq!(names(&state.visible()), vec!["Barfi Mix", "Chocolate Barfi"]);
    }

    #[test]
    fn test_filter_keeps_catalog_order_and_is_exact_subsequence() {
        let catalog = vec![
            product(1, "Kaju Katli"),
            product(2, "kaju roll"),
            product(3, "Rasgulla"),
            product(4, "Pista KAJU"),
        ];

        for term in ["", "kaju", "KaJu", "a", "roll", "zzz", " "] {
            let filtered = filter_by_name(&catalog, term);
            let expected: Vec<Product> = catalog
                .iter()
                .filter(|p| p.name().to_lowercase().contains(&term.to_lowercase()))
                .cloned()
                .collect();
            assert_eq!(filtered, expected, "term {:?}", term);
        }

        assert_eq!(
            names(&filter_by_name(&catalog, "kaju")),
            vec!["Kaju Katli", "kaju roll", "Pista KAJU"]
        );
        assert!(filter_by_name(&catalog, "zzz").is_empty());
    }

    #[test]
    fn test_failed_refresh_keeps_fallback() {
        let mut state = CatalogState::with_fallback();

        let generation = state.begin_refresh();
        let outcome = state.finish_refresh(generation, Err(offline()));

        assert_eq!(outcome, RefreshOutcome::Kept(offline()));
        assert_eq!(state.products(), sample_catalog().as_slice());
        assert_eq!(state.source(), CatalogSource::Fallback);
        assert!(state.is_offline());
    }

    #[test]
    fn test_failed_refresh_keeps_stale_remote_list() {
        let mut state = CatalogState::with_fallback();
        let first = state.begin_refresh();
        state.finish_refresh(first, Ok(vec![product(10, "Peda")]));

        let second = state.begin_refresh();
        state.finish_refresh(
            second,
            Err(ApiError::Decode("expected value".to_string())),
        );

        assert_eq!(names(state.products()), vec!["Peda"]);
        assert_eq!(state.source(), CatalogSource::Remote);
        assert!(!state.is_offline());
        assert!(state.last_error().is_some());
    }

    #[test]
    fn test_successful_refresh_replaces_list_and_refilters() {
        let mut state = CatalogState::with_fallback();
        state.set_search_term("peda");
        assert!(state.visible().is_empty());

        let generation = state.begin_refresh();
        let outcome = state.finish_refresh(
            generation,
            Ok(vec![product(10, "Kesar Peda"), product(11, "Jalebi")]),
        );

        assert_eq!(outcome, RefreshOutcome::Replaced(2));
        assert_eq!(names(&state.visible()), vec!["Kesar Peda"]);
        assert_eq!(state.source(), CatalogSource::Remote);
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_slow_older_refresh_cannot_overwrite_newer_one() {
        let mut state = CatalogState::with_fallback();

        let slow = state.begin_refresh();
        let fast = state.begin_refresh();

        assert_eq!(
            state.finish_refresh(fast, Ok(vec![product(2, "Newer")])),
            RefreshOutcome::Replaced(1)
        );
        assert_eq!(
            state.finish_refresh(slow, Ok(vec![product(1, "Older")])),
            RefreshOutcome::Superseded
        );
        assert_eq!(names(state.products()), vec!["Newer"]);
    }

    #[test]
    fn test_superseded_failure_does_not_record_error() {
        let mut state = CatalogState::with_fallback();
        let old = state.begin_refresh();
        let _new = state.begin_refresh();

        assert_eq!(state.finish_refresh(old, Err(offline())), RefreshOutcome::Superseded);
        assert!(state.last_error().is_none());
        assert!(!state.is_offline());
    }

    #[test]
    fn test_overlapping_deletes_end_on_latest_list() {
        // 两次删除同时发出；删除 B 先完成并领取代号，删除 A 随后完成
        let a = || product(1, "A");
        let c = || product(3, "C");

        for older_reply_first in [true, false] {
            let mut state = CatalogState::new(vec![a(), product(2, "B"), c()]);
            let after_b = state.begin_refresh();
            let after_a = state.begin_refresh();

            let (b_outcome, a_outcome) = if older_reply_first {
                let b = state.finish_refresh(after_b, Ok(vec![a(), c()]));
                (b, state.finish_refresh(after_a, Ok(vec![c()])))
            } else {
                let a_res = state.finish_refresh(after_a, Ok(vec![c()]));
                (state.finish_refresh(after_b, Ok(vec![a(), c()])), a_res)
            };

            assert_eq!(a_outcome, RefreshOutcome::Replaced(1));
            let expected_b = if older_reply_first {
                RefreshOutcome::Replaced(2)
            } else {
                RefreshOutcome::Superseded
            };
            assert_eq!(b_outcome, expected_b);
            assert_eq!(names(state.products()), vec!["C"]);
        }
    }
}
