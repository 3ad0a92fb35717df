//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换（经由纯数据的 `ProductDraft`）

use leptos::prelude::*;
use mithai_shared::NewProduct;

/// 表单的原始输入文本
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub description: String,
    pub image_url: String,
}

impl ProductDraft {
    /// 校验草稿并生成创建请求体
    pub fn to_new_product(&self) -> Result<NewProduct, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| "Price must be a non-negative number".to_string())?;

        let stock = self
            .stock
            .trim()
            .parse::<u32>()
            .map_err(|_| "Stock must be a whole number of 0 or more".to_string())?;

        let image_url = self.image_url.trim();

        Ok(NewProduct {
            name: name.to_string(),
            category: self.category.trim().to_string(),
            price,
            stock,
            description: self.description.trim().to_string(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        })
    }
}

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub description: RwSignal<String>,
    pub image_url: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::from_draft(ProductDraft::blank())
    }

    fn from_draft(draft: ProductDraft) -> Self {
        Self {
            name: RwSignal::new(draft.name),
            category: RwSignal::new(draft.category),
            price: RwSignal::new(draft.price),
            stock: RwSignal::new(draft.stock),
            description: RwSignal::new(draft.description),
            image_url: RwSignal::new(draft.image_url),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        let blank = ProductDraft::blank();
        self.name.set(blank.name);
        self.category.set(blank.category);
        self.price.set(blank.price);
        self.stock.set(blank.stock);
        self.description.set(blank.description);
        self.image_url.set(blank.image_url);
    }

    pub fn snapshot(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            price: self.price.get_untracked(),
            stock: self.stock.get_untracked(),
            description: self.description.get_untracked(),
            image_url: self.image_url.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDraft {
    fn blank() -> Self {
        Self {
            category: "Traditional".to_string(),
            price: "0".to_string(),
            stock: "0".to_string(),
            ..Default::default()
        }
    }
}
