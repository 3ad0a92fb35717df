use leptos::prelude::*;
use mithai_shared::{FALLBACK_IMAGE, Product, ProductId};

use crate::components::icons::{HEART, Icon};

pub const LIMITED_BADGE: &str = "Limited!";

/// 图片上方的库存徽章
pub fn stock_badge(product: &Product) -> Option<&'static str> {
    product.is_limited().then_some(LIMITED_BADGE)
}

/// `For` 列表键，覆盖卡片上显示的所有字段
pub type CardKey = (ProductId, String, String, u64, u32, String, Option<String>);

/// 任一显示字段变化都会产生新键，刷新后卡片随之重建
pub fn card_key(product: &Product) -> CardKey {
    let f = &product.fields;
    (
        product.id,
        f.name.clone(),
        f.category.clone(),
        f.price.to_bits(),
        f.stock,
        f.description.clone(),
        f.image_url.clone(),
    )
}

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₹{:.0}", price)
    } else {
        format!("₹{:.2}", price)
    }
}

/// 商品图片，加载失败时换成占位图
#[component]
pub fn ProductImage(
    product: Product,
    #[prop(into)] class: String,
) -> impl IntoView {
    let (src, set_src) = signal(product.image_src().to_string());
    view! {
        <img
            src=src
            alt=product.fields.name
            class=class
            on:error=move |_| set_src.set(FALLBACK_IMAGE.to_string())
        />
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let badge = stock_badge(&product);
    let name = product.fields.name.clone();
    let price = format_price(product.fields.price);

    view! {
        <div class="bg-white rounded-2xl shadow-lg hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-2 overflow-hidden group">
            <div class="relative h-48 overflow-hidden bg-gradient-to-br from-orange-100 to-pink-100">
                <ProductImage
                    product=product
                    class="h-full w-full object-cover group-hover:scale-110 transition-transform duration-500"
                />
                <div class="absolute top-3 right-3">
                    <button class="bg-white/90 backdrop-blur-sm p-2 rounded-full shadow-lg hover:bg-pink-500 hover:text-white transition-all">
                        <Icon paths=HEART size=18 />
                    </button>
                </div>
                {badge.map(|label| view! {
                    <div class="absolute top-3 left-3">
                        <span class="bg-red-500 text-white px-3 py-1 rounded-full text-xs font-bold shadow-lg">
                            {label}
                        </span>
                    </div>
                })}
            </div>

            <div class="p-4">
                <h3 class="font-bold text-gray-800 mb-2 line-clamp-2 min-h-[3rem]">{name}</h3>
                <div class="flex items-center justify-between mb-3">
                    <span class="text-2xl font-bold bg-gradient-to-r from-orange-600 to-pink-600 bg-clip-text text-transparent">
                        {price}
                    </span>
                    <span class="text-xs text-gray-500">"/kg"</span>
                </div>
                <button class="w-full py-2.5 bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-600 hover:to-pink-600 text-white rounded-xl font-semibold shadow-md hover:shadow-lg transition-all transform hover:scale-105">
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mithai_shared::NewProduct;

    fn with_stock(stock: u32) -> Product {
        Product::new(
            3,
            NewProduct {
                name: "Gulab Jamun".to_string(),
                category: "Traditional".to_string(),
                price: 320.0,
                stock,
                description: String::new(),
                image_url: None,
            },
        )
    }

    #[test]
    fn test_limited_badge() {
        assert_eq!(stock_badge(&with_stock(5)), Some("Limited!"));
        assert_eq!(stock_badge(&with_stock(40)), None);
    }

    #[test]
    fn test_card_key_follows_every_displayed_field() {
        let base = with_stock(20);
        let key = card_key(&base);

        let mut edits = Vec::new();
        let mut p = base.clone();
        p.fields.image_url = Some("https://img.example/jamun.jpg".to_string());
        edits.push(p);
        let mut p = base.clone();
        p.fields.category = "Bengali".to_string();
        edits.push(p);
        let mut p = base.clone();
        p.fields.description = "Soft and syrupy".to_string();
        edits.push(p);
        let mut p = base.clone();
        p.fields.price = 330.0;
        edits.push(p);

        for edited in &edits {
            assert_ne!(card_key(edited), key);
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(450.0), "₹450");
        assert_eq!(format_price(99.5), "₹99.50");
    }
}
