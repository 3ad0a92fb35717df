use leptos::prelude::*;

use crate::catalog::use_catalog;
use crate::components::icons::{Icon, SEARCH};
use crate::components::product_card::{ProductCard, card_key};

#[component]
pub fn ShopPage() -> impl IntoView {
    let catalog = use_catalog();
    let visible = catalog.visible();
    let term = catalog.search_term();
    // 离线原因，仅在显示样例数据时存在
    let offline_reason = Memo::new(move |_| {
        catalog.state.with(|s| {
            s.is_offline()
                .then(|| s.last_error().map(ToString::to_string).unwrap_or_default())
        })
    });

    view! {
        <div class="mb-10">
            <div class="relative max-w-2xl mx-auto">
                <span class="absolute left-5 top-1/2 transform -translate-y-1/2 text-gray-400">
                    <Icon paths=SEARCH size=24 />
                </span>
                <input
                    placeholder="Search for your favorite sweets..."
                    class="w-full pl-14 pr-6 py-4 text-lg border-2 border-pink-200 rounded-full shadow-lg focus:border-pink-500 focus:ring-4 focus:ring-pink-200 focus:outline-none transition-all"
                    on:input=move |ev| catalog.set_search_term(event_target_value(&ev))
                    prop:value=term
                />
            </div>
            <Show when=move || offline_reason.with(Option::is_some)>
                <p
                    class="text-center text-sm text-gray-400 mt-3"
                    title=move || offline_reason.get().unwrap_or_default()
                >
                    "Showing our sample selection while the shop is offline"
                </p>
            </Show>
        </div>

        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-6">
            <For
                each=move || visible.get()
                key=card_key
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>

        <Show when=move || visible.with(Vec::is_empty)>
            <div class="text-center py-20">
                <div class="text-6xl mb-4">"🍬"</div>
                <p class="text-gray-500 text-xl">"No sweets found matching your search"</p>
            </div>
        </Show>
    }
}
