use leptos::prelude::*;
use mithai_shared::{NewProduct, ProductId};

use crate::auth::use_auth;
use crate::catalog::use_catalog;
use crate::components::icons::{Icon, TRASH};
use crate::components::product_card::{ProductImage, card_key, format_price};
use crate::components::product_form::ProductForm;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let auth = use_auth();
    let catalog = use_catalog();
    let products = catalog.all();

    let handle_create = move |product: NewProduct| {
        log_info!("Admin", "creating {}", product.name);
        catalog.create(auth.token(), product);
    };

    let handle_delete = move |id: ProductId| {
        log_info!("Admin", "deleting product {}", id);
        catalog.delete(auth.token(), id);
    };

    view! {
        <div class="space-y-6">
            <div class="bg-white rounded-3xl shadow-xl p-8">
                <h2 class="text-3xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent mb-6">
                    "Admin Dashboard"
                </h2>

                <ProductForm on_create=handle_create />

                <div class="space-y-3">
                    <For
                        each=move || products.get()
                        key=card_key
                        children=move |product| {
                            let id = product.id;
                            let name = product.fields.name.clone();
                            let summary = format!(
                                "{} • Stock: {}",
                                format_price(product.fields.price),
                                product.fields.stock
                            );
                            view! {
                                <div class="flex items-center justify-between bg-gradient-to-r from-purple-50 to-pink-50 p-4 rounded-xl hover:shadow-md transition-all">
                                    <div class="flex items-center gap-4">
                                        <ProductImage product=product class="w-16 h-16 object-cover rounded-lg" />
                                        <div>
                                            <span class="font-semibold text-gray-800">{name}</span>
                                            <div class="text-sm text-gray-500">{summary}</div>
                                        </div>
                                    </div>
                                    <button
                                        on:click=move |_| handle_delete(id)
                                        class="text-red-500 hover:bg-red-50 p-2 rounded-lg transition-all"
                                    >
                                        <Icon paths=TRASH size=20 />
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
