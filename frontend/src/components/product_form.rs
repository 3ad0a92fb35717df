//! 新商品表单
//!
//! 由 `form_state` 持有数据，本文件只负责渲染与提交。

mod form_state;

use leptos::prelude::*;
use mithai_shared::NewProduct;

use form_state::FormState;

#[component]
fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-sm font-medium text-gray-600">
            {label}
            <input
                type=input_type
                placeholder=placeholder
                class="px-4 py-2 border-2 border-gray-200 rounded-xl focus:border-purple-500 focus:outline-none"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn ProductForm(#[prop(into)] on_create: Callback<NewProduct>) -> impl IntoView {
    let state = FormState::new();
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match state.snapshot().to_new_product() {
            Ok(product) => {
                set_error_msg.set(None);
                on_create.run(product);
                state.reset();
            }
            Err(msg) => set_error_msg.set(Some(msg)),
        }
    };

    view! {
        <form on:submit=on_submit class="mb-6 space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <TextField label="Name" value=state.name placeholder="Kaju Katli" />
                <TextField label="Category" value=state.category />
                <TextField label="Image URL" value=state.image_url placeholder="https://" />
                <TextField label="Price (₹/kg)" value=state.price input_type="number" />
                <TextField label="Stock" value=state.stock input_type="number" />
                <TextField label="Description" value=state.description />
            </div>

            <Show when=move || error_msg.get().is_some()>
                <p role="alert" class="text-sm text-red-600">
                    {move || error_msg.get().unwrap_or_default()}
                </p>
            </Show>

            <button
                type="submit"
                class="bg-gradient-to-r from-purple-600 to-pink-600 text-white px-6 py-3 rounded-xl font-semibold shadow-lg hover:shadow-xl transition-all transform hover:scale-105"
            >
                "+ Create New Sweet"
            </button>
        </form>
    }
}
