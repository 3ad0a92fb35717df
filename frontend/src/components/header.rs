use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::components::icons::{Icon, LOG_IN, LOG_OUT, PACKAGE, SHOPPING_CART};
use crate::web::router::use_router;
use crate::web::view::{NavTabs, ViewMode};

fn tab_class(active: bool, accent: &str) -> String {
    if active {
        format!("px-5 py-2 rounded-full font-semibold transition-all flex items-center gap-2 bg-white {} shadow-lg", accent)
    } else {
        "px-5 py-2 rounded-full font-semibold transition-all flex items-center gap-2 text-white hover:bg-white/20".to_string()
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let current = router.current_view();

    let tabs = Memo::new(move |_| NavTabs::for_role(auth.state.with(|s| s.role())));

    let on_logout = move |_| logout(&auth);

    view! {
        <header class="bg-gradient-to-r from-orange-500 via-pink-500 to-purple-600 shadow-lg">
            <div class="max-w-7xl mx-auto px-4 py-5 flex justify-between items-center">
                <h1 class="text-3xl font-bold flex items-center gap-3 text-white drop-shadow-lg">
                    <Icon paths=SHOPPING_CART size=36 class="animate-pulse" />
                    <span class="font-serif">"Mithai Junction"</span>
                </h1>
                <div class="flex gap-3 items-center">
                    <button
                        on:click=move |_| router.navigate(ViewMode::Shop)
                        class=move || tab_class(current.get() == ViewMode::Shop, "text-pink-600")
                    >
                        "Shop"
                    </button>

                    <Show when=move || tabs.get().admin>
                        <button
                            on:click=move |_| router.navigate(ViewMode::Admin)
                            class=move || tab_class(current.get() == ViewMode::Admin, "text-purple-600")
                        >
                            <Icon paths=PACKAGE size=18 /> "Admin"
                        </button>
                    </Show>

                    <Show
                        when=move || tabs.get().logout
                        fallback=move || view! {
                            <button
                                on:click=move |_| router.navigate(ViewMode::Auth)
                                class="px-5 py-2 bg-white text-pink-600 rounded-full font-semibold hover:shadow-lg transition-all flex items-center gap-2"
                            >
                                <Icon paths=LOG_IN size=18 /> "Login"
                            </button>
                        }
                    >
                        <span class="hidden md:inline text-white/90 text-sm">
                            {move || auth.state.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default())}
                        </span>
                        <button
                            on:click=on_logout
                            class="px-5 py-2 bg-white/20 hover:bg-white/30 text-white rounded-full font-semibold transition-all flex items-center gap-2"
                        >
                            <Icon paths=LOG_OUT size=18 /> "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
