use leptos::prelude::*;
use leptos::task::spawn_local;
use mithai_shared::{AuthMode, Credentials};

use crate::api::BrowserApi;
use crate::auth::{authenticate, use_auth};
use crate::components::icons::{Icon, USER};

fn heading(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Welcome Back!", "Login to your sweet account"),
        AuthMode::Register => ("Create Account", "Join Mithai Junction today"),
    }
}

fn toggle_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Don't have an account? Register",
        AuthMode::Register => "Already have an account? Login",
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_context::<BrowserApi>().expect("BrowserApi should be provided");
    let api = StoredValue::new(api);

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (mode, set_mode) = signal(AuthMode::Login);
    let (is_submitting, set_is_submitting) = signal(false);

    let submit = move || {
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let mode = mode.get_untracked();
        let api = api.get_value();

        spawn_local(async move {
            if authenticate(&auth, &api, mode, credentials).await.is_ok() {
                set_email.set(String::new());
                set_password.set(String::new());
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto">
            <div class="bg-white rounded-3xl shadow-2xl p-8 border-t-4 border-pink-500">
                <div class="text-center mb-6">
                    <div class="inline-block p-4 bg-gradient-to-br from-orange-400 to-pink-500 rounded-full mb-4 text-white">
                        <Icon paths=USER size=32 />
                    </div>
                    <h2 class="text-3xl font-bold text-gray-800">{move || heading(mode.get()).0}</h2>
                    <p class="text-gray-500 mt-2">{move || heading(mode.get()).1}</p>
                </div>

                <div class="space-y-4">
                    <input
                        class="w-full px-4 py-3 border-2 border-gray-200 rounded-xl focus:border-pink-500 focus:ring-4 focus:ring-pink-100 focus:outline-none transition-all"
                        placeholder="Email"
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="w-full px-4 py-3 border-2 border-gray-200 rounded-xl focus:border-pink-500 focus:ring-4 focus:ring-pink-100 focus:outline-none transition-all"
                        placeholder="Password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <button
                        on:click=move |_| submit()
                        disabled=move || is_submitting.get()
                        class="w-full py-3 bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-600 hover:to-pink-600 text-white rounded-xl font-bold shadow-lg hover:shadow-xl transition-all transform hover:scale-105"
                    >
                        {move || match mode.get() {
                            AuthMode::Login => "Login",
                            AuthMode::Register => "Register",
                        }}
                    </button>
                </div>

                <div class="mt-6 text-center">
                    <button
                        on:click=move |_| set_mode.update(|m| *m = m.toggled())
                        class="text-pink-600 hover:text-pink-700 font-medium transition-colors"
                    >
                        {move || toggle_label(mode.get())}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_follows_mode() {
        assert_eq!(heading(AuthMode::Login).0, "Welcome Back!");
        assert_eq!(heading(AuthMode::Register).0, "Create Account");
        assert_eq!(toggle_label(AuthMode::Login), "Don't have an account? Register");
        assert_eq!(toggle_label(AuthMode::Register), "Already have an account? Login");
    }
}
