//! Registration Page

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::state::SessionState;

/// Account creation form. Success routes to the login view; it does not
/// establish a session.
#[component]
pub fn Register() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let session = session.clone();
        let navigate = navigate.clone();
        let username = username.get();
        let email = email.get();
        let password = password.get();
        spawn_local(async move {
            match session.register(&username, &email, &password).await {
                Ok(()) => {
                    session.show_success("Account created. Please log in.");
                    navigate("/login", Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="flex min-h-screen items-center justify-center p-4">
            <div class="w-full max-w-sm glass-outer p-6 text-white">
                <h1 class="text-2xl font-bold">"Register"</h1>
                <p class="text-gray-200 text-sm mb-6">
                    "Create an account to start your Momentum."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <div class="space-y-2">
                        <label for="username" class="block text-sm">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            placeholder="yourname"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 placeholder:text-gray-400
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="space-y-2">
                        <label for="email" class="block text-sm">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="m@example.com"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 placeholder:text-gray-400
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="space-y-2">
                        <label for="password" class="block text-sm">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    {move || error.get().map(|e| view! {
                        <p class="text-red-400 text-sm">{e}</p>
                    })}

                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Create Account"
                    </button>
                </form>

                <div class="mt-4 text-center text-sm">
                    "Already have an account? "
                    <A href="/login" class="underline text-white font-bold">
                        "Login"
                    </A>
                </div>
            </div>
        </div>
    }
}
