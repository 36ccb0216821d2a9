//! Session State
//!
//! Reactive session context provided to all components: the current user (or
//! absence), the probe-in-flight flag that gates rendering, and toast
//! signals.

use leptos::*;

use crate::api::{self, ApiError};
use crate::model::User;

/// Session context provided at app start and handed down to every view.
#[derive(Clone)]
pub struct SessionState {
    /// The signed-in user, if any.
    pub user: RwSignal<Option<User>>,
    /// True while the initial session probe is in flight. Gated views render
    /// nothing until it clears, so unauthenticated content never flashes.
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Construct the session context, provide it to the component tree and kick
/// off the session probe.
pub fn provide_session_state() {
    let state = SessionState {
        user: create_rw_signal(None),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state.clone());
    state.init();
}

impl SessionState {
    /// Probe for an existing session cookie. Any failure just means nobody
    /// is signed in; network errors are logged and treated the same way.
    pub fn init(&self) {
        let state = self.clone();
        spawn_local(async move {
            match api::fetch_current_user().await {
                Ok(user) => state.user.set(Some(user)),
                Err(e) => {
                    web_sys::console::log_1(&format!("No active session: {}", e).into());
                    state.user.set(None);
                }
            }
            state.loading.set(false);
        });
    }

    /// Submit credentials; on success re-probe the session to populate the
    /// user (the login response carries only the cookie).
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        api::login(email, password).await?;
        let user = api::fetch_current_user().await?;
        self.user.set(Some(user));
        Ok(())
    }

    /// Create an account. Does not establish a session; the caller routes to
    /// the login view.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        api::register(username, email, password).await
    }

    /// Invalidate the session remotely and clear local user state. The local
    /// teardown happens even if the remote call fails.
    pub async fn logout(&self) {
        if let Err(e) = api::logout().await {
            web_sys::console::error_1(&format!("Logout request failed: {}", e).into());
        }
        self.user.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
