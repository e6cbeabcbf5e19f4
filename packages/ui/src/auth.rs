//! Authentication context and redirect hooks.

use api::UserInfo;
use dioxus::prelude::*;

/// What we know about the current session.
///
/// `Unknown` is distinct from `Unauthenticated`: pages hold off rendering
/// while the answer is still in flight instead of treating "not yet known"
/// as "logged out".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<UserInfo>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            status: AuthStatus::Unknown,
            user: None,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates once the session lookup resolves.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that resolves the session on mount.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || async move {
        match api::current_user().await {
            Ok(Some(user)) => auth_state.set(AuthState {
                status: AuthStatus::Authenticated,
                user: Some(user),
            }),
            Ok(None) => auth_state.set(AuthState {
                status: AuthStatus::Unauthenticated,
                user: None,
            }),
            Err(err) => {
                // Unreachable backend counts as logged out.
                tracing::error!("session lookup failed: {err}");
                auth_state.set(AuthState {
                    status: AuthStatus::Unauthenticated,
                    user: None,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Guard for public-only pages: once the session is known, authenticated
/// users are sent to their profile. Returns whether the page may render.
pub fn use_redirect_if_authenticated() -> bool {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth().status == AuthStatus::Authenticated {
            nav.replace("/user/profile");
        }
    });

    auth().status == AuthStatus::Unauthenticated
}

/// Guard for protected pages: once the session is known, unauthenticated
/// users are sent to the login page. Returns whether the page may render.
pub fn use_redirect_if_not_authenticated() -> bool {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth().status == AuthStatus::Unauthenticated {
            nav.replace("/login");
        }
    });

    auth().status == AuthStatus::Authenticated
}
