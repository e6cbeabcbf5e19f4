//! Shared UI for the account management front-end.

pub mod components;

mod auth;
pub use auth::{
    use_auth, use_redirect_if_authenticated, use_redirect_if_not_authenticated, AuthProvider,
    AuthState, AuthStatus,
};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastHost, ToastLevel, ToastProvider, Toasts};

pub mod time;

pub mod validate;
