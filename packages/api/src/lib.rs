//! # API crate — HTTP client for the account backend
//!
//! Typed async wrappers around the REST endpoints the front-end talks to.
//! Every call serializes a JSON request body, awaits the response, and maps
//! the status/body pair onto a `Result` so the UI layer can pattern-match
//! instead of intercepting exceptions.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`account`] | Password edit and password reset request calls |
//! | [`config`] | Backend base URL |
//! | [`models`] | Client-safe user projection ([`UserInfo`]) |
//! | [`session`] | Current-session lookup used by the auth provider |

mod account;
mod config;
mod error;
mod models;
mod response;
mod session;

pub use account::{edit_password, request_password_reset, PasswordEdited, ResetRequested};
pub use config::BASE_URL;
pub use error::ApiError;
pub use models::UserInfo;
pub use session::current_user;
