//! Login page. Credential submission itself is handled elsewhere; this
//! view exists as the navigation target for logged-out users.

use dioxus::prelude::*;

use ui::components::Container;
use ui::use_redirect_if_authenticated;

use crate::Route;

#[component]
pub fn Login() -> Element {
    // Redirect the user if they are already logged in
    let is_ready = use_redirect_if_authenticated();

    if !is_ready {
        return rsx! {};
    }

    rsx! {
        Container {
            title: "Log in",
            p {
                class: "page-note",
                "Sign in to manage your account."
            }
            p {
                class: "page-note",
                Link { to: Route::ForgotPassword {}, "Forgot your password?" }
            }
        }
    }
}
