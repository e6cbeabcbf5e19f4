//! Profile page for a logged-in user.

use dioxus::prelude::*;

use ui::components::Container;
use ui::{use_auth, use_redirect_if_not_authenticated};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    // Redirect the user if they are not logged in
    let is_ready = use_redirect_if_not_authenticated();
    let auth = use_auth();

    if !is_ready {
        return rsx! {};
    }

    let state = auth();

    rsx! {
        Container {
            title: "Profile",
            if let Some(user) = state.user {
                p {
                    class: "profile__name",
                    "Signed in as {user.display_name()}"
                }
                p {
                    class: "profile__email",
                    "{user.email}"
                }
            }
            p {
                class: "page-note",
                Link { to: Route::EditPassword {}, "Edit password" }
            }
        }
    }
}
