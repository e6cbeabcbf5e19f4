//! Password edit page for a logged-in user.

use dioxus::prelude::*;

use ui::components::{CancelButton, Container, Form, FormSubmitButton, InputField};
use ui::validate::{validate_password_field, validate_password_match_field};
use ui::{push_toast, use_redirect_if_not_authenticated, use_toasts, ToastLevel};

use crate::Route;

#[component]
pub fn EditPassword() -> Element {
    // Redirect the user if they are not logged in
    let is_ready = use_redirect_if_not_authenticated();

    let mut password1 = use_signal(String::new);
    let mut password2 = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let mut toasts = use_toasts();
    let nav = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            saving.set(true);

            let password_errors = validate_password_field(&password1());
            let match_errors = validate_password_match_field(&password1(), &password2());
            let all_errors: Vec<String> =
                password_errors.into_iter().chain(match_errors).collect();

            if !all_errors.is_empty() {
                for error in all_errors {
                    push_toast(&mut toasts, ToastLevel::Error, error);
                }
                saving.set(false);
                return;
            }

            match api::edit_password(&password1(), &password2()).await {
                Ok(outcome) => {
                    match outcome.warning {
                        Some(warning) => push_toast(
                            &mut toasts,
                            ToastLevel::Warning,
                            format!("Password edited successfully! {warning}"),
                        ),
                        None => push_toast(
                            &mut toasts,
                            ToastLevel::Success,
                            "Password edited successfully!",
                        ),
                    }
                    nav.push(Route::Profile {});
                }
                Err(api::ApiError::Rejected { message }) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        message.unwrap_or_else(|| "Error editing password.".to_string()),
                    );
                }
                Err(err) => {
                    tracing::error!("edit password request failed: {err}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "An unexpected error occurred.",
                    );
                }
            }

            saving.set(false);
        });
    };

    // Wait until the authentication state is known
    if !is_ready {
        return rsx! {};
    }

    let password_errors = validate_password_field(&password1());
    let match_errors = validate_password_match_field(&password1(), &password2());
    let is_disabled = !password_errors.is_empty() || !match_errors.is_empty();
    let button_text = if saving() { "Saving..." } else { "Edit password" };

    rsx! {
        Container {
            title: "Edit password",
            Form {
                onsubmit: handle_submit,

                // Decoy field so browsers do not offer to autofill
                input { r#type: "password", style: "display: none;" }

                InputField {
                    label: "New password",
                    input_type: "password",
                    value: password1(),
                    required: true,
                    errors: password_errors,
                    oninput: move |evt: FormEvent| password1.set(evt.value()),
                }

                InputField {
                    label: "Confirm password",
                    input_type: "password",
                    value: password2(),
                    required: true,
                    errors: match_errors,
                    oninput: move |evt: FormEvent| password2.set(evt.value()),
                }

                FormSubmitButton {
                    text: "{button_text}",
                    disabled: is_disabled,
                }

                CancelButton { href: "/user/profile" }
            }
        }
    }
}
