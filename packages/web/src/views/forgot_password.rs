//! Password reset request page.

use std::time::Duration;

use dioxus::prelude::*;

use ui::components::{Container, Form, FormSubmitButton, InputField};
use ui::validate::validate_email_field;
use ui::{push_toast, use_redirect_if_authenticated, use_toasts, ToastLevel};

use crate::Route;

/// How long the confirmation toast stays on screen before the user is
/// taken to the login page.
const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[component]
pub fn ForgotPassword() -> Element {
    // Redirect the user if they are already logged in
    let is_ready = use_redirect_if_authenticated();

    let mut email = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let mut toasts = use_toasts();
    let nav = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);

            let email_errors = validate_email_field(&email());
            if !email_errors.is_empty() {
                for error in email_errors {
                    push_toast(&mut toasts, ToastLevel::Error, error);
                }
                loading.set(false);
                return;
            }

            match api::request_password_reset(email().trim()).await {
                Ok(outcome) => {
                    let text = outcome
                        .message
                        .unwrap_or_else(|| "Email to reset password has been sent".to_string());
                    push_toast(&mut toasts, ToastLevel::Success, text);

                    // Leave the confirmation on screen before navigating away
                    spawn(async move {
                        ui::time::sleep(REDIRECT_DELAY).await;
                        nav.push(Route::Login {});
                    });
                }
                Err(api::ApiError::Rejected { message }) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        message.unwrap_or_else(|| "Error requesting link.".to_string()),
                    );
                }
                Err(err) => {
                    tracing::error!("password reset request failed: {err}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "An error occurred while sending the request.",
                    );
                }
            }

            loading.set(false);
        });
    };

    // Wait until the authentication state is known
    if !is_ready {
        return rsx! {};
    }

    let email_errors = validate_email_field(&email());
    let is_disabled = !email_errors.is_empty() || loading();
    let button_text = if loading() { "Send link..." } else { "Reset password" };

    rsx! {
        Container {
            title: "Forgot password",
            Form {
                onsubmit: handle_submit,

                InputField {
                    label: "Email for password reset",
                    input_type: "email",
                    value: email(),
                    required: true,
                    errors: email_errors,
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                FormSubmitButton {
                    text: "{button_text}",
                    disabled: is_disabled,
                }
            }
        }
    }
}
