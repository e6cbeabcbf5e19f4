//! Transient user-facing notifications.

use std::time::Duration;

use dioxus::prelude::*;

const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a message, removing it again after a fixed delay.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let mut toasts = *toasts;
    let id = {
        let mut state = toasts.write();
        let id = state.next_id;
        state.next_id += 1;
        state.entries.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    };
    spawn(async move {
        crate::time::sleep(AUTO_DISMISS).await;
        toasts.write().entries.retain(|toast| toast.id != id);
    });
}

/// Provides the toast context and renders the stack above the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let entries = toasts().entries.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Warning => "toast toast--warning",
                        ToastLevel::Error => "toast toast--error",
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
