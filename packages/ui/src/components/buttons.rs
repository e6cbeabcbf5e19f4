use dioxus::prelude::*;

/// Submit button for a form; the enclosing page owns the disabled logic.
#[component]
pub fn FormSubmitButton(text: String, #[props(default = false)] disabled: bool) -> Element {
    rsx! {
        button {
            class: "btn btn--primary",
            r#type: "submit",
            disabled: disabled,
            "{text}"
        }
    }
}

/// Link-styled button that navigates away without submitting.
#[component]
pub fn CancelButton(
    href: String,
    #[props(default = "Cancel".to_string())] text: String,
) -> Element {
    let nav = use_navigator();

    rsx! {
        button {
            class: "btn btn--cancel",
            r#type: "button",
            onclick: move |_| {
                nav.push(href.as_str());
            },
            "{text}"
        }
    }
}
