use dioxus::prelude::*;

/// Form wrapper; the page's submit handler decides what happens.
#[component]
pub fn Form(onsubmit: EventHandler<FormEvent>, children: Element) -> Element {
    rsx! {
        form {
            class: "form",
            onsubmit: move |evt| onsubmit.call(evt),
            {children}
        }
    }
}

/// Labelled input with its current validation errors rendered inline.
#[component]
pub fn InputField(
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    value: String,
    #[props(default = 50)] maxlength: i64,
    #[props(default = false)] required: bool,
    #[props(default)] errors: Vec<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "input-field",
            label {
                class: "input-field__label",
                "{label}"
            }
            input {
                class: "input-field__input",
                r#type: "{input_type}",
                value: "{value}",
                maxlength: "{maxlength}",
                required: required,
                oninput: move |evt| oninput.call(evt),
            }
            if !errors.is_empty() {
                ul {
                    class: "input-field__errors",
                    for error in errors.iter() {
                        li { "{error}" }
                    }
                }
            }
        }
    }
}
