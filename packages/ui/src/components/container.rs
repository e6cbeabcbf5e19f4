use dioxus::prelude::*;

/// Titled card that frames a page's content.
#[component]
pub fn Container(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "container",
            h1 {
                class: "container__title",
                "{title}"
            }
            {children}
        }
    }
}
