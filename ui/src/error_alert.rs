use dioxus::prelude::*;

/// Dismissable banner for the generic per-operation error messages. The
/// raw failure never reaches this component; callers log it and pass a
/// localized string.
#[component]
pub fn ErrorAlert(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center text-red-500 text-center mt-4",
            span { "{message}" }
            button {
                class: "ml-2 px-2 text-red-500 hover:text-red-700",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
