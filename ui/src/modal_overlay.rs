use dioxus::prelude::*;

/// Full-screen dimmed overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black bg-opacity-50 p-4",
            style: "z-index: 1000",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-lg w-full max-w-md mx-auto",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
