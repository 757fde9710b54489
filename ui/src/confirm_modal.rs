use dioxus::prelude::*;

use crate::ModalOverlay;

/// Stateless confirmation dialog: renders the message and forwards the
/// outcome. Cancelling has no side effects.
#[component]
pub fn ConfirmModal(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "p-6",
                p { class: "text-lg mb-6", "{message}" }
                div {
                    class: "flex justify-end",
                    button {
                        class: "px-4 py-2 bg-gray-500 text-white rounded-lg hover:bg-gray-600 transition-colors duration-300 mr-2",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600 transition-colors duration-300",
                        onclick: move |_| on_confirm.call(()),
                        "Excluir"
                    }
                }
            }
        }
    }
}
