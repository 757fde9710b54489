use dioxus::prelude::*;

/// Navigation tabs shown in the header. Only "Usuários" has a view of its
/// own; the remaining tabs just mark themselves active.
pub const NAV_ITEMS: [&str; 5] = [
    "Dashboard",
    "Mensagens",
    "Proposituras",
    "Usuários",
    "Configurações",
];

/// Top bar with the brand area, the tab strip and the logout button.
/// Purely presentational: navigation and session teardown are the caller's
/// concern, wired through the event handlers.
#[component]
pub fn Header(
    active_item: String,
    on_nav_click: EventHandler<&'static str>,
    on_logo_click: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        header {
            class: "flex items-center justify-between p-4 bg-white shadow-lg",
            div {
                class: "flex items-center space-x-4",
                span {
                    class: "text-xl font-bold text-blue-800 cursor-pointer",
                    onclick: move |_| on_logo_click.call(()),
                    "Painel Administrativo"
                }
            }
            nav {
                class: "flex-grow flex justify-center space-x-6",
                for item in NAV_ITEMS {
                    button {
                        class: if active_item == item {
                            "text-blue-600 hover:text-blue-800 transition-colors duration-300 font-bold border-b-2 border-blue-600"
                        } else {
                            "text-blue-600 hover:text-blue-800 transition-colors duration-300"
                        },
                        onclick: move |_| on_nav_click.call(item),
                        "{item}"
                    }
                }
            }
            button {
                class: "px-6 py-2 text-red-600 rounded-lg text-lg font-semibold hover:text-white hover:bg-red-600 transition-colors duration-300",
                onclick: move |_| on_logout.call(()),
                "Sair"
            }
        }
    }
}
