//! Landing view after login. Hosts the header; only the "Usuários" tab
//! leads to a view of its own, the others just mark themselves active.

use dioxus::prelude::*;
use ui::{clear_session, use_session, Header};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut active_item = use_signal(|| "Dashboard".to_string());

    if !session().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",
            Header {
                active_item: active_item(),
                on_nav_click: move |item: &'static str| {
                    if item == "Usuários" {
                        nav.push(Route::Users {});
                    } else {
                        active_item.set(item.to_string());
                    }
                },
                on_logo_click: move |_| active_item.set("Dashboard".to_string()),
                on_logout: move |_| {
                    clear_session(session);
                    nav.replace(Route::Login {});
                },
            }
            main {
                class: "p-6",
                h2 { class: "text-2xl font-bold text-gray-700", "Bem-vindo" }
                p { class: "text-gray-500 mt-2", "Selecione uma opção no menu acima." }
            }
        }
    }
}
