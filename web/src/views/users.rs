//! Session-gated view around the users table.

use dioxus::prelude::*;
use ui::{clear_session, use_session, Header, UsersTable};

use crate::Route;

#[component]
pub fn Users() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",
            Header {
                active_item: "Usuários",
                on_nav_click: move |item: &'static str| {
                    if item != "Usuários" {
                        nav.push(Route::Home {});
                    }
                },
                on_logo_click: move |_| {
                    nav.push(Route::Home {});
                },
                on_logout: move |_| {
                    clear_session(session);
                    nav.replace(Route::Login {});
                },
            }
            main {
                class: "p-6",
                UsersTable {}
            }
        }
    }
}
