use dioxus::prelude::*;

use views::{Home, Login, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/home")]
    Home {},
    #[route("/users")]
    Users {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}
