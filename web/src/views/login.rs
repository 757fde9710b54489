//! Login view.
//!
//! The password is digested client-side before the credentials leave the
//! browser, so the raw text never appears in the request. Failures show a
//! single generic message whether the backend rejected the credentials or
//! the request never completed.

use dioxus::prelude::*;
use store::Session;
use ui::{store_session, use_session};

use crate::Route;

const LOGIN_ERROR: &str = "Falha no login. Verifique seu nome de usuário e senha.";

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut usuario = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let user = usuario().trim().to_string();
            let pass = senha();
            if user.is_empty() || pass.is_empty() {
                error.set(Some(LOGIN_ERROR.to_string()));
                return;
            }

            loading.set(true);
            let digest = api::sha256_hex(&pass);
            match api::Client::new().login(&user, &digest).await {
                Ok(resp) => {
                    store_session(
                        session,
                        Session {
                            token: resp.id,
                            user_id: resp.user_id.to_string(),
                        },
                    );
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("falha no login: {err}");
                    loading.set(false);
                    error.set(Some(LOGIN_ERROR.to_string()));
                }
            }
        });
    };

    let mut handle_clear = move || {
        usuario.set(String::new());
        senha.set(String::new());
        error.set(None);
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen bg-gray-100 p-8",
            div {
                class: "w-full max-w-md bg-white shadow-md rounded-lg p-8",
                h1 {
                    class: "text-2xl font-bold text-blue-800 text-center mb-6",
                    "Painel Administrativo"
                }

                form {
                    onsubmit: handle_login,
                    class: "flex flex-col gap-4",

                    if let Some(message) = error() {
                        div {
                            class: "px-3 py-2 bg-red-50 border border-red-200 rounded text-red-600 text-sm",
                            "{message}"
                        }
                    }

                    input {
                        class: "w-full p-2 border border-gray-300 rounded-lg",
                        r#type: "text",
                        placeholder: "Usuário",
                        value: "{usuario}",
                        oninput: move |evt| usuario.set(evt.value()),
                    }
                    input {
                        class: "w-full p-2 border border-gray-300 rounded-lg",
                        r#type: "password",
                        placeholder: "Senha",
                        value: "{senha}",
                        oninput: move |evt| senha.set(evt.value()),
                    }

                    div {
                        class: "flex justify-end space-x-2",
                        button {
                            class: "px-4 py-2 bg-gray-500 text-white rounded-lg hover:bg-gray-600 transition-colors duration-300",
                            r#type: "button",
                            onclick: move |_| handle_clear(),
                            "Limpar"
                        }
                        button {
                            class: "px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors duration-300 disabled:opacity-50",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Entrando..." } else { "Entrar" }
                        }
                    }
                }
            }
        }
    }
}
