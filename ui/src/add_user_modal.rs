//! Dialog for creating a user.

use api::NewUser;
use dioxus::prelude::*;

use crate::session_ctx::use_session;
use crate::ModalOverlay;

const SUBMIT_ERROR: &str = "Erro ao adicionar usuário";

/// Field-level validation of the add form: every field is required and each
/// missing one gets its own message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AddFormErrors {
    pub nome: Option<&'static str>,
    pub email: Option<&'static str>,
    pub usuario: Option<&'static str>,
    pub senha: Option<&'static str>,
}

impl AddFormErrors {
    pub(crate) fn validate(nome: &str, email: &str, usuario: &str, senha: &str) -> Self {
        Self {
            nome: nome.is_empty().then_some("Nome é obrigatório"),
            email: email.is_empty().then_some("Email é obrigatório"),
            usuario: usuario.is_empty().then_some("Usuário é obrigatório"),
            senha: senha.is_empty().then_some("Senha é obrigatória"),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nome.is_none() && self.email.is_none() && self.usuario.is_none() && self.senha.is_none()
    }
}

#[component]
pub fn AddUserModal(on_cancel: EventHandler<()>, on_added: EventHandler<()>) -> Element {
    let session = use_session();
    let mut nome = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut usuario = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let mut field_errors = use_signal(AddFormErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut handle_submit = move || {
        error.set(None);
        let errors = AddFormErrors::validate(&nome(), &email(), &usuario(), &senha());
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(AddFormErrors::default());

        let user = NewUser {
            nome: nome(),
            email: email(),
            usuario: usuario(),
            senha: api::sha256_hex(&senha()),
        };
        let client = session.peek().client();
        saving.set(true);
        spawn(async move {
            match client.create_user(&user).await {
                Ok(()) => on_added.call(()),
                Err(err) => {
                    tracing::error!("erro ao adicionar usuário: {err}");
                    // Keep the modal open with the entered values intact.
                    error.set(Some(SUBMIT_ERROR.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let errors = field_errors();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "p-6",
                h2 { class: "text-2xl font-bold mb-4", "Adicionar Usuário" }
                div {
                    label { class: "block mb-2", "Nome" }
                    input {
                        class: "w-full p-2 border border-gray-300 rounded-lg mb-1",
                        r#type: "text",
                        value: "{nome}",
                        oninput: move |evt| nome.set(evt.value()),
                    }
                    if let Some(message) = errors.nome {
                        p { class: "text-red-500 text-sm mb-4", "{message}" }
                    }
                }
                div {
                    label { class: "block mb-2", "Email" }
                    input {
                        class: "w-full p-2 border border-gray-300 rounded-lg mb-1",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    if let Some(message) = errors.email {
                        p { class: "text-red-500 text-sm mb-4", "{message}" }
                    }
                }
                div {
                    label { class: "block mb-2", "Usuário" }
                    input {
                        class: "w-full p-2 border border-gray-300 rounded-lg mb-1",
                        r#type: "text",
                        value: "{usuario}",
                        oninput: move |evt| usuario.set(evt.value()),
                    }
                    if let Some(message) = errors.usuario {
                        p { class: "text-red-500 text-sm mb-4", "{message}" }
                    }
                }
                div {
                    label { class: "block mb-2", "Senha" }
                    input {
                        class: "w-full p-2 border border-gray-300 rounded-lg mb-1",
                        r#type: "password",
                        value: "{senha}",
                        oninput: move |evt| senha.set(evt.value()),
                    }
                    if let Some(message) = errors.senha {
                        p { class: "text-red-500 text-sm mb-4", "{message}" }
                    }
                }
                if let Some(message) = error() {
                    div { class: "text-red-500 mb-4", "{message}" }
                }
                div {
                    class: "flex justify-end",
                    button {
                        class: "px-4 py-2 bg-gray-500 text-white rounded-lg hover:bg-gray-600 transition-colors duration-300 mr-2",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors duration-300 disabled:opacity-50",
                        disabled: saving(),
                        onclick: move |_| handle_submit(),
                        if saving() { "Adicionando..." } else { "Adicionar" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required() {
        let errors = AddFormErrors::validate("", "", "", "");
        assert_eq!(errors.nome, Some("Nome é obrigatório"));
        assert_eq!(errors.email, Some("Email é obrigatório"));
        assert_eq!(errors.usuario, Some("Usuário é obrigatório"));
        assert_eq!(errors.senha, Some("Senha é obrigatória"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn one_missing_field_reports_only_itself() {
        let errors = AddFormErrors::validate("Ana", "ana@example.com", "ana", "");
        assert_eq!(errors.nome, None);
        assert_eq!(errors.email, None);
        assert_eq!(errors.usuario, None);
        assert_eq!(errors.senha, Some("Senha é obrigatória"));
    }

    #[test]
    fn complete_form_passes() {
        let errors = AddFormErrors::validate("Ana", "ana@example.com", "ana", "s3nh4");
        assert!(errors.is_empty());
    }
}
