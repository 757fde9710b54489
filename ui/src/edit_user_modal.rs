//! Dialog for editing an existing user.
//!
//! Opens by fetching the record to pre-populate the form. The password
//! field starts blank and blank means "unchanged": the request then omits
//! the `senha` field entirely instead of sending the digest of an empty
//! string.

use api::UpdatedUser;
use dioxus::prelude::*;

use crate::session_ctx::use_session;
use crate::ModalOverlay;

const FETCH_ERROR: &str = "Erro ao buscar dados do usuário";
const SUBMIT_ERROR: &str = "Erro ao atualizar usuário";

/// Field-level validation of the edit form. The password is optional here;
/// name, login handle and email stay required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EditFormErrors {
    pub nome: Option<&'static str>,
    pub usuario: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl EditFormErrors {
    pub(crate) fn validate(nome: &str, usuario: &str, email: &str) -> Self {
        Self {
            nome: nome.is_empty().then_some("Nome é obrigatório"),
            usuario: usuario.is_empty().then_some("Usuário é obrigatório"),
            email: email.is_empty().then_some("Email é obrigatório"),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nome.is_none() && self.usuario.is_none() && self.email.is_none()
    }
}

/// The digest to send for an edit: `None` keeps the stored password.
pub(crate) fn replacement_digest(senha: &str) -> Option<String> {
    if senha.is_empty() {
        None
    } else {
        Some(api::sha256_hex(senha))
    }
}

#[component]
pub fn EditUserModal(
    user_id: i64,
    on_cancel: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut nome = use_signal(String::new);
    let mut usuario = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let mut ativo = use_signal(|| true);
    let mut loaded = use_signal(|| false);
    let mut field_errors = use_signal(EditFormErrors::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Fetch the record once on open to pre-populate the form.
    let record = use_resource(move || {
        let client = session.peek().client();
        async move { client.fetch_user(user_id).await }
    });

    use_effect(move || match record.read().as_ref() {
        Some(Ok(user)) => {
            nome.set(user.nome.clone());
            usuario.set(user.usuario.clone());
            email.set(user.email.clone());
            // An omitted flag means the account is active.
            ativo.set(user.ativo.unwrap_or(true));
            loaded.set(true);
        }
        Some(Err(err)) => {
            tracing::error!("erro ao buscar dados do usuário {user_id}: {err}");
            error.set(Some(FETCH_ERROR.to_string()));
        }
        None => {}
    });

    let mut handle_submit = move || {
        error.set(None);
        let errors = EditFormErrors::validate(&nome(), &usuario(), &email());
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(EditFormErrors::default());

        let user = UpdatedUser {
            id: user_id,
            nome: nome(),
            email: email(),
            usuario: usuario(),
            senha: replacement_digest(&senha()),
            ativo: ativo(),
        };
        let client = session.peek().client();
        saving.set(true);
        spawn(async move {
            match client.update_user(&user).await {
                Ok(()) => on_saved.call(()),
                Err(err) => {
                    tracing::error!("erro ao atualizar usuário {}: {err}", user.id);
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
                h2 { class: "text-2xl font-bold mb-4", "Editar Usuário" }
                if !loaded() {
                    p { class: "py-3 text-center text-gray-500", "Carregando..." }
                    if let Some(message) = error() {
                        div { class: "text-red-500 mb-4 text-center", "{message}" }
                    }
                } else {
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium mb-1", "Nome" }
                        input {
                            class: "w-full p-2 border rounded",
                            r#type: "text",
                            value: "{nome}",
                            oninput: move |evt| nome.set(evt.value()),
                        }
                        if let Some(message) = errors.nome {
                            p { class: "text-red-500 text-sm", "{message}" }
                        }
                    }
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium mb-1", "Usuário" }
                        input {
                            class: "w-full p-2 border rounded",
                            r#type: "text",
                            value: "{usuario}",
                            oninput: move |evt| usuario.set(evt.value()),
                        }
                        if let Some(message) = errors.usuario {
                            p { class: "text-red-500 text-sm", "{message}" }
                        }
                    }
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium mb-1", "Email" }
                        input {
                            class: "w-full p-2 border rounded",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        if let Some(message) = errors.email {
                            p { class: "text-red-500 text-sm", "{message}" }
                        }
                    }
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium mb-1", "Senha" }
                        input {
                            class: "w-full p-2 border rounded",
                            r#type: "password",
                            placeholder: "Deixe em branco para manter",
                            value: "{senha}",
                            oninput: move |evt| senha.set(evt.value()),
                        }
                    }
                    div {
                        class: "mb-4 flex items-center",
                        label { class: "block text-sm font-medium mr-2", "Ativo" }
                        input {
                            class: "form-checkbox h-5 w-5 text-blue-600",
                            r#type: "checkbox",
                            checked: ativo(),
                            onchange: move |evt| ativo.set(evt.checked()),
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
                            if saving() { "Salvando..." } else { "Salvar" }
                        }
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
    fn password_is_optional_but_identity_fields_are_not() {
        let errors = EditFormErrors::validate("", "", "");
        assert_eq!(errors.nome, Some("Nome é obrigatório"));
        assert_eq!(errors.usuario, Some("Usuário é obrigatório"));
        assert_eq!(errors.email, Some("Email é obrigatório"));

        let errors = EditFormErrors::validate("Ana", "ana", "ana@example.com");
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_password_means_unchanged() {
        assert_eq!(replacement_digest(""), None);

        let digest = replacement_digest("nova-senha").unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, api::sha256_hex("nova-senha"));
    }
}
