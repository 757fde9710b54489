//! Server-backed users table: listing, search, sort and pagination state
//! plus the add/edit/delete lifecycles.
//!
//! The component keeps the pure transition logic in [`store::TableState`]
//! and only owns the glue: issuing loads, feeding results back, and
//! coordinating the three dialogs. Loads are guarded by the state's
//! generation token so a slow superseded response never overwrites newer
//! rows.

use api::{ListRequest, SortSpec, UserRecord};
use dioxus::prelude::*;
use store::{SortDirection, TableQuery, TableState};

use crate::session_ctx::use_session;
use crate::{AddUserModal, ConfirmModal, EditUserModal, ErrorAlert};

/// One configured column: the record field it reads and its header label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
}

/// Column layout of the users table.
pub const USER_COLUMNS: &[Column] = &[
    Column { key: "id", title: "ID" },
    Column { key: "nome", title: "Nome" },
    Column { key: "usuario", title: "Usuário" },
    Column { key: "email", title: "Email" },
];

const LOAD_ERROR: &str = "Erro ao buscar usuários";
const DELETE_ERROR: &str = "Erro ao excluir usuário";

fn list_request(query: &TableQuery) -> ListRequest {
    ListRequest {
        page: query.page,
        size: query.size,
        filter: query.filter.clone(),
        sort: SortSpec {
            sort_column: query.sort_column.clone(),
            sort_direction: query.sort_direction.as_str().to_string(),
        },
    }
}

#[component]
pub fn UsersTable() -> Element {
    let session = use_session();
    let mut state = use_signal(TableState::default);
    let mut rows = use_signal(Vec::<UserRecord>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| Option::<i64>::None);

    let mut show_add = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<i64>::None);
    let mut pending_delete = use_signal(|| Option::<i64>::None);

    // Single load path for mount, sort, search, paging and post-write
    // refreshes. Always fetches with the state's current page and filter.
    let mut reload = move || {
        let token = state.write().begin_load();
        let request = list_request(&state.peek().query());
        let client = session.peek().client();
        loading.set(true);
        error.set(None);
        spawn(async move {
            let result = client.list_users(&request).await;
            if !state.peek().is_current(token) {
                // A newer load owns the table now.
                return;
            }
            match result {
                Ok(page) => {
                    rows.set(page.content);
                    state.write().apply_result(request.page, page.total_elements);
                }
                Err(err) => {
                    tracing::error!("erro ao buscar usuários: {err}");
                    rows.set(Vec::new());
                    error.set(Some(LOAD_ERROR.to_string()));
                }
            }
            loading.set(false);
        });
    };

    // First page on mount.
    use_effect(move || reload());

    let mut on_sort = move |column: &'static str| {
        state.write().sort_by(column);
        reload();
    };

    let mut go_to_page = move |page: u32| {
        let changed = state.write().go_to_page(page);
        if changed {
            reload();
        }
    };

    let mut confirm_delete = move || {
        let Some(id) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        deleting.set(Some(id));
        let client = session.peek().client();
        spawn(async move {
            match client.delete_user(id).await {
                Ok(()) => reload(),
                Err(err) => {
                    tracing::error!("erro ao excluir usuário {id}: {err}");
                    error.set(Some(DELETE_ERROR.to_string()));
                }
            }
            deleting.set(None);
        });
    };

    let st = state();
    let column_count = USER_COLUMNS.len() + 1;

    rsx! {
        div {
            class: "flex items-center",
            div {
                class: "flex-1",
                h2 { class: "text-2xl font-bold mb-4", "Usuários" }
            }
            div {
                class: "flex items-right",
                input {
                    class: "text-gray-500 px-6 py-1 border border-gray-300 rounded-lg mb-4",
                    placeholder: "Pesquisar",
                    value: "{st.filter}",
                    oninput: move |evt| state.write().set_filter(&evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            state.write().commit_filter();
                            reload();
                        }
                    },
                }
            }
        }

        div {
            class: "overflow-x-auto",
            div {
                class: "max-w-full mx-auto",
                div {
                    class: "max-h-[70vh] overflow-auto",
                    table {
                        class: "min-w-full bg-white shadow-md rounded-lg overflow-hidden",
                        thead {
                            class: "bg-blue-800 text-white sticky top-0",
                            tr {
                                for column in USER_COLUMNS {
                                    th {
                                        key: "{column.key}",
                                        class: "py-3 px-4 text-left cursor-pointer",
                                        onclick: {
                                            let key = column.key;
                                            move |_| on_sort(key)
                                        },
                                        "{column.title} "
                                        if st.sort_column.as_deref() == Some(column.key) {
                                            if st.sort_direction == SortDirection::Asc { "▲" } else { "▼" }
                                        }
                                    }
                                }
                                th {
                                    class: "py-3 px-4 text-right",
                                    div {
                                        class: "text-blue-900 space-x-2",
                                        button {
                                            class: "px-3 py-1 border border-gray-300 text-blue-500 rounded-md bg-white hover:bg-gray-100 disabled:bg-gray-200 disabled:cursor-not-allowed",
                                            disabled: st.page == 1,
                                            aria_label: "Primeira página",
                                            onclick: move |_| go_to_page(1),
                                            "«"
                                        }
                                        button {
                                            class: "px-3 py-1 border border-gray-300 text-blue-500 rounded-md bg-white hover:bg-gray-100 disabled:bg-gray-200 disabled:cursor-not-allowed",
                                            disabled: st.page == 1,
                                            aria_label: "Página anterior",
                                            onclick: move |_| {
                                                let previous = state.peek().page.saturating_sub(1);
                                                go_to_page(previous);
                                            },
                                            "‹"
                                        }
                                        input {
                                            class: "w-16 h-8 text-center border border-gray-300 rounded-md text-gray-700",
                                            value: "{st.page_input}",
                                            aria_label: "Número da página",
                                            oninput: move |evt| state.write().set_page_input(&evt.value()),
                                            onkeydown: move |evt| {
                                                if evt.key() == Key::Enter {
                                                    let changed = state.write().commit_page_input();
                                                    if changed {
                                                        reload();
                                                    }
                                                }
                                            },
                                        }
                                        button {
                                            class: "px-3 py-1 border border-gray-300 text-blue-500 rounded-md bg-white hover:bg-gray-100 disabled:bg-gray-200 disabled:cursor-not-allowed",
                                            disabled: st.page == st.total_pages,
                                            aria_label: "Próxima página",
                                            onclick: move |_| {
                                                let next = state.peek().page + 1;
                                                go_to_page(next);
                                            },
                                            "›"
                                        }
                                        button {
                                            class: "px-3 py-1 border border-gray-300 text-blue-500 rounded-md bg-white hover:bg-gray-100 disabled:bg-gray-200 disabled:cursor-not-allowed",
                                            disabled: st.page == st.total_pages,
                                            aria_label: "Última página",
                                            onclick: move |_| {
                                                let last = state.peek().total_pages;
                                                go_to_page(last);
                                            },
                                            "»"
                                        }
                                    }
                                }
                            }
                        }
                        tbody {
                            if loading() {
                                tr {
                                    td {
                                        colspan: "{column_count}",
                                        class: "py-3 px-4 text-center",
                                        "Carregando..."
                                    }
                                }
                            } else if rows().is_empty() {
                                tr {
                                    td {
                                        colspan: "{column_count}",
                                        class: "py-3 px-4 text-center",
                                        "Nenhum usuário encontrado"
                                    }
                                }
                            } else {
                                for record in rows() {
                                    tr {
                                        key: "{record.id}",
                                        class: "hover:bg-gray-100 transition-colors duration-200",
                                        for column in USER_COLUMNS {
                                            td {
                                                class: "py-3 px-4 border-b border-gray-200",
                                                "{record.display_field(column.key)}"
                                            }
                                        }
                                        td {
                                            class: "py-3 px-4 border-b border-gray-200 text-right",
                                            button {
                                                class: "px-3 py-1 text-blue-500 rounded-lg hover:text-white hover:bg-blue-600 transition-colors duration-300 mr-2",
                                                onclick: {
                                                    let id = record.id;
                                                    move |_| editing_id.set(Some(id))
                                                },
                                                "Editar"
                                            }
                                            button {
                                                class: "px-3 py-1 text-red-500 rounded-lg hover:text-white hover:bg-red-600 transition-colors duration-300 disabled:cursor-not-allowed",
                                                disabled: deleting() == Some(record.id),
                                                onclick: {
                                                    let id = record.id;
                                                    move |_| pending_delete.set(Some(id))
                                                },
                                                if deleting() == Some(record.id) { "Excluindo..." } else { "Excluir" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "flex justify-between items-center mt-2 mb-4",
                    div {
                        class: "flex items-center space-x-2",
                        button {
                            class: "mr-2 px-5 py-2 bg-green-500 text-white rounded-lg hover:bg-green-600 transition-colors duration-300",
                            onclick: move |_| show_add.set(true),
                            span { "Novo" }
                        }
                    }
                    span {
                        class: "text-gray-500 mr-2",
                        "Registros: {st.total_elements}"
                    }
                }
            }
        }

        if show_add() {
            AddUserModal {
                on_cancel: move |_| show_add.set(false),
                on_added: move |_| {
                    show_add.set(false);
                    reload();
                },
            }
        }
        if let Some(id) = editing_id() {
            EditUserModal {
                user_id: id,
                on_cancel: move |_| editing_id.set(None),
                on_saved: move |_| {
                    editing_id.set(None);
                    reload();
                },
            }
        }
        if pending_delete().is_some() {
            ConfirmModal {
                message: "Tem certeza de que deseja excluir este usuário?",
                on_confirm: move |_| confirm_delete(),
                on_cancel: move |_| pending_delete.set(None),
            }
        }
        if let Some(message) = error() {
            ErrorAlert {
                message,
                on_dismiss: move |_| error.set(None),
            }
        }
    }
}
