//! Wire types for the backend endpoints.
//!
//! Field names follow the backend contract exactly (Portuguese field names,
//! camelCase paging keys), so every struct here is a serde mirror of a JSON
//! body rather than an internal model.

use serde::{Deserialize, Serialize};

/// One user row as returned by the listing and fetch endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub usuario: String,
    #[serde(default)]
    pub email: String,
    /// May be omitted by the backend; the edit form treats absence as
    /// active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ativo: Option<bool>,
}

impl UserRecord {
    /// Cell value for a configured column key. Unknown keys render empty
    /// rather than panicking, since the column set is configuration.
    pub fn display_field(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "nome" => self.nome.clone(),
            "usuario" => self.usuario.clone(),
            "email" => self.email.clone(),
            _ => String::new(),
        }
    }
}

/// Sort clause of a listing request. An empty `sortColumn` means no active
/// sort.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    #[serde(rename = "sortColumn")]
    pub sort_column: String,
    #[serde(rename = "sortDirection")]
    pub sort_direction: String,
}

/// Body of `POST /usuarios`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRequest {
    pub page: u32,
    pub size: u32,
    pub filter: String,
    pub sort: SortSpec,
}

/// One page of results from `POST /usuarios`. Both fields default so that
/// a response with no payload decodes as an empty result instead of an
/// error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub content: Vec<UserRecord>,
    #[serde(default, rename = "totalElements")]
    pub total_elements: u64,
}

/// Body of `POST /login`. `senha` carries the SHA-256 digest, never the
/// plaintext.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub senha: String,
}

/// Response of `POST /login`. The session token travels in the field named
/// `id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub id: String,
}

/// Body of `PUT /usuario` (create). `senha` is the digest of the chosen
/// password.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub nome: String,
    pub email: String,
    pub usuario: String,
    pub senha: String,
}

/// Body of `PATCH /usuario/{id}` (update). A `None` password means
/// "unchanged" and the field is omitted from the request entirely, so a
/// blank password box can never overwrite the stored digest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatedUser {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub usuario: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    pub ativo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_request_wire_shape() {
        let request = ListRequest {
            page: 2,
            size: 20,
            filter: "silva".to_string(),
            sort: SortSpec {
                sort_column: "nome".to_string(),
                sort_direction: "desc".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "page": 2,
                "size": 20,
                "filter": "silva",
                "sort": {"sortColumn": "nome", "sortDirection": "desc"}
            })
        );
    }

    #[test]
    fn login_request_wire_shape() {
        let request = LoginRequest {
            usuario: "admin".to_string(),
            senha: crate::digest::sha256_hex("secret"),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["usuario"], "admin");
        assert_eq!(value["senha"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn list_response_defaults_when_payload_is_missing_fields() {
        let response: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.content.is_empty());
        assert_eq!(response.total_elements, 0);

        let response: ListResponse = serde_json::from_value(json!({
            "content": [{"id": 1, "nome": "Ana", "usuario": "ana", "email": "ana@example.com"}],
            "totalElements": 45
        }))
        .unwrap();
        assert_eq!(response.content.len(), 1);
        assert_eq!(response.total_elements, 45);
        // `ativo` absent from the payload stays None for the edit form to
        // default.
        assert_eq!(response.content[0].ativo, None);
    }

    #[test]
    fn update_omits_password_when_unchanged() {
        let user = UpdatedUser {
            id: 3,
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            usuario: "ana".to_string(),
            senha: None,
            ativo: true,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("senha").is_none());

        let user = UpdatedUser {
            senha: Some(crate::digest::sha256_hex("nova")),
            ..user
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["senha"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn display_field_maps_configured_columns() {
        let record = UserRecord {
            id: 12,
            nome: "Ana Silva".to_string(),
            usuario: "ana".to_string(),
            email: "ana@example.com".to_string(),
            ativo: Some(true),
        };
        assert_eq!(record.display_field("id"), "12");
        assert_eq!(record.display_field("nome"), "Ana Silva");
        assert_eq!(record.display_field("usuario"), "ana");
        assert_eq!(record.display_field("email"), "ana@example.com");
        assert_eq!(record.display_field("desconhecido"), "");
    }
}
