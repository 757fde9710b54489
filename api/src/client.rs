use crate::http::{self, ApiError};
use crate::models::{ListRequest, ListResponse, LoginRequest, LoginResponse, NewUser, UpdatedUser, UserRecord};

/// Backend base origin. Fixed at build time, not configurable at runtime.
pub const SERVICE_URL: &str = "http://localhost:8080";

/// Thin client over the backend endpoints. Carries the session token of
/// the signed-in operator when there is one; the token travels in an
/// `Authorization` header on every call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Client {
    base_url: String,
    token: Option<String>,
}

impl Client {
    /// Unauthenticated client (only `login` is expected to succeed against
    /// a backend that checks the token).
    pub fn new() -> Self {
        Self {
            base_url: SERVICE_URL.to_string(),
            token: None,
        }
    }

    /// Client bound to a session token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            base_url: SERVICE_URL.to_string(),
            token: Some(token.into()),
        }
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /login`. `senha_digest` must already be the SHA-256 hex digest
    /// of the password (see [`crate::digest::sha256_hex`]).
    pub async fn login(&self, usuario: &str, senha_digest: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            usuario: usuario.to_string(),
            senha: senha_digest.to_string(),
        };
        http::request_json("POST", &self.url("/login"), self.token(), Some(&body)).await
    }

    /// `POST /usuarios` — one page of users for the given paging, filter
    /// and sort parameters.
    pub async fn list_users(&self, request: &ListRequest) -> Result<ListResponse, ApiError> {
        http::request_json("POST", &self.url("/usuarios"), self.token(), Some(request)).await
    }

    /// `GET /usuario/{id}` — one record, used to pre-populate the edit
    /// form.
    pub async fn fetch_user(&self, id: i64) -> Result<UserRecord, ApiError> {
        http::request_json::<(), UserRecord>(
            "GET",
            &self.url(&format!("/usuario/{id}")),
            self.token(),
            None,
        )
        .await
    }

    /// `PUT /usuario` — create. The created record the backend echoes back
    /// is ignored; callers re-fetch the page they display.
    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        http::request_json::<NewUser, serde_json::Value>(
            "PUT",
            &self.url("/usuario"),
            self.token(),
            Some(user),
        )
        .await?;
        Ok(())
    }

    /// `PATCH /usuario/{id}` — update keyed by id.
    pub async fn update_user(&self, user: &UpdatedUser) -> Result<(), ApiError> {
        http::request_json::<UpdatedUser, serde_json::Value>(
            "PATCH",
            &self.url(&format!("/usuario/{}", user.id)),
            self.token(),
            Some(user),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /usuario/{id}`.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        http::request_json::<(), serde_json::Value>(
            "DELETE",
            &self.url(&format!("/usuario/{id}")),
            self.token(),
            None,
        )
        .await?;
        Ok(())
    }
}
