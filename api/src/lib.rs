//! Client for the user administration backend.
//!
//! Wire types, the password digest helper, and a browser-side HTTP client
//! for the fixed backend origin. Backend calls only exist on wasm32; native
//! builds get stubs so the other crates still compile and test.

pub mod digest;
pub mod models;

mod client;
mod http;

pub use client::{Client, SERVICE_URL};
pub use digest::sha256_hex;
pub use http::ApiError;
pub use models::{
    ListRequest, ListResponse, LoginRequest, LoginResponse, NewUser, SortSpec, UpdatedUser,
    UserRecord,
};
