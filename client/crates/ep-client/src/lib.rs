//! ep-client library
//!
//! HTTP client for the remote user API plus the persisted session token
//! shared by everything that needs to know whether the user is signed in.

pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod dto;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use api::UserApi;
pub use client::{Client, ClientError, ClientResult};
pub use dto::{
    login_request::LoginRequest, login_response::LoginResponse, user::User, user_page::UserPage,
    user_response::UserResponse, user_update::UserUpdate,
};
pub use session::{
    error::{FileOp, Result as SessionResult, SessionError},
    file_token_store::FileTokenStore,
    memory_token_store::MemoryTokenStore,
    session_context::SessionContext,
    token_store::TokenStore,
};
