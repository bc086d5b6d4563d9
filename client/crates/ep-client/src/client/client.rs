use crate::{
    ClientError, ClientResult, LoginRequest, LoginResponse, SessionContext, User, UserPage,
    UserResponse, UserUpdate,
};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the remote user API
pub struct Client {
    pub base_url: String,
    pub api_key: Option<String>,
    session: Option<SessionContext>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://reqres.in/api")
    /// * `api_key` - Optional key sent in the `x-api-key` header
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            session: None,
            client: ReqwestClient::new(),
        }
    }

    /// Attach the session whose token is sent as a bearer credential
    pub fn with_session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    /// Build a request with the api key and session headers
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        let mut req = self.client.request(method, &url);

        if let Some(ref api_key) = self.api_key {
            req = req.header(API_KEY_HEADER, api_key);
        }

        if let Some(token) = self.session.as_ref().and_then(SessionContext::get_token) {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Send the request, turning non-2xx answers into `ClientError::Rejected`
    async fn send(&self, req: RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = Self::error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

        Err(ClientError::rejected(status.as_u16(), message))
    }

    /// Send the request and decode the JSON body
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Pull a message out of either `{"error": "..."}` or
    /// `{"error": {"message": "..."}}`
    fn error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        match value.get("error")? {
            Value::String(message) => Some(message.clone()),
            other => other
                .get("message")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Exchange credentials for a session token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/login").json(&body);
        let response: LoginResponse = self.execute(req).await?;
        Ok(response.token)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Fetch one page of users
    pub async fn list_users(&self, page: u32) -> ClientResult<UserPage> {
        let req = self.request(Method::GET, &format!("/users?page={page}"));
        self.execute(req).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: u64) -> ClientResult<User> {
        let req = self.request(Method::GET, &format!("/users/{id}"));
        let response: UserResponse = self.execute(req).await?;
        Ok(response.data)
    }

    /// Replace the editable fields of a user. The echoed body is ignored.
    pub async fn update_user(&self, id: u64, update: &UserUpdate) -> ClientResult<()> {
        let req = self
            .request(Method::PUT, &format!("/users/{id}"))
            .json(update);
        self.send(req).await?;
        Ok(())
    }

    /// Delete a user
    pub async fn delete_user(&self, id: u64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/users/{id}"));
        self.send(req).await?;
        Ok(())
    }
}
