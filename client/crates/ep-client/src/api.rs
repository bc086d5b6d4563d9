use crate::{Client, ClientResult, User, UserPage, UserUpdate};

use async_trait::async_trait;

/// Operations the portal screens need from the remote user API.
///
/// `Client` is the production implementation; screens only see this trait.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> ClientResult<String>;

    async fn list_users(&self, page: u32) -> ClientResult<UserPage>;

    async fn get_user(&self, id: u64) -> ClientResult<User>;

    async fn update_user(&self, id: u64, update: &UserUpdate) -> ClientResult<()>;

    async fn delete_user(&self, id: u64) -> ClientResult<()>;
}

#[async_trait]
impl UserApi for Client {
    async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        Client::login(self, email, password).await
    }

    async fn list_users(&self, page: u32) -> ClientResult<UserPage> {
        Client::list_users(self, page).await
    }

    async fn get_user(&self, id: u64) -> ClientResult<User> {
        Client::get_user(self, id).await
    }

    async fn update_user(&self, id: u64, update: &UserUpdate) -> ClientResult<()> {
        Client::update_user(self, id, update).await
    }

    async fn delete_user(&self, id: u64) -> ClientResult<()> {
        Client::delete_user(self, id).await
    }
}
