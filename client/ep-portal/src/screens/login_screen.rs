use crate::screens::report;
use crate::{Notifier, PortalError, PortalResult, Route};

use std::sync::Arc;

use ep_client::{SessionContext, UserApi};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Submitting,
    Authenticated,
}

/// Credential form that trades an email/password for a session token
pub struct LoginScreen {
    api: Arc<dyn UserApi>,
    session: SessionContext,
    state: LoginState,
    email: String,
    password: String,
    show_password: bool,
}

impl LoginScreen {
    pub fn new(api: Arc<dyn UserApi>, session: SessionContext) -> Self {
        Self {
            api,
            session,
            state: LoginState::Idle,
            email: String::new(),
            password: String::new(),
            show_password: false,
        }
    }

    /// A stored token is taken at face value and skips the form.
    pub fn mount(&mut self) -> Option<Route> {
        if self.session.has_token() {
            info!("Session token present, skipping login");
            self.state = LoginState::Authenticated;
            return Some(Route::Users);
        }
        None
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// Password as the form would render it
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    /// Submit the form. On success the token is stored and the list view
    /// is returned as the next route; on failure the form stays editable.
    pub async fn submit(&mut self, notifier: &mut Notifier) -> PortalResult<Option<Route>> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(report(
                notifier,
                PortalError::validation("Email and password are required"),
            ));
        }

        self.state = LoginState::Submitting;
        let result = self.api.login(self.email.trim(), &self.password).await;

        let token = match result {
            Ok(token) => token,
            Err(e) => {
                self.state = LoginState::Idle;
                return Err(report(notifier, PortalError::auth(e)));
            }
        };

        if let Err(e) = self.session.set_token(&token) {
            self.state = LoginState::Idle;
            return Err(report(notifier, PortalError::from(e)));
        }

        self.state = LoginState::Authenticated;
        info!("Signed in as {}", self.email.trim());
        notifier.success("Login successful");
        Ok(Some(Route::Users))
    }
}
