use crate::Route;

use std::panic::Location;

use ep_client::{ClientError, SessionError};
use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of a portal operation.
///
/// Every variant is terminal for the operation that raised it and is shown
/// to the user as an error notification; none of them changes the session.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Login failed: {source} {location}")]
    Auth {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Fetching {resource} failed: {source} {location}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Update failed: {source} {location}")]
    Update {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Delete failed: {source} {location}")]
    Delete {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("Not signed in, {route} redirected to the login view {location}")]
    Unauthorized {
        route: Route,
        location: ErrorLocation,
    },

    #[error("Action needs the {expected} view but {actual} is shown {location}")]
    WrongScreen {
        expected: &'static str,
        actual: String,
        location: ErrorLocation,
    },

    #[error("Redirect loop while navigating to {route} {location}")]
    RedirectLoop {
        route: Route,
        location: ErrorLocation,
    },

    #[error("Failed to render output: {source} {location}")]
    Render {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl PortalError {
    #[track_caller]
    pub fn auth(source: ClientError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn fetch(resource: &'static str, source: ClientError) -> Self {
        Self::Fetch {
            resource,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn update(source: ClientError) -> Self {
        Self::Update {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn delete(source: ClientError) -> Self {
        Self::Delete {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(route: Route) -> Self {
        Self::Unauthorized {
            route,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn wrong_screen(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::WrongScreen {
            expected,
            actual: actual.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn redirect_loop(route: Route) -> Self {
        Self::RedirectLoop {
            route,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text of the notification shown for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { .. } => "Invalid credentials".to_string(),
            Self::Fetch { resource, .. } => format!("Failed to fetch {resource}"),
            Self::Update { .. } => "Failed to update user".to_string(),
            Self::Delete { .. } => "Failed to delete user".to_string(),
            Self::Validation { message, .. } => message.clone(),
            Self::Session { .. } => "Failed to save session".to_string(),
            Self::Unauthorized { .. } => "Please sign in first".to_string(),
            Self::WrongScreen { expected, .. } => format!("Open the {expected} view first"),
            Self::RedirectLoop { route, .. } => format!("Cannot open {route}"),
            Self::Render { .. } => "Failed to render output".to_string(),
            Self::Logger { message, .. } => message.clone(),
        }
    }
}

impl From<SessionError> for PortalError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Render {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
