//! ep-portal library
//!
//! Headless employee portal: routing with a session guard, the login, list
//! and edit screens, and the notification queue they report through. The
//! `ep` binary drives these from the command line.

pub(crate) mod app;
pub(crate) mod error;
pub(crate) mod guard;
pub mod logger;
pub(crate) mod notifier;
pub(crate) mod route;
pub(crate) mod router;
pub(crate) mod screens;

#[cfg(test)]
mod tests;

pub use app::{App, Screen};
pub use error::{PortalError, Result as PortalResult};
pub use guard::{Access, RouteGuard};
pub use notifier::{
    notification::{Notification, NotificationKind},
    notifier::Notifier,
};
pub use route::{LOGIN_PATH, Route, USERS_PATH};
pub use router::{Navigation, Router};
pub use screens::{
    Delivery,
    edit_user_screen::{EditState, EditUserScreen},
    login_screen::{LoginScreen, LoginState},
    request_tickets::{RequestTickets, Ticket},
    user_list_screen::{PageRequest, UserListScreen},
};
