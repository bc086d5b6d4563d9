use std::fmt;

pub const LOGIN_PATH: &str = "/login";
pub const USERS_PATH: &str = "/users";
const EDIT_PREFIX: &str = "/users/edit/";

/// A navigable view of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Users,
    EditUser(u64),
}

impl Route {
    /// Parse a path. Unknown paths (including a non-numeric edit id) yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            LOGIN_PATH => Some(Route::Login),
            USERS_PATH => Some(Route::Users),
            _ => path
                .strip_prefix(EDIT_PREFIX)
                .and_then(|id| id.parse().ok())
                .map(Route::EditUser),
        }
    }

    /// Whether reaching this route requires a session token
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN_PATH.to_string(),
            Route::Users => USERS_PATH.to_string(),
            Route::EditUser(id) => format!("{EDIT_PREFIX}{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
