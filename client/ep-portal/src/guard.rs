use crate::Route;

use ep_client::SessionContext;
use log::debug;

/// Outcome of checking a route against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Render the login view instead
    Denied,
}

/// The single authorization gate, consulted on every navigation.
///
/// Any stored token is accepted; it is never verified against the server.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: SessionContext,
}

impl RouteGuard {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    pub fn check(&self, route: &Route) -> Access {
        if !route.is_protected() || self.session.has_token() {
            return Access::Granted;
        }

        debug!("No session token, denying {route}");
        Access::Denied
    }

    /// The route that will actually be rendered for `requested`
    pub fn resolve(&self, requested: Route) -> Route {
        match self.check(&requested) {
            Access::Granted => requested,
            Access::Denied => Route::Login,
        }
    }
}
