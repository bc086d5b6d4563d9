use crate::{Route, RouteGuard};

use ep_client::SessionContext;
use log::info;

/// Result of one navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allowed(Route),
    /// The requested path was unknown or guarded; `to` was rendered instead
    Redirected { requested: String, to: Route },
}

impl Navigation {
    pub fn route(&self) -> Route {
        match self {
            Navigation::Allowed(route) => *route,
            Navigation::Redirected { to, .. } => *to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirected { .. })
    }
}

/// Tracks the current route and applies the guard once per navigation
#[derive(Debug)]
pub struct Router {
    guard: RouteGuard,
    current: Option<Route>,
    history: Vec<Route>,
}

impl Router {
    pub fn new(session: SessionContext) -> Self {
        Self {
            guard: RouteGuard::new(session),
            current: None,
            history: Vec::new(),
        }
    }

    /// Navigate to a path. Unknown paths land on the login view.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        match Route::parse(path) {
            Some(route) => self.navigate_to(route),
            None => {
                info!("Unknown path {path}, redirecting to {}", Route::Login);
                self.commit(Route::Login);
                Navigation::Redirected {
                    requested: path.to_string(),
                    to: Route::Login,
                }
            }
        }
    }

    pub fn navigate_to(&mut self, route: Route) -> Navigation {
        let resolved = self.guard.resolve(route);
        self.commit(resolved);

        if resolved == route {
            Navigation::Allowed(route)
        } else {
            info!("Redirected {route} -> {resolved}");
            Navigation::Redirected {
                requested: route.path(),
                to: resolved,
            }
        }
    }

    fn commit(&mut self, route: Route) {
        self.current = Some(route);
        self.history.push(route);
    }

    /// `None` until the first navigation
    pub fn current(&self) -> Option<Route> {
        self.current
    }

    /// Every rendered route, oldest first
    pub fn history(&self) -> &[Route] {
        &self.history
    }
}
