//! Wires the router, session, notifier and screens together.
//!
//! `App` owns the one mounted screen. Navigation runs the guard, unmounts
//! the previous screen (so its late responses are ignored), mounts the new
//! one and performs its initial fetch.

use crate::{
    EditUserScreen, LoginScreen, Navigation, Notifier, PortalError, PortalResult, Route, Router,
    UserListScreen,
};

use std::sync::Arc;

use ep_client::{SessionContext, UserApi};
use log::debug;

/// Hops allowed while following mount-time redirects
const MAX_REDIRECTS: usize = 4;

pub enum Screen {
    /// Nothing mounted yet
    Blank,
    Login(LoginScreen),
    UserList(UserListScreen),
    EditUser(EditUserScreen),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Blank => "blank",
            Screen::Login(_) => "login",
            Screen::UserList(_) => "user list",
            Screen::EditUser(_) => "edit user",
        }
    }

    fn unmount(&mut self) {
        match self {
            Screen::UserList(screen) => screen.unmount(),
            Screen::EditUser(screen) => screen.unmount(),
            Screen::Blank | Screen::Login(_) => {}
        }
    }
}

pub struct App {
    api: Arc<dyn UserApi>,
    session: SessionContext,
    router: Router,
    notifier: Notifier,
    screen: Screen,
}

impl App {
    pub fn new(api: Arc<dyn UserApi>, session: SessionContext, notifier: Notifier) -> Self {
        Self {
            router: Router::new(session.clone()),
            api,
            session,
            notifier,
            screen: Screen::Blank,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current_route(&self) -> Option<Route> {
        self.router.current()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn login_screen(&self) -> Option<&LoginScreen> {
        match &self.screen {
            Screen::Login(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn user_list(&self) -> Option<&UserListScreen> {
        match &self.screen {
            Screen::UserList(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn edit_user(&self) -> Option<&EditUserScreen> {
        match &self.screen {
            Screen::EditUser(screen) => Some(screen),
            _ => None,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to a path and mount whatever the guard lets through.
    ///
    /// The returned navigation describes the first hop. An error means the
    /// new screen is mounted but its initial fetch failed.
    pub async fn navigate(&mut self, path: &str) -> PortalResult<Navigation> {
        let navigation = self.router.navigate(path);
        self.mount(navigation.route()).await?;
        Ok(navigation)
    }

    pub async fn navigate_to(&mut self, route: Route) -> PortalResult<Navigation> {
        let navigation = self.router.navigate_to(route);
        self.mount(navigation.route()).await?;
        Ok(navigation)
    }

    async fn follow(&mut self, next: Option<Route>) -> PortalResult<()> {
        if let Some(route) = next {
            self.navigate_to(route).await?;
        }
        Ok(())
    }

    async fn mount(&mut self, route: Route) -> PortalResult<()> {
        let mut route = route;

        for _ in 0..MAX_REDIRECTS {
            self.screen.unmount();
            debug!("Mounting {route}");

            match route {
                Route::Login => {
                    let mut screen = LoginScreen::new(self.api.clone(), self.session.clone());
                    let redirect = screen.mount();
                    self.screen = Screen::Login(screen);

                    match redirect {
                        Some(next) => route = self.router.navigate_to(next).route(),
                        None => return Ok(()),
                    }
                }
                Route::Users => {
                    let mut screen = UserListScreen::new(self.api.clone());
                    let loaded = screen.load(&mut self.notifier).await;
                    self.screen = Screen::UserList(screen);
                    return loaded.map(|_| ());
                }
                Route::EditUser(id) => {
                    let mut screen = EditUserScreen::new(self.api.clone(), id);
                    let loaded = screen.load(&mut self.notifier).await;
                    self.screen = Screen::EditUser(screen);
                    return loaded.map(|_| ());
                }
            }
        }

        Err(PortalError::redirect_loop(route))
    }

    // =========================================================================
    // Login View
    // =========================================================================

    pub async fn submit_login(&mut self, email: &str, password: &str) -> PortalResult<()> {
        let screen = match &mut self.screen {
            Screen::Login(screen) => screen,
            other => return Err(PortalError::wrong_screen("login", other.name())),
        };

        screen.set_email(email);
        screen.set_password(password);
        let next = screen.submit(&mut self.notifier).await?;
        self.follow(next).await
    }

    // =========================================================================
    // List View
    // =========================================================================

    fn user_list_mut(&mut self) -> PortalResult<&mut UserListScreen> {
        match &mut self.screen {
            Screen::UserList(screen) => Ok(screen),
            other => Err(PortalError::wrong_screen("user list", other.name())),
        }
    }

    pub fn search(&mut self, term: &str) -> PortalResult<()> {
        self.user_list_mut()?.set_search(term);
        Ok(())
    }

    pub async fn go_to_page(&mut self, page: u32) -> PortalResult<()> {
        let screen = match &mut self.screen {
            Screen::UserList(screen) => screen,
            other => return Err(PortalError::wrong_screen("user list", other.name())),
        };
        screen.go_to_page(page, &mut self.notifier).await?;
        Ok(())
    }

    pub async fn next_page(&mut self) -> PortalResult<()> {
        let screen = match &mut self.screen {
            Screen::UserList(screen) => screen,
            other => return Err(PortalError::wrong_screen("user list", other.name())),
        };
        screen.next_page(&mut self.notifier).await?;
        Ok(())
    }

    pub async fn previous_page(&mut self) -> PortalResult<()> {
        let screen = match &mut self.screen {
            Screen::UserList(screen) => screen,
            other => return Err(PortalError::wrong_screen("user list", other.name())),
        };
        screen.previous_page(&mut self.notifier).await?;
        Ok(())
    }

    pub async fn delete_user(&mut self, id: u64) -> PortalResult<()> {
        let screen = match &mut self.screen {
            Screen::UserList(screen) => screen,
            other => return Err(PortalError::wrong_screen("user list", other.name())),
        };
        screen.delete_user(id, &mut self.notifier).await?;
        Ok(())
    }

    pub async fn open_edit(&mut self, id: u64) -> PortalResult<()> {
        let route = self.user_list_mut()?.edit_route(id);
        self.navigate_to(route).await?;
        Ok(())
    }

    pub async fn logout(&mut self) -> PortalResult<()> {
        let screen = match &mut self.screen {
            Screen::UserList(screen) => screen,
            other => return Err(PortalError::wrong_screen("user list", other.name())),
        };
        let next = screen.logout(&self.session, &mut self.notifier)?;
        self.navigate_to(next).await?;
        Ok(())
    }

    // =========================================================================
    // Edit View
    // =========================================================================

    fn edit_user_mut(&mut self) -> PortalResult<&mut EditUserScreen> {
        match &mut self.screen {
            Screen::EditUser(screen) => Ok(screen),
            other => Err(PortalError::wrong_screen("edit user", other.name())),
        }
    }

    /// Overwrite whichever form fields are given
    pub fn fill_edit_form(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> PortalResult<()> {
        let screen = self.edit_user_mut()?;
        if let Some(value) = first_name {
            screen.set_first_name(value);
        }
        if let Some(value) = last_name {
            screen.set_last_name(value);
        }
        if let Some(value) = email {
            screen.set_email(value);
        }
        Ok(())
    }

    pub async fn submit_edit(&mut self) -> PortalResult<()> {
        let screen = match &mut self.screen {
            Screen::EditUser(screen) => screen,
            other => return Err(PortalError::wrong_screen("edit user", other.name())),
        };
        let next = screen.submit(&mut self.notifier).await?;
        self.follow(next).await
    }

    pub async fn back_to_list(&mut self) -> PortalResult<()> {
        let route = self.edit_user_mut()?.back();
        self.navigate_to(route).await?;
        Ok(())
    }
}
