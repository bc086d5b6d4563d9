use crate::screens::request_tickets::{RequestTickets, Ticket};
use crate::screens::{Delivery, report};
use crate::{Notifier, PortalError, PortalResult, Route};

use std::sync::Arc;

use ep_client::{ClientResult, SessionContext, User, UserApi, UserPage};
use log::{debug, info};

/// A page fetch that has been issued but not yet applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: Ticket,
    pub page: u32,
}

/// Paginated employee list with name search, delete and logout.
///
/// Every page change re-fetches; nothing is cached. Deletes trust the local
/// copy: the id is dropped from the loaded page and no re-fetch follows.
pub struct UserListScreen {
    api: Arc<dyn UserApi>,
    users: Vec<User>,
    /// Page the loaded rows came from
    current_page: u32,
    total_pages: u32,
    loaded: bool,
    search_term: String,
    tickets: RequestTickets,
}

impl UserListScreen {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self {
            api,
            users: Vec::new(),
            current_page: 1,
            total_pages: 1,
            loaded: false,
            search_term: String::new(),
            tickets: RequestTickets::default(),
        }
    }

    // =========================================================================
    // View State
    // =========================================================================

    /// Every user on the loaded page, ignoring the search filter
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Loaded users whose "first last" name contains the search term,
    /// case-insensitively
    pub fn visible_users(&self) -> Vec<&User> {
        let needle = self.search_term.to_lowercase();
        self.users
            .iter()
            .filter(|user| user.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Narrow the loaded page. Never reaches the server.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    pub fn is_mounted(&self) -> bool {
        !self.tickets.is_retired()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Issue a fetch for the current page; older fetches become stale.
    pub fn begin_load(&mut self) -> PageRequest {
        self.begin_load_page(self.current_page)
    }

    /// Issue a fetch for `page`. The current page only moves once it lands.
    pub fn begin_load_page(&mut self, page: u32) -> PageRequest {
        PageRequest {
            ticket: self.tickets.issue(),
            page,
        }
    }

    /// Apply a fetch result if it belongs to the latest request.
    ///
    /// A page past the reported `total_pages` is not applied. The screen
    /// drops back to an empty, unloaded last page and `Delivery::OutOfRange`
    /// tells the caller to fetch it.
    pub fn finish_load(
        &mut self,
        request: PageRequest,
        result: ClientResult<UserPage>,
        notifier: &mut Notifier,
    ) -> PortalResult<Delivery> {
        if !self.tickets.is_current(request.ticket) {
            debug!("Dropping stale response for page {}", request.page);
            return Ok(Delivery::Stale);
        }

        match result {
            Ok(page) => {
                self.total_pages = page.page_count();
                if request.page > self.total_pages {
                    debug!(
                        "Page {} no longer exists (last is {})",
                        request.page, self.total_pages
                    );
                    self.current_page = self.current_page.min(self.total_pages);
                    self.users.clear();
                    self.loaded = false;
                    return Ok(Delivery::OutOfRange);
                }

                self.current_page = request.page;
                self.users = page.data;
                self.loaded = true;
                notifier.success("Users loaded successfully");
                Ok(Delivery::Applied)
            }
            Err(e) => Err(report(notifier, PortalError::fetch("users", e))),
        }
    }

    /// Fetch the current page
    pub async fn load(&mut self, notifier: &mut Notifier) -> PortalResult<Delivery> {
        self.load_page(self.current_page, notifier).await
    }

    /// Fetch `page`, falling back once to the last page if the list shrank
    /// below it.
    async fn load_page(&mut self, page: u32, notifier: &mut Notifier) -> PortalResult<Delivery> {
        let request = self.begin_load_page(page);
        let result = self.api.list_users(request.page).await;
        let delivery = self.finish_load(request, result, notifier)?;
        if delivery != Delivery::OutOfRange {
            return Ok(delivery);
        }

        let request = self.begin_load_page(self.total_pages);
        let result = self.api.list_users(request.page).await;
        self.finish_load(request, result, notifier)
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Jump to `page`, clamped to the known page range.
    ///
    /// Re-requesting the page on screen is a no-op, unless nothing has been
    /// loaded yet.
    pub async fn go_to_page(
        &mut self,
        page: u32,
        notifier: &mut Notifier,
    ) -> PortalResult<Delivery> {
        let target = page.clamp(1, self.total_pages);
        if self.loaded && target == self.current_page {
            return Ok(Delivery::Unchanged);
        }

        self.load_page(target, notifier).await
    }

    pub async fn next_page(&mut self, notifier: &mut Notifier) -> PortalResult<Delivery> {
        let target = self.current_page.saturating_add(1);
        self.go_to_page(target, notifier).await
    }

    pub async fn previous_page(&mut self, notifier: &mut Notifier) -> PortalResult<Delivery> {
        let target = self.current_page.saturating_sub(1);
        self.go_to_page(target, notifier).await
    }

    // =========================================================================
    // Item Actions
    // =========================================================================

    /// Delete a user, then drop it from the loaded page on acknowledgment.
    pub async fn delete_user(
        &mut self,
        id: u64,
        notifier: &mut Notifier,
    ) -> PortalResult<Delivery> {
        let result = self.api.delete_user(id).await;
        self.finish_delete(id, result, notifier)
    }

    pub fn finish_delete(
        &mut self,
        id: u64,
        result: ClientResult<()>,
        notifier: &mut Notifier,
    ) -> PortalResult<Delivery> {
        if !self.is_mounted() {
            debug!("Dropping delete acknowledgment for {id} after unmount");
            return Ok(Delivery::Stale);
        }

        match result {
            Ok(()) => {
                self.users.retain(|user| user.id != id);
                info!("Deleted user {id}");
                notifier.success("User deleted successfully");
                Ok(Delivery::Applied)
            }
            Err(e) => Err(report(notifier, PortalError::delete(e))),
        }
    }

    pub fn edit_route(&self, id: u64) -> Route {
        Route::EditUser(id)
    }

    /// Forget the session locally. There is no server-side logout.
    pub fn logout(
        &mut self,
        session: &SessionContext,
        notifier: &mut Notifier,
    ) -> PortalResult<Route> {
        session
            .clear_token()
            .map_err(|e| report(notifier, PortalError::from(e)))?;
        info!("Signed out");
        notifier.info("Logged out successfully");
        Ok(Route::Login)
    }

    /// Responses arriving after this are ignored
    pub fn unmount(&mut self) {
        self.tickets.invalidate();
    }
}
