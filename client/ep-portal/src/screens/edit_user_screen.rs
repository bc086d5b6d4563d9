use crate::screens::request_tickets::{RequestTickets, Ticket};
use crate::screens::{Delivery, report};
use crate::{Notifier, PortalError, PortalResult, Route};

use std::sync::Arc;

use ep_client::{ClientResult, User, UserApi, UserUpdate};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Loading,
    Ready,
    /// Fetch failed; the form stays empty but usable
    Failed,
}

/// Form for the three editable fields of one user
pub struct EditUserScreen {
    api: Arc<dyn UserApi>,
    id: u64,
    state: EditState,
    user: Option<User>,
    form: UserUpdate,
    tickets: RequestTickets,
}

impl EditUserScreen {
    pub fn new(api: Arc<dyn UserApi>, id: u64) -> Self {
        Self {
            api,
            id,
            state: EditState::Loading,
            user: None,
            form: UserUpdate::default(),
            tickets: RequestTickets::default(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == EditState::Loading
    }

    /// The record as fetched; the avatar is shown from here, read-only
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn form(&self) -> &UserUpdate {
        &self.form
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn is_mounted(&self) -> bool {
        !self.tickets.is_retired()
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.state = EditState::Loading;
        self.tickets.issue()
    }

    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        result: ClientResult<User>,
        notifier: &mut Notifier,
    ) -> PortalResult<Delivery> {
        if !self.tickets.is_current(ticket) {
            debug!("Dropping stale response for user {}", self.id);
            return Ok(Delivery::Stale);
        }

        match result {
            Ok(user) => {
                self.form = UserUpdate::from(&user);
                self.user = Some(user);
                self.state = EditState::Ready;
                Ok(Delivery::Applied)
            }
            Err(e) => {
                self.state = EditState::Failed;
                Err(report(notifier, PortalError::fetch("user data", e)))
            }
        }
    }

    /// Fetch the user and pre-fill the form
    pub async fn load(&mut self, notifier: &mut Notifier) -> PortalResult<Delivery> {
        let ticket = self.begin_load();
        let result = self.api.get_user(self.id).await;
        self.finish_load(ticket, result, notifier)
    }

    /// Send the three editable fields. On acknowledgment the list view is
    /// the next route; the server's echoed record is not merged anywhere.
    pub async fn submit(&mut self, notifier: &mut Notifier) -> PortalResult<Option<Route>> {
        self.validate().map_err(|e| report(notifier, e))?;

        let update = self.form.clone();
        let result = self.api.update_user(self.id, &update).await;

        if !self.is_mounted() {
            debug!("Dropping update acknowledgment for {} after unmount", self.id);
            return Ok(None);
        }

        match result {
            Ok(()) => {
                info!("Updated user {}", self.id);
                notifier.success("User updated successfully");
                Ok(Some(Route::Users))
            }
            Err(e) => Err(report(notifier, PortalError::update(e))),
        }
    }

    /// Leave without saving
    pub fn back(&self) -> Route {
        Route::Users
    }

    pub fn unmount(&mut self) {
        self.tickets.invalidate();
    }

    fn validate(&self) -> PortalResult<()> {
        let missing: Vec<&str> = [
            ("first name", &self.form.first_name),
            ("last name", &self.form.last_name),
            ("email", &self.form.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PortalError::validation(format!(
                "Required: {}",
                missing.join(", ")
            )))
        }
    }
}
