pub(crate) mod edit_user_screen;
pub(crate) mod login_screen;
pub(crate) mod request_tickets;
pub(crate) mod user_list_screen;

use crate::{Notifier, PortalError};

use log::warn;

/// What happened to a response when it reached its screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    /// Superseded by a newer request, or the screen was unmounted
    Stale,
    /// Nothing was requested (e.g. paging past the last page)
    Unchanged,
    /// The requested page is past the last one the server now reports
    OutOfRange,
}

/// Log a failed operation and surface it as an error notification.
pub(crate) fn report(notifier: &mut Notifier, err: PortalError) -> PortalError {
    warn!("{err}");
    notifier.error(err.user_message());
    err
}
