mod login_screen;
mod route;

use crate::Notifier;

use std::time::Duration;

pub(crate) fn notifier() -> Notifier {
    Notifier::new(3, Duration::from_millis(3000))
}
