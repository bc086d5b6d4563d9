use crate::tests::fake_api::{EVE_EMAIL, EVE_PASSWORD, EVE_TOKEN, FakeApi};
use crate::tests::notifier;
use crate::{LoginScreen, LoginState, NotificationKind, PortalError, Route};

use std::sync::Arc;

use ep_client::{MemoryTokenStore, SessionContext};

fn screen(api: &Arc<FakeApi>, session: &SessionContext) -> LoginScreen {
    LoginScreen::new(api.clone(), session.clone())
}

#[test]
fn given_no_token_when_mount_then_form_shown() {
    let api = Arc::new(FakeApi::reqres());
    let session = SessionContext::new(MemoryTokenStore::new());
    let mut login = screen(&api, &session);

    assert_eq!(login.mount(), None);
    assert_eq!(login.state(), LoginState::Idle);
}

#[test]
fn given_stored_token_when_mount_then_forwards_to_users() {
    let api = Arc::new(FakeApi::reqres());
    let session = SessionContext::new(MemoryTokenStore::with_token("anything"));
    let mut login = screen(&api, &session);

    assert_eq!(login.mount(), Some(Route::Users));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn given_valid_credentials_when_submit_then_token_stored_and_users_next() {
    let api = Arc::new(FakeApi::reqres());
    let session = SessionContext::new(MemoryTokenStore::new());
    let mut notifier = notifier();
    let mut login = screen(&api, &session);
    login.set_email(EVE_EMAIL);
    login.set_password(EVE_PASSWORD);

    let next = login.submit(&mut notifier).await.unwrap();

    assert_eq!(next, Some(Route::Users));
    assert_eq!(login.state(), LoginState::Authenticated);
    assert_eq!(session.get_token().as_deref(), Some(EVE_TOKEN));
    let latest = notifier.latest().unwrap();
    assert_eq!(latest.kind, NotificationKind::Success);
    assert_eq!(latest.message, "Login successful");
}

#[tokio::test]
async fn given_padded_email_when_submit_then_trimmed_before_sending() {
    let api = Arc::new(FakeApi::reqres());
    let session = SessionContext::new(MemoryTokenStore::new());
    let mut notifier = notifier();
    let mut login = screen(&api, &session);
    login.set_email(format!("  {EVE_EMAIL} "));
    login.set_password(EVE_PASSWORD);

    login.submit(&mut notifier).await.unwrap();

    assert_eq!(api.calls(), vec![format!("login {EVE_EMAIL}")]);
}

#[tokio::test]
async fn given_rejected_credentials_when_submit_then_no_token_and_form_editable() {
    let api = Arc::new(FakeApi::reqres());
    let session = SessionContext::new(MemoryTokenStore::new());
    let mut notifier = notifier();
    let mut login = screen(&api, &session);
    login.set_email(EVE_EMAIL);
    login.set_password("wrong");

    let result = login.submit(&mut notifier).await;

    assert!(matches!(result, Err(PortalError::Auth { .. })));
    assert_eq!(login.state(), LoginState::Idle);
    assert!(!session.has_token());
    let latest = notifier.latest().unwrap();
    assert_eq!(latest.kind, NotificationKind::Error);
    assert_eq!(latest.message, "Invalid credentials");
}

#[tokio::test]
async fn given_server_failure_when_submit_then_reported_as_invalid_credentials() {
    let api = Arc::new(FakeApi::reqres());
    api.fail("login");
    let session = SessionContext::new(MemoryTokenStore::new());
    let mut notifier = notifier();
    let mut login = screen(&api, &session);
    login.set_email(EVE_EMAIL);
    login.set_password(EVE_PASSWORD);

    let result = login.submit(&mut notifier).await;

    assert!(result.is_err());
    assert_eq!(notifier.latest().unwrap().message, "Invalid credentials");
}

#[tokio::test]
async fn given_blank_fields_when_submit_then_no_request() {
    let api = Arc::new(FakeApi::reqres());
    let session = SessionContext::new(MemoryTokenStore::new());
    let mut notifier = notifier();
    let mut login = screen(&api, &session);
    login.set_email("   ");
    login.set_password(EVE_PASSWORD);

    let result = login.submit(&mut notifier).await;

    assert!(matches!(result, Err(PortalError::Validation { .. })));
    assert!(api.calls().is_empty());
    assert_eq!(
        notifier.latest().unwrap().message,
        "Email and password are required"
    );
}

#[test]
fn given_password_when_toggle_visibility_then_display_switches() {
    let api = Arc::new(FakeApi::reqres());
    let session = SessionContext::new(MemoryTokenStore::new());
    let mut login = screen(&api, &session);
    login.set_password("secret");

    assert_eq!(login.password_display(), "••••••");
    assert!(!login.is_password_visible());

    login.toggle_password_visibility();
    assert_eq!(login.password_display(), "secret");

    login.toggle_password_visibility();
    assert_eq!(login.password_display(), "••••••");
}

#[tokio::test]
async fn given_whitespace_password_when_submit_then_validation_error() {
    let api = Arc::new(FakeApi::reqres());
    let session = SessionContext::new(MemoryTokenStore::new());
    let mut notifier = notifier();
    let mut login = screen(&api, &session);
    login.set_email(EVE_EMAIL);
    login.set_password("   ");

    let result = login.submit(&mut notifier).await;

    assert!(matches!(result, Err(PortalError::Validation { .. })));
    assert_eq!(login.state(), LoginState::Idle);
}
