use crate::{
    FileOp, FileTokenStore, MemoryTokenStore, SessionContext, SessionError, TokenStore,
};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};
use tempfile::TempDir;

// =============================================================================
// FileTokenStore
// =============================================================================

#[test]
fn given_no_file_when_load_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::new(temp.path().join("session.json"));

    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn given_saved_token_when_load_from_new_store_then_token_survives() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    FileTokenStore::new(&path).save("QpwL5tke4Pnpja7X4").unwrap();
    let reloaded = FileTokenStore::new(&path).load().unwrap();

    assert_that!(reloaded.as_deref(), some(eq("QpwL5tke4Pnpja7X4")));
}

#[test]
fn given_missing_parent_dir_when_save_then_directory_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("session.json");
    let store = FileTokenStore::new(&path);

    assert_that!(store.save("token"), ok(anything()));
    assert!(path.exists());
}

#[test]
fn given_saved_token_when_save_then_no_temp_file_left_behind() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::new(temp.path().join("session.json"));

    store.save("token").unwrap();

    let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn given_corrupted_file_when_load_then_corrupted_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let result = FileTokenStore::new(&path).load();

    assert!(matches!(result, Err(SessionError::Corrupted { .. })));
}

#[test]
fn given_empty_token_in_file_when_load_then_none() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, r#"{"token":""}"#).unwrap();

    assert_eq!(FileTokenStore::new(&path).load().unwrap(), None);
}

#[test]
fn given_blank_token_in_file_when_load_then_none() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, r#"{"token":"   "}"#).unwrap();

    assert_eq!(FileTokenStore::new(&path).load().unwrap(), None);
    assert!(!SessionContext::new(FileTokenStore::new(&path)).has_token());
}

#[test]
fn given_no_file_when_clear_then_ok() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::new(temp.path().join("session.json"));

    assert_that!(store.clear(), ok(anything()));
}

#[test]
fn given_saved_token_when_clear_then_file_removed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    let store = FileTokenStore::new(&path);
    store.save("token").unwrap();

    store.clear().unwrap();

    assert!(!path.exists());
    assert_eq!(store.load().unwrap(), None);
}

// =============================================================================
// SessionContext
// =============================================================================

#[test]
fn given_empty_store_when_get_token_then_none() {
    let session = SessionContext::new(MemoryTokenStore::new());
    assert!(session.get_token().is_none());
    assert!(!session.has_token());
}

#[test]
fn given_set_token_when_get_token_then_returns_it() {
    let session = SessionContext::new(MemoryTokenStore::new());

    session.set_token("abc").unwrap();

    assert_eq!(session.get_token().as_deref(), Some("abc"));
}

#[test]
fn given_two_writes_when_get_token_then_last_write_wins() {
    let session = SessionContext::new(MemoryTokenStore::new());

    session.set_token("first").unwrap();
    session.set_token("second").unwrap();

    assert_eq!(session.get_token().as_deref(), Some("second"));
}

#[test]
fn given_clone_when_clear_then_all_handles_see_signed_out() {
    let session = SessionContext::new(MemoryTokenStore::with_token("abc"));
    let other = session.clone();

    other.clear_token().unwrap();

    assert!(session.get_token().is_none());
}

#[test]
fn given_blank_token_when_set_token_then_empty_token_error() {
    let session = SessionContext::new(MemoryTokenStore::new());

    let result = session.set_token("   ");

    assert_that!(result, err(anything()));
    assert!(session.get_token().is_none());
}

#[test]
fn given_corrupted_file_when_get_token_then_signed_out() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    std::fs::write(&path, "{{{").unwrap();

    let session = SessionContext::new(FileTokenStore::new(&path));

    assert!(session.get_token().is_none());
}

#[test]
fn given_file_backed_session_when_set_then_new_context_reads_it() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    SessionContext::new(FileTokenStore::new(&path))
        .set_token("persisted")
        .unwrap();
    let reopened = SessionContext::new(FileTokenStore::new(&path));

    assert_eq!(reopened.get_token().as_deref(), Some("persisted"));
}

#[test]
fn given_parent_is_a_file_when_save_then_create_dir_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let store = FileTokenStore::new(blocker.join("session.json"));

    let result = store.save("token");

    assert!(matches!(
        result,
        Err(SessionError::Io {
            op: FileOp::CreateDir,
            ..
        })
    ));
}
