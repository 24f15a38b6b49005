use stockroom::api::User;
use stockroom::session::{Session, SessionStore};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("stockroom-session-{}", std::process::id()))
        .join(name)
}

fn session() -> Session {
    Session::new(
        "token-123",
        Some(User {
            id: Some(1),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }),
    )
}

#[test]
fn test_save_then_load() {
    let store = SessionStore::new(temp_path("roundtrip.json"));
    store.save(&session()).unwrap();
    assert_eq!(store.load().unwrap(), Some(session()));
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_missing_file_is_no_session() {
    let store = SessionStore::new(temp_path("missing.json"));
    assert_eq!(store.load().unwrap(), None);
    // Clearing twice is fine
    store.clear().unwrap();
    store.clear().unwrap();
}

#[test]
fn test_corrupt_file_is_no_session() {
    let path = temp_path("corrupt.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    let store = SessionStore::new(&path);
    assert_eq!(store.load().unwrap(), None);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_debug_output_hides_token() {
    let printed = format!("{:?}", session());
    assert!(!printed.contains("token-123"));
    assert!(printed.contains("Jane Doe"));
}
