use crate::StoreError;

use std::path::PathBuf;

fn io_error() -> std::io::Error {
    std::io::Error::other("test")
}

#[test]
fn given_file_read_error_when_is_transient_then_returns_true() {
    let err = StoreError::file_read(PathBuf::from("/test"), io_error());
    assert!(err.is_transient());
}

#[test]
fn given_atomic_rename_error_when_is_transient_then_returns_true() {
    let err = StoreError::atomic_rename(PathBuf::from("/from"), PathBuf::from("/to"), io_error());
    assert!(err.is_transient());
}

#[test]
fn given_dir_creation_error_when_is_transient_then_returns_false() {
    let err = StoreError::dir_creation(PathBuf::from("/test"), io_error());
    assert!(!err.is_transient());
}

#[test]
fn given_any_error_when_recovery_hint_then_returns_non_empty_string() {
    let errors = vec![
        StoreError::dir_creation(PathBuf::from("/test"), io_error()),
        StoreError::file_write(PathBuf::from("/test"), io_error()),
        StoreError::backup_failed(io_error()),
    ];

    for err in errors {
        assert!(
            !err.recovery_hint().is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_serde_error_when_converted_then_serialization_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let store_err: StoreError = json_err.into();

    assert!(matches!(store_err, StoreError::Serialization { .. }));
}
