use recipebook_core::{init_logging, logging_status, LogLevel, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let first = tempfile::tempdir().expect("create temp log dir");
    let second = tempfile::tempdir().expect("create second temp log dir");
    let first_dir = first.path().to_str().expect("utf-8 temp path").to_string();
    let second_dir = second.path().to_str().expect("utf-8 temp path").to_string();

    init_logging("info", &first_dir).expect("first init should succeed");
    init_logging("INFO", &first_dir).expect("same config should be idempotent");

    let level_err = init_logging("debug", &first_dir).expect_err("level conflict");
    assert!(matches!(level_err, LoggingError::Conflict { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", &second_dir).expect_err("directory conflict");
    assert!(matches!(dir_err, LoggingError::Conflict { .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, LogLevel::Info);
    assert_eq!(dir, first.path());
}
