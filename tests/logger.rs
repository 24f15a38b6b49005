use stockroom::logger::Logger;

#[test]
fn test_config_based_logging_flag() {
    assert!(!Logger::from_config(false).is_enabled());
    assert!(Logger::from_config(true).is_enabled());
}

#[test]
fn test_logs_are_kept_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
}

#[test]
fn test_buffer_is_bounded() {
    let logger = Logger::with_capacity(3);
    for i in 0..5 {
        logger.log(format!("line {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].ends_with("line 4"));
    assert!(logs[2].ends_with("line 2"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_log_file_lives_in_data_dir() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("stockroom/stockroom.log"));
}
