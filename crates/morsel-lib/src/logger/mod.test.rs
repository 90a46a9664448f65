use super::*;
use crate::primitives::LoggerConfig;

fn test_config() -> LoggerConfig {
    LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    }
}

// Global subscriber state is process-wide, so initialization behavior is
// covered in a single test.
#[test]
fn test_init_once_then_already_initialized() {
    let first = Logger::init(test_config());
    // A parallel test binary section may have installed a subscriber first;
    // either way the second call must refuse.
    if first.is_ok() {
        assert!(Logger::is_initialized());
        assert!(Logger::global().is_some());
    }

    match Logger::init(test_config()) {
        Err(LoggerError::AlreadyInitialized) | Err(LoggerError::InitializationFailed { .. }) => {}
        Ok(_) => panic!("second initialization must not succeed"),
    }
}
