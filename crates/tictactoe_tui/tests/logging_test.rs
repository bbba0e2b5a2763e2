//! Startup logging reaches the configured log file.

use std::io::Write;
use tictactoe_tui::{Command, TuiConfig, init_logging};

#[test]
fn test_config_is_logged_after_subscriber_install() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("game.log");
    let config_path = dir.path().join("tictactoe.toml");

    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "log_file = '{}'\nlog_filter = \"info\"", log_path.display()).unwrap();

    let config = TuiConfig::load(Some(config_path.as_path())).unwrap();
    init_logging(&Command::Play, &config).unwrap();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Configuration loaded"));
    assert!(log.contains("show_help=true"));
}
