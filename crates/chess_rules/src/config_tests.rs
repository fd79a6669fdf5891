use super::*;
use crate::error::RulesError;

#[test]
fn test_defaults_match_classic_setup() {
    let config = GameConfig::default();
    assert_eq!(config.mode, GameMode::VsComputer);
    assert_eq!(config.computer, Color::Black);
    assert_eq!(config.reply_delay(), Duration::from_millis(500));
    assert!(config.is_automated(Color::Black));
    assert!(!config.is_automated(Color::White));
}

#[test]
fn test_parse_toml() {
    let config = GameConfig::from_toml_str(
        r#"
        mode = "vs-computer"
        computer = "white"
        reply_delay_ms = 0
        "#,
    )
    .unwrap();
    assert_eq!(config.computer, Color::White);
    assert_eq!(config.reply_delay_ms, 0);
    assert!(config.is_automated(Color::White));
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = GameConfig::from_toml_str(r#"mode = "two-player""#).unwrap();
    assert_eq!(config.mode, GameMode::TwoPlayer);
    assert_eq!(config.reply_delay_ms, 500);
    assert!(!config.is_automated(Color::Black));

    let config = GameConfig::from_toml_str("").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_self_play_automates_both_sides() {
    let config = GameConfig::self_play();
    assert!(config.is_automated(Color::White));
    assert!(config.is_automated(Color::Black));
}

#[test]
fn test_bad_mode_is_config_error() {
    let err = GameConfig::from_toml_str(r#"mode = "blitz""#).unwrap_err();
    assert!(matches!(err, RulesError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = GameConfig::load(Path::new("/nonexistent/chess_rules.toml")).unwrap_err();
    assert!(matches!(err, RulesError::Io(_)));
}
