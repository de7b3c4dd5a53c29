use super::*;

#[test]
fn test_defaults() {
    let config = GameConfig::default();

    assert_eq!(config.mode, Mode::VsComputer);
    assert_eq!(config.layout, STANDARD_LAYOUT);
    assert_eq!(config.opponent, OpponentKind::Lookahead);
    assert!(config.auto_reply);
    assert_eq!(config.think_delay(), Duration::from_millis(400));
    assert_eq!(config.computer_side(), Some(Color::Black));
    assert_eq!(config.initial_board().unwrap(), Board::standard());
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn test_partial_document() {
    let config = GameConfig::from_toml_str(
        r#"
mode = "vs-friend"
opponent = "random"
think_delay_ms = 0

[search]
randomize_ties = true
seed = 42

[search.values]
queen = 12.0
"#,
    )
    .unwrap();

    assert_eq!(config.mode, Mode::VsFriend);
    assert_eq!(config.computer_side(), None);
    assert_eq!(config.opponent, OpponentKind::Random);
    assert_eq!(config.think_delay(), Duration::ZERO);
    // Unset keys keep their defaults
    assert!(config.auto_reply);
    assert_eq!(config.layout, STANDARD_LAYOUT);
    assert!(config.search.randomize_ties);
    assert_eq!(config.search.seed, Some(42));
    assert_eq!(config.search.immediate_weight, 0.6);
    assert_eq!(config.search.values.queen, 12.0);
    assert_eq!(config.search.values.king, 100.0);
}

#[test]
fn test_bad_layout_is_refused() {
    let err = GameConfig::from_toml_str(r#"layout = "kk3/5/5/5/4K""#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Layout(LayoutError::ExtraKing(Color::Black))
    ));
}

#[test]
fn test_unknown_mode_is_a_parse_error() {
    let err = GameConfig::from_toml_str(r#"mode = "vs-robot""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file() {
    let err = GameConfig::load("/nonexistent/minichess.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_written_config_reads_back() {
    let config = GameConfig {
        mode: Mode::VsFriend,
        layout: "rnbqk/ppppp/5/PPPPP/RNBQK".to_string(),
        think_delay_ms: 50,
        ..GameConfig::default()
    };

    let text = config.to_toml_string().unwrap();

    assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_build_engine_follows_opponent() {
    let lookahead = GameConfig::default().build_engine();
    assert_eq!(lookahead.name(), "Lookahead v1.0");

    let random = GameConfig {
        opponent: OpponentKind::Random,
        ..GameConfig::default()
    }
    .build_engine();
    assert_eq!(random.name(), "Random v1.0");
}
