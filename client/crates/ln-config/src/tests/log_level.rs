use crate::{Config, LogLevel};

use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_match_filters() {
    assert_eq!(*LogLevel::parse_lenient("off"), LevelFilter::Off);
    assert_eq!(*LogLevel::parse_lenient("ERROR"), LevelFilter::Error);
    assert_eq!(*LogLevel::parse_lenient(" warn "), LevelFilter::Warn);
    assert_eq!(*LogLevel::parse_lenient("debug"), LevelFilter::Debug);
    assert_eq!(*LogLevel::parse_lenient("trace"), LevelFilter::Trace);
}

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    assert_eq!(*LogLevel::parse_lenient("verbose"), LevelFilter::Info);
}

#[test]
fn given_invalid_level_in_toml_when_deserialized_then_defaults_to_info() {
    let config: Config = toml::from_str(
        r#"
            [logging]
            level = "chatty"
        "#,
    )
    .unwrap();

    assert_eq!(*config.logging.level, LevelFilter::Info);
}

#[test]
fn given_debug_level_in_toml_when_deserialized_then_debug() {
    let config: Config = toml::from_str(
        r#"
            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(LevelFilter::from(config.logging.level), LevelFilter::Debug);
}
