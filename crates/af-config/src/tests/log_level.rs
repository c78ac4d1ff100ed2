use crate::LogLevel;

use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
struct Wrapper {
    level: LogLevel,
}

#[test]
fn given_known_levels_when_parsed_then_mapped() {
    assert_eq!(*LogLevel::parse_lenient("trace"), LevelFilter::Trace);
    assert_eq!(*LogLevel::parse_lenient("DEBUG"), LevelFilter::Debug);
    assert_eq!(*LogLevel::parse_lenient(" warn "), LevelFilter::Warn);
    assert_eq!(*LogLevel::parse_lenient("off"), LevelFilter::Off);
}

#[test]
fn given_unknown_level_when_parsed_then_info() {
    assert_eq!(*LogLevel::parse_lenient("loud"), LevelFilter::Info);
    assert_eq!("".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Info));
}

#[test]
fn given_non_string_level_in_toml_when_deserialized_then_info() {
    let wrapper: Wrapper = toml::from_str("level = 5").unwrap();

    assert_eq!(*wrapper.level, LevelFilter::Info);
}

#[test]
fn given_level_when_as_directive_then_lowercase_name() {
    assert_eq!(LogLevel(LevelFilter::Error).as_directive(), "error");
    assert_eq!(LogLevel(LevelFilter::Debug).as_directive(), "debug");
}
