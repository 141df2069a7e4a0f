use log::LevelFilter;

use crate::logging::{init_logging, parse_level};

#[test]
fn test1_default_level() {
    assert_eq!(LevelFilter::Info, parse_level(None).unwrap());
}

#[test]
fn test2_named_levels() {
    assert_eq!(LevelFilter::Off, parse_level(Some("off")).unwrap());
    assert_eq!(LevelFilter::Warn, parse_level(Some("WARN")).unwrap());
    assert_eq!(LevelFilter::Trace, parse_level(Some(" trace ")).unwrap());
}

#[test]
fn test3_unknown_level() {
    let err = parse_level(Some("loud")).unwrap_err();
    assert_eq!("unknown log level \"loud\"", err.to_string());
}

#[test]
fn test4_logger_installs_once() {
    assert!(init_logging(LevelFilter::Warn).is_ok());

    let err = init_logging(LevelFilter::Debug).unwrap_err();
    assert_eq!("a global logger is already installed", err.to_string());
}
