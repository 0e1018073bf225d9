use cambio_base::logging::parse_level;
use cambio_base::log::LevelFilter;

#[test]
fn test_parse_level_names() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_init_stdout_logger_twice_is_harmless() {
    cambio_base::init_stdout_logger();
    cambio_base::init_stdout_logger();
    cambio_base::log::info!("logger initialised");
}
