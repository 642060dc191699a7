//! Unrecognized destinations fall back to the console without an error

use cml_logger::{get_logger, Destination, LogOptions, Logger};

#[test]
fn test_syslog_destination_logs_to_console() {
    let options = LogOptions::from_yaml_str("destination: syslog\nfilepath: ignored.log").unwrap();
    assert_eq!(options.destination, Destination::Other("syslog".to_string()));

    let logger = get_logger(Some(options));
    assert!(logger.writes_to_console());
    assert!(logger.log_file_path().is_none());
    logger.info("written to stdout").unwrap();
}
