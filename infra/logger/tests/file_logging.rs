use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use tfp_logger::{LogFormat, LogRotation, LogSettings, Logger, LoggerError};

#[test]
fn file_logging_writes_json_lines_and_blocks_second_init() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let settings: LogSettings = toml::from_str(&format!(
        "level = \"info\"\nconsole = false\nformat = \"json\"\nrotation = \"never\"\ndirectory = {:?}",
        log_dir.display().to_string()
    ))?;
    assert_eq!(settings.rotation, LogRotation::Never);
    assert_eq!(settings.format, LogFormat::Json);

    let logger = Logger::builder("tfp-integration").settings(settings).init()?;
    assert!(logger.writes_files());

    let second = Logger::builder("tfp-integration-second").init().unwrap_err();
    assert!(matches!(second, LoggerError::Subscriber { .. }));

    tracing::info!(label = "TrackerTFPProducerGP", "hello from integration test");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|l| l.contains("hello from integration test")).expect("line logged");
    assert!(line.starts_with('{'));
    assert!(line.contains("TrackerTFPProducerGP"));
    Ok(())
}
