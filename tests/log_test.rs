use std::fs;

use puyo_rensa::log::{Log, LogType};

#[test]
fn write_appends_typed_lines() {
	let path = std::env::temp_dir().join(format!("puyo_rensa_log_test_{}.txt", std::process::id()));
	let _ = fs::remove_file(&path);

	let log = Log::open(&path, log::LevelFilter::Info).unwrap();
	log.write(LogType::INFO, "first");
	log.write(LogType::ERROR, "second");
	log::Log::flush(&log);

	let text = fs::read_to_string(&path).unwrap();
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines.len(), 2);
	assert!(lines[0].ends_with("[INFO]: first"));
	assert!(lines[1].ends_with("[ERROR]: second"));

	let _ = fs::remove_file(&path);
}

#[test]
fn log_type_follows_log_level() {
	assert_eq!(LogType::from(log::Level::Warn), LogType::WARN);
	assert_eq!("DEBUG".parse::<LogType>().unwrap(), LogType::DEBUG);
}
