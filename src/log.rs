use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum LogType {
	TRACE,
	DEBUG,
	INFO,
	WARN,
	ERROR,
}

impl From<log::Level> for LogType {
	fn from(level: log::Level) -> Self {
		match level {
			log::Level::Trace => LogType::TRACE,
			log::Level::Debug => LogType::DEBUG,
			log::Level::Info => LogType::INFO,
			log::Level::Warn => LogType::WARN,
			log::Level::Error => LogType::ERROR,
		}
	}
}

/// Appends `time [TYPE]: message` lines to a file. Installed as the `log` backend by `Log::install`.
pub struct Log {
	file: Mutex<File>,
	level: log::LevelFilter,
}

impl Log {
	pub fn open(file_path: &Path, level: log::LevelFilter) -> Result<Self> {
		let file = OpenOptions::new()
			.append(true)
			.create(true)
			.open(file_path)
			.with_context(|| format!("ログファイルを開けませんでした: {}", file_path.display()))?;

		Ok(Log { file: Mutex::new(file), level })
	}

	pub fn install(self) -> Result<()> {
		let level = self.level;
		log::set_boxed_logger(Box::new(self)).context("logger is already installed")?;
		log::set_max_level(level);
		Ok(())
	}

	pub fn write(&self, log_type: LogType, message: &str) {
		if let Ok(mut file) = self.file.lock() {
			//書けなくても処理は止めない
			let _ = writeln!(file, "{} [{}]: {}", Local::now(), log_type, message);
		}
	}
}

impl log::Log for Log {
	fn enabled(&self, metadata: &log::Metadata) -> bool {
		metadata.level() <= self.level
	}

	fn log(&self, record: &log::Record) {
		if self.enabled(record.metadata()) {
			self.write(record.level().into(), &format!("{} {}", record.target(), record.args()));
		}
	}

	fn flush(&self) {
		if let Ok(mut file) = self.file.lock() {
			let _ = file.flush();
		}
	}
}
