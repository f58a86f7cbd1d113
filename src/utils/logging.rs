//! Logging utilities for the application
//!
//! Logs go to stdout by default. With `LOG_MODE=file` they are written to a
//! daily-rolling file under `LOG_DATA_DIR` (default `logs/`) instead.
//!
//! The level filter comes from `RUST_LOG`, then `LOG_LEVEL`, then defaults to `info`.
use std::path::PathBuf;
use tracing_appender::rolling;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default directory for log files in file mode
pub const DEFAULT_LOG_DIR: &str = "logs/";

/// Log file name prefix, rotated daily
pub const LOG_FILE_PREFIX: &str = "defi-notifier.log";

/// Where log output is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
	Stdout,
	File(PathBuf),
}

impl LogOutput {
	/// Reads `LOG_MODE` and `LOG_DATA_DIR`
	pub fn from_env() -> Self {
		Self::resolve(
			std::env::var("LOG_MODE").ok().as_deref(),
			std::env::var("LOG_DATA_DIR").ok().as_deref(),
		)
	}

	fn resolve(mode: Option<&str>, data_dir: Option<&str>) -> Self {
		match mode {
			Some(mode) if mode.eq_ignore_ascii_case("file") => {
				Self::File(PathBuf::from(data_dir.unwrap_or(DEFAULT_LOG_DIR)))
			}
			_ => Self::Stdout,
		}
	}
}

/// Setup logging for the application
///
/// Chooses stdout or a rolling file based on [`LogOutput::from_env`].
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	match LogOutput::from_env() {
		LogOutput::Stdout => setup_logging_with_writer(std::io::stdout)?,
		LogOutput::File(dir) => {
			std::fs::create_dir_all(&dir)?;
			let appender = rolling::daily(dir, LOG_FILE_PREFIX);
			init_subscriber(appender, false)?;
		}
	}
	Ok(())
}

/// Setup logging for the application with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	init_subscriber(writer, true)
}

fn env_filter() -> EnvFilter {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}

	std::env::var("LOG_LEVEL")
		.ok()
		.and_then(|level| EnvFilter::try_new(level).ok())
		.unwrap_or_else(|| EnvFilter::new("info"))
}

fn init_subscriber<W>(
	writer: W,
	ansi: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(env_filter())
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(ansi)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
