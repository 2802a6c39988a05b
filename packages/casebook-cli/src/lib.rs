//! Pieces shared by the casebook binaries: version string, help styling and log setup.

use std::io;

use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};
use tracing_subscriber::EnvFilter;

const FALLBACK_LOG_LEVEL: &str = "info";

pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.literal(AnsiColor::Yellow.on_default())
		.placeholder(AnsiColor::Green.on_default() | Effects::ITALIC)
}

/// Parses `directive` as an `EnvFilter`, falling back to `info` when it does not parse.
pub fn log_filter(directive: &str) -> EnvFilter {
	EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LOG_LEVEL))
}

/// Installs the global subscriber. Logs go to stderr; stdout is reserved for command output.
pub fn init_tracing(directive: &str) {
	tracing_subscriber::fmt().with_env_filter(log_filter(directive)).with_writer(io::stderr).init();
}
