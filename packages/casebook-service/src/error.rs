use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Dataset file not found at {path:?}.")]
	FileNotFound { path: PathBuf },
	#[error("Failed to read dataset file at {path:?}.")]
	Io { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse dataset file at {path:?}: {source}")]
	ParseError { path: PathBuf, source: serde_json::Error },
}
