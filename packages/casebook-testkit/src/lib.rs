mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use serde_json::Value;
use uuid::Uuid;

/// A dataset file written to the system temp directory and removed on drop.
pub struct TestDataset {
	path: PathBuf,
	cleaned: bool,
}
impl TestDataset {
	pub fn from_json(value: &Value) -> Result<Self> {
		let payload = serde_json::to_string_pretty(value)?;

		Self::from_raw(&payload)
	}

	/// Writes `payload` verbatim, which allows fixtures that are not valid JSON.
	pub fn from_raw(payload: &str) -> Result<Self> {
		let path = env::temp_dir().join(format!("casebook_test_{}.json", Uuid::new_v4().simple()));

		fs::write(&path, payload).map_err(|err| {
			Error::Message(format!("Failed to write test dataset at {path:?}: {err}."))
		})?;

		Ok(Self { path, cleaned: false })
	}

	/// Wraps `items` as `{"data": [...]}`.
	pub fn wrapped(items: Vec<Value>) -> Result<Self> {
		Self::from_json(&serde_json::json!({ "data": items }))
	}

	/// Items whose `src` holds each dialogue, in order.
	pub fn with_dialogues(dialogues: &[&str]) -> Result<Self> {
		let items = dialogues.iter().map(|text| serde_json::json!({ "src": text })).collect();

		Self::wrapped(items)
	}

	/// A path in the temp directory that is guaranteed not to exist.
	pub fn missing_path() -> PathBuf {
		env::temp_dir().join(format!("casebook_missing_{}.json", Uuid::new_v4().simple()))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		self.cleaned = true;

		match fs::remove_file(&self.path) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(err.into()),
		}
	}
}
impl Drop for TestDataset {
	fn drop(&mut self) {
		if let Err(err) = self.cleanup_inner() {
			eprintln!("Failed to remove test dataset {:?}: {err}.", self.path);
		}
	}
}
