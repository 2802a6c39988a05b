use std::{
	collections::HashSet,
	fs, io,
	path::{Path, PathBuf},
	sync::{Mutex, OnceLock},
};

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};
use casebook_domain::text;

const TEXT_FIELDS: [&str; 2] = ["src", "subjective"];

/// One dialogue kept from the dataset file.
#[derive(Clone, Debug, Serialize)]
pub struct Record {
	id: usize,
	dialogue: String,
	raw: Value,
	#[serde(skip)]
	terms: HashSet<String>,
}
impl Record {
	fn new(id: usize, dialogue: String, raw: Value) -> Self {
		let terms = text::token_set(&dialogue);

		Self { id, dialogue, raw, terms }
	}

	/// Position among the kept records, starting at zero.
	pub fn id(&self) -> usize {
		self.id
	}

	/// Trimmed dialogue text. Never empty.
	pub fn dialogue(&self) -> &str {
		&self.dialogue
	}

	/// The input item exactly as it appeared in the file.
	pub fn raw(&self) -> &Value {
		&self.raw
	}

	pub(crate) fn terms(&self) -> &HashSet<String> {
		&self.terms
	}
}

/// Top-level layouts accepted for a dataset document.
#[derive(Debug)]
enum DatasetShape {
	Wrapped(Vec<Value>),
	Bare(Vec<Value>),
	Unrecognized,
}
impl DatasetShape {
	fn detect(value: Value) -> Self {
		match value {
			Value::Array(items) => Self::Bare(items),
			Value::Object(mut map) => match map.remove("data") {
				Some(Value::Array(items)) => Self::Wrapped(items),
				_ => Self::Unrecognized,
			},
			_ => Self::Unrecognized,
		}
	}

	fn into_items(self) -> Vec<Value> {
		match self {
			Self::Wrapped(items) | Self::Bare(items) => items,
			Self::Unrecognized => Vec::new(),
		}
	}
}

#[derive(Debug, Default)]
pub struct Dataset {
	records: Vec<Record>,
	dropped: usize,
}
impl Dataset {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
			io::ErrorKind::NotFound => Error::FileNotFound { path: path.to_path_buf() },
			_ => Error::Io { path: path.to_path_buf(), source: err },
		})?;
		let value: Value = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseError { path: path.to_path_buf(), source: err })?;
		let dataset = Self::from_value(value);

		tracing::info!(
			path = %path.display(),
			records = dataset.len(),
			dropped = dataset.dropped,
			"Loaded dialogue records."
		);

		Ok(dataset)
	}

	/// Normalizes an already parsed document. Unknown layouts yield an empty dataset.
	pub fn from_value(value: Value) -> Self {
		let shape = DatasetShape::detect(value);

		if matches!(shape, DatasetShape::Unrecognized) {
			tracing::warn!("Dataset document has no recognizable record list.");
		}

		let mut records = Vec::new();
		let mut dropped = 0_usize;

		for (position, item) in shape.into_items().into_iter().enumerate() {
			let Some(dialogue) = item_text(&item) else {
				tracing::debug!(position, "Dropped dataset item without dialogue text.");

				dropped += 1;

				continue;
			};

			records.push(Record::new(records.len(), dialogue, item));
		}

		Self { records, dropped }
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn get(&self, id: usize) -> Option<&Record> {
		self.records.get(id)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Items skipped during normalization because they carried no text.
	pub fn dropped(&self) -> usize {
		self.dropped
	}
}

/// Lazily loads the dataset at `path` once and keeps it for the lifetime of the store.
#[derive(Debug)]
pub struct DatasetStore {
	path: PathBuf,
	cell: OnceLock<Dataset>,
	init: Mutex<()>,
}
impl DatasetStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into(), cell: OnceLock::new(), init: Mutex::new(()) }
	}

	/// A store that is already populated and never touches `path`.
	pub fn with_dataset(path: impl Into<PathBuf>, dataset: Dataset) -> Self {
		Self { path: path.into(), cell: OnceLock::from(dataset), init: Mutex::new(()) }
	}

	pub fn is_loaded(&self) -> bool {
		self.cell.get().is_some()
	}

	/// Returns the cached dataset, reading the file on first use. Failures are not cached.
	pub fn load(&self) -> Result<&Dataset> {
		if let Some(dataset) = self.cell.get() {
			return Ok(dataset);
		}

		let _guard = self.init.lock().unwrap_or_else(|err| err.into_inner());

		if let Some(dataset) = self.cell.get() {
			return Ok(dataset);
		}

		let dataset = Dataset::load(&self.path)?;

		Ok(self.cell.get_or_init(|| dataset))
	}
}

// The field is chosen before trimming, so a whitespace-only `src` shadows `subjective`.
fn item_text(item: &Value) -> Option<String> {
	let text = TEXT_FIELDS
		.iter()
		.filter_map(|field| item.get(field).and_then(Value::as_str))
		.find(|text| !text.is_empty())?
		.trim();

	(!text.is_empty()).then(|| text.to_string())
}
