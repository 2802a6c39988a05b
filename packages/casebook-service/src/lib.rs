pub mod dataset;
pub mod dialogues;
pub mod drugs;
pub mod ranking;
pub mod summary;
pub mod symptoms;

mod error;

pub use dataset::{Dataset, DatasetStore, Record};
pub use dialogues::DialoguesRequest;
pub use drugs::DrugsRequest;
pub use error::{Error, Result};
pub use ranking::ScoredRecord;
pub use summary::{SummaryCase, SummaryObjective, SummaryRequest};
pub use symptoms::SymptomsRequest;

use serde::Serialize;

use casebook_config::{Config, Retrieval};

/// A name offered to the user, with the case it was first seen in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
	pub name: String,
	pub case_id: usize,
}

/// Retrieval entry points over a single dialogue dataset.
pub struct CaseService {
	store: DatasetStore,
	retrieval: Retrieval,
}
impl CaseService {
	pub fn new(store: DatasetStore, retrieval: Retrieval) -> Self {
		Self { store, retrieval }
	}

	pub fn from_config(cfg: &Config) -> Self {
		Self::new(DatasetStore::new(cfg.dataset.path.clone()), cfg.retrieval.clone())
	}

	/// Loads the dataset now instead of on the first query and returns the record count.
	pub fn warm(&self) -> Result<usize> {
		Ok(self.store.load()?.len())
	}

	pub fn dataset(&self) -> Result<&Dataset> {
		self.store.load()
	}
}
