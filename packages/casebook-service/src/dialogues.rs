use serde::Deserialize;

use crate::{CaseService, Result, dataset::Record, ranking};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DialoguesRequest {
	pub complaint: String,
	#[serde(default)]
	pub k: Option<usize>,
}

impl CaseService {
	/// Dialogues most similar to a free-text chief complaint.
	pub fn dialogues_for_complaint(&self, req: &DialoguesRequest) -> Result<Vec<&Record>> {
		let complaint = req.complaint.trim();

		if complaint.is_empty() {
			return Ok(Vec::new());
		}

		let k = req.k.unwrap_or(self.retrieval.dialogue_k);
		let dataset = self.store.load()?;
		let dialogues = ranking::top_k(complaint, dataset.records(), k);

		tracing::debug!(k, returned = dialogues.len(), "Retrieved dialogues for complaint.");

		Ok(dialogues)
	}
}
