use std::collections::HashSet;

use serde::Deserialize;

use crate::{CaseService, Candidate, Result, ranking};
use casebook_domain::extract;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SymptomsRequest {
	pub complaint: String,
	#[serde(default)]
	pub max_cases: Option<usize>,
}

impl CaseService {
	/// Chief complaints of the closest cases, one entry per distinct name in rank order.
	///
	/// Cases without a chief-complaint section are labelled by the start of their dialogue.
	pub fn symptoms_for_complaint(&self, req: &SymptomsRequest) -> Result<Vec<Candidate>> {
		let complaint = req.complaint.trim();

		if complaint.is_empty() {
			return Ok(Vec::new());
		}

		let max_cases = req.max_cases.unwrap_or(self.retrieval.symptom_cases);
		let dataset = self.store.load()?;
		let mut seen = HashSet::new();
		let mut out = Vec::new();

		for record in ranking::top_k(complaint, dataset.records(), max_cases) {
			let name =
				extract::chief_complaint_or_excerpt(record.dialogue(), self.retrieval.fallback_chars);

			if !name.is_empty() && seen.insert(name.clone()) {
				out.push(Candidate { name, case_id: record.id() });
			}
		}

		tracing::debug!(max_cases, returned = out.len(), "Derived symptom candidates.");

		Ok(out)
	}
}
