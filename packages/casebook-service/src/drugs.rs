use std::collections::HashSet;

use serde::Deserialize;

use crate::{CaseService, Candidate, Result, ranking};
use casebook_domain::extract;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DrugsRequest {
	pub symptoms: Vec<String>,
	#[serde(default)]
	pub max_cases: Option<usize>,
}

impl CaseService {
	/// Medications mentioned in the cases closest to the selected symptoms.
	///
	/// A name is attributed to the best-ranked case that mentions it.
	pub fn drugs_for_symptoms(&self, req: &DrugsRequest) -> Result<Vec<Candidate>> {
		if req.symptoms.is_empty() {
			return Ok(Vec::new());
		}

		let max_cases = req.max_cases.unwrap_or(self.retrieval.drug_cases);
		let query = req.symptoms.join(" ");
		let dataset = self.store.load()?;
		let mut seen = HashSet::new();
		let mut out = Vec::new();

		for record in ranking::top_k(&query, dataset.records(), max_cases) {
			for name in extract::medications(record.dialogue()) {
				if seen.insert(name.clone()) {
					out.push(Candidate { name, case_id: record.id() });
				}
			}
		}

		tracing::debug!(max_cases, returned = out.len(), "Derived drug candidates.");

		Ok(out)
	}
}
