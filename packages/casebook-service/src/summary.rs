use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CaseService, Result, dataset::Record, ranking};
use casebook_domain::ExtractedFields;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SummaryRequest {
	#[serde(default)]
	pub symptoms: Vec<String>,
	#[serde(default)]
	pub drugs: Vec<String>,
	#[serde(default)]
	pub max_cases: Option<usize>,
}

/// A retrieved case reduced to the fields a note writer needs.
///
/// `medications`, `drugs` and `objective.medications` always hold the same list.
#[derive(Clone, Debug, Serialize)]
pub struct SummaryCase<'a> {
	pub case_id: usize,
	pub chief_complaint: String,
	pub symptoms: Vec<String>,
	pub medications: Vec<String>,
	pub drugs: Vec<String>,
	pub objective: SummaryObjective,
	pub raw: &'a Value,
}
impl<'a> SummaryCase<'a> {
	fn from_record(record: &'a Record) -> Self {
		let ExtractedFields { chief_complaint, symptoms, medications } =
			ExtractedFields::from_dialogue(record.dialogue());

		Self {
			case_id: record.id(),
			chief_complaint,
			symptoms,
			drugs: medications.clone(),
			objective: SummaryObjective { medications: medications.clone() },
			medications,
			raw: record.raw(),
		}
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct SummaryObjective {
	pub medications: Vec<String>,
}

impl CaseService {
	/// Cases used as context for the final note.
	///
	/// With nothing selected the first cases of the dataset are returned in id order, without
	/// scoring.
	pub fn cases_for_summary(&self, req: &SummaryRequest) -> Result<Vec<SummaryCase<'_>>> {
		let max_cases = req.max_cases.unwrap_or(self.retrieval.summary_cases);
		let dataset = self.store.load()?;
		let selected: Vec<&Record> = if req.symptoms.is_empty() && req.drugs.is_empty() {
			dataset.records().iter().take(max_cases).collect()
		} else {
			let query = req
				.symptoms
				.iter()
				.chain(&req.drugs)
				.map(String::as_str)
				.collect::<Vec<_>>()
				.join(" ");

			ranking::top_k(&query, dataset.records(), max_cases)
		};
		let cases: Vec<SummaryCase<'_>> =
			selected.into_iter().map(SummaryCase::from_record).collect();

		tracing::debug!(max_cases, returned = cases.len(), "Collected summary cases.");

		Ok(cases)
	}
}
