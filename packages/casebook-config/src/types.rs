use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub dataset: Dataset,
	#[serde(default)]
	pub retrieval: Retrieval,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Dataset {
	/// Resolved against the working directory of the process, not the config file.
	pub path: PathBuf,
}

/// Default result counts for the query operations. Requests may override each one.
#[derive(Debug, Clone, Deserialize)]
pub struct Retrieval {
	#[serde(default = "default_dialogue_k")]
	pub dialogue_k: usize,
	#[serde(default = "default_symptom_cases")]
	pub symptom_cases: usize,
	#[serde(default = "default_drug_cases")]
	pub drug_cases: usize,
	#[serde(default = "default_summary_cases")]
	pub summary_cases: usize,
	/// Length, in characters, of the pseudo chief complaint cut from a dialogue that has no
	/// chief-complaint section.
	#[serde(default = "default_fallback_chars")]
	pub fallback_chars: usize,
}
impl Default for Retrieval {
	fn default() -> Self {
		Self {
			dialogue_k: default_dialogue_k(),
			symptom_cases: default_symptom_cases(),
			drug_cases: default_drug_cases(),
			summary_cases: default_summary_cases(),
			fallback_chars: default_fallback_chars(),
		}
	}
}

fn default_dialogue_k() -> usize {
	2
}

fn default_symptom_cases() -> usize {
	5
}

fn default_drug_cases() -> usize {
	10
}

fn default_summary_cases() -> usize {
	3
}

fn default_fallback_chars() -> usize {
	80
}
