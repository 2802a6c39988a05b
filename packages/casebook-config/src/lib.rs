mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Dataset, Retrieval, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.dataset.path.as_os_str().is_empty() {
		return Err(Error::Validation { message: "dataset.path must be non-empty.".to_string() });
	}

	for (label, value) in [
		("retrieval.dialogue_k", cfg.retrieval.dialogue_k),
		("retrieval.symptom_cases", cfg.retrieval.symptom_cases),
		("retrieval.drug_cases", cfg.retrieval.drug_cases),
		("retrieval.summary_cases", cfg.retrieval.summary_cases),
		("retrieval.fallback_chars", cfg.retrieval.fallback_chars),
	] {
		if value == 0 {
			return Err(Error::Validation {
				message: format!("{label} must be greater than zero."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let log_level = cfg.service.log_level.trim();

	if log_level.len() != cfg.service.log_level.len() {
		cfg.service.log_level = log_level.to_string();
	}

	if let Some(path) = cfg.dataset.path.to_str() {
		let trimmed = path.trim();

		if trimmed.len() != path.len() {
			cfg.dataset.path = trimmed.into();
		}
	}
}
