use std::{
	io::{self, Write},
	path::PathBuf,
};

use clap::{Parser, Subcommand};
use serde::Serialize;

use casebook_service::{
	CaseService, DialoguesRequest, DrugsRequest, SummaryRequest, SymptomsRequest,
};

#[derive(Debug, Parser)]
#[command(
	version = casebook_cli::VERSION,
	rename_all = "kebab",
	styles = casebook_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Overrides `dataset.path` from the config file.
	#[arg(long, short = 'd', value_name = "FILE")]
	pub dataset: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Dialogues most similar to a chief complaint.
	Dialogues {
		complaint: String,
		#[arg(long, value_name = "N")]
		k: Option<usize>,
	},
	/// Candidate symptom names for a chief complaint.
	Symptoms {
		complaint: String,
		#[arg(long, value_name = "N")]
		max_cases: Option<usize>,
	},
	/// Candidate drug names for the selected symptoms.
	Drugs {
		#[arg(long = "symptom", value_name = "TEXT", required = true)]
		symptoms: Vec<String>,
		#[arg(long, value_name = "N")]
		max_cases: Option<usize>,
	},
	/// Similar cases to ground a summary note.
	Summary {
		#[arg(long = "symptom", value_name = "TEXT")]
		symptoms: Vec<String>,
		#[arg(long = "drug", value_name = "TEXT")]
		drugs: Vec<String>,
		#[arg(long, value_name = "N")]
		max_cases: Option<usize>,
	},
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let mut config = casebook_config::load(&args.config)?;

	casebook_cli::init_tracing(&config.service.log_level);

	if let Some(dataset) = args.dataset {
		config.dataset.path = dataset;
	}

	let service = CaseService::from_config(&config);
	let records = service.warm()?;

	tracing::info!(records, "Case service ready.");

	let stdout = io::stdout();
	let mut out = stdout.lock();

	execute(&service, args.command, &mut out)?;

	writeln!(out)?;

	Ok(())
}

/// Runs one command and writes its result to `out` as pretty-printed JSON.
pub fn execute<W>(service: &CaseService, command: Command, out: &mut W) -> color_eyre::Result<()>
where
	W: Write,
{
	match command {
		Command::Dialogues { complaint, k } => {
			let req = DialoguesRequest { complaint, k };

			write_json(out, &service.dialogues_for_complaint(&req)?)
		},
		Command::Symptoms { complaint, max_cases } => {
			let req = SymptomsRequest { complaint, max_cases };

			write_json(out, &service.symptoms_for_complaint(&req)?)
		},
		Command::Drugs { symptoms, max_cases } => {
			let req = DrugsRequest { symptoms, max_cases };

			write_json(out, &service.drugs_for_symptoms(&req)?)
		},
		Command::Summary { symptoms, drugs, max_cases } => {
			let req = SummaryRequest { symptoms, drugs, max_cases };

			write_json(out, &service.cases_for_summary(&req)?)
		},
	}
}

fn write_json<W, T>(out: &mut W, value: &T) -> color_eyre::Result<()>
where
	W: Write,
	T: Serialize,
{
	serde_json::to_writer_pretty(&mut *out, value)?;

	Ok(())
}
