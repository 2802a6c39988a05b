use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

const CHIEF_COMPLAINT_TRIM: [char; 6] = [' ', '\t', '\r', '\n', '.', ':'];
const SYMPTOM_MARKER: &str = "Endorses";
const DOSE_UNIT: &str = "mg";
const MEDICATION_NAME_TRIM: [char; 8] = ['.', ',', ';', ':', '(', ')', '[', ']'];
// Matched case-sensitively, so "every" and "Daily" are not filtered. Kept as-is for parity with
// existing outputs.
const MEDICATION_STOPWORDS: [&str; 14] = [
	"mg", "daily", "Every", "Refill", "We", "I", "He", "She", "They", "Continue", "Start",
	"Initiate", "Repeat", "Order",
];

static CHIEF_COMPLAINT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)CHIEF COMPLAINT").expect("Chief complaint marker pattern must compile.")
});
// <name> <whitespace> <integer> <optional whitespace> mg
static MEDICATION_DOSE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"([A-Za-z][A-Za-z0-9_-]*)\s+\d+\s*(?i:mg)")
		.expect("Medication dose pattern must compile.")
});

/// Structured fields pulled out of one dialogue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
	pub chief_complaint: String,
	pub symptoms: Vec<String>,
	pub medications: Vec<String>,
}
impl ExtractedFields {
	pub fn from_dialogue(text: &str) -> Self {
		Self {
			chief_complaint: chief_complaint(text),
			symptoms: symptom_phrases(text),
			medications: medications(text),
		}
	}
}

/// Returns the first non-empty line after a case-insensitive `CHIEF COMPLAINT` marker, or an
/// empty string when there is no marker or nothing follows it.
pub fn chief_complaint(text: &str) -> String {
	let Some(marker) = CHIEF_COMPLAINT_MARKER.find(text) else { return String::new() };

	split_lines(&text[marker.end()..])
		.map(|line| line.trim_matches(CHIEF_COMPLAINT_TRIM.as_slice()))
		.find(|line| !line.is_empty())
		.map(str::to_string)
		.unwrap_or_default()
}

/// Chief complaint, or the first `max_chars` characters of the dialogue with a `...` suffix when
/// the dialogue has no chief-complaint section. The cut ignores word boundaries.
pub fn chief_complaint_or_excerpt(text: &str, max_chars: usize) -> String {
	let complaint = chief_complaint(text);

	if !complaint.is_empty() {
		return complaint;
	}

	let excerpt = match text.char_indices().nth(max_chars) {
		Some((idx, _)) => format!("{}...", &text[..idx]),
		None => text.to_string(),
	};

	excerpt.trim().to_string()
}

/// Text following `Endorses` on each line that mentions it, deduplicated in first-seen order.
pub fn symptom_phrases(text: &str) -> Vec<String> {
	let mut out: Vec<String> = Vec::new();

	for line in split_lines(text) {
		let Some((_, rest)) = line.split_once(SYMPTOM_MARKER) else { continue };
		let phrase =
			rest.trim_matches(|ch: char| ch.is_whitespace() || matches!(ch, '.' | ':' | '-'));

		if !phrase.is_empty() && !out.iter().any(|seen| seen == phrase) {
			out.push(phrase.to_string());
		}
	}

	out
}

/// Names written directly before an integer milligram dose, sorted and deduplicated.
///
/// Only lines containing a lower-case `mg` are scanned. Names are compared case-sensitively, both
/// for deduplication and against the stopword list.
pub fn medications(text: &str) -> Vec<String> {
	let mut names = BTreeSet::new();

	for line in split_lines(text) {
		if !line.contains(DOSE_UNIT) {
			continue;
		}

		for caps in MEDICATION_DOSE.captures_iter(line) {
			let Some(name) = caps.get(1) else { continue };
			let name = name.as_str().trim_matches(MEDICATION_NAME_TRIM.as_slice());

			if !name.is_empty() && !MEDICATION_STOPWORDS.contains(&name) {
				names.insert(name.to_string());
			}
		}
	}

	names.into_iter().collect()
}

// Same boundaries as universal-newline splitting, so "\r"-only files still break into lines.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
	text.split(|ch: char| {
		matches!(
			ch,
			'\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
				| '\u{2029}'
		)
	})
}
