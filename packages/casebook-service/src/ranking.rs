use std::collections::HashSet;

use crate::dataset::Record;
use casebook_domain::text;

#[derive(Clone, Copy, Debug)]
pub struct ScoredRecord<'a> {
	pub score: f64,
	pub record: &'a Record,
}

/// Scores every record against `query` and returns the non-zero ones, best first.
///
/// The sort is stable, so records with equal scores keep dataset order.
pub fn rank<'a>(query: &str, records: &'a [Record]) -> Vec<ScoredRecord<'a>> {
	if query.trim().is_empty() || records.is_empty() {
		return Vec::new();
	}

	let query_terms: HashSet<String> = text::token_set(query);
	let mut scored: Vec<ScoredRecord<'a>> = records
		.iter()
		.map(|record| ScoredRecord {
			score: text::set_similarity(&query_terms, record.terms()),
			record,
		})
		.filter(|scored| scored.score > 0.0)
		.collect();

	scored.sort_by(|a, b| b.score.total_cmp(&a.score));

	scored
}

/// The `k` best records for `query`. Zero-score records are never returned, so the result may
/// be shorter than `k`.
pub fn top_k<'a>(query: &str, records: &'a [Record], k: usize) -> Vec<&'a Record> {
	let mut scored = rank(query, records);

	scored.truncate(k);

	scored.into_iter().map(|scored| scored.record).collect()
}
