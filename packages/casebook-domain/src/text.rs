use std::{collections::HashSet, hash::Hash};

/// Splits `text` into lower-cased word tokens.
///
/// Each whitespace-separated piece keeps only word characters and hyphens, so `3-day` survives
/// intact while trailing commas and periods are dropped. Pieces that end up empty are skipped.
/// Duplicates are kept; set semantics apply only when scoring.
pub fn tokenize(text: &str) -> Vec<String> {
	let lowered = text.to_lowercase().replace('\n', " ");
	let mut out = Vec::new();

	for piece in lowered.split_whitespace() {
		let token: String = piece.chars().filter(|ch| is_token_char(*ch)).collect();

		if !token.is_empty() {
			out.push(token);
		}
	}

	out
}

pub fn token_set(text: &str) -> HashSet<String> {
	tokenize(text).into_iter().collect()
}

/// Jaccard similarity of the token sets behind `a` and `b`.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
	if a.is_empty() || b.is_empty() {
		return 0.0;
	}

	let a: HashSet<&str> = a.iter().map(String::as_str).collect();
	let b: HashSet<&str> = b.iter().map(String::as_str).collect();

	set_similarity(&a, &b)
}

/// Intersection size over union size. Returns exactly `0.0` when either side is empty.
pub fn set_similarity<T>(a: &HashSet<T>, b: &HashSet<T>) -> f64
where
	T: Eq + Hash,
{
	if a.is_empty() || b.is_empty() {
		return 0.0;
	}

	let intersection = a.intersection(b).count();
	let union = a.len() + b.len() - intersection;

	if union == 0 {
		return 0.0;
	}

	intersection as f64 / union as f64
}

fn is_token_char(ch: char) -> bool {
	ch.is_alphanumeric() || ch == '_' || ch == '-'
}
