use serde_json::{Value, json};

use casebook_config::Retrieval;
use casebook_service::{
	Candidate, CaseService, Dataset, DatasetStore, DialoguesRequest, DrugsRequest, Error,
	SummaryRequest, SymptomsRequest,
};
use casebook_testkit::TestDataset;

const KNEE: &str = "CHIEF COMPLAINT\n\nRight knee pain.\n\nEndorses swelling.\nEndorses stiffness in the morning.\nContinue Meloxicam 15 mg daily.\nStart Tramadol 50 mg every 6 hours.";
const COUGH: &str = "CHIEF COMPLAINT\nCough and fever.\nEndorses fever.\nEndorses chills.\nPrescribed Benzonatate 200 mg three times daily.\nTylenol 500 mg as needed.";
const COUGH_FOLLOWUP: &str = "Chief complaint: cough and fever.\nEndorses fatigue.\nBenzonatate 100 mg at night.\nAzithromycin 250 mg daily.";
const NO_MARKER: &str = "The patient is a 54-year-old woman presenting today with a persistent cough that has lasted for about three weeks now.";

fn service(dialogues: &[&str]) -> (TestDataset, CaseService) {
	let fixture = TestDataset::with_dialogues(dialogues).expect("Failed to write dataset.");
	let service = CaseService::new(DatasetStore::new(fixture.path()), Retrieval::default());

	(fixture, service)
}

fn names(candidates: &[Candidate]) -> Vec<&str> {
	candidates.iter().map(|candidate| candidate.name.as_str()).collect()
}

#[test]
fn missing_dataset_is_file_not_found() {
	let service =
		CaseService::new(DatasetStore::new(TestDataset::missing_path()), Retrieval::default());
	let err = service.warm().expect_err("Expected missing dataset error.");

	assert!(matches!(err, Error::FileNotFound { .. }), "Unexpected error: {err:?}");
}

#[test]
fn malformed_dataset_is_parse_error() {
	let fixture =
		TestDataset::from_raw("{ \"data\": [ { \"src\": ").expect("Failed to write dataset.");
	let err = Dataset::load(fixture.path()).expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseError { .. }), "Unexpected error: {err:?}");
}

#[test]
fn unrecognized_document_loads_as_empty() {
	let fixture = TestDataset::from_json(&json!({ "rows": [{ "src": "text" }] }))
		.expect("Failed to write dataset.");
	let service = CaseService::new(DatasetStore::new(fixture.path()), Retrieval::default());

	assert_eq!(service.warm().expect("Expected empty dataset to load."), 0);
	assert!(
		service
			.cases_for_summary(&SummaryRequest::default())
			.expect("Summary must succeed.")
			.is_empty()
	);
}

#[test]
fn store_loads_once_and_survives_file_removal() {
	let (fixture, service) = service(&[KNEE, COUGH]);

	assert_eq!(service.warm().expect("Expected dataset to load."), 2);

	fixture.cleanup().expect("Failed to remove dataset.");

	assert_eq!(service.warm().expect("Expected cached dataset."), 2);
	assert_eq!(service.dataset().map(Dataset::len).ok(), Some(2));
}

#[test]
fn failed_load_is_retried() {
	let path = TestDataset::missing_path();
	let store = DatasetStore::new(&path);

	assert!(store.load().is_err());
	assert!(!store.is_loaded());

	std::fs::write(&path, r#"[{ "src": "late file" }]"#).expect("Failed to write dataset.");

	let loaded = store.load().map(Dataset::len).ok();

	std::fs::remove_file(&path).expect("Failed to remove dataset.");

	assert_eq!(loaded, Some(1));
	assert!(store.is_loaded());
}

#[test]
fn top_k_prefers_higher_overlap_and_drops_zero_scores() {
	// Query has 10 distinct terms; the second record shares 4 of them, the third shares 7.
	let (_fixture, service) = service(&[
		"unrelated words only here",
		"alpha beta gamma delta",
		"alpha beta gamma delta epsilon zeta eta",
	]);
	let req = DialoguesRequest {
		complaint: "alpha beta gamma delta epsilon zeta eta theta iota kappa".to_string(),
		k: Some(2),
	};
	let ids: Vec<usize> = service
		.dialogues_for_complaint(&req)
		.expect("Dialogue lookup must succeed.")
		.iter()
		.map(|record| record.id())
		.collect();

	assert_eq!(ids, vec![2, 1]);
}

#[test]
fn dialogues_use_default_k_and_ignore_blank_complaints() {
	let (_fixture, service) = service(&[COUGH, COUGH_FOLLOWUP, NO_MARKER, KNEE]);
	let found = service
		.dialogues_for_complaint(&DialoguesRequest { complaint: "cough".to_string(), k: None })
		.expect("Dialogue lookup must succeed.");

	assert_eq!(found.len(), 2);
	assert!(found.iter().all(|record| record.dialogue().to_lowercase().contains("cough")));

	let blank = service
		.dialogues_for_complaint(&DialoguesRequest { complaint: "  \n ".to_string(), k: None })
		.expect("Dialogue lookup must succeed.");

	assert!(blank.is_empty());
}

#[test]
fn symptoms_dedupe_names_and_fall_back_to_excerpts() {
	let (_fixture, service) = service(&[COUGH, COUGH, NO_MARKER, KNEE]);
	let candidates = service
		.symptoms_for_complaint(&SymptomsRequest {
			complaint: "Cough and fever".to_string(),
			max_cases: None,
		})
		.expect("Symptom lookup must succeed.");
	let excerpt: String = NO_MARKER.chars().take(80).collect::<String>() + "...";

	assert_eq!(candidates, vec![
		Candidate { name: "Cough and fever".to_string(), case_id: 0 },
		Candidate { name: excerpt, case_id: 2 },
	]);
}

#[test]
fn symptoms_respect_max_cases() {
	let (_fixture, service) = service(&[COUGH, COUGH_FOLLOWUP, KNEE]);
	let candidates = service
		.symptoms_for_complaint(&SymptomsRequest {
			complaint: "cough and fever".to_string(),
			max_cases: Some(1),
		})
		.expect("Symptom lookup must succeed.");

	assert_eq!(candidates.len(), 1);
}

#[test]
fn drugs_are_deduped_across_cases_in_rank_order() {
	let (_fixture, service) = service(&[KNEE, COUGH, COUGH_FOLLOWUP]);
	let candidates = service
		.drugs_for_symptoms(&DrugsRequest {
			symptoms: vec!["cough".to_string(), "fever".to_string()],
			max_cases: None,
		})
		.expect("Drug lookup must succeed.");
	let pairs: Vec<(&str, usize)> =
		candidates.iter().map(|candidate| (candidate.name.as_str(), candidate.case_id)).collect();

	assert_eq!(pairs, vec![("Azithromycin", 2), ("Benzonatate", 2), ("Tylenol", 1)]);
}

#[test]
fn drugs_need_a_selection() {
	let (_fixture, service) = service(&[COUGH]);
	let candidates = service
		.drugs_for_symptoms(&DrugsRequest { symptoms: Vec::new(), max_cases: None })
		.expect("Drug lookup must succeed.");

	assert!(candidates.is_empty());
}

#[test]
fn summary_without_selection_returns_leading_cases_unscored() {
	let (_fixture, service) = service(&[NO_MARKER, KNEE, COUGH, COUGH_FOLLOWUP]);
	let cases = service
		.cases_for_summary(&SummaryRequest::default())
		.expect("Summary must succeed.");
	let ids: Vec<usize> = cases.iter().map(|case| case.case_id).collect();

	assert_eq!(ids, vec![0, 1, 2]);
	assert_eq!(cases[0].chief_complaint, "");
	assert_eq!(cases[1].chief_complaint, "Right knee pain");
}

#[test]
fn summary_cases_expose_extracted_fields() {
	let (_fixture, service) = service(&[NO_MARKER, KNEE, COUGH]);
	let cases = service
		.cases_for_summary(&SummaryRequest {
			symptoms: vec!["knee".to_string(), "swelling".to_string()],
			drugs: vec!["Meloxicam".to_string()],
			max_cases: Some(1),
		})
		.expect("Summary must succeed.");

	assert_eq!(cases.len(), 1);

	let value = serde_json::to_value(&cases[0]).expect("Case must serialize.");

	assert_eq!(value["case_id"], json!(1));
	assert_eq!(value["chief_complaint"], json!("Right knee pain"));
	assert_eq!(value["symptoms"], json!(["swelling", "stiffness in the morning"]));
	assert_eq!(value["medications"], json!(["Meloxicam", "Tramadol"]));
	assert_eq!(value["drugs"], value["medications"]);
	assert_eq!(value["objective"]["medications"], value["medications"]);
	assert_eq!(value["raw"], json!({ "src": KNEE }));
}

#[test]
fn summary_with_unmatched_selection_is_empty() {
	let (_fixture, service) = service(&[KNEE, COUGH]);
	let cases = service
		.cases_for_summary(&SummaryRequest {
			symptoms: vec!["photophobia".to_string()],
			drugs: Vec::new(),
			max_cases: None,
		})
		.expect("Summary must succeed.");

	assert!(cases.is_empty());
}

#[test]
fn records_serialize_with_raw_payload() {
	let (_fixture, service) = service(&[COUGH]);
	let found = service
		.dialogues_for_complaint(&DialoguesRequest { complaint: "fever".to_string(), k: Some(1) })
		.expect("Dialogue lookup must succeed.");
	let value: Value = serde_json::to_value(found[0]).expect("Record must serialize.");

	assert_eq!(value, json!({ "id": 0, "dialogue": COUGH, "raw": { "src": COUGH } }));
}
