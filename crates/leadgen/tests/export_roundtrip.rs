use chrono::Utc;
use leadgen::workflows::leads::{
    quality_score, BusinessRecord, BusinessTypeChoice, ExportFormat, FormInput, LeadSession,
    RngSource, CSV_HEADERS,
};
use std::collections::BTreeSet;

fn populated_session(seed: u64) -> LeadSession {
    let criteria = FormInput {
        business_type: BusinessTypeChoice::Preset("electrician".to_string()),
        locations: vec!["Buffalo, NY".to_string(), "Rochester, NY".to_string()],
        max_results: 10,
        ..FormInput::default()
    }
    .into_criteria()
    .expect("valid form");

    let mut session = LeadSession::new();
    session.submit(criteria, &mut RngSource::seeded(seed), Utc::now());
    session
}

#[test]
fn csv_rows_match_held_records_and_recomputed_scores() {
    let session = populated_session(9);
    let results = session.current().expect("results held");
    let artifact = session
        .export(ExportFormat::Csv)
        .expect("csv export")
        .expect("results held");
    assert_eq!(artifact.filename, "high_quality_leads.csv");

    let mut reader = csv::Reader::from_reader(artifact.body.as_slice());
    let headers: Vec<String> = reader
        .headers()
        .expect("header row")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, CSV_HEADERS);

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows parse");
    assert_eq!(rows.len(), results.len());

    for (row, record) in rows.iter().zip(results.records()) {
        assert_eq!(&row[0], record.name);
        assert_eq!(&row[2], record.phone.as_deref().unwrap_or(""));
        assert_eq!(&row[3], record.website.as_deref().unwrap_or(""));
        let score: u8 = row[8].parse().expect("numeric score");
        assert_eq!(score, quality_score(record, results.criteria()).value());
    }
}

#[test]
fn json_export_deserializes_to_same_records() {
    let session = populated_session(21);
    let results = session.current().expect("results held");
    let artifact = session
        .export(ExportFormat::Json)
        .expect("json export")
        .expect("results held");
    assert_eq!(artifact.mime.essence_str(), "application/json");

    let values: Vec<serde_json::Value> =
        serde_json::from_slice(&artifact.body).expect("valid json");
    assert_eq!(values.len(), results.len());
    let expected: BTreeSet<&str> = [
        "name",
        "address",
        "phone",
        "website",
        "rating",
        "reviews",
        "priceLevel",
        "status",
        "source",
    ]
    .into_iter()
    .collect();
    for value in &values {
        let keys: BTreeSet<&str> = value
            .as_object()
            .expect("record object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, expected);
    }

    let records: Vec<BusinessRecord> =
        serde_json::from_slice(&artifact.body).expect("records deserialize");
    assert_eq!(records, results.records());
}
