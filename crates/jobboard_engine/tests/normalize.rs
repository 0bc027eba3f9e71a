use chrono::{DateTime, TimeZone, Utc};
use jobboard_core::{JobId, JobRecord};
use jobboard_engine::{MalformedRecord, Normalizer};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn normalizer() -> Normalizer {
    Normalizer::new(Url::parse("https://cdn.example.com/").unwrap())
}

#[test]
fn bare_record_gets_every_fallback() {
    let job = normalizer()
        .normalize_value(0, json!({ "id": 3 }), now())
        .unwrap();

    assert_eq!(job.id, JobId::from(3u64));
    assert_eq!(job.title, "Not specified");
    assert_eq!(job.company, "Company");
    assert_eq!(job.location, "Not specified");
    assert_eq!(job.employment_type, "Full Time");
    assert_eq!(job.experience_level, "Not specified");
    assert_eq!(job.description, "No description available");
    assert_eq!(job.tags, vec!["Full Time".to_string()]);
    assert_eq!(job.logo_url, None);
    assert_eq!(job.posted_at, None);
    assert_eq!(job.posted_time, "Recently posted");
    assert_eq!(job, JobRecord::with_defaults(3u64));
}

#[test]
fn full_record_maps_backend_fields() {
    let job = normalizer()
        .normalize_value(
            0,
            json!({
                "id": "a-17",
                "job_title": "Web Developer",
                "company_name": "Infosys",
                "job_description": "Build things",
                "location": "Delhi",
                "employment_type": "Contract",
                "work_model": "Remote",
                "experience_level": "0-1 years",
                "company_logo": "uploads/logos/infosys.png",
                "dtime": "2025-06-12 12:00:00"
            }),
            now(),
        )
        .unwrap();

    assert_eq!(job.id, JobId::from("a-17"));
    assert_eq!(job.title, "Web Developer");
    assert_eq!(job.company, "Infosys");
    assert_eq!(job.description, "Build things");
    assert_eq!(job.employment_type, "Contract");
    assert_eq!(job.work_model.as_deref(), Some("Remote"));
    assert_eq!(job.tags, vec!["Contract".to_string(), "Remote".to_string()]);
    assert_eq!(
        job.logo_url.as_deref(),
        Some("https://cdn.example.com/uploads/logos/infosys.png")
    );
    assert_eq!(job.posted_time, "3 days ago");
    assert!(job.posted_at.is_some());
}

#[test]
fn title_falls_back_to_job_type_and_empty_counts_as_missing() {
    let job = normalizer()
        .normalize_value(
            0,
            json!({
                "id": 4,
                "job_title": "",
                "job_type": "Designer",
                "company_name": "",
                "company_logo": "",
                "employment_type": null,
                "dtime": "yesterday-ish"
            }),
            now(),
        )
        .unwrap();

    assert_eq!(job.title, "Designer");
    assert_eq!(job.company, "Company");
    assert_eq!(job.logo_url, None);
    assert_eq!(job.employment_type, "Full Time");
    assert_eq!(job.posted_time, "Recently posted");
}

#[test]
fn numeric_text_fields_are_accepted() {
    let job = normalizer()
        .normalize_value(0, json!({ "id": 5, "location": 110001 }), now())
        .unwrap();
    assert_eq!(job.location, "110001");
}

#[test]
fn logo_paths_stay_under_the_logo_base() {
    let normalizer = normalizer();
    let logo = |path: &str| {
        normalizer
            .normalize_value(0, json!({ "id": 1, "company_logo": path }), now())
            .unwrap()
            .logo_url
    };

    assert_eq!(
        logo("/uploads/a.png").as_deref(),
        Some("https://cdn.example.com/uploads/a.png")
    );
    assert_eq!(
        logo("https://evil.example/x.png").as_deref(),
        Some("https://cdn.example.com/https://evil.example/x.png")
    );
    assert_eq!(
        logo("logo:1.png").as_deref(),
        Some("https://cdn.example.com/logo:1.png")
    );
    assert_eq!(
        logo("../../x.png").as_deref(),
        Some("https://cdn.example.com/../../x.png")
    );
}

#[test]
fn integral_float_ids_match_integer_ids() {
    let normalizer = normalizer();
    let job = normalizer
        .normalize_value(0, json!({ "id": 3.0 }), now())
        .unwrap();
    assert_eq!(job.id, JobId::from(3u64));

    assert_eq!(
        normalizer.normalize_value(1, json!({ "id": 3.5 }), now()),
        Err(MalformedRecord::MissingId { index: 1 })
    );
}

#[test]
fn records_without_usable_id_are_malformed() {
    let normalizer = normalizer();
    assert_eq!(
        normalizer.normalize_value(2, json!({ "job_title": "x" }), now()),
        Err(MalformedRecord::MissingId { index: 2 })
    );
    assert_eq!(
        normalizer.normalize_value(3, json!({ "id": "  " }), now()),
        Err(MalformedRecord::MissingId { index: 3 })
    );
    assert_eq!(
        normalizer.normalize_value(4, json!({ "id": [1] }), now()),
        Err(MalformedRecord::MissingId { index: 4 })
    );
    assert!(matches!(
        normalizer.normalize_value(5, json!("just a string"), now()),
        Err(MalformedRecord::Shape { index: 5, .. })
    ));
}

#[test]
fn catalog_drops_malformed_and_duplicate_records_in_order() {
    let jobs = normalizer().normalize_catalog(
        vec![
            json!({ "id": 1, "job_title": "First" }),
            json!({ "job_title": "No id" }),
            json!({ "id": "2", "job_title": "Second" }),
            json!({ "id": 1, "job_title": "Repeat" }),
            json!(null),
            json!({ "id": 3, "job_title": "Third" }),
        ],
        now(),
    );

    let titles: Vec<_> = jobs.iter().map(|job| job.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}
