use jobboard_core::{
    derive_facets, search_facet_options, FacetCategory, FacetOption, JobRecord, ANY_EXPERIENCE,
    ANY_EXPERIENCE_LABEL,
};
use pretty_assertions::assert_eq;

fn job(id: u64, title: &str, location: &str, kind: &str, experience: &str) -> JobRecord {
    JobRecord {
        title: title.to_string(),
        location: location.to_string(),
        employment_type: kind.to_string(),
        experience_level: experience.to_string(),
        ..JobRecord::with_defaults(id)
    }
}

fn catalog() -> Vec<JobRecord> {
    vec![
        job(1, "Web Developer", "Delhi", "Full Time", "0-1 years"),
        job(2, "Frontend Developer", "Mumbai", "Full Time", "2-4 years"),
        job(3, "Web Developer", "Mumbai", "Contract", "2-4 years"),
        job(4, "Tester", "Pune", "Part Time", "0-1 years"),
        job(5, "Tester", "mumbai", "Contract", "5+ years"),
    ]
}

fn option(label: &str, count: usize) -> FacetOption {
    FacetOption {
        label: label.to_string(),
        value: label.to_string(),
        count,
    }
}

#[test]
fn counts_sort_descending_with_first_seen_ties() {
    let facets = derive_facets(&catalog());

    assert_eq!(
        facets.job_title,
        vec![
            option("Web Developer", 2),
            option("Tester", 2),
            option("Frontend Developer", 1),
        ]
    );
    // Exact, case-sensitive grouping: "mumbai" is its own value.
    assert_eq!(
        facets.location,
        vec![
            option("Mumbai", 2),
            option("Delhi", 1),
            option("Pune", 1),
            option("mumbai", 1),
        ]
    );
    assert_eq!(
        facets.employment_type,
        vec![
            option("Full Time", 2),
            option("Contract", 2),
            option("Part Time", 1),
        ]
    );
}

#[test]
fn experience_leads_with_any_option() {
    let facets = derive_facets(&catalog());

    assert_eq!(
        facets.experience[0],
        FacetOption {
            label: ANY_EXPERIENCE_LABEL.to_string(),
            value: ANY_EXPERIENCE.to_string(),
            count: 5,
        }
    );
    assert_eq!(
        facets.experience[1..].to_vec(),
        vec![
            option("0-1 years", 2),
            option("2-4 years", 2),
            option("5+ years", 1),
        ]
    );
}

#[test]
fn counts_sum_to_records_with_a_value() {
    let mut jobs = catalog();
    jobs.push(job(6, "", "", "Full Time", "0-1 years"));
    let facets = derive_facets(&jobs);

    for category in FacetCategory::ALL {
        let options = facets.options(category);
        let options = if category == FacetCategory::Experience {
            assert_eq!(options[0].count, jobs.len());
            &options[1..]
        } else {
            options
        };
        let expected = jobs
            .iter()
            .filter(|job| !category.field_of(job).is_empty())
            .count();
        let total: usize = options.iter().map(|option| option.count).sum();
        assert_eq!(total, expected, "category {category}");
    }
}

#[test]
fn empty_catalog_has_no_facets() {
    let facets = derive_facets(&[]);
    for category in FacetCategory::ALL {
        assert!(facets.options(category).is_empty());
    }
}

#[test]
fn facet_search_is_case_insensitive_on_labels() {
    let facets = derive_facets(&catalog());

    let found = search_facet_options(&facets.location, "MUM");
    assert_eq!(found, vec![option("Mumbai", 2), option("mumbai", 1)]);

    assert_eq!(search_facet_options(&facets.location, ""), facets.location);
    assert!(search_facet_options(&facets.location, "chennai").is_empty());
}
