use std::collections::HashMap;
use std::fmt;

use crate::JobRecord;

/// Selection value meaning "no experience constraint".
pub const ANY_EXPERIENCE: &str = "any";
/// Label of the synthetic experience option.
pub const ANY_EXPERIENCE_LABEL: &str = "Any work experience";

/// A filterable attribute of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetCategory {
    Experience,
    JobTitle,
    Location,
    EmploymentType,
}

impl FacetCategory {
    pub const ALL: [FacetCategory; 4] = [
        FacetCategory::Experience,
        FacetCategory::JobTitle,
        FacetCategory::Location,
        FacetCategory::EmploymentType,
    ];

    /// The record field this category groups and filters on.
    pub fn field_of<'a>(&self, job: &'a JobRecord) -> &'a str {
        match self {
            FacetCategory::Experience => &job.experience_level,
            FacetCategory::JobTitle => &job.title,
            FacetCategory::Location => &job.location,
            FacetCategory::EmploymentType => &job.employment_type,
        }
    }
}

impl fmt::Display for FacetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FacetCategory::Experience => "experience",
            FacetCategory::JobTitle => "job title",
            FacetCategory::Location => "location",
            FacetCategory::EmploymentType => "employment type",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
    pub count: usize,
}

impl FacetOption {
    fn new(label: &str, count: usize) -> Self {
        Self {
            label: label.to_string(),
            value: label.to_string(),
            count,
        }
    }
}

/// Facet menus derived from the full catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Facets {
    pub experience: Vec<FacetOption>,
    pub job_title: Vec<FacetOption>,
    pub location: Vec<FacetOption>,
    pub employment_type: Vec<FacetOption>,
}

impl Facets {
    pub fn options(&self, category: FacetCategory) -> &[FacetOption] {
        match category {
            FacetCategory::Experience => &self.experience,
            FacetCategory::JobTitle => &self.job_title,
            FacetCategory::Location => &self.location,
            FacetCategory::EmploymentType => &self.employment_type,
        }
    }
}

/// Derives every facet menu from the catalog. Counts always reflect the
/// whole catalog, never the filtered subset.
pub fn derive_facets(catalog: &[JobRecord]) -> Facets {
    if catalog.is_empty() {
        return Facets::default();
    }

    let mut experience = Vec::with_capacity(1);
    experience.push(FacetOption {
        label: ANY_EXPERIENCE_LABEL.to_string(),
        value: ANY_EXPERIENCE.to_string(),
        count: catalog.len(),
    });
    experience.extend(count_values(catalog, FacetCategory::Experience));

    Facets {
        experience,
        job_title: count_values(catalog, FacetCategory::JobTitle),
        location: count_values(catalog, FacetCategory::Location),
        employment_type: count_values(catalog, FacetCategory::EmploymentType),
    }
}

fn count_values(catalog: &[JobRecord], category: FacetCategory) -> Vec<FacetOption> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counted: Vec<(&str, usize)> = Vec::new();
    for job in catalog {
        let value = category.field_of(job);
        if value.is_empty() {
            continue;
        }
        let slot = *slots.entry(value).or_insert_with(|| {
            counted.push((value, 0));
            counted.len() - 1
        });
        counted[slot].1 += 1;
    }
    // Stable sort keeps first-seen order between equal counts.
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted
        .into_iter()
        .map(|(label, count)| FacetOption::new(label, count))
        .collect()
}

/// Narrows a facet menu by a case-insensitive substring of its labels.
pub fn search_facet_options(options: &[FacetOption], substring: &str) -> Vec<FacetOption> {
    if substring.is_empty() {
        return options.to_vec();
    }
    let needle = substring.to_lowercase();
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
