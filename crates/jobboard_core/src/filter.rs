use std::collections::BTreeSet;

use crate::{FacetCategory, JobRecord, ANY_EXPERIENCE};

/// The user's current facet selections and free-text queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub experience: BTreeSet<String>,
    pub job_title: BTreeSet<String>,
    pub location: BTreeSet<String>,
    pub employment_type: BTreeSet<String>,
    /// Matched against title and company.
    pub keyword_query: String,
    /// Matched against location.
    pub location_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// The initial (and reset) state: any experience, nothing else selected.
    pub fn new() -> Self {
        Self {
            experience: BTreeSet::from([ANY_EXPERIENCE.to_string()]),
            job_title: BTreeSet::new(),
            location: BTreeSet::new(),
            employment_type: BTreeSet::new(),
            keyword_query: String::new(),
            location_query: String::new(),
        }
    }

    pub fn selection(&self, category: FacetCategory) -> &BTreeSet<String> {
        match category {
            FacetCategory::Experience => &self.experience,
            FacetCategory::JobTitle => &self.job_title,
            FacetCategory::Location => &self.location,
            FacetCategory::EmploymentType => &self.employment_type,
        }
    }

    fn selection_mut(&mut self, category: FacetCategory) -> &mut BTreeSet<String> {
        match category {
            FacetCategory::Experience => &mut self.experience,
            FacetCategory::JobTitle => &mut self.job_title,
            FacetCategory::Location => &mut self.location,
            FacetCategory::EmploymentType => &mut self.employment_type,
        }
    }

    pub fn is_selected(&self, category: FacetCategory, value: &str) -> bool {
        self.selection(category).contains(value)
    }

    /// Toggles one facet value.
    ///
    /// Experience keeps `"any"` exclusive: choosing it clears concrete values,
    /// choosing a concrete value clears it, and removing the last concrete
    /// value brings it back. Other categories toggle plain membership.
    pub fn toggle(&mut self, category: FacetCategory, value: &str) {
        if category == FacetCategory::Experience {
            self.toggle_experience(value);
            return;
        }
        let selection = self.selection_mut(category);
        if !selection.remove(value) {
            selection.insert(value.to_string());
        }
    }

    fn toggle_experience(&mut self, value: &str) {
        let any = BTreeSet::from([ANY_EXPERIENCE.to_string()]);
        if value == ANY_EXPERIENCE {
            self.experience = any;
        } else if self.experience.remove(value) {
            if self.experience.is_empty() {
                self.experience = any;
            }
        } else if self.experience.contains(ANY_EXPERIENCE) {
            self.experience = BTreeSet::from([value.to_string()]);
        } else {
            self.experience.insert(value.to_string());
        }
    }

    /// Builder-style toggle for chaining in callers and tests.
    pub fn toggled(mut self, category: FacetCategory, value: &str) -> Self {
        self.toggle(category, value);
        self
    }

    /// Whether one record passes every active filter axis.
    ///
    /// Axes are checked in a fixed order: keyword, location query,
    /// experience, job title, location, employment type.
    pub fn matches(&self, job: &JobRecord) -> bool {
        contains_ignore_case(&self.keyword_query, &[job.title.as_str(), job.company.as_str()])
            && contains_ignore_case(&self.location_query, &[job.location.as_str()])
            && self.matches_experience(job)
            && self.matches_selection(FacetCategory::JobTitle, job)
            && self.matches_selection(FacetCategory::Location, job)
            && self.matches_selection(FacetCategory::EmploymentType, job)
    }

    fn matches_experience(&self, job: &JobRecord) -> bool {
        self.experience.is_empty()
            || self.experience.contains(ANY_EXPERIENCE)
            || self.experience.contains(&job.experience_level)
    }

    fn matches_selection(&self, category: FacetCategory, job: &JobRecord) -> bool {
        let selection = self.selection(category);
        selection.is_empty() || selection.contains(category.field_of(job))
    }
}

/// Returns the visible subset of the catalog, in catalog order.
pub fn apply_filters<'a>(catalog: &'a [JobRecord], filters: &FilterState) -> Vec<&'a JobRecord> {
    catalog.iter().filter(|job| filters.matches(job)).collect()
}

fn contains_ignore_case(query: &str, haystacks: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    haystacks
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}
