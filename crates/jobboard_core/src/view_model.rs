use crate::{FacetCategory, JobId, LoadStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub load_status: LoadStatus,
    pub total_jobs: usize,
    pub jobs: Vec<JobRowView>,
    /// One menu per category, in `FacetCategory::ALL` order.
    pub facets: Vec<FacetMenuView>,
    pub keyword_query: String,
    pub location_query: String,
    pub is_authenticated: bool,
    pub user_name: Option<String>,
    pub saved_count: usize,
    pub detail: DetailView,
}

impl AppViewModel {
    pub fn facet_menu(&self, category: FacetCategory) -> Option<&FacetMenuView> {
        self.facets.iter().find(|menu| menu.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_time: String,
    pub tags: Vec<String>,
    pub logo_url: Option<String>,
    pub saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetMenuView {
    pub category: FacetCategory,
    pub search: String,
    pub options: Vec<FacetOptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptionView {
    pub label: String,
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailView {
    pub row: JobRowView,
    pub description: String,
    pub employment_type: String,
    pub experience_level: String,
    pub work_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Closed,
    Loading(JobId),
    Ready(Box<JobDetailView>),
    Failed { job_id: JobId, message: String },
}
