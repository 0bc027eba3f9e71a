use std::collections::{BTreeMap, BTreeSet};

use portal_logging::portal_debug;

use crate::view_model::{
    AppViewModel, DetailView, FacetMenuView, FacetOptionView, JobDetailView, JobRowView,
};
use crate::{
    derive_facets, search_facet_options, FacetCategory, Facets, FilterState, JobId, JobRecord,
    SessionContext,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading(JobId),
    Loaded(Box<JobRecord>),
    Failed { job_id: JobId, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: Vec<JobRecord>,
    facets: Facets,
    filters: FilterState,
    facet_search: BTreeMap<FacetCategory, String>,
    /// Catalog indices of the visible subset, in catalog order.
    visible: Vec<usize>,
    saved: BTreeSet<JobId>,
    session: Option<SessionContext>,
    load_status: LoadStatus,
    load_generation: u64,
    in_flight: Option<u64>,
    detail: DetailState,
    closed: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &[JobRecord] {
        &self.catalog
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn session(&self) -> Option<&SessionContext> {
        self.session.as_ref()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn is_saved(&self, job_id: &JobId) -> bool {
        self.saved.contains(job_id)
    }

    pub fn visible_jobs(&self) -> impl Iterator<Item = &JobRecord> + '_ {
        self.visible.iter().map(|&index| &self.catalog[index])
    }

    pub fn view(&self) -> AppViewModel {
        let jobs = self.visible_jobs().map(|job| self.row_view(job)).collect();
        let facets = FacetCategory::ALL
            .iter()
            .map(|&category| self.facet_menu(category))
            .collect();
        let detail = match &self.detail {
            DetailState::Closed => DetailView::Closed,
            DetailState::Loading(job_id) => DetailView::Loading(job_id.clone()),
            DetailState::Loaded(job) => DetailView::Ready(Box::new(JobDetailView {
                row: self.row_view(job),
                description: job.description.clone(),
                employment_type: job.employment_type.clone(),
                experience_level: job.experience_level.clone(),
                work_model: job.work_model.clone(),
            })),
            DetailState::Failed { job_id, message } => DetailView::Failed {
                job_id: job_id.clone(),
                message: message.clone(),
            },
        };

        AppViewModel {
            load_status: self.load_status.clone(),
            total_jobs: self.catalog.len(),
            jobs,
            facets,
            keyword_query: self.filters.keyword_query.clone(),
            location_query: self.filters.location_query.clone(),
            is_authenticated: self.session.is_some(),
            user_name: self.session.as_ref().map(|s| s.display_name().to_string()),
            saved_count: self.saved.len(),
            detail,
        }
    }

    fn row_view(&self, job: &JobRecord) -> JobRowView {
        JobRowView {
            job_id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            posted_time: job.posted_time.clone(),
            tags: job.tags.clone(),
            logo_url: job.logo_url.clone(),
            saved: self.saved.contains(&job.id),
        }
    }

    fn facet_menu(&self, category: FacetCategory) -> FacetMenuView {
        let search = self.facet_search.get(&category).cloned().unwrap_or_default();
        let options = search_facet_options(self.facets.options(category), &search)
            .into_iter()
            .map(|option| FacetOptionView {
                selected: self.filters.is_selected(category, &option.value),
                label: option.label,
                value: option.value,
                count: option.count,
            })
            .collect();
        FacetMenuView {
            category,
            search,
            options,
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
        self.in_flight = None;
    }

    /// Starts a catalog load unless one is already in flight. Returns the
    /// generation the loader must echo back.
    pub(crate) fn begin_load(&mut self) -> Option<u64> {
        if let Some(generation) = self.in_flight {
            portal_debug!("catalog load coalesced into generation {}", generation);
            return None;
        }
        self.load_generation += 1;
        self.in_flight = Some(self.load_generation);
        self.load_status = LoadStatus::Loading;
        Some(self.load_generation)
    }

    /// Settles the in-flight load if `generation` is the one outstanding.
    fn settle_load(&mut self, generation: u64) -> bool {
        if self.closed || self.in_flight != Some(generation) {
            portal_debug!(
                "discarding catalog result generation={} in_flight={:?} closed={}",
                generation,
                self.in_flight,
                self.closed
            );
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Replaces the catalog wholesale and rebuilds every derived value.
    pub(crate) fn apply_catalog(&mut self, generation: u64, jobs: Vec<JobRecord>) {
        if !self.settle_load(generation) {
            return;
        }
        self.catalog = jobs;
        self.facets = derive_facets(&self.catalog);
        self.load_status = LoadStatus::Loaded;
        self.refresh_visible();
    }

    pub(crate) fn apply_load_failure(&mut self, generation: u64, message: String) {
        if !self.settle_load(generation) {
            return;
        }
        self.load_status = LoadStatus::Failed(message);
    }

    pub(crate) fn set_keyword_query(&mut self, query: String) {
        if self.filters.keyword_query != query {
            self.filters.keyword_query = query;
            self.refresh_visible();
        }
    }

    pub(crate) fn set_location_query(&mut self, query: String) {
        if self.filters.location_query != query {
            self.filters.location_query = query;
            self.refresh_visible();
        }
    }

    pub(crate) fn toggle_facet(&mut self, category: FacetCategory, value: &str) {
        self.filters.toggle(category, value);
        self.refresh_visible();
    }

    pub(crate) fn set_facet_search(&mut self, category: FacetCategory, text: String) {
        if text.is_empty() {
            self.facet_search.remove(&category);
        } else {
            self.facet_search.insert(category, text);
        }
    }

    pub(crate) fn reset_filters(&mut self) {
        self.filters = FilterState::new();
        self.facet_search.clear();
        self.refresh_visible();
    }

    pub(crate) fn open_detail(&mut self, job_id: JobId) {
        self.detail = DetailState::Loading(job_id);
    }

    fn awaiting_detail(&self, job_id: &JobId) -> bool {
        matches!(&self.detail, DetailState::Loading(pending) if pending == job_id)
    }

    pub(crate) fn apply_detail(&mut self, job_id: JobId, job: Box<JobRecord>) {
        if self.closed || !self.awaiting_detail(&job_id) {
            portal_debug!("discarding detail for job {}", job_id);
            return;
        }
        self.detail = DetailState::Loaded(job);
    }

    pub(crate) fn apply_detail_failure(&mut self, job_id: JobId, message: String) {
        if self.closed || !self.awaiting_detail(&job_id) {
            return;
        }
        self.detail = DetailState::Failed { job_id, message };
    }

    pub(crate) fn close_detail(&mut self) {
        self.detail = DetailState::Closed;
    }

    pub(crate) fn toggle_saved(&mut self, job_id: JobId) {
        if !self.saved.remove(&job_id) {
            self.saved.insert(job_id);
        }
    }

    pub(crate) fn start_session(&mut self, session: SessionContext) {
        self.session = Some(session);
    }

    pub(crate) fn end_session(&mut self) {
        self.session = None;
        self.saved.clear();
    }

    fn refresh_visible(&mut self) {
        self.visible = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, job)| self.filters.matches(job))
            .map(|(index, _)| index)
            .collect();
    }
}
