use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRequested => {
            if state.is_closed() {
                return (state, Vec::new());
            }
            match state.begin_load() {
                Some(generation) => vec![Effect::LoadCatalog {
                    generation,
                    session: state.session().cloned(),
                }],
                None => Vec::new(),
            }
        }
        Msg::CatalogLoaded { generation, jobs } => {
            state.apply_catalog(generation, jobs);
            Vec::new()
        }
        Msg::CatalogLoadFailed {
            generation,
            message,
        } => {
            state.apply_load_failure(generation, message);
            Vec::new()
        }
        Msg::KeywordChanged(query) => {
            state.set_keyword_query(query);
            Vec::new()
        }
        Msg::LocationQueryChanged(query) => {
            state.set_location_query(query);
            Vec::new()
        }
        Msg::FacetToggled { category, value } => {
            state.toggle_facet(category, &value);
            Vec::new()
        }
        Msg::FacetSearchChanged { category, text } => {
            state.set_facet_search(category, text);
            Vec::new()
        }
        Msg::FiltersReset => {
            state.reset_filters();
            Vec::new()
        }
        Msg::JobSelected(job_id) => {
            if state.is_closed() {
                return (state, Vec::new());
            }
            state.open_detail(job_id.clone());
            vec![Effect::LoadJobDetail {
                job_id,
                session: state.session().cloned(),
            }]
        }
        Msg::JobDetailLoaded { job_id, job } => {
            state.apply_detail(job_id, job);
            Vec::new()
        }
        Msg::JobDetailFailed { job_id, message } => {
            state.apply_detail_failure(job_id, message);
            Vec::new()
        }
        Msg::DetailClosed => {
            state.close_detail();
            Vec::new()
        }
        Msg::SaveToggled(job_id) => {
            if state.session().is_none() {
                vec![Effect::RedirectToLogin]
            } else {
                state.toggle_saved(job_id);
                Vec::new()
            }
        }
        Msg::SessionStarted(session) => {
            state.start_session(session);
            Vec::new()
        }
        Msg::SessionEnded => {
            state.end_session();
            Vec::new()
        }
        Msg::ViewClosed => {
            state.close();
            Vec::new()
        }
    };

    (state, effects)
}
