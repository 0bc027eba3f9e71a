use std::fmt::Write;

use jobboard_core::{AppViewModel, DetailView, FacetMenuView, JobRowView, LoadStatus};

pub fn render_listing(view: &AppViewModel, with_facets: bool) -> String {
    let mut out = String::new();
    if let Some(name) = &view.user_name {
        let _ = writeln!(out, "Signed in as {name} ({} saved)", view.saved_count);
    }
    if let LoadStatus::Failed(message) = &view.load_status {
        let _ = writeln!(out, "Failed to load jobs: {message}");
    }
    let _ = writeln!(
        out,
        "Showing {} of {} jobs",
        view.jobs.len(),
        view.total_jobs
    );

    if with_facets {
        for menu in &view.facets {
            render_facet_menu(&mut out, menu);
        }
    }

    if view.jobs.is_empty() {
        let _ = writeln!(out, "\nNo jobs match the current filters.");
    }
    for row in &view.jobs {
        out.push('\n');
        render_row(&mut out, row);
    }
    out
}

fn render_facet_menu(out: &mut String, menu: &FacetMenuView) {
    let _ = write!(out, "\n[{}]", menu.category);
    if !menu.search.is_empty() {
        let _ = write!(out, " matching {:?}", menu.search);
    }
    out.push('\n');
    for option in &menu.options {
        let mark = if option.selected { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] {} ({})", option.label, option.count);
    }
}

fn render_row(out: &mut String, row: &JobRowView) {
    let saved = if row.saved { " *" } else { "" };
    let _ = writeln!(out, "#{} {}{}", row.job_id, row.title, saved);
    let _ = writeln!(out, "    {} - {} - {}", row.company, row.location, row.posted_time);
    if !row.tags.is_empty() {
        let _ = writeln!(out, "    {}", row.tags.join(" | "));
    }
}

pub fn render_detail(view: &AppViewModel) -> String {
    let mut out = String::new();
    match &view.detail {
        DetailView::Closed => {
            let _ = writeln!(out, "No job selected.");
        }
        DetailView::Loading(job_id) => {
            let _ = writeln!(out, "Still loading job {job_id}.");
        }
        DetailView::Failed { job_id, message } => {
            let _ = writeln!(out, "Failed to load job {job_id}: {message}");
        }
        DetailView::Ready(detail) => {
            render_row(&mut out, &detail.row);
            let _ = writeln!(out, "    Employment: {}", detail.employment_type);
            let _ = writeln!(out, "    Experience: {}", detail.experience_level);
            if let Some(model) = &detail.work_model {
                let _ = writeln!(out, "    Work model: {model}");
            }
            if let Some(logo) = &detail.row.logo_url {
                let _ = writeln!(out, "    Logo: {logo}");
            }
            let _ = writeln!(out, "\n{}", detail.description);
        }
    }
    out
}
