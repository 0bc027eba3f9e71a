mod app;
mod cli;
mod config;
mod effects;
mod render;

use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use jobboard_core::{JobId, LoadStatus, Msg};
use jobboard_engine::EngineHandle;
use log::LevelFilter;
use portal_logging::LogDestination;

use crate::app::App;
use crate::cli::Cli;
use crate::config::{load_config, PortalConfig};
use crate::effects::EffectRunner;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PortalConfig::default(),
    };
    let config = cli.apply_overrides(config);
    let engine = EngineHandle::new(config.catalog_settings())
        .context("invalid job portal settings")?;

    let mut app = App::new(EffectRunner::new(engine));
    let result = run(&mut app, &cli);
    app.close();
    result
}

fn run(app: &mut App, cli: &Cli) -> anyhow::Result<()> {
    let wait = Duration::from_secs(cli.wait_secs);
    if let Some(session) = cli.session() {
        app.dispatch(Msg::SessionStarted(session));
    }

    app.dispatch(Msg::LoadRequested);
    app.settle(wait)?;
    if let LoadStatus::Failed(message) = &app.view().load_status {
        bail!("failed to load jobs: {message}");
    }

    for msg in cli.filter_messages() {
        app.dispatch(msg);
    }
    if app.login_required() {
        eprintln!("Log in (--token) to save jobs.");
    }

    match &cli.job {
        Some(job_id) => {
            app.dispatch(Msg::JobSelected(JobId::from(job_id.as_str())));
            app.settle(wait)?;
            print!("{}", render::render_detail(&app.view()));
        }
        None => print!("{}", render::render_listing(&app.view(), cli.facets)),
    }
    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let destination = match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    portal_logging::initialize(destination, level);
}
