use std::path::PathBuf;

use clap::Parser;
use jobboard_core::{FacetCategory, JobId, Msg, SessionContext};

use crate::config::PortalConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobboard", about = "Browse and filter job portal postings")]
pub struct Cli {
    /// RON file with portal settings.
    #[arg(long, env = "JOBBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Overrides the backend base URL from the config file.
    #[arg(long, env = "JOBBOARD_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Overrides the prefix for relative company logo paths.
    #[arg(long, env = "JOBBOARD_LOGO_BASE_URL")]
    pub logo_base_url: Option<String>,

    /// Keyword matched against job title and company.
    #[arg(long, default_value = "")]
    pub keyword: String,

    /// Text matched against the job location.
    #[arg(long = "where", default_value = "")]
    pub location_query: String,

    /// Experience level to select (repeatable; "any" clears the rest).
    #[arg(long)]
    pub experience: Vec<String>,

    /// Exact job title to select (repeatable).
    #[arg(long)]
    pub title: Vec<String>,

    /// Exact location to select (repeatable).
    #[arg(long)]
    pub location: Vec<String>,

    /// Exact employment type to select (repeatable).
    #[arg(long)]
    pub employment_type: Vec<String>,

    /// Print the facet menus with their counts.
    #[arg(long, default_value_t = false)]
    pub facets: bool,

    /// Narrow printed facet menus to labels containing this text.
    #[arg(long, default_value = "")]
    pub facet_search: String,

    /// Toggle the saved mark of a job (repeatable; requires a token).
    #[arg(long)]
    pub save: Vec<String>,

    /// Show the detail of one job instead of the listing.
    #[arg(long)]
    pub job: Option<String>,

    /// Session token of a signed-in user.
    #[arg(long, env = "JOBBOARD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "JOBBOARD_USER_ID")]
    pub user_id: Option<String>,

    #[arg(long, env = "JOBBOARD_USER_NAME")]
    pub user_name: Option<String>,

    /// Seconds to wait for the backend before giving up.
    #[arg(long, default_value_t = 60)]
    pub wait_secs: u64,

    /// Also write logs to this file.
    #[arg(long, env = "JOBBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at info level instead of warnings only.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn apply_overrides(&self, mut config: PortalConfig) -> PortalConfig {
        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(url) = &self.logo_base_url {
            config.logo_base_url = url.clone();
        }
        config
    }

    pub fn session(&self) -> Option<SessionContext> {
        SessionContext::from_parts(
            self.token.clone(),
            self.user_id.clone(),
            self.user_name.clone(),
        )
    }

    /// The filter interactions this invocation stands for, in the order a
    /// user would perform them on the listing page.
    pub fn filter_messages(&self) -> Vec<Msg> {
        let mut messages = Vec::new();
        if !self.keyword.is_empty() {
            messages.push(Msg::KeywordChanged(self.keyword.clone()));
        }
        if !self.location_query.is_empty() {
            messages.push(Msg::LocationQueryChanged(self.location_query.clone()));
        }
        let selections = [
            (FacetCategory::Experience, &self.experience),
            (FacetCategory::JobTitle, &self.title),
            (FacetCategory::Location, &self.location),
            (FacetCategory::EmploymentType, &self.employment_type),
        ];
        for (category, values) in selections {
            for value in values {
                messages.push(Msg::FacetToggled {
                    category,
                    value: value.clone(),
                });
            }
        }
        if !self.facet_search.is_empty() {
            for category in FacetCategory::ALL {
                messages.push(Msg::FacetSearchChanged {
                    category,
                    text: self.facet_search.clone(),
                });
            }
        }
        messages.extend(
            self.save
                .iter()
                .map(|id| Msg::SaveToggled(JobId::from(id.as_str()))),
        );
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_messages_in_page_order() {
        let cli = Cli::parse_from([
            "jobboard",
            "--keyword",
            "web",
            "--where",
            "del",
            "--experience",
            "2-4 years",
            "--employment-type",
            "Full Time",
            "--save",
            "12",
        ]);

        assert_eq!(
            cli.filter_messages(),
            vec![
                Msg::KeywordChanged("web".into()),
                Msg::LocationQueryChanged("del".into()),
                Msg::FacetToggled {
                    category: FacetCategory::Experience,
                    value: "2-4 years".into(),
                },
                Msg::FacetToggled {
                    category: FacetCategory::EmploymentType,
                    value: "Full Time".into(),
                },
                Msg::SaveToggled(JobId::from("12")),
            ]
        );
    }

    #[test]
    fn overrides_replace_config_urls() {
        let cli = Cli::parse_from(["jobboard", "--api-base-url", "http://localhost:9000/"]);
        let config = cli.apply_overrides(PortalConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:9000/");
        assert_eq!(config.logo_base_url, PortalConfig::default().logo_base_url);
    }

    #[test]
    fn session_needs_a_token() {
        let anonymous = Cli::parse_from(["jobboard", "--user-name", "Asha"]);
        assert!(anonymous.session().is_none());

        let signed_in = Cli::parse_from(["jobboard", "--token", "t", "--user-name", "Asha"]);
        assert_eq!(signed_in.session().unwrap().display_name(), "Asha");
    }
}
