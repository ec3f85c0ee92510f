use clap::ArgMatches;
use reqwest::Url;

use crate::args::{DEFAULT_USER_AGENT, TesterArgs};
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::ClientSettings;
use crate::runner::RunSettings;

use super::types::RunPlan;

pub(crate) fn build_plan(mut args: TesterArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }

    let base_url = parse_host(&args.host)?;
    let run = RunSettings::from_args(&args)?;

    Ok(RunPlan {
        client: ClientSettings {
            base_url,
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        },
        run,
        verbose: args.verbose,
        no_color: args.no_color,
    })
}

/// Accepts an absolute `http`/`https` URL with a host.
pub(crate) fn parse_host(host: &str) -> AppResult<Url> {
    let url = Url::parse(host.trim()).map_err(|err| {
        AppError::validation(ValidationError::InvalidBaseUrl {
            url: host.to_owned(),
            source: err,
        })
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            }));
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::validation(ValidationError::BaseUrlMissingHost {
            url: host.to_owned(),
        }));
    }
    Ok(url)
}
