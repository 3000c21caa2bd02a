pub mod backup;
pub mod collaborators;
pub mod config;
pub mod export;
pub mod init;
pub mod meals;
pub mod mealtime;
pub mod records;
pub mod scan;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::date::{now_at_offset, parse_pinned_now};
use chrono::{DateTime, FixedOffset};

/// Clock for this invocation: the hidden --at flag pins it for
/// deterministic runs, otherwise the site offset's wall clock.
pub(crate) fn resolve_now(cli: &Cli, cfg: &Config) -> AppResult<DateTime<FixedOffset>> {
    match &cli.at {
        Some(pinned) => parse_pinned_now(pinned, cfg.utc_offset_hours),
        None => Ok(now_at_offset(cfg.utc_offset_hours)),
    }
}
