use crate::cache::SheetCache;
use crate::cli::commands::resolve_now;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::records::RecordsService;
use crate::errors::AppResult;
use crate::store::csv::CsvStore;
use crate::ui::messages::success;
use ansi_term::Colour;
use std::time::Duration;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { ids, range } = &cli.command {
        let store = CsvStore::open(&cfg.store_dir)?;
        let cache = SheetCache::new(Duration::from_secs(cfg.cache_ttl_secs));
        let service = RecordsService::new(&store, &cache, cfg);

        let now = resolve_now(cli, cfg)?;
        let outcome = service.send(range.as_deref().unwrap_or(""), ids, now)?;

        success(format!(
            "Reconciled {} scan(s): {} exit(s) recorded, {} entry(ies) opened",
            ids.len(),
            Colour::Red.paint(outcome.closed.to_string()),
            Colour::Green.paint(outcome.opened.to_string())
        ));
    }
    Ok(())
}
