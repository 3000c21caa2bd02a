use crate::cache::SheetCache;
use crate::cli::commands::resolve_now;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::records::RecordsService;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::turn::Turn;
use crate::store::csv::CsvStore;
use std::path::Path;
use std::time::Duration;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { month, turn, format, out } = &cli.command {
        let store = CsvStore::open(&cfg.store_dir)?;
        let cache = SheetCache::new(Duration::from_secs(cfg.cache_ttl_secs));
        let service = RecordsService::new(&store, &cache, cfg);

        let now = resolve_now(cli, cfg)?;
        let turn = turn.as_deref().map(Turn::parse).transpose()?;

        let records = service.list_by_month(*month, turn, now)?;
        ExportLogic::export(&records, format, Path::new(out))?;
    }
    Ok(())
}
