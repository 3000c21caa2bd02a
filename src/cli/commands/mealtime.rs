use crate::cache::SheetCache;
use crate::cli::commands::resolve_now;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::records::RecordsService;
use crate::errors::AppResult;
use crate::models::turn::Turn;
use crate::store::csv::CsvStore;
use crate::utils::table::Table;
use std::time::Duration;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Mealtime { month, turn } = &cli.command {
        let store = CsvStore::open(&cfg.store_dir)?;
        let cache = SheetCache::new(Duration::from_secs(cfg.cache_ttl_secs));
        let service = RecordsService::new(&store, &cache, cfg);

        let now = resolve_now(cli, cfg)?;
        let turn = turn.as_deref().map(Turn::parse).transpose()?;

        let averages = service.average_meal_time_by_sector(*month, turn, now)?;

        let mut table = Table::new(vec!["Sector", "Average", "Records"]);
        for row in &averages {
            table.add_row(vec![
                row.sector.clone(),
                row.average.clone(),
                row.total_records.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
