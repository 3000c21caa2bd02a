use crate::cache::SheetCache;
use crate::cli::commands::resolve_now;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::records::RecordsService;
use crate::errors::AppResult;
use crate::models::turn::Turn;
use crate::store::csv::CsvStore;
use crate::ui::messages::success;
use crate::utils::table::Table;
use std::time::Duration;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Meals {
        month,
        turn,
        sector,
        collaborator,
        collaborators,
        types,
        top,
    } = &cli.command
    {
        let store = CsvStore::open(&cfg.store_dir)?;
        let cache = SheetCache::new(Duration::from_secs(cfg.cache_ttl_secs));
        let service = RecordsService::new(&store, &cache, cfg);

        let now = resolve_now(cli, cfg)?;
        let turn = turn.as_deref().map(Turn::parse).transpose()?;

        if let Some(sector) = sector {
            let count = service.meal_count_by_sector(sector, *month, turn, now)?;
            success(format!("Sector {sector} ate {count} time(s) in month {month}"));
        } else if let Some(id) = collaborator {
            let count = service.meal_count_by_collaborator(id, *month, turn, now)?;
            success(format!("Collaborator {id} ate {count} time(s) in month {month}"));
        } else if *collaborators {
            let counts = service.meal_count_all_collaborators(*month, turn, now)?;
            let mut table = Table::new(vec!["Collaborator", "Sector", "Total"]);
            for row in &counts {
                table.add_row(vec![
                    row.collaborator.clone(),
                    row.sector.clone(),
                    row.total.to_string(),
                ]);
            }
            print!("{}", table.render());
        } else if *types {
            let counts = service.meal_count_by_type(*month, turn, now)?;
            let mut table = Table::new(vec!["Type", "Total"]);
            for row in &counts {
                table.add_row(vec![row.kind.clone(), row.total.to_string()]);
            }
            print!("{}", table.render());
        } else {
            let counts = if *top {
                service.top_meal_sectors(*month, turn, now)?
            } else {
                service.meal_count_all_sectors(*month, turn, now)?
            };
            let mut table = Table::new(vec!["Sector", "Total"]);
            for row in &counts {
                table.add_row(vec![row.sector.clone(), row.total.to_string()]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
