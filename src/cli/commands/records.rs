use crate::cache::SheetCache;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records::RecordsService;
use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use crate::store::csv::CsvStore;
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { sector, day, turn } = cmd {
        let store = CsvStore::open(&cfg.store_dir)?;
        let cache = SheetCache::new(Duration::from_secs(cfg.cache_ttl_secs));
        let service = RecordsService::new(&store, &cache, cfg);

        let records = if let Some(sector) = sector {
            service.list_by_sector(sector)?
        } else if let Some(day) = day {
            service.list_by_day(day)?
        } else if let Some(turn) = turn {
            service.list_entry_by_turn(turn)?
        } else {
            service.get_all()?
        };

        print_records(&records);
    }
    Ok(())
}

fn print_records(records: &[TimeRecord]) {
    let mut table = Table::new(vec!["ID", "Name", "Sector", "Type", "Day", "Entry", "Exit"]);

    for record in records {
        table.add_row(vec![
            record.collaborator_id.clone(),
            record.name.clone(),
            record.sector.clone(),
            record
                .kind
                .map(|k| k.as_label().to_string())
                .unwrap_or_default(),
            record.day_str(),
            colorize_optional(&record.entry_str()),
            colorize_optional(&record.exit_str()),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} record(s)", records.len());
}
