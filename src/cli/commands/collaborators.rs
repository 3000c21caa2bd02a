use crate::cache::SheetCache;
use crate::cli::parser::{Commands, CollaboratorsAction};
use crate::config::Config;
use crate::core::collaborators::CollaboratorService;
use crate::errors::AppResult;
use crate::models::collaborator::Collaborator;
use crate::store::csv::CsvStore;
use crate::ui::messages::success;
use crate::utils::table::Table;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Collaborators { action } = cmd {
        let store = CsvStore::open(&cfg.store_dir)?;
        let cache = SheetCache::new(Duration::from_secs(cfg.cache_ttl_secs));
        let service = CollaboratorService::new(&store, &cache, cfg);

        match action {
            CollaboratorsAction::List { sector } => {
                let roster = match sector {
                    Some(sector) => service.list_by_sector(sector)?,
                    None => service.get_all()?,
                };
                print_roster(&roster);
            }
            CollaboratorsAction::Get { id } => {
                print_roster(&[service.get_by_id(id)?]);
            }
            CollaboratorsAction::Add { id, name, sector, kind } => {
                service.create(id, name, sector, kind)?;
                success(format!("Collaborator {name} registered"));
            }
        }
    }
    Ok(())
}

fn print_roster(roster: &[Collaborator]) {
    let mut table = Table::new(vec!["ID", "Name", "Sector", "Type"]);
    for collaborator in roster {
        table.add_row(vec![
            collaborator.collaborator_id.clone(),
            collaborator.name.clone(),
            collaborator.sector.clone(),
            collaborator
                .kind
                .map(|k| k.as_label().to_string())
                .unwrap_or_default(),
        ]);
    }
    print!("{}", table.render());
}
