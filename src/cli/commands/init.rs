use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::collaborator::COLLABORATOR_HEADERS;
use crate::models::record::RECORD_HEADERS;
use crate::store::csv::CsvStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the configuration file and create the
/// store directory with both sheet files (header rows included).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.clone(), cli.test)?;

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Store dir   : {}", &cfg.store_dir));

    let store = CsvStore::open(&cfg.store_dir)?;
    store.create_sheet(&cfg.records_sheet, &RECORD_HEADERS)?;
    store.create_sheet(&cfg.collaborators_sheet, &COLLABORATOR_HEADERS)?;

    success("refectory initialization completed");
    Ok(())
}
