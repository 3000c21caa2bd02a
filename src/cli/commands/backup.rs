use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { dest, force } = cmd {
        BackupLogic::backup(cfg, dest, *force)?;
        success(format!("Store archived to {dest}"));
    }
    Ok(())
}
