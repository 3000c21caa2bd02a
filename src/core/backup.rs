//! Store backup: archive the local sheet directory to a .tar.gz file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::Path;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, force: bool) -> AppResult<()> {
        let src = Path::new(&cfg.store_dir);
        let dest = Path::new(dest_file);

        if !src.is_dir() {
            return Err(AppError::Backup(format!(
                "store directory not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if dest.exists() && !force {
            return Err(AppError::Backup(format!(
                "'{}' already exists (pass --force to overwrite)",
                dest.display()
            )));
        }

        let tar_gz = fs::File::create(dest)?;
        let encoder = GzEncoder::new(tar_gz, Compression::default());
        let mut archive = tar::Builder::new(encoder);
        archive.append_dir_all("store", src)?;
        archive.into_inner()?.finish()?;

        Ok(())
    }
}
