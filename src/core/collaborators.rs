//! Collaborator registry: roster reads and administrative registration.

use crate::cache::SheetCache;
use crate::config::Config;
use crate::errors::{AppError, AppResult, FieldError, FieldErrors};
use crate::models::collaborator::Collaborator;
use crate::sheet::mapper::{map_row_to_collaborator, map_sheet};
use crate::sheet::validate::{
    parse_collaborator_id, parse_type_field, validate_sheet_data, validate_text_field,
};
use crate::store::SheetStore;
use log::debug;

pub struct CollaboratorService<'a, S: SheetStore> {
    store: &'a S,
    cache: &'a SheetCache<Collaborator>,
    cfg: &'a Config,
}

impl<'a, S: SheetStore> CollaboratorService<'a, S> {
    pub fn new(store: &'a S, cache: &'a SheetCache<Collaborator>, cfg: &'a Config) -> Self {
        Self { store, cache, cfg }
    }

    fn range(&self) -> String {
        format!("{}!A:D", self.cfg.collaborators_sheet)
    }

    fn load(&self) -> AppResult<Vec<Collaborator>> {
        let range = self.range();

        if let Some(cached) = self.cache.get(&range) {
            debug!("collaborators cache hit for {range}");
            return Ok(cached);
        }

        let rows = self.store.get(&range)?;
        let candidates = map_sheet(&rows);

        let check = validate_sheet_data(&candidates);
        if !check.valid {
            return Err(AppError::NotFound(
                "No collaborator found in the sheet".to_string(),
            ));
        }

        let collaborators: Vec<Collaborator> =
            candidates.iter().map(map_row_to_collaborator).collect();

        self.cache.set(&range, collaborators.clone());
        Ok(collaborators)
    }

    pub fn get_all(&self) -> AppResult<Vec<Collaborator>> {
        self.load()
    }

    pub fn get_by_id(&self, collaborator_id: &str) -> AppResult<Collaborator> {
        let id = parse_collaborator_id(collaborator_id).map_err(AppError::InvalidField)?;
        self.load()?
            .into_iter()
            .find(|c| c.collaborator_id == id)
            .ok_or_else(|| AppError::NotFound("No collaborator found with this id".to_string()))
    }

    pub fn list_by_sector(&self, sector: &str) -> AppResult<Vec<Collaborator>> {
        let wanted = validate_text_field("sector", sector)
            .map_err(AppError::InvalidField)?
            .to_lowercase();
        let filtered: Vec<Collaborator> = self
            .load()?
            .into_iter()
            .filter(|c| c.sector.trim().to_lowercase() == wanted)
            .collect();
        if filtered.is_empty() {
            return Err(AppError::NotFound(
                "No collaborator found for this sector".to_string(),
            ));
        }
        Ok(filtered)
    }

    /// Register a collaborator: validate every field, append one row, and
    /// force the next read to refetch. Failures report all offending fields
    /// at once.
    pub fn create(&self, id: &str, name: &str, sector: &str, kind: &str) -> AppResult<()> {
        let mut errors: Vec<FieldError> = Vec::new();

        let id = parse_collaborator_id(id).unwrap_or_else(|e| {
            errors.push(e);
            String::new()
        });
        let name = validate_text_field("name", name).unwrap_or_else(|e| {
            errors.push(e);
            String::new()
        });
        let sector = validate_text_field("sector", sector).unwrap_or_else(|e| {
            errors.push(e);
            String::new()
        });
        let kind = match parse_type_field(kind) {
            Ok(kind) => Some(kind),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        if !errors.is_empty() {
            return Err(AppError::Validation(FieldErrors(errors)));
        }
        let kind = kind.expect("no field errors were collected");

        let row = vec![id, name, sector, kind.as_label().to_string()];
        self.store.append(&self.range(), &[row])?;

        self.cache.clear();
        debug!("registered collaborator in {}", self.cfg.collaborators_sheet);
        Ok(())
    }
}
