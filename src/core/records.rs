//! Record queries and aggregations over the records sheet. Reads go through
//! the injected cache; every query validates its inputs first and treats an
//! empty post-filter result as a not-found condition, never as an empty
//! success.

use crate::cache::SheetCache;
use crate::config::Config;
use crate::core::aggregate;
use crate::core::filters::{
    TimeField, filter_by_collaborator_id, filter_by_day, filter_by_month_and_year,
    filter_by_sector, filter_by_turn,
};
use crate::core::reconcile::{ReconcileOutcome, send_records};
use crate::errors::{AppError, AppResult};
use crate::models::record::TimeRecord;
use crate::models::report::{
    AverageMealTimeBySector, MealCountByCollaborator, MealCountBySector, MealCountByType,
};
use crate::models::turn::Turn;
use crate::sheet::mapper::{map_row_to_record, map_sheet};
use crate::sheet::validate::{
    parse_collaborator_id, parse_day_field, validate_month, validate_sheet_data,
    validate_text_field,
};
use crate::store::SheetStore;
use chrono::{DateTime, Datelike, FixedOffset};
use log::debug;

pub struct RecordsService<'a, S: SheetStore> {
    store: &'a S,
    cache: &'a SheetCache<TimeRecord>,
    cfg: &'a Config,
}

impl<'a, S: SheetStore> RecordsService<'a, S> {
    pub fn new(store: &'a S, cache: &'a SheetCache<TimeRecord>, cfg: &'a Config) -> Self {
        Self { store, cache, cfg }
    }

    fn range(&self) -> String {
        format!("{}!A:G", self.cfg.records_sheet)
    }

    /// Load and cache the mapped record set for the records sheet.
    fn load(&self) -> AppResult<Vec<TimeRecord>> {
        let range = self.range();

        if let Some(cached) = self.cache.get(&range) {
            debug!("records cache hit for {range}");
            return Ok(cached);
        }

        let rows = self.store.get(&range)?;
        let candidates = map_sheet(&rows);

        let check = validate_sheet_data(&candidates);
        if !check.valid {
            return Err(AppError::NotFound(
                check.message.unwrap_or_else(|| "No record found".to_string()),
            ));
        }

        let records: Vec<TimeRecord> = candidates
            .iter()
            .enumerate()
            .map(|(i, row)| map_row_to_record(row, (i + 1) as u32))
            .collect();

        self.cache.set(&range, records.clone());
        Ok(records)
    }

    pub fn get_all(&self) -> AppResult<Vec<TimeRecord>> {
        self.load()
    }

    pub fn list_by_sector(&self, sector: &str) -> AppResult<Vec<TimeRecord>> {
        let sector = validate_text_field("sector", sector).map_err(AppError::InvalidField)?;
        let filtered = filter_by_sector(self.load()?, &sector);
        if filtered.is_empty() {
            return Err(AppError::NotFound("No record found for this sector".to_string()));
        }
        Ok(filtered)
    }

    pub fn list_by_day(&self, day: &str) -> AppResult<Vec<TimeRecord>> {
        let day = parse_day_field("day", day).map_err(AppError::InvalidField)?;
        let filtered = filter_by_day(self.load()?, day);
        if filtered.is_empty() {
            return Err(AppError::NotFound("No record found for this day".to_string()));
        }
        Ok(filtered)
    }

    pub fn list_entry_by_turn(&self, turn: &str) -> AppResult<Vec<TimeRecord>> {
        let turn = Turn::parse(turn)?;
        let filtered = filter_by_turn(self.load()?, TimeField::Entry, turn);
        if filtered.is_empty() {
            return Err(AppError::NotFound(
                "No record found with an entry in this turn".to_string(),
            ));
        }
        Ok(filtered)
    }

    /// Shared pre-step of every month-scoped aggregation: bounds-check the
    /// month, filter by month of the current year at the site offset, then
    /// optionally by entry turn.
    fn monthly(
        &self,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Vec<TimeRecord>> {
        let month = validate_month(month)?;
        let year = now.year();

        let records = filter_by_month_and_year(self.load()?, month, year);
        Ok(match turn {
            Some(turn) => filter_by_turn(records, TimeField::Entry, turn),
            None => records,
        })
    }

    fn require_some(records: Vec<TimeRecord>, reason: &str) -> AppResult<Vec<TimeRecord>> {
        if records.is_empty() {
            Err(AppError::NotFound(reason.to_string()))
        } else {
            Ok(records)
        }
    }

    /// How many times one collaborator ate in the month (optionally within
    /// one turn).
    pub fn meal_count_by_collaborator(
        &self,
        collaborator_id: &str,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<usize> {
        let id = parse_collaborator_id(collaborator_id).map_err(AppError::InvalidField)?;
        let records = filter_by_collaborator_id(self.monthly(month, turn, now)?, &id);
        let records = Self::require_some(
            records,
            "No record found for this collaborator in this month and turn",
        )?;
        Ok(records.len())
    }

    /// How many times one sector ate in the month.
    pub fn meal_count_by_sector(
        &self,
        sector: &str,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<usize> {
        let sector = validate_text_field("sector", sector).map_err(AppError::InvalidField)?;
        let records = filter_by_sector(self.monthly(month, turn, now)?, &sector);
        let records = Self::require_some(
            records,
            "No record found for this sector in this month and turn",
        )?;
        Ok(records.len())
    }

    pub fn meal_count_all_sectors(
        &self,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Vec<MealCountBySector>> {
        let records = Self::require_some(
            self.monthly(month, turn, now)?,
            "No record found in this month and turn",
        )?;
        Ok(aggregate::meal_count_by_sector(&records))
    }

    /// The five sectors that ate the most in the month.
    pub fn top_meal_sectors(
        &self,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Vec<MealCountBySector>> {
        let records = Self::require_some(
            self.monthly(month, turn, now)?,
            "No record found in this month and turn",
        )?;
        Ok(aggregate::top_meal_sectors(&records, 5))
    }

    pub fn meal_count_all_collaborators(
        &self,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Vec<MealCountByCollaborator>> {
        let records = Self::require_some(
            self.monthly(month, turn, now)?,
            "No record found in this month and turn",
        )?;
        Ok(aggregate::meal_count_by_collaborator(&records))
    }

    pub fn meal_count_by_type(
        &self,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Vec<MealCountByType>> {
        let records = Self::require_some(
            self.monthly(month, turn, now)?,
            "No record found in this month and turn",
        )?;
        Ok(aggregate::meal_count_by_type(&records))
    }

    pub fn average_meal_time_by_sector(
        &self,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Vec<AverageMealTimeBySector>> {
        let records = Self::require_some(
            self.monthly(month, turn, now)?,
            "No record found in this month and turn",
        )?;
        aggregate::average_meal_time_by_sector(&records)
    }

    /// All records of the month (optionally narrowed to one entry turn);
    /// feeds the export surface.
    pub fn list_by_month(
        &self,
        month: u32,
        turn: Option<Turn>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Vec<TimeRecord>> {
        Self::require_some(
            self.monthly(month, turn, now)?,
            "No record found in this month and turn",
        )
    }

    /// Reconcile a batch of scans. Always reads the sheet fresh; see
    /// [`send_records`].
    pub fn send(
        &self,
        range: &str,
        scans: &[String],
        now: DateTime<FixedOffset>,
    ) -> AppResult<ReconcileOutcome> {
        send_records(self.store, self.cache, self.cfg, range, scans, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::utils::date::parse_pinned_now;
    use std::time::Duration;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn seeded_store(cfg: &Config) -> MemoryStore {
        MemoryStore::with_sheet(
            &cfg.records_sheet,
            vec![
                row(&["Collaborator_ID", "Name", "Sector", "Type", "Day", "Entry", "Exit"]),
                row(&["7", "Ana", "Kitchen", "staff", "05/01/24", "08:00", "08:30"]),
                row(&["7", "Ana", "Kitchen", "staff", "06/01/24", "12:05", "12:50"]),
                row(&["8", "Bia", "Kitchen", "resident", "06/01/24", "12:10", ""]),
                row(&["9", "Caio", "IT", "visitor", "05/02/24", "08:00", "08:40"]),
            ],
        )
    }

    #[test]
    fn load_is_cached_until_cleared() {
        let cfg = Config::default();
        let store = seeded_store(&cfg);
        let cache = SheetCache::new(Duration::from_secs(60));
        let service = RecordsService::new(&store, &cache, &cfg);

        assert_eq!(service.get_all().unwrap().len(), 4);
        // wipe the backing sheet; the cached set still answers
        store.insert_sheet(&cfg.records_sheet, Vec::new());
        assert_eq!(service.get_all().unwrap().len(), 4);

        cache.clear();
        assert!(service.get_all().unwrap_err().is_not_found());
    }

    #[test]
    fn empty_sheet_is_not_found() {
        let cfg = Config::default();
        let store = MemoryStore::new();
        let cache = SheetCache::new(Duration::from_secs(60));
        let service = RecordsService::new(&store, &cache, &cfg);
        assert!(service.get_all().unwrap_err().is_not_found());
    }

    #[test]
    fn sector_listing_validates_then_filters() {
        let cfg = Config::default();
        let store = seeded_store(&cfg);
        let cache = SheetCache::new(Duration::from_secs(60));
        let service = RecordsService::new(&store, &cache, &cfg);

        assert_eq!(service.list_by_sector("Kitchen").unwrap().len(), 3);
        assert!(service.list_by_sector("Garden").unwrap_err().is_not_found());
        assert_eq!(service.list_by_sector("K1!").unwrap_err().status(), 400);
    }

    #[test]
    fn month_queries_validate_the_month_first() {
        let cfg = Config::default();
        let store = seeded_store(&cfg);
        let cache = SheetCache::new(Duration::from_secs(60));
        let service = RecordsService::new(&store, &cache, &cfg);
        let now = parse_pinned_now("20/01/24 10:00", cfg.utc_offset_hours).unwrap();

        let err = service.meal_count_all_sectors(13, None, now).unwrap_err();
        assert!(matches!(err, AppError::InvalidMonth(_)));
    }

    #[test]
    fn sector_counts_cover_the_month_of_the_pinned_year() {
        let cfg = Config::default();
        let store = seeded_store(&cfg);
        let cache = SheetCache::new(Duration::from_secs(60));
        let service = RecordsService::new(&store, &cache, &cfg);
        let now = parse_pinned_now("20/01/24 10:00", cfg.utc_offset_hours).unwrap();

        let counts = service.meal_count_all_sectors(1, None, now).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].sector, "Kitchen");
        assert_eq!(counts[0].total, 3);

        // February only has the IT record
        let feb = service.meal_count_all_sectors(2, None, now).unwrap();
        assert_eq!(feb[0].sector, "IT");
    }

    #[test]
    fn turn_filter_narrows_month_counts() {
        let cfg = Config::default();
        let store = seeded_store(&cfg);
        let cache = SheetCache::new(Duration::from_secs(60));
        let service = RecordsService::new(&store, &cache, &cfg);
        let now = parse_pinned_now("20/01/24 10:00", cfg.utc_offset_hours).unwrap();

        let count = service
            .meal_count_by_sector("Kitchen", 1, Some(Turn::Afternoon), now)
            .unwrap();
        assert_eq!(count, 2);

        let err = service
            .meal_count_by_sector("Kitchen", 1, Some(Turn::Night), now)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn collaborator_count_requires_a_valid_id() {
        let cfg = Config::default();
        let store = seeded_store(&cfg);
        let cache = SheetCache::new(Duration::from_secs(60));
        let service = RecordsService::new(&store, &cache, &cfg);
        let now = parse_pinned_now("20/01/24 10:00", cfg.utc_offset_hours).unwrap();

        assert_eq!(service.meal_count_by_collaborator("7", 1, None, now).unwrap(), 2);
        assert_eq!(
            service
                .meal_count_by_collaborator("ana", 1, None, now)
                .unwrap_err()
                .status(),
            400
        );
    }

    #[test]
    fn average_meal_time_ignores_open_rows() {
        let cfg = Config::default();
        let store = seeded_store(&cfg);
        let cache = SheetCache::new(Duration::from_secs(60));
        let service = RecordsService::new(&store, &cache, &cfg);
        let now = parse_pinned_now("20/01/24 10:00", cfg.utc_offset_hours).unwrap();

        let averages = service.average_meal_time_by_sector(1, None, now).unwrap();
        // Kitchen: 30 and 45 minute meals -> 38 minutes; Bia's open row dropped
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].sector, "Kitchen");
        assert_eq!(averages[0].average, "00:38");
        assert_eq!(averages[0].total_records, 2);
    }
}
