//! Grouping and averaging over filtered record sets.

use crate::errors::{AppError, AppResult};
use crate::models::record::TimeRecord;
use crate::models::report::{
    AverageMealTimeBySector, MealCountByCollaborator, MealCountBySector, MealCountByType,
};
use crate::utils::time::format_minutes;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Generic grouping primitive: count items per key and map each
/// `(key, total)` into a caller-chosen shape. Results come back sorted
/// descending by total; the sort is stable, so ties keep first-encounter
/// order.
pub fn group_and_count<T, K, R>(
    items: &[T],
    key_fn: impl Fn(&T) -> K,
    map_fn: impl Fn(&K, usize) -> R,
) -> Vec<R>
where
    K: Eq + Hash + Clone,
{
    let mut order: Vec<K> = Vec::new();
    let mut counts: HashMap<K, usize> = HashMap::new();

    for item in items {
        let key = key_fn(item);
        match counts.entry(key.clone()) {
            Entry::Occupied(mut e) => *e.get_mut() += 1,
            Entry::Vacant(e) => {
                e.insert(1);
                order.push(key);
            }
        }
    }

    let mut grouped: Vec<(K, usize)> = order
        .into_iter()
        .map(|key| {
            let total = counts[&key];
            (key, total)
        })
        .collect();
    grouped.sort_by(|a, b| b.1.cmp(&a.1));

    grouped
        .into_iter()
        .map(|(key, total)| map_fn(&key, total))
        .collect()
}

pub fn meal_count_by_sector(records: &[TimeRecord]) -> Vec<MealCountBySector> {
    group_and_count(
        records,
        |record| record.sector.clone(),
        |sector, total| MealCountBySector {
            sector: sector.clone(),
            total,
        },
    )
}

/// Top N view over the per-sector counts.
pub fn top_meal_sectors(records: &[TimeRecord], n: usize) -> Vec<MealCountBySector> {
    let mut counts = meal_count_by_sector(records);
    counts.truncate(n);
    counts
}

/// Per-collaborator counts, keyed by name + sector so homonyms in
/// different sectors stay separate.
pub fn meal_count_by_collaborator(records: &[TimeRecord]) -> Vec<MealCountByCollaborator> {
    group_and_count(
        records,
        |record| (record.name.clone(), record.sector.clone()),
        |(name, sector), total| MealCountByCollaborator {
            collaborator: name.clone(),
            sector: sector.clone(),
            total,
        },
    )
}

/// Per-role counts over the records that carry a recognized type label.
pub fn meal_count_by_type(records: &[TimeRecord]) -> Vec<MealCountByType> {
    let typed: Vec<&TimeRecord> = records.iter().filter(|r| r.kind.is_some()).collect();
    group_and_count(
        &typed,
        |record| record.kind.expect("filtered to typed records"),
        |kind, total| MealCountByType {
            kind: kind.as_label().to_string(),
            total,
        },
    )
}

/// Average meal duration per sector over records with a measurable
/// duration (entry and exit present, exit after entry). Not-found when no
/// record qualifies.
pub fn average_meal_time_by_sector(
    records: &[TimeRecord],
) -> AppResult<Vec<AverageMealTimeBySector>> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (i64, usize)> = HashMap::new();

    for record in records {
        let Some(minutes) = record.duration_minutes() else {
            continue;
        };
        match totals.entry(record.sector.clone()) {
            Entry::Occupied(mut e) => {
                let (sum, count) = e.get_mut();
                *sum += minutes;
                *count += 1;
            }
            Entry::Vacant(e) => {
                e.insert((minutes, 1));
                order.push(record.sector.clone());
            }
        }
    }

    if order.is_empty() {
        return Err(AppError::NotFound(
            "No record with a measurable meal duration".to_string(),
        ));
    }

    let mut averages: Vec<(String, i64, usize)> = order
        .into_iter()
        .map(|sector| {
            let (sum, count) = totals[&sector];
            let avg = (sum as f64 / count as f64).round() as i64;
            (sector, avg, count)
        })
        .collect();
    averages.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(averages
        .into_iter()
        .map(|(sector, avg, count)| AverageMealTimeBySector {
            sector,
            average: format_minutes(avg),
            total_records: count,
        })
        .collect())
}
