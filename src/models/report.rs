//! Aggregation result rows returned by the meal-count and meal-time queries.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealCountBySector {
    pub sector: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealCountByCollaborator {
    pub collaborator: String,
    pub sector: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealCountByType {
    #[serde(rename = "type")]
    pub kind: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AverageMealTimeBySector {
    pub sector: String,
    /// Average duration formatted HH:mm, rounded to the nearest minute.
    pub average: String,
    pub total_records: usize,
}
