pub mod aggregate;
pub mod backup;
pub mod collaborators;
pub mod filters;
pub mod reconcile;
pub mod records;
