//! Collaborator identity records and the closed role enumeration.

use serde::Serialize;

/// Collaborators sheet layout (columns A..D).
pub const COLLABORATOR_HEADERS: [&str; 4] = ["Collaborator_ID", "Name", "Sector", "Type"];

pub const H_COLLABORATOR_ID: &str = "Collaborator_ID";
pub const H_NAME: &str = "Name";
pub const H_SECTOR: &str = "Sector";
pub const H_TYPE: &str = "Type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorType {
    Resident,
    Visitor,
    Outsourced,
    Staff,
}

impl CollaboratorType {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "resident" => Some(Self::Resident),
            "visitor" => Some(Self::Visitor),
            "outsourced" => Some(Self::Outsourced),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Visitor => "visitor",
            Self::Outsourced => "outsourced",
            Self::Staff => "staff",
        }
    }
}

/// Identity row from the collaborators sheet. Created by administrative
/// registration, never deleted by this engine.
#[derive(Debug, Clone, Serialize)]
pub struct Collaborator {
    pub collaborator_id: String,
    pub name: String,
    pub sector: String,
    /// None when the sheet carries a blank or unrecognized role label.
    #[serde(rename = "type")]
    pub kind: Option<CollaboratorType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for kind in [
            CollaboratorType::Resident,
            CollaboratorType::Visitor,
            CollaboratorType::Outsourced,
            CollaboratorType::Staff,
        ] {
            assert_eq!(CollaboratorType::from_label(kind.as_label()), Some(kind));
        }
        assert_eq!(CollaboratorType::from_label(" Staff "), Some(CollaboratorType::Staff));
        assert_eq!(CollaboratorType::from_label("manager"), None);
    }
}
