//! Shift/turn windows used for read-side filtering. Never persisted.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Morning,
    Afternoon,
    Night,
}

/// Inclusive time-of-day window.
#[derive(Debug, Clone, Copy)]
pub struct TurnWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("turn window literals are valid times")
}

impl Turn {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            "night" => Some(Self::Night),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Night => "night",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        Self::from_label(s).ok_or_else(|| AppError::InvalidTurn(s.to_string()))
    }

    pub fn window(&self) -> TurnWindow {
        match self {
            Self::Morning => TurnWindow { start: hm(6, 0), end: hm(11, 59) },
            Self::Afternoon => TurnWindow { start: hm(12, 0), end: hm(17, 59) },
            Self::Night => TurnWindow { start: hm(18, 0), end: hm(23, 59) },
        }
    }
}
