use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

const PRESENT: &str = "present";

/// A role boundary: either a plain year/label, or a display label with a
/// separate machine-readable date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleDate {
    Plain(String),
    Labeled {
        label: String,
        #[serde(default)]
        date_time: Option<String>,
    },
}

impl RoleDate {
    fn is_present(&self) -> bool {
        match self {
            RoleDate::Plain(s) => s.eq_ignore_ascii_case(PRESENT),
            RoleDate::Labeled { label, .. } => label.eq_ignore_ascii_case(PRESENT),
        }
    }

    pub fn label(&self) -> String {
        if self.is_present() {
            return "Present".to_string();
        }
        match self {
            RoleDate::Plain(s) => s.clone(),
            RoleDate::Labeled { label, .. } => label.clone(),
        }
    }

    /// Machine-readable date. An ongoing role resolves to the current year
    /// unless an explicit date was given.
    pub fn date_time(&self) -> String {
        match self {
            RoleDate::Labeled {
                date_time: Some(dt),
                ..
            } => dt.clone(),
            _ if self.is_present() => Local::now().year().to_string(),
            RoleDate::Plain(s) => s.clone(),
            RoleDate::Labeled { label, .. } => label.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub company: String,
    pub title: String,
    pub start: RoleDate,
    pub end: RoleDate,
}

impl Role {
    /// `2020 — 2024`, `2025 — Present`.
    pub fn period(&self) -> String {
        format!("{} — {}", self.start.label(), self.end.label())
    }

    /// Accessible form of the period, e.g. `2025 until Present`.
    pub fn period_description(&self) -> String {
        format!("{} until {}", self.start.label(), self.end.label())
    }
}
