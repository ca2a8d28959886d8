use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed navigational sections, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    About,
    Projects,
    Experience,
    Contact,
}

pub const ALL_SECTIONS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Projects,
    SectionId::Experience,
    SectionId::Contact,
];

impl SectionId {
    pub const COUNT: usize = ALL_SECTIONS.len();

    pub fn index(self) -> usize {
        match self {
            SectionId::About => 0,
            SectionId::Projects => 1,
            SectionId::Experience => 2,
            SectionId::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        ALL_SECTIONS.get(index).copied()
    }

    /// The element id the section is mounted under.
    pub fn element_id(self) -> &'static str {
        match self {
            SectionId::About => "ABOUT",
            SectionId::Projects => "PROJECTS",
            SectionId::Experience => "EXPERIENCE",
            SectionId::Contact => "CONTACT",
        }
    }

    /// Heading shown above the section body.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}` (expected one of about, projects, experience, contact)")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_SECTIONS
            .into_iter()
            .find(|id| id.element_id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
