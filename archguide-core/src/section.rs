//! Section identifiers — the closed set of top-level tabs.

use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;

/// One top-level tab. Variant order is the display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    #[default]
    Overview,
    Security,
    Scalability,
    Compliance,
    Maintainability,
    Implementation,
}

impl SectionId {
    /// Every section in display order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Overview,
        SectionId::Security,
        SectionId::Scalability,
        SectionId::Compliance,
        SectionId::Maintainability,
        SectionId::Implementation,
    ];

    pub fn index(self) -> usize {
        match self {
            SectionId::Overview => 0,
            SectionId::Security => 1,
            SectionId::Scalability => 2,
            SectionId::Compliance => 3,
            SectionId::Maintainability => 4,
            SectionId::Implementation => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Stable lowercase identifier (`overview`, `security`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Security => "security",
            SectionId::Scalability => "scalability",
            SectionId::Compliance => "compliance",
            SectionId::Maintainability => "maintainability",
            SectionId::Implementation => "implementation",
        }
    }

    /// Compact tab label for narrow terminals.
    pub fn short_label(self) -> &'static str {
        match self {
            SectionId::Overview => "Overview",
            SectionId::Security => "Security",
            SectionId::Scalability => "Scalability",
            SectionId::Compliance => "Compliance",
            SectionId::Maintainability => "DevOps",
            SectionId::Implementation => "Stack",
        }
    }

    pub fn next(self) -> SectionId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> SectionId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SectionId {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.slug() == wanted)
            .ok_or_else(|| ViewError::UnknownSection(s.to_string()))
    }
}
