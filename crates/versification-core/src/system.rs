use serde::{Deserialize, Serialize};

use crate::error::VersificationError;

/// Verse numbering convention an absolute verse number is expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VersificationSystem {
    /// KJV-style numbering
    #[default]
    #[serde(alias = "english", alias = "English")]
    English,
    /// Masoretic numbering (superscriptions counted as verses)
    #[serde(alias = "hebrew", alias = "Hebrew")]
    Hebrew,
}

impl VersificationSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersificationSystem::English => "ENGLISH",
            VersificationSystem::Hebrew => "HEBREW",
        }
    }

    /// The system on the other side of a conversion
    pub fn other(&self) -> Self {
        match self {
            VersificationSystem::English => VersificationSystem::Hebrew,
            VersificationSystem::Hebrew => VersificationSystem::English,
        }
    }

    /// Parse from a system name or common abbreviation (case-insensitive)
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "eng" | "en" | "kjv" => Some(VersificationSystem::English),
            "hebrew" | "heb" | "he" | "mt" | "masoretic" => Some(VersificationSystem::Hebrew),
            _ => None,
        }
    }
}

impl std::fmt::Display for VersificationSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VersificationSystem {
    type Err = VersificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s).ok_or_else(|| VersificationError::UnknownSystem(s.to_string()))
    }
}
