use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Accessibility display preferences. Stored independently of reports.
///
/// Deserialization fills each missing member from its default, so a stored
/// value written by an older client with fewer members still loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct A11yPrefs {
    pub font: FontSize,
    pub contrast: Contrast,
    pub motion: Motion,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FontSize {
    #[default]
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Contrast {
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Motion {
    #[default]
    Normal,
    Reduced,
}

impl FontSize {
    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Md => "md",
            FontSize::Lg => "lg",
            FontSize::Xl => "xl",
        }
    }
}

impl Contrast {
    pub fn as_str(self) -> &'static str {
        match self {
            Contrast::Normal => "normal",
            Contrast::High => "high",
        }
    }
}

impl Motion {
    pub fn as_str(self) -> &'static str {
        match self {
            Motion::Normal => "normal",
            Motion::Reduced => "reduced",
        }
    }
}

impl std::str::FromStr for FontSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" => Ok(FontSize::Md),
            "lg" => Ok(FontSize::Lg),
            "xl" => Ok(FontSize::Xl),
            other => Err(CoreError::UnknownPreference {
                preference: "font",
                value: other.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for Contrast {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Contrast::Normal),
            "high" => Ok(Contrast::High),
            other => Err(CoreError::UnknownPreference {
                preference: "contrast",
                value: other.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for Motion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Motion::Normal),
            "reduced" => Ok(Motion::Reduced),
            other => Err(CoreError::UnknownPreference {
                preference: "motion",
                value: other.to_string(),
            }),
        }
    }
}
