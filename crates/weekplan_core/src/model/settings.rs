//! User preference model.
//!
//! # Responsibility
//! - Model the settings record plus the standalone preference values
//!   (sort mode, dark mode) that live under their own record keys.
//! - Validate hex colors before they reach a store.
//!
//! # Invariants
//! - `Settings::default_task_color` always holds a `#rrggbb` hex color.
//! - `calendar_day_span` is one of 1, 3, 5 or 7.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Color applied to tasks and lists that carry none of their own.
pub const DEFAULT_TASK_COLOR: &str = "#3498db";

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new("^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

/// Whether `value` is a `#rrggbb` hex color.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Active ordering rule for task listings.
///
/// The wire strings match the legacy sort-mode record values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "name")]
    NameAsc,
    #[serde(rename = "nameDesc")]
    NameDesc,
    #[serde(rename = "created")]
    CreatedAsc,
    #[serde(rename = "createdDesc")]
    CreatedDesc,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::NameAsc => "name",
            Self::NameDesc => "nameDesc",
            Self::CreatedAsc => "created",
            Self::CreatedDesc => "createdDesc",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "manual" => Ok(Self::Manual),
            "name" => Ok(Self::NameAsc),
            "nameDesc" => Ok(Self::NameDesc),
            "created" => Ok(Self::CreatedAsc),
            "createdDesc" => Ok(Self::CreatedDesc),
            _ => Err(()),
        }
    }
}

/// Number of days shown by the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DaySpan {
    One,
    Three,
    Five,
    #[default]
    Seven,
}

impl DaySpan {
    pub fn days(self) -> u8 {
        u8::from(self)
    }
}

impl From<DaySpan> for u8 {
    fn from(span: DaySpan) -> Self {
        match span {
            DaySpan::One => 1,
            DaySpan::Three => 3,
            DaySpan::Five => 5,
            DaySpan::Seven => 7,
        }
    }
}

impl TryFrom<u8> for DaySpan {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            5 => Ok(Self::Five),
            7 => Ok(Self::Seven),
            other => Err(format!("unsupported day span {other}; expected 1|3|5|7")),
        }
    }
}

/// The settings record persisted under the `settings` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub default_task_color: String,
    #[serde(default)]
    pub calendar_day_span: DaySpan,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_task_color: DEFAULT_TASK_COLOR.to_string(),
            calendar_day_span: DaySpan::Seven,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_hex_color, DaySpan, Settings, SortMode};

    #[test]
    fn hex_color_validation() {
        assert!(is_valid_hex_color("#3498db"));
        assert!(is_valid_hex_color("#ABCDEF"));
        assert!(!is_valid_hex_color("3498db"));
        assert!(!is_valid_hex_color("#34g8db"));
        assert!(!is_valid_hex_color("#3498db00"));
    }

    #[test]
    fn sort_mode_wire_strings_round_trip() {
        for mode in [
            SortMode::Manual,
            SortMode::NameAsc,
            SortMode::NameDesc,
            SortMode::CreatedAsc,
            SortMode::CreatedDesc,
        ] {
            assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
        }
        assert!("alphabetical".parse::<SortMode>().is_err());
    }

    #[test]
    fn day_span_rejects_unsupported_values() {
        assert!(DaySpan::try_from(2).is_err());
        assert_eq!(DaySpan::try_from(5), Ok(DaySpan::Five));
    }

    #[test]
    fn settings_default_matches_documented_record() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["defaultTaskColor"], "#3498db");
        assert_eq!(json["calendarDaySpan"], 7);
    }
}
