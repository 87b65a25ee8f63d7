//! Fashion season derived from the calendar.

use jiff::Zoned;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A fashion season.
///
/// The month windows follow retail seasons rather than astronomical ones:
/// February through April is spring, and November through January is winter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Returns the season for the given civil date.
    pub fn from_date(date: Date) -> Self {
        match date.month() {
            2..=4 => Self::Spring,
            5..=7 => Self::Summer,
            8..=10 => Self::Fall,
            _ => Self::Winter,
        }
    }

    /// Returns the season for the current wall-clock date.
    pub fn current() -> Self {
        Self::from_date(Zoned::now().date())
    }

    /// Returns the year for the current wall-clock date.
    pub fn current_year() -> i16 {
        Zoned::now().date().year()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn month_windows_match_retail_seasons() {
        assert_eq!(Season::from_date(date(2025, 2, 1)), Season::Spring);
        assert_eq!(Season::from_date(date(2025, 4, 30)), Season::Spring);
        assert_eq!(Season::from_date(date(2025, 5, 1)), Season::Summer);
        assert_eq!(Season::from_date(date(2025, 7, 31)), Season::Summer);
        assert_eq!(Season::from_date(date(2025, 8, 1)), Season::Fall);
        assert_eq!(Season::from_date(date(2025, 10, 31)), Season::Fall);
        assert_eq!(Season::from_date(date(2025, 11, 1)), Season::Winter);
        assert_eq!(Season::from_date(date(2025, 1, 15)), Season::Winter);
    }

    #[test]
    fn lowercase_display_and_parse() {
        assert_eq!(Season::Fall.to_string(), "fall");
        assert_eq!("winter".parse::<Season>().unwrap(), Season::Winter);
    }
}
