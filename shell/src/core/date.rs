//! Calendar-date formatting for date-partitioned file layouts.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Separator placed between the year, month and day digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = ".")]
    Dot,
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "")]
    None,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Dash => "-",
            Separator::Dot => ".",
            Separator::Slash => "/",
            Separator::None => "",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format the UTC calendar date of `instant` as `YYYY<sep>MM<sep>DD`.
pub fn format_date(separator: Separator, instant: DateTime<Utc>) -> String {
    format_naive(separator, instant.date_naive())
}

/// Format an already-resolved calendar date.
pub fn format_naive(separator: Separator, date: NaiveDate) -> String {
    let sep = separator.as_str();
    date.format(&format!("%Y{sep}%m{sep}%d")).to_string()
}

/// Today's UTC date with the given separator.
pub fn today(separator: Separator) -> String {
    format_date(separator, Utc::now())
}
