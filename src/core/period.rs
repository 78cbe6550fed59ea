//! `period` query parameter

use crate::services::series_provider::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    ThreeYears,
    FiveYears,
}

impl Period {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1m" => Some(Period::OneMonth),
            "3m" => Some(Period::ThreeMonths),
            "6m" => Some(Period::SixMonths),
            "1y" => Some(Period::OneYear),
            "3y" => Some(Period::ThreeYears),
            "5y" => Some(Period::FiveYears),
            _ => None,
        }
    }

    /// Unrecognized values fall back to one year.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Period::OneYear)
    }

    pub fn days(&self) -> i64 {
        match self {
            Period::OneMonth => 30,
            Period::ThreeMonths => 90,
            Period::SixMonths => 180,
            Period::OneYear => 365,
            Period::ThreeYears => 365 * 3,
            Period::FiveYears => 365 * 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
            Period::ThreeYears => "3y",
            Period::FiveYears => "5y",
        }
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::last_days(self.days())
    }
}
