//! Indicator categories and their member FRED series

use serde::{Deserialize, Serialize};

/// A FRED series id with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesDefinition {
    pub id: &'static str,
    pub name: &'static str,
}

const fn series(id: &'static str, name: &'static str) -> SeriesDefinition {
    SeriesDefinition { id, name }
}

const INTEREST_RATES: &[SeriesDefinition] = &[
    series("DFF", "Federal Funds Rate"),
    series("DGS10", "10-Year Treasury Rate"),
    series("DGS2", "2-Year Treasury Rate"),
    series("T10Y2Y", "10Y-2Y Treasury Spread"),
    series("MORTGAGE30US", "30-Year Mortgage Rate"),
];

const LEADING: &[SeriesDefinition] = &[
    series("USSLIND", "Leading Index for US"),
    series("UMCSENT", "Consumer Sentiment"),
    series("PERMIT", "New Housing Permits"),
    series("RETAILSMNSA", "Retail Sales"),
];

const INFLATION: &[SeriesDefinition] = &[
    series("CPIAUCSL", "Consumer Price Index"),
    series("CPILFESL", "Core CPI"),
    series("PCEPI", "PCE Price Index"),
    series("PCEPILFE", "Core PCE"),
];

const EMPLOYMENT: &[SeriesDefinition] = &[
    series("UNRATE", "Unemployment Rate"),
    series("PAYEMS", "Nonfarm Payrolls"),
    series("ICSA", "Initial Jobless Claims"),
    series("JTSJOL", "Job Openings"),
];

const GDP_GROWTH: &[SeriesDefinition] = &[
    series("GDP", "Gross Domestic Product"),
    series("GDPC1", "Real GDP"),
    series("A191RL1Q225SBEA", "Real GDP Growth Rate"),
    series("INDPRO", "Industrial Production"),
];

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    InterestRates,
    Leading,
    Inflation,
    Employment,
    Gdp,
}

impl IndicatorCategory {
    /// Key used in JSON payloads and the narrative snapshot.
    pub fn slug(&self) -> &'static str {
        match self {
            IndicatorCategory::InterestRates => "interest_rates",
            IndicatorCategory::Leading => "leading",
            IndicatorCategory::Inflation => "inflation",
            IndicatorCategory::Employment => "employment",
            IndicatorCategory::Gdp => "gdp",
        }
    }

    /// Path segment under `/api/indicators`.
    pub fn route(&self) -> &'static str {
        match self {
            IndicatorCategory::InterestRates => "interest-rates",
            IndicatorCategory::Leading => "leading",
            IndicatorCategory::Inflation => "inflation",
            IndicatorCategory::Employment => "employment",
            IndicatorCategory::Gdp => "gdp",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        CategoryRegistry::all_categories()
            .iter()
            .copied()
            .find(|category| category.route() == route)
    }

    /// Period used when the request does not name one.
    pub fn default_period(&self) -> &'static str {
        match self {
            IndicatorCategory::Gdp => "5y",
            _ => "1y",
        }
    }

    pub fn series(&self) -> &'static [SeriesDefinition] {
        match self {
            IndicatorCategory::InterestRates => INTEREST_RATES,
            IndicatorCategory::Leading => LEADING,
            IndicatorCategory::Inflation => INFLATION,
            IndicatorCategory::Employment => EMPLOYMENT,
            IndicatorCategory::Gdp => GDP_GROWTH,
        }
    }

    pub fn series_ids(&self) -> Vec<&'static str> {
        self.series().iter().map(|def| def.id).collect()
    }
}

impl std::fmt::Display for IndicatorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Static lookup over every category. Nothing here changes at runtime.
pub struct CategoryRegistry;

impl CategoryRegistry {
    /// All categories in display order.
    pub fn all_categories() -> &'static [IndicatorCategory] {
        &[
            IndicatorCategory::InterestRates,
            IndicatorCategory::Leading,
            IndicatorCategory::Inflation,
            IndicatorCategory::Employment,
            IndicatorCategory::Gdp,
        ]
    }

    /// Every series id, category by category, in declaration order.
    pub fn all_series_ids() -> Vec<&'static str> {
        Self::all_categories()
            .iter()
            .flat_map(|category| category.series().iter().map(|def| def.id))
            .collect()
    }

    pub fn find(series_id: &str) -> Option<(IndicatorCategory, SeriesDefinition)> {
        Self::all_categories().iter().find_map(|&category| {
            category
                .series()
                .iter()
                .find(|def| def.id == series_id)
                .map(|&def| (category, def))
        })
    }

    pub fn display_name(series_id: &str) -> Option<&'static str> {
        Self::find(series_id).map(|(_, def)| def.name)
    }
}
