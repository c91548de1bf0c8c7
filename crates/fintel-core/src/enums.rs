//! Sector and sort-key enums for the franchise catalog.
//!
//! `Sector` serializes to the human-readable label stored in the
//! `franchise_brands.sector` column. `SortKey` uses `snake_case` and never
//! fails to parse: unknown keys fall back to name ordering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

/// Industry category used to filter the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Sector {
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
    #[serde(rename = "Fitness & Health")]
    FitnessAndHealth,
    #[serde(rename = "Retail")]
    Retail,
    #[serde(rename = "Services")]
    Services,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Automotive")]
    Automotive,
    #[serde(rename = "Home Services")]
    HomeServices,
    #[serde(rename = "Beauty & Wellness")]
    BeautyAndWellness,
}

impl Sector {
    pub const ALL: [Self; 8] = [
        Self::FoodAndBeverage,
        Self::FitnessAndHealth,
        Self::Retail,
        Self::Services,
        Self::Education,
        Self::Automotive,
        Self::HomeServices,
        Self::BeautyAndWellness,
    ];

    /// Label stored in the database and shown to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodAndBeverage => "Food & Beverage",
            Self::FitnessAndHealth => "Fitness & Health",
            Self::Retail => "Retail",
            Self::Services => "Services",
            Self::Education => "Education",
            Self::Automotive => "Automotive",
            Self::HomeServices => "Home Services",
            Self::BeautyAndWellness => "Beauty & Wellness",
        }
    }

    /// Shell-friendly alias, e.g. `food-beverage`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::FoodAndBeverage => "food-beverage",
            Self::FitnessAndHealth => "fitness-health",
            Self::Retail => "retail",
            Self::Services => "services",
            Self::Education => "education",
            Self::Automotive => "automotive",
            Self::HomeServices => "home-services",
            Self::BeautyAndWellness => "beauty-wellness",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = CoreError;

    /// Accepts either the label (case-insensitive) or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|sector| {
                sector.as_str().eq_ignore_ascii_case(needle) || sector.slug() == needle
            })
            .ok_or_else(|| CoreError::validation(format!("Unknown sector: {s}")))
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Catalog ordering.
///
/// ```text
/// name      → name ascending
/// cost_low  → startup_cost_min ascending
/// cost_high → startup_cost_max descending
/// profit    → net_profit_margin descending
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    CostLow,
    CostHigh,
    Profit,
}

impl SortKey {
    /// Parse a UI sort key. Unrecognized keys fall back to [`SortKey::Name`].
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim() {
            "cost_low" | "cost-low" => Self::CostLow,
            "cost_high" | "cost-high" => Self::CostHigh,
            "profit" => Self::Profit,
            _ => Self::Name,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CostLow => "cost_low",
            Self::CostHigh => "cost_high",
            Self::Profit => "profit",
        }
    }

    /// Label shown in option lists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name (A-Z)",
            Self::CostLow => "Lowest Cost",
            Self::CostHigh => "Highest Cost",
            Self::Profit => "Highest Profit Margin",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("name", SortKey::Name)]
    #[case("cost_low", SortKey::CostLow)]
    #[case("cost-high", SortKey::CostHigh)]
    #[case("profit", SortKey::Profit)]
    #[case("popularity", SortKey::Name)]
    #[case("", SortKey::Name)]
    fn sort_key_parse_falls_back_to_name(#[case] raw: &str, #[case] expected: SortKey) {
        assert_eq!(SortKey::parse_or_default(raw), expected);
    }

    #[test]
    fn sector_parses_label_and_slug() {
        assert_eq!(
            "food & beverage".parse::<Sector>().unwrap(),
            Sector::FoodAndBeverage
        );
        assert_eq!("home-services".parse::<Sector>().unwrap(), Sector::HomeServices);
        assert!("Aerospace".parse::<Sector>().is_err());
    }

    #[test]
    fn sector_serializes_to_label() {
        let json = serde_json::to_string(&Sector::BeautyAndWellness).unwrap();
        assert_eq!(json, "\"Beauty & Wellness\"");
        for sector in Sector::ALL {
            let back: Sector =
                serde_json::from_value(serde_json::Value::String(sector.as_str().into())).unwrap();
            assert_eq!(back, sector);
        }
    }
}
