//! Static catalog of design strategies and garment categories.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A design strategy selecting how strongly generated designs track trends.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DesignStrategy {
    TrendFollowing,
    TrendLeading,
    Balanced,
    Sustainable,
}

/// Weighted profile describing how a strategy balances trend alignment,
/// creativity, and market fit. Weights are in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyProfile {
    pub description: &'static str,
    pub trend_weight: f64,
    pub creativity_weight: f64,
    pub market_fit_weight: f64,
}

impl DesignStrategy {
    /// Returns the static weighted profile for this strategy.
    pub const fn profile(self) -> StrategyProfile {
        match self {
            Self::TrendFollowing => StrategyProfile {
                description: "Follow current trends closely",
                trend_weight: 0.9,
                creativity_weight: 0.1,
                market_fit_weight: 0.8,
            },
            Self::TrendLeading => StrategyProfile {
                description: "Lead trends with innovative designs",
                trend_weight: 0.6,
                creativity_weight: 0.9,
                market_fit_weight: 0.5,
            },
            Self::Balanced => StrategyProfile {
                description: "Balance trends with timeless appeal",
                trend_weight: 0.7,
                creativity_weight: 0.5,
                market_fit_weight: 0.9,
            },
            Self::Sustainable => StrategyProfile {
                description: "Focus on sustainable and ethical design",
                trend_weight: 0.5,
                creativity_weight: 0.7,
                market_fit_weight: 0.8,
            },
        }
    }
}

impl Default for DesignStrategy {
    fn default() -> Self {
        Self::Balanced
    }
}

/// A garment category the catalog and trend analysis operate on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GarmentCategory {
    Dresses,
    Tops,
    Bottoms,
    Outerwear,
    All,
}

/// Static metadata for a concrete garment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProfile {
    /// Representative garment types in this category.
    pub types: &'static [&'static str],
    /// Relative design complexity.
    pub complexity: &'static str,
    /// How quickly the category reacts to trends.
    pub trend_sensitivity: &'static str,
}

impl GarmentCategory {
    /// Returns the static profile for this category.
    ///
    /// `All` is a query wildcard, not a catalog entry, and has no profile.
    pub const fn profile(self) -> Option<CategoryProfile> {
        match self {
            Self::Dresses => Some(CategoryProfile {
                types: &[
                    "casual dress",
                    "formal dress",
                    "maxi dress",
                    "mini dress",
                    "midi dress",
                ],
                complexity: "high",
                trend_sensitivity: "very high",
            }),
            Self::Tops => Some(CategoryProfile {
                types: &["t-shirt", "blouse", "shirt", "sweater", "jacket", "blazer"],
                complexity: "medium",
                trend_sensitivity: "high",
            }),
            Self::Bottoms => Some(CategoryProfile {
                types: &["pants", "jeans", "shorts", "skirt", "leggings"],
                complexity: "medium",
                trend_sensitivity: "high",
            }),
            Self::Outerwear => Some(CategoryProfile {
                types: &["coat", "jacket", "blazer", "cardigan", "vest"],
                complexity: "high",
                trend_sensitivity: "medium",
            }),
            Self::All => None,
        }
    }
}

impl Default for GarmentCategory {
    fn default() -> Self {
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn strategy_parses_snake_case() {
        assert_eq!(
            "trend_following".parse::<DesignStrategy>().unwrap(),
            DesignStrategy::TrendFollowing
        );
        assert!("aggressive".parse::<DesignStrategy>().is_err());
    }

    #[test]
    fn strategy_weights_are_normalized() {
        for strategy in DesignStrategy::iter() {
            let profile = strategy.profile();
            assert!((0.0..=1.0).contains(&profile.trend_weight));
            assert!((0.0..=1.0).contains(&profile.creativity_weight));
            assert!((0.0..=1.0).contains(&profile.market_fit_weight));
        }
    }

    #[test]
    fn every_concrete_category_has_a_profile() {
        for category in GarmentCategory::iter() {
            match category {
                GarmentCategory::All => assert!(category.profile().is_none()),
                _ => assert!(category.profile().is_some()),
            }
        }
    }
}
