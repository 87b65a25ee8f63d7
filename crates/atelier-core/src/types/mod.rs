//! Fashion domain types shared across atelier crates.

mod catalog;
mod design;
mod season;
mod trend;

pub use catalog::{CategoryProfile, DesignStrategy, GarmentCategory, StrategyProfile};
pub use design::{DesignConcept, DesignPrompt};
pub use season::Season;
pub use trend::{
    ColorPalette, DataQuality, EmergingTrend, KeyTrend, MarketInsight, MaterialTrend,
    StyleDirection, TrendAnalysis, TrendDataSource, WebDataMetadata,
};
