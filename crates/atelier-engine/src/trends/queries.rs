//! Search query battery for trend gathering.

use atelier_core::types::{GarmentCategory, Season};

/// Builds the labelled search queries for one gathering pass.
///
/// Eight base queries cover the general trend aspects; concrete categories
/// contribute one extra category-specific query, so a pass issues at most
/// nine searches.
pub fn trend_search_queries(
    category: GarmentCategory,
    garment_type: &str,
    season: Season,
    year: i16,
) -> Vec<(&'static str, String)> {
    let mut queries = vec![
        (
            "general_trends",
            format!("{season} {year} fashion trends {category}"),
        ),
        (
            "color_trends",
            format!("{season} {year} fashion color trends {garment_type}"),
        ),
        (
            "style_trends",
            format!("latest {garment_type} fashion trends {season} {year}"),
        ),
        (
            "material_trends",
            format!("fashion materials {season} {year} {category}"),
        ),
        (
            "runway_trends",
            format!("fashion week {season} {year} {category} trends"),
        ),
        (
            "street_style",
            format!("street style {garment_type} trends {season} {year}"),
        ),
        (
            "future_trends",
            format!("fashion trends forecast {year} {category}"),
        ),
        (
            "sustainability",
            format!("sustainable fashion trends {season} {year} {garment_type}"),
        ),
    ];

    match category {
        GarmentCategory::Dresses => queries.push((
            "dress_specific",
            format!("dress trends {season} {year} silhouettes colors"),
        )),
        GarmentCategory::Tops => queries.push((
            "top_specific",
            format!("top shirt blouse trends {season} {year}"),
        )),
        GarmentCategory::Bottoms => queries.push((
            "bottom_specific",
            format!("pants jeans skirt trends {season} {year}"),
        )),
        GarmentCategory::Outerwear => queries.push((
            "outerwear_specific",
            format!("jacket coat blazer trends {season} {year}"),
        )),
        GarmentCategory::All => {}
    }

    queries
}
