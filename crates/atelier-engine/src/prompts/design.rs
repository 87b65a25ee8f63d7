//! Design concept prompt template.

use atelier_core::types::{StrategyProfile, TrendAnalysis};

const PROMPT_SECTIONS: &str = "\
Please provide a comprehensive design concept including:
1. Style direction and aesthetic
2. Color palette and usage
3. Material suggestions
4. Silhouette and fit
5. Key design elements
6. Target market considerations";

const PROMPT_CLOSING: &str = "\
Create a distinct garment design concept while maintaining trend alignment.
IMPORTANT: Return ONLY the design concept. Do not include any introductory \
text, explanations, or concluding remarks. Start directly with the design \
concept.";

/// Renders the full design-generation prompt for one variation.
///
/// The trend analysis is embedded as pretty-printed JSON; strategy weights
/// are expressed as percentages. Client preferences are appended when
/// present.
pub fn build_design_prompt(
    trend_analysis: &TrendAnalysis,
    garment_type: &str,
    strategy: &StrategyProfile,
    target_audience: &str,
    occasion: &str,
    preferences: &serde_json::Map<String, serde_json::Value>,
) -> String {
    let trend_json = serde_json::to_string_pretty(trend_analysis)
        .unwrap_or_else(|_| "{}".to_owned());

    let mut prompt = format!(
        "You are a fashion design expert. Create a detailed design concept for a \
         {garment_type} garment.\n\n\
         TREND ANALYSIS:\n{trend_json}\n\n\
         DESIGN STRATEGY: {}\n\
         - Trend Influence: {:.0}%\n\
         - Creativity Level: {:.0}%\n\
         - Market Fit Focus: {:.0}%\n\n\
         TARGET AUDIENCE: {target_audience}\n\
         OCCASION: {occasion}\n",
        strategy.description,
        strategy.trend_weight * 100.0,
        strategy.creativity_weight * 100.0,
        strategy.market_fit_weight * 100.0,
    );

    if !preferences.is_empty() {
        let preferences_json = serde_json::to_string_pretty(preferences)
            .unwrap_or_else(|_| "{}".to_owned());
        prompt.push_str(&format!("\nCLIENT PREFERENCES:\n{preferences_json}\n"));
    }

    prompt.push_str(&format!("\n{PROMPT_SECTIONS}\n\n{PROMPT_CLOSING}"));
    prompt
}
