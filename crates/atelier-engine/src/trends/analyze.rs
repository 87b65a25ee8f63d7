//! AI trend analysis over gathered web data.
//!
//! The model is asked for a strictly JSON document; the response is decoded
//! structurally and any failure surfaces as a typed [`Error::TrendParse`] so
//! callers substitute the static fallback explicitly, never silently.
//!
//! [`Error::TrendParse`]: crate::Error::TrendParse

use atelier_core::llm::GenerationRequest;
use atelier_core::types::{GarmentCategory, Season, TrendAnalysis, WebDataMetadata};
use serde_json::Value;

use super::TRACING_TARGET;
use super::gather::GatheredTrendData;
use super::keywords::truncate_chars;
use crate::context::EngineContext;
use crate::error::{Error, Result};

/// Bound on source previews fed to the model.
const MAX_SOURCES: usize = 10;

/// Bound on detailed excerpts fed to the model.
const MAX_DETAILED: usize = 5;

/// Character budget per detailed excerpt.
const DETAIL_CHARS: usize = 500;

/// Bound on trend mentions fed to the model.
const MAX_MENTIONS: usize = 10;

const PROMPT_HEADER: &str = "\
You are a fashion trend analyst with access to real-time web data. Analyze the \
following web search results and produce a comprehensive trend analysis.";

const PROMPT_SCHEMA: &str = r#"Respond with a single JSON object in exactly this shape:

{
  "keyTrends": [
    {
      "name": "trend name",
      "description": "detailed description based on web data",
      "confidence": 0.85,
      "designImplications": ["implication 1", "implication 2"],
      "source": "web_analysis"
    }
  ],
  "colorPalettes": [
    {
      "name": "palette name",
      "colors": ["color1", "color2", "color3"],
      "usage": "primary/secondary/accent",
      "trendStrength": 0.8,
      "source": "web_analysis"
    }
  ],
  "styleDirections": [
    {
      "name": "style direction",
      "description": "description based on web trends",
      "keyElements": ["element1", "element2"],
      "targetAudience": "audience description",
      "source": "web_analysis"
    }
  ],
  "materialTrends": [
    {
      "material": "material name",
      "usage": "usage description",
      "sustainability": "sustainable/conventional",
      "trendStrength": 0.7,
      "source": "web_analysis"
    }
  ],
  "emergingTrends": [
    {
      "name": "emerging trend",
      "description": "description of emerging trend",
      "growthPotential": 0.8,
      "timeframe": "short/medium/long term"
    }
  ],
  "marketInsights": [
    {
      "insight": "market insight",
      "relevance": "high/medium/low",
      "source": "web_analysis"
    }
  ]
}"#;

const PROMPT_INSTRUCTIONS: &str = "\
IMPORTANT INSTRUCTIONS:
1. Base your analysis on the actual web search data provided
2. Extract real trends, colors, materials, and styles mentioned in the sources
3. Provide confidence scores based on how frequently trends are mentioned
4. Include emerging trends that show growth potential
5. Focus on actionable insights for garment design
6. If web data is limited, supplement with your knowledge but clearly indicate sources
7. Return ONLY valid JSON - no additional text, explanations, or markdown fences";

/// Assembles the bounded web-content block fed to the model.
pub fn prepare_web_content(gathered: &GatheredTrendData) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !gathered.sources.is_empty() {
        parts.push("TREND SOURCES:".to_owned());
        for (i, source) in gathered.sources.iter().take(MAX_SOURCES).enumerate() {
            parts.push(format!("{}. {}", i + 1, source.title));
            parts.push(format!("   {}", source.content_preview));
            parts.push(String::new());
        }
    }

    if !gathered.raw_content.is_empty() {
        parts.push("DETAILED CONTENT:".to_owned());
        for (i, source) in gathered.raw_content.iter().take(MAX_DETAILED).enumerate() {
            parts.push(format!("Source {}: {}", i + 1, source.title));
            let excerpt = if source.content.chars().count() > DETAIL_CHARS {
                format!("{}...", truncate_chars(&source.content, DETAIL_CHARS))
            } else {
                source.content.clone()
            };
            parts.push(excerpt);
            parts.push(String::new());
        }
    }

    if !gathered.trend_mentions.is_empty() {
        parts.push("TREND MENTIONS:".to_owned());
        for mention in gathered.trend_mentions.iter().take(MAX_MENTIONS) {
            parts.push(format!("- {mention}"));
        }
    }

    parts.join("\n")
}

/// Builds the full analysis prompt for one gathering pass.
fn build_analysis_prompt(
    web_content: &str,
    category: GarmentCategory,
    garment_type: &str,
    season: Season,
    year: i16,
) -> String {
    format!(
        "{PROMPT_HEADER}\n\n\
         Scope: {season} {year} fashion trends for the {category} category, \
         specifically {garment_type} garments.\n\n\
         WEB SEARCH DATA:\n{web_content}\n\n\
         {PROMPT_SCHEMA}\n\n\
         {PROMPT_INSTRUCTIONS}"
    )
}

/// Decodes a model response into a [`TrendAnalysis`].
///
/// The boundary contract is explicit: the response must contain one JSON
/// object; markdown fences are tolerated, anything else is a
/// [`Error::TrendParse`]. Scope fields (season, year, category, garment type)
/// are normalized to the requested values regardless of what the model
/// claims, so a structurally valid document can never change the run's scope.
///
/// [`Error::TrendParse`]: crate::Error::TrendParse
pub fn parse_trend_analysis(
    response: &str,
    category: GarmentCategory,
    garment_type: &str,
    season: Season,
    year: i16,
) -> Result<TrendAnalysis> {
    let start = response
        .find('{')
        .ok_or_else(|| Error::trend_parse("no json object in response"))?;
    let end = response
        .rfind('}')
        .ok_or_else(|| Error::trend_parse("unterminated json object in response"))?;
    if end < start {
        return Err(Error::trend_parse("malformed json object in response"));
    }

    let mut value: Value = serde_json::from_str(&response[start..=end])
        .map_err(|e| Error::trend_parse(format!("invalid json: {e}")))?;

    let object = value
        .as_object_mut()
        .ok_or_else(|| Error::trend_parse("response json is not an object"))?;

    // Pin the scope fields to the requested values before typed decoding.
    object.insert("season".into(), serde_json::json!(season));
    object.insert("year".into(), serde_json::json!(year));
    object.insert("category".into(), serde_json::json!(category));
    object.insert("garmentType".into(), serde_json::json!(garment_type));
    object.insert("dataSource".into(), serde_json::json!("web_search"));

    serde_json::from_value(value)
        .map_err(|e| Error::trend_parse(format!("unexpected structure: {e}")))
}

/// Runs AI trend analysis over gathered web data.
///
/// Returns a typed error on generation or parse failure; the caller decides
/// whether to substitute the fallback analysis.
pub async fn analyze_trends(
    ctx: &EngineContext,
    gathered: &GatheredTrendData,
    category: GarmentCategory,
    garment_type: &str,
    season: Season,
    year: i16,
) -> Result<TrendAnalysis> {
    let web_content = prepare_web_content(gathered);
    let prompt = build_analysis_prompt(&web_content, category, garment_type, season, year);

    tracing::debug!(
        target: TRACING_TARGET,
        prompt_len = prompt.len(),
        source_count = gathered.sources.len(),
        "Requesting AI trend analysis"
    );

    let response = ctx
        .services
        .llm
        .generate(&GenerationRequest::new(prompt))
        .await?;

    let mut analysis =
        parse_trend_analysis(&response.text, category, garment_type, season, year)?;
    analysis.web_data_metadata = Some(WebDataMetadata::from_source_count(gathered.sources.len()));

    tracing::info!(
        target: TRACING_TARGET,
        key_trends = analysis.key_trends.len(),
        color_palettes = analysis.color_palettes.len(),
        "Trend analysis decoded"
    );

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use atelier_core::types::TrendDataSource;

    use super::*;
    use crate::trends::gather::GatheredTrendData;

    const VALID_RESPONSE: &str = r#"Here is the analysis:
```json
{
  "keyTrends": [
    {"name": "Quiet Luxury", "description": "Understated premium staples", "confidence": 0.8,
     "designImplications": ["subtle branding"], "source": "web_analysis"}
  ],
  "colorPalettes": [
    {"name": "Butter Tones", "colors": ["butter yellow", "cream"], "usage": "primary",
     "trendStrength": 0.7, "source": "web_analysis"}
  ]
}
```"#;

    #[test]
    fn parses_fenced_json_and_pins_scope() {
        let analysis = parse_trend_analysis(
            VALID_RESPONSE,
            GarmentCategory::Dresses,
            "dress",
            Season::Fall,
            2025,
        )
        .unwrap();

        assert_eq!(analysis.category, GarmentCategory::Dresses);
        assert_eq!(analysis.season, Season::Fall);
        assert_eq!(analysis.year, 2025);
        assert_eq!(analysis.data_source, TrendDataSource::WebSearch);
        assert_eq!(analysis.key_trends[0].name, "Quiet Luxury");
        assert_eq!(analysis.color_palettes[0].colors.len(), 2);
        // Sections the model omitted decode as empty.
        assert!(analysis.material_trends.is_empty());
    }

    #[test]
    fn model_cannot_change_scope() {
        let response = r#"{"season":"summer","year":1999,"category":"tops","keyTrends":[]}"#;
        let analysis = parse_trend_analysis(
            response,
            GarmentCategory::Outerwear,
            "coat",
            Season::Winter,
            2026,
        )
        .unwrap();
        assert_eq!(analysis.category, GarmentCategory::Outerwear);
        assert_eq!(analysis.season, Season::Winter);
        assert_eq!(analysis.year, 2026);
    }

    #[test]
    fn missing_json_is_a_parse_error() {
        let result = parse_trend_analysis(
            "I could not find any trends, sorry.",
            GarmentCategory::Tops,
            "blouse",
            Season::Spring,
            2026,
        );
        assert!(matches!(result, Err(Error::TrendParse(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = parse_trend_analysis(
            r#"{"keyTrends": [{"name": "unterminated"#,
            GarmentCategory::Tops,
            "blouse",
            Season::Spring,
            2026,
        );
        assert!(matches!(result, Err(Error::TrendParse(_))));
    }

    #[test]
    fn web_content_is_bounded() {
        let mut gathered = GatheredTrendData::default();
        for i in 0..20 {
            gathered.absorb(
                &format!("Source {i}"),
                "https://example.com",
                "trending color palette in organic fabric",
            );
        }

        let content = prepare_web_content(&gathered);
        assert!(content.contains("TREND SOURCES:"));
        assert!(content.contains("10. Source 9"));
        assert!(!content.contains("11. Source 10"));
        assert!(content.contains("Source 5: Source 4"));
        assert!(!content.contains("Source 6: Source 5"));
    }

    #[test]
    fn empty_gathering_yields_empty_content() {
        assert_eq!(prepare_web_content(&GatheredTrendData::default()), "");
    }
}
