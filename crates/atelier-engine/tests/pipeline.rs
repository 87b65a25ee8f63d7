//! End-to-end pipeline tests against mock providers.

use atelier_core::fs::ImageStore;
use atelier_core::mock::MockConfig;
use atelier_core::types::{
    DesignStrategy, GarmentCategory, Season, TrendAnalysis, TrendDataSource,
};
use atelier_engine::stage::{DesignPlanningStage, QualityAssessmentStage, Stage};
use atelier_engine::{
    DesignBrief, EngineConfig, EngineContext, Pipeline, WorkflowState, WorkflowStep,
};
use strum::IntoEnumIterator;

async fn context_with(mock: MockConfig) -> (tempfile::TempDir, EngineContext) {
    let dir = tempfile::tempdir().unwrap();
    let images = ImageStore::init(dir.path().join("uploads")).await.unwrap();
    let ctx = EngineContext::new(mock.into_services(), images, EngineConfig::default());
    (dir, ctx)
}

fn dress_brief(count: usize) -> DesignBrief {
    DesignBrief {
        garment_type: "dress".into(),
        category: GarmentCategory::Dresses,
        strategy: DesignStrategy::Balanced,
        count,
        target_audience: "young professionals".into(),
        occasion: "work".into(),
        preferences: serde_json::Map::new(),
    }
}

/// Valid analysis JSON the mock text model can return.
const ANALYSIS_JSON: &str = r#"{
    "keyTrends": [{"name": "Soft Tailoring", "description": "Relaxed suiting", "confidence": 0.8,
                   "designImplications": ["unstructured shoulders"], "source": "web_analysis"}],
    "colorPalettes": [{"name": "Neutrals", "colors": ["cream", "taupe"], "usage": "primary",
                       "trendStrength": 0.7, "source": "web_analysis"}]
}"#;

#[tokio::test]
async fn planning_yields_count_prompts_for_every_strategy() {
    let (_dir, ctx) = context_with(MockConfig::default()).await;

    for strategy in DesignStrategy::iter() {
        for count in [1usize, 4, 10] {
            let brief = DesignBrief {
                strategy,
                ..dress_brief(count)
            };
            let mut state = WorkflowState::new(brief, &ctx.config);
            DesignPlanningStage.run(&ctx, &mut state).await.unwrap();

            assert_eq!(state.design_prompts.len(), count);
            let variations: Vec<usize> =
                state.design_prompts.iter().map(|p| p.variation).collect();
            assert_eq!(variations, (0..count).collect::<Vec<_>>());
            assert!(state.design_prompts.iter().all(|p| p.strategy == strategy));
        }
    }
}

#[tokio::test]
async fn unparseable_analysis_degrades_to_static_fallback() {
    // The default mock text is prose, not JSON, so the analysis parse fails.
    let (_dir, ctx) = context_with(MockConfig::default()).await;
    let state = Pipeline::standard().execute(&ctx, dress_brief(1)).await;

    let analysis = state.trend_analysis.expect("analysis always set");
    assert_eq!(analysis.data_source, TrendDataSource::Fallback);

    let expected = TrendAnalysis::fallback(GarmentCategory::Dresses, state.season, state.year);
    assert_eq!(analysis.key_trends, expected.key_trends);
    assert_eq!(analysis.color_palettes, expected.color_palettes);
    assert_eq!(analysis.style_directions, expected.style_directions);
    assert_eq!(analysis.material_trends, expected.material_trends);

    // The degradation is recorded, not silent.
    assert!(
        state
            .error_messages
            .iter()
            .any(|m| m.contains("Trend analysis error"))
    );
}

#[tokio::test]
async fn valid_analysis_json_is_decoded_and_scoped() {
    let (_dir, ctx) = context_with(MockConfig {
        mock_text: Some(ANALYSIS_JSON.to_owned()),
        ..MockConfig::default()
    })
    .await;
    let state = Pipeline::standard().execute(&ctx, dress_brief(1)).await;

    let analysis = state.trend_analysis.expect("analysis always set");
    assert_eq!(analysis.data_source, TrendDataSource::WebSearch);
    assert_eq!(analysis.category, GarmentCategory::Dresses);
    assert_eq!(analysis.key_trends[0].name, "Soft Tailoring");
    let metadata = analysis.web_data_metadata.expect("web metadata attached");
    // 9 queries x 1 mock result each.
    assert_eq!(metadata.sources_count, 9);
}

#[tokio::test]
async fn missing_image_data_still_completes_successfully() {
    let (_dir, ctx) = context_with(MockConfig {
        fail_images: true,
        ..MockConfig::default()
    })
    .await;
    let state = Pipeline::standard().execute(&ctx, dress_brief(2)).await;

    assert!(state.final_images.is_empty());
    assert_eq!(state.current_step, WorkflowStep::Complete);
    assert!(state.success);
    assert_eq!(state.quality_score, 0.5);

    let report = state.final_result.expect("report compiled");
    assert!(report.success);
    assert!(report.final_images.is_empty());
    assert_eq!(report.generated_designs.len(), 2);
}

#[tokio::test]
async fn end_to_end_dress_run_produces_two_designs_and_echoes_metadata() {
    let (_dir, ctx) = context_with(MockConfig::default()).await;
    let state = Pipeline::standard().execute(&ctx, dress_brief(2)).await;

    assert_eq!(state.current_step, WorkflowStep::Complete);
    assert!(state.success);

    let report = state.final_result.expect("report compiled");
    assert_eq!(report.generated_designs.len(), 2);
    assert!(
        report
            .generated_designs
            .iter()
            .all(|d| d.concept.is_some() || d.error.is_some())
    );
    assert_eq!(report.metadata.category, GarmentCategory::Dresses);
    assert_eq!(report.metadata.strategy, DesignStrategy::Balanced);
    assert_eq!(report.metadata.garment_type, "dress");
    assert_eq!(report.metadata.target_audience, "young professionals");

    // Both designs got images, so quality peaks.
    assert_eq!(report.final_images.len(), 2);
    assert_eq!(state.quality_score, 1.0);
}

#[tokio::test]
async fn failed_variations_become_fallback_markers_without_blocking_siblings() {
    let (_dir, ctx) = context_with(MockConfig {
        fail_generation: true,
        ..MockConfig::default()
    })
    .await;
    let state = Pipeline::standard().execute(&ctx, dress_brief(3)).await;

    assert_eq!(state.generated_designs.len(), 3);
    assert!(state.generated_designs.iter().all(|d| d.is_fallback));
    assert!(state.generated_designs.iter().all(|d| d.error.is_some()));
    // Fallback designs have no concepts, so no images are attempted.
    assert!(state.final_images.is_empty());
    assert!(state.success);
}

#[tokio::test]
async fn quality_score_matrix() {
    let (_dir, ctx) = context_with(MockConfig::default()).await;
    let stage = QualityAssessmentStage;

    let mut empty = WorkflowState::new(dress_brief(1), &ctx.config);
    stage.run(&ctx, &mut empty).await.unwrap();
    assert_eq!(empty.quality_score, 0.0);

    let mut designs_only = WorkflowState::new(dress_brief(1), &ctx.config);
    designs_only.generated_designs = sample_designs();
    stage.run(&ctx, &mut designs_only).await.unwrap();
    assert_eq!(designs_only.quality_score, 0.5);

    let mut images_only = WorkflowState::new(dress_brief(1), &ctx.config);
    images_only.final_images = vec!["uploads/design_prompt_0.png".into()];
    stage.run(&ctx, &mut images_only).await.unwrap();
    assert_eq!(images_only.quality_score, 0.5);

    let mut both = WorkflowState::new(dress_brief(1), &ctx.config);
    both.generated_designs = sample_designs();
    both.final_images = vec!["uploads/design_prompt_0.png".into()];
    stage.run(&ctx, &mut both).await.unwrap();
    assert_eq!(both.quality_score, 1.0);
}

#[tokio::test]
async fn search_failures_yield_fallback_with_empty_sources() {
    let (_dir, ctx) = context_with(MockConfig {
        fail_search: true,
        ..MockConfig::default()
    })
    .await;
    let state = Pipeline::analyze_only(
        &ctx,
        GarmentCategory::Tops,
        "blouse",
        Some(Season::Spring),
        Some(2026),
    )
    .await;

    let analysis = state.trend_analysis.expect("analysis always set");
    assert!(analysis.is_fallback());
    assert_eq!(analysis.season, Season::Spring);
    assert_eq!(analysis.year, 2026);
    let metadata = analysis.web_data_metadata.expect("metadata attached");
    assert_eq!(metadata.sources_count, 0);
    assert_eq!(state.current_step, WorkflowStep::TrendAnalysisComplete);
}

#[tokio::test]
async fn images_are_written_to_the_store() {
    let (_dir, ctx) = context_with(MockConfig::default()).await;
    let state = Pipeline::standard().execute(&ctx, dress_brief(1)).await;

    assert_eq!(state.final_images.len(), 1);
    let listed = ctx.images.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].filename.starts_with("design_prompt_0_"));
}

fn sample_designs() -> Vec<atelier_core::types::DesignConcept> {
    let prompt = atelier_core::types::DesignPrompt::new(
        0,
        "design a dress".into(),
        DesignStrategy::Balanced,
        "general",
        "everyday",
    );
    vec![atelier_core::types::DesignConcept::from_prompt(
        &prompt,
        "A wrap dress in cream crepe.".into(),
        "dress",
        GarmentCategory::Dresses,
    )]
}
