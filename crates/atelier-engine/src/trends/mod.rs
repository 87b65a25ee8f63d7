//! Trend gathering and AI analysis.

mod analyze;
mod gather;
mod keywords;
mod queries;

pub use analyze::{analyze_trends, parse_trend_analysis, prepare_web_content};
pub use gather::{GatheredTrendData, RawSource, SourcePreview, gather_trend_data};
pub use keywords::{MentionBuckets, bucket_mentions, truncate_chars};
pub use queries::trend_search_queries;

/// Tracing target for trend operations.
pub const TRACING_TARGET: &str = "atelier_engine::trends";
