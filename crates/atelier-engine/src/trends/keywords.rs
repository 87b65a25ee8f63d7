//! Deterministic keyword bucketing of search snippets.
//!
//! A snippet lands in a bucket when it contains any of that bucket's keywords
//! as a case-insensitive substring. No stemming, no scoring beyond presence.

/// Keywords that mark a snippet as color-related.
const COLOR_KEYWORDS: &[&str] = &[
    "color", "hue", "shade", "palette", "chromatic", "neutral", "bold", "vibrant",
];

/// Keywords that mark a snippet as material-related.
const MATERIAL_KEYWORDS: &[&str] = &[
    "fabric",
    "material",
    "textile",
    "cotton",
    "silk",
    "wool",
    "sustainable",
    "organic",
    "recycled",
];

/// Keywords that mark a snippet as style-related.
const STYLE_KEYWORDS: &[&str] = &[
    "style",
    "silhouette",
    "cut",
    "fit",
    "design",
    "aesthetic",
    "look",
    "vibe",
];

/// Keywords that mark a snippet as trend-related.
const TREND_KEYWORDS: &[&str] = &[
    "trend",
    "trending",
    "popular",
    "emerging",
    "hot",
    "must-have",
    "in-demand",
];

/// Which mention buckets a snippet belongs to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MentionBuckets {
    pub color: bool,
    pub material: bool,
    pub style: bool,
    pub trend: bool,
}

impl MentionBuckets {
    /// Returns true if the snippet matched no bucket.
    pub fn is_empty(self) -> bool {
        !(self.color || self.material || self.style || self.trend)
    }
}

/// Buckets a snippet by keyword presence.
///
/// Deterministic: the same content always maps to the same bucket subset.
pub fn bucket_mentions(content: &str) -> MentionBuckets {
    let lower = content.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    MentionBuckets {
        color: contains_any(COLOR_KEYWORDS),
        material: contains_any(MATERIAL_KEYWORDS),
        style: contains_any(STYLE_KEYWORDS),
        trend: contains_any(TREND_KEYWORDS),
    }
}

/// Truncates to at most `max_chars` characters on a char boundary.
///
/// Snippet bounds are counted in characters, not bytes, so multi-byte text
/// never splits mid-codepoint.
pub fn truncate_chars(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}
