//! Product photograph prompt template.

const PHOTOGRAPHY_SPECS: &str = "\
PHOTOGRAPHY SPECIFICATIONS:
- Professional product photography style
- Studio lighting with soft, even illumination
- Clean, minimalist white or light gray background
- High resolution (4K quality)
- Sharp focus and excellent detail
- Commercial e-commerce photography aesthetic";

const COMPOSITION_REQUIREMENTS: &str = "\
COMPOSITION REQUIREMENTS:
- Centered, well-balanced composition
- Full garment visible in frame
- Professional mannequin or model wearing the garment
- Front view preferred
- Proper proportions and realistic fit
- No distracting elements or props";

const TECHNICAL_QUALITY: &str = "\
TECHNICAL QUALITY:
- Photorealistic rendering
- Accurate color representation
- Proper fabric texture and material appearance
- Professional lighting that eliminates harsh shadows
- High contrast and clarity
- Commercial photography quality";

const CLOSING: &str = "\
The final image should look like a professional product photograph suitable \
for e-commerce product listings, fashion retail websites, marketing \
materials, and product catalogs.

Avoid any artistic illustrations, sketches, or non-photographic styles. Focus \
on creating a realistic, commercial-quality product photograph.";

const DEFAULT_STYLING: &str = "\
- Show proper fit and construction
- Highlight key design features
- Display fabric quality and texture
- Professional styling appropriate for the occasion";

/// Returns styling guidance for a garment type, keyed by lowercase keyword.
///
/// Unknown garment types fall back to generic guidance.
pub fn styling_guidelines(garment_type: &str) -> &'static str {
    match garment_type.to_lowercase().as_str() {
        "dress" => {
            "- Dress should be properly fitted and show natural silhouette\n\
             - Highlight neckline, waistline, and hem details\n\
             - Show fabric drape and movement\n\
             - Professional styling appropriate for the occasion"
        }
        "tops" => {
            "- Show proper fit around shoulders and chest\n\
             - Highlight neckline, sleeves, and hem details\n\
             - Display fabric texture and pattern clearly\n\
             - Professional presentation suitable for target audience"
        }
        "bottoms" => {
            "- Show proper fit at waist and hips\n\
             - Highlight pocket details, seams, and hem\n\
             - Display fabric drape and movement\n\
             - Professional styling that shows versatility"
        }
        "outerwear" => {
            "- Show proper layering and fit\n\
             - Highlight closure details (buttons, zippers, etc.)\n\
             - Display fabric weight and texture\n\
             - Professional styling that shows functionality"
        }
        "jacket" => {
            "- Show proper structure and tailoring\n\
             - Highlight lapels, pockets, and closure details\n\
             - Display fabric quality and construction\n\
             - Professional styling that emphasizes craftsmanship"
        }
        "blazer" => {
            "- Show tailored fit and structure\n\
             - Highlight lapels, buttons, and pocket details\n\
             - Display professional appearance\n\
             - Styling appropriate for business or formal occasions"
        }
        "sweater" => {
            "- Show knit texture and pattern\n\
             - Highlight neckline and sleeve details\n\
             - Display fabric drape and comfort\n\
             - Cozy, professional styling"
        }
        "shirt" => {
            "- Show crisp, clean appearance\n\
             - Highlight collar, cuffs, and button details\n\
             - Display fabric quality and construction\n\
             - Professional styling suitable for work or casual wear"
        }
        _ => DEFAULT_STYLING,
    }
}

/// Renders the full product-photograph prompt for a design concept.
pub fn build_image_prompt(
    concept: &str,
    garment_type: &str,
    target_audience: &str,
    occasion: &str,
) -> String {
    let styling = styling_guidelines(garment_type);

    format!(
        "Create a high-quality, photorealistic product photograph of a \
         {garment_type} based on this design concept:\n\n\
         {concept}\n\n\
         {PHOTOGRAPHY_SPECS}\n\n\
         {COMPOSITION_REQUIREMENTS}\n\n\
         STYLING GUIDELINES:\n\
         - Target audience: {target_audience}\n\
         - Occasion: {occasion}\n\
         - Garment should appear as if ready for retail sale\n\
         - Clean, pressed appearance\n\
         - Natural fabric drape and movement\n\
         {styling}\n\n\
         {TECHNICAL_QUALITY}\n\n\
         {CLOSING}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_garment_types_get_specific_styling() {
        assert!(styling_guidelines("dress").contains("neckline, waistline"));
        assert!(styling_guidelines("Blazer").contains("lapels, buttons"));
        assert!(styling_guidelines("SWEATER").contains("knit texture"));
    }

    #[test]
    fn unknown_garment_types_get_default_styling() {
        assert_eq!(styling_guidelines("kimono"), DEFAULT_STYLING);
        assert_eq!(styling_guidelines(""), DEFAULT_STYLING);
    }

    #[test]
    fn prompt_embeds_concept_and_audience() {
        let prompt = build_image_prompt(
            "A sage green midi dress with patch pockets.",
            "dress",
            "young professionals",
            "work",
        );
        assert!(prompt.contains("photorealistic product photograph of a dress"));
        assert!(prompt.contains("A sage green midi dress with patch pockets."));
        assert!(prompt.contains("Target audience: young professionals"));
        assert!(prompt.contains("Occasion: work"));
        assert!(prompt.contains("neckline, waistline"));
    }
}
