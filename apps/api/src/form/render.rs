//! Plain-text rendering of the form's status and generated content.

use std::fmt::{self, Display, Formatter};

use crate::form::{FormController, GeneratedContent};

pub const GENERATE_LABEL: &str = "Generate Ads from Customer Voice";
pub const GENERATING_LABEL: &str = "Generating…";

/// Status area: review-line badge, error banner, and the submit button label.
pub fn render_status(form: &FormController) -> String {
    Status(form).to_string()
}

/// The Text Ads, Marketing Copy, and Structured JSON sections of a result.
pub fn render_result(content: &GeneratedContent) -> String {
    content.to_string()
}

/// Status plus the result sections, if a result is stored.
pub fn render_form(form: &FormController) -> String {
    let mut out = render_status(form);
    if let Some(content) = form.result() {
        out.push('\n');
        out.push_str(&render_result(content));
    }
    out
}

struct Status<'a>(&'a FormController);

impl Display for Status<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let form = self.0;
        writeln!(f, "{} review lines detected", form.review_line_count())?;
        if let Some(error) = form.error() {
            writeln!(f, "Error: {error}")?;
        }
        let label = if form.is_loading() {
            GENERATING_LABEL
        } else {
            GENERATE_LABEL
        };
        writeln!(f, "[{label}]")
    }
}

impl Display for GeneratedContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let result = self.view();

        writeln!(f, "== Text Ads ==")?;
        for ad in &result.text_ads {
            writeln!(f, "{}", ad.headline)?;
            writeln!(f, "  {}", ad.body)?;
            writeln!(f, "  -> {}", ad.cta)?;
        }

        let copy = &result.marketing_copy;
        writeln!(f, "\n== Marketing Copy ==")?;
        writeln!(f, "Campaign summary: {}", copy.campaign_summary.objective)?;
        writeln!(f, "  {}", copy.campaign_summary.target_audience)?;
        writeln!(f, "Headlines: {}", copy.headlines.join(" | "))?;
        writeln!(f, "Core copy: {}", copy.core_copy)?;
        writeln!(f, "Value points:")?;
        for point in &copy.value_points {
            writeln!(f, "  • {point}")?;
        }
        writeln!(f, "Social proof: {}", copy.social_proof)?;
        writeln!(f, "CTAs: {}", copy.ctas.join(" | "))?;

        // Serialising a `Value` to a string cannot fail.
        let json = serde_json::to_string_pretty(self.raw()).map_err(|_| fmt::Error)?;
        writeln!(f, "\n== Structured JSON ==")?;
        writeln!(f, "{json}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::generation::models::{CampaignSummary, GenerationResult, MarketingCopy, TextAd};

    fn result() -> GeneratedContent {
        let typed = GenerationResult {
            text_ads: vec![TextAd {
                headline: "Spotless Rooms, Quiet Nights".into(),
                body: "Guests call it unbelievably quiet.".into(),
                cta: "Book now".into(),
            }],
            marketing_copy: MarketingCopy {
                campaign_summary: CampaignSummary {
                    objective: "Get more bookings".into(),
                    target_audience: "Light sleepers".into(),
                    ..Default::default()
                },
                headlines: vec!["Rest Starts Here".into(), "Quiet, Guaranteed by Guests".into()],
                value_points: vec!["Spotless rooms".into()],
                ctas: vec!["Book now".into(), "Learn more".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        GeneratedContent::new(serde_json::to_value(typed).unwrap())
    }

    #[test]
    fn test_status_shows_line_count_and_idle_label() {
        let mut form = FormController::new();
        form.set_reviews("a\n\nb\nc");
        let status = render_status(&form);
        assert!(status.contains("3 review lines detected"));
        assert!(status.contains(GENERATE_LABEL));
        assert!(!status.contains("Error:"));
    }

    #[test]
    fn test_result_sections_render_in_order() {
        let text = render_result(&result());
        let ads = text.find("== Text Ads ==").unwrap();
        let copy = text.find("== Marketing Copy ==").unwrap();
        let json = text.find("== Structured JSON ==").unwrap();
        assert!(ads < copy && copy < json);
        assert!(text.contains("Spotless Rooms, Quiet Nights"));
        assert!(text.contains("  -> Book now"));
        assert!(text.contains("Headlines: Rest Starts Here | Quiet, Guaranteed by Guests"));
        assert!(text.contains("  • Spotless rooms"));
        assert!(text.contains("\"target_audience\": \"Light sleepers\""));
    }

    #[test]
    fn test_status_shows_error_banner() {
        let mut form = FormController::new();
        form.set_reviews("only one");
        assert!(form.begin_submit().is_none());
        let status = render_status(&form);
        assert!(status.contains("Error: Please paste at least 2–3 customer reviews."));
    }

    #[test]
    fn test_structured_json_shows_the_raw_result() {
        let content = GeneratedContent::new(json!({
            "text_ads": [{ "headline": "Quiet", "body": "Rooms", "cta": null }],
            "notes": "kept verbatim"
        }));
        let text = render_result(&content);
        assert!(text.contains("Quiet\n  Rooms\n  -> \n"));
        let json = &text[text.find("== Structured JSON ==").unwrap()..];
        assert!(json.contains("\"notes\": \"kept verbatim\""));
        assert!(json.contains("\"cta\": null"));
    }

    #[test]
    fn test_form_without_result_renders_status_only() {
        let form = FormController::new();
        let text = render_form(&form);
        assert!(text.contains("0 review lines detected"));
        assert!(!text.contains("== Text Ads =="));
    }
}
