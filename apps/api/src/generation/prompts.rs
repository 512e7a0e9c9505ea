// Prompt template for ad generation.
// Reuses the JSON-only system instruction from llm_client::prompts.

/// Ad generation prompt template.
/// Placeholders: {reviews}, {business_category}, {primary_goal}, {brand_tone}. Filled in one pass.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are an expert advertising strategist working with real businesses.

Customer reviews:
"""
{reviews}
"""

Business context:
- Business category: {business_category}
- Primary goal: {primary_goal}
- Brand tone: {brand_tone}

Instructions:
1. Identify recurring phrases, benefits, and trust signals from the reviews.
2. Use ONLY these insights to generate advertising content.
3. Do NOT invent claims, numbers, awards, guarantees, or outcomes.
4. Use the brand tone specified. Keep language concise, human, and confident.
5. Prefer direct phrases from reviews where possible (quote or lightly paraphrase).
6. If a detail is missing in reviews, omit it entirely.
7. Keep CTAs simple and grounded (no aggressive hype).
8. Headlines should be 4–8 words, body copy 1–2 short sentences.
9. Avoid generic marketing jargon ("world-class", "best-in-class", "unmatched").
10. Ensure each text ad highlights a distinct theme from reviews.
11. For marketing_copy.value_points, keep each point to a short phrase.
12. For marketing_copy.social_proof, use a single sentence in first-person plural (e.g., "Guests mention...").
13. Output must be valid JSON only, no markdown or commentary.

Return VALID JSON in the following structure:

{
  "insights": {
    "phrases": [],
    "benefits": [],
    "trust_signals": []
  },
  "text_ads": [
    { "headline": "", "body": "", "cta": "" },
    { "headline": "", "body": "", "cta": "" },
    { "headline": "", "body": "", "cta": "" }
  ],
  "marketing_copy": {
    "campaign_summary": {
      "objective": "",
      "target_audience": "",
      "emotion": "",
      "proof_source": "Customer reviews"
    },
    "headlines": [],
    "subheadline": "",
    "core_copy": "",
    "value_points": [],
    "social_proof": "",
    "ctas": []
  }
}"#;

/// Number of numbered rules in [`GENERATION_PROMPT_TEMPLATE`].
pub const RULE_COUNT: usize = 13;

/// Required request fields the prompt is built from.
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub business_category: &'a str,
    pub primary_goal: &'a str,
    pub brand_tone: &'a str,
    pub reviews: &'a str,
}

/// Fills the generation template. Every value is embedded verbatim:
/// placeholder-looking text inside a value is never substituted again.
pub fn build_prompt(input: &PromptInput<'_>) -> String {
    fill_template(
        GENERATION_PROMPT_TEMPLATE,
        &[
            ("{reviews}", input.reviews),
            ("{business_category}", input.business_category),
            ("{primary_goal}", input.primary_goal),
            ("{brand_tone}", input.brand_tone),
        ],
    )
}

/// Single pass over `template`. Braces that don't open a known placeholder
/// (the JSON skeleton) are copied through unchanged.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match values.iter().find(|(key, _)| tail.starts_with(*key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
