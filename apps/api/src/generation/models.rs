use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body for `POST /api/generate`.
///
/// Every field is optional on the wire so that a missing required field is
/// reported as a 400 by validation instead of as a deserialisation rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_tone: Option<String>,
    /// Newline-delimited review text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<String>,
    #[serde(
        rename = "preferredCTA",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_cta: Option<String>,
    #[serde(default)]
    pub output_formats: Vec<String>,
}

/// Parsed model output. Fields default when the model omits them or sends
/// `null`; nothing beyond JSON well-formedness is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationResult {
    #[serde(deserialize_with = "null_as_default")]
    pub insights: Insights,
    #[serde(deserialize_with = "null_as_default")]
    pub text_ads: Vec<TextAd>,
    #[serde(deserialize_with = "null_as_default")]
    pub marketing_copy: MarketingCopy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insights {
    #[serde(deserialize_with = "null_as_default")]
    pub phrases: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub trust_signals: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAd {
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cta: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingCopy {
    #[serde(deserialize_with = "null_as_default")]
    pub campaign_summary: CampaignSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub headlines: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub subheadline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub core_copy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value_points: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub social_proof: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ctas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub objective: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_audience: String,
    #[serde(deserialize_with = "null_as_default")]
    pub emotion: String,
    #[serde(deserialize_with = "null_as_default")]
    pub proof_source: String,
}

impl GenerationResult {
    /// Typed view of arbitrary model output. A section that doesn't fit its
    /// shape comes back empty instead of failing the whole result.
    pub fn from_value_lenient(value: &Value) -> Self {
        Self {
            insights: section(value, "insights"),
            text_ads: section(value, "text_ads"),
            marketing_copy: section(value, "marketing_copy"),
        }
    }
}

fn section<T: DeserializeOwned + Default>(value: &Value, key: &str) -> T {
    value
        .get(key)
        .and_then(|found| T::deserialize(found).ok())
        .unwrap_or_default()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
