//! Generation form controller.
//!
//! Holds the state behind the "create your ad engine" form: business
//! metadata, pasted reviews, the loading flag, the last error, and the last
//! result. Submission is gated on a minimum number of review lines and makes
//! exactly one call to the generate endpoint.

pub mod catalog;
pub mod client;
pub mod render;

use serde_json::Value;
use tracing::{debug, warn};

use crate::generation::models::{GenerationRequest, GenerationResult};

use catalog::{BrandTone, BusinessCategory, CallToAction, OutputFormat, PrimaryGoal};
use client::{ClientError, GenerateClient};

/// Submissions with fewer non-blank review lines are blocked client-side.
pub const MIN_REVIEW_LINES: usize = 2;

pub const TOO_FEW_REVIEWS_MESSAGE: &str = "Please paste at least 2–3 customer reviews.";
/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong.";

/// Which part of the result a copy action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    TextAds,
    MarketingCopy,
    All,
}

/// A stored result: the endpoint's JSON exactly as returned, plus a typed
/// view of it for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    raw: Value,
    view: GenerationResult,
}

impl GeneratedContent {
    pub fn new(raw: Value) -> Self {
        let view = GenerationResult::from_value_lenient(&raw);
        Self { raw, view }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn view(&self) -> &GenerationResult {
        &self.view
    }
}

/// Form state. Every field is mutated directly by its setter.
#[derive(Debug, Clone)]
pub struct FormController {
    business_name: String,
    business_category: BusinessCategory,
    primary_goal: PrimaryGoal,
    brand_tone: BrandTone,
    selected_outputs: Vec<OutputFormat>,
    reviews: String,
    preferred_cta: Option<CallToAction>,
    is_loading: bool,
    error: Option<String>,
    result: Option<GeneratedContent>,
}

impl Default for FormController {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            business_category: BusinessCategory::default(),
            primary_goal: PrimaryGoal::default(),
            brand_tone: BrandTone::default(),
            selected_outputs: OutputFormat::ALL.to_vec(),
            reviews: String::new(),
            preferred_cta: None,
            is_loading: false,
            error: None,
            result: None,
        }
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_business_name(&mut self, name: impl Into<String>) {
        self.business_name = name.into();
    }

    pub fn set_business_category(&mut self, category: BusinessCategory) {
        self.business_category = category;
    }

    pub fn set_primary_goal(&mut self, goal: PrimaryGoal) {
        self.primary_goal = goal;
    }

    pub fn set_brand_tone(&mut self, tone: BrandTone) {
        self.brand_tone = tone;
    }

    pub fn set_reviews(&mut self, reviews: impl Into<String>) {
        self.reviews = reviews.into();
    }

    pub fn set_preferred_cta(&mut self, cta: CallToAction) {
        self.preferred_cta = Some(cta);
    }

    /// Selects `format` if unselected, otherwise deselects it.
    /// Newly selected formats go to the end.
    pub fn toggle_output(&mut self, format: OutputFormat) {
        if let Some(pos) = self.selected_outputs.iter().position(|f| *f == format) {
            self.selected_outputs.remove(pos);
        } else {
            self.selected_outputs.push(format);
        }
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn business_category(&self) -> BusinessCategory {
        self.business_category
    }

    pub fn primary_goal(&self) -> PrimaryGoal {
        self.primary_goal
    }

    pub fn brand_tone(&self) -> BrandTone {
        self.brand_tone
    }

    pub fn selected_outputs(&self) -> &[OutputFormat] {
        &self.selected_outputs
    }

    pub fn reviews(&self) -> &str {
        &self.reviews
    }

    pub fn preferred_cta(&self) -> Option<CallToAction> {
        self.preferred_cta
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&GeneratedContent> {
        self.result.as_ref()
    }

    /// Number of non-blank lines in the pasted reviews.
    pub fn review_line_count(&self) -> usize {
        count_review_lines(&self.reviews)
    }

    /// Snapshot of the form as the endpoint's request body.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            business_name: Some(self.business_name.clone()),
            business_category: Some(self.business_category.label().to_string()),
            primary_goal: Some(self.primary_goal.label().to_string()),
            brand_tone: Some(self.brand_tone.label().to_string()),
            reviews: Some(self.reviews.clone()),
            preferred_cta: Some(
                self.preferred_cta
                    .map(|c| c.label().to_string())
                    .unwrap_or_default(),
            ),
            output_formats: self
                .selected_outputs
                .iter()
                .map(|f| f.label().to_string())
                .collect(),
        }
    }

    /// Validates and submits the form through `client`.
    ///
    /// Too few review lines sets an error without calling the client. Otherwise
    /// the client is called once; its result replaces the stored one, or its
    /// error message is stored. The previous result is kept on failure.
    pub async fn submit(&mut self, client: &dyn GenerateClient) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let outcome = client.generate(&request).await;
        self.finish_submit(outcome);
    }

    /// First half of [`submit`](Self::submit). Clears the error and, if the
    /// reviews pass the line check, enters the loading state and returns the
    /// request to send. The form stays loading until
    /// [`finish_submit`](Self::finish_submit) is called.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        self.error = None;

        let lines = self.review_line_count();
        if lines < MIN_REVIEW_LINES {
            debug!("Blocked submission with {lines} review line(s)");
            self.error = Some(TOO_FEW_REVIEWS_MESSAGE.to_string());
            return None;
        }

        self.is_loading = true;
        Some(self.to_request())
    }

    /// Second half of [`submit`](Self::submit): stores the outcome and leaves
    /// the loading state.
    pub fn finish_submit(&mut self, outcome: Result<Value, ClientError>) {
        match outcome {
            Ok(value) => self.result = Some(GeneratedContent::new(value)),
            Err(e) => {
                warn!("Generation failed: {e}");
                let message = e.to_string();
                self.error = Some(if message.is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
            }
        }
        self.is_loading = false;
    }

    /// Pretty-printed JSON for a copy-to-clipboard action, taken from the
    /// result exactly as the endpoint returned it. `None` when nothing has been
    /// generated yet or the targeted section is absent.
    pub fn copy_text(&self, target: CopyTarget) -> Option<String> {
        let raw = self.result.as_ref()?.raw();
        let value = match target {
            CopyTarget::TextAds => raw.get("text_ads")?,
            CopyTarget::MarketingCopy => raw.get("marketing_copy")?,
            CopyTarget::All => raw,
        };
        serde_json::to_string_pretty(value).ok()
    }
}

/// Counts lines that contain something other than whitespace.
pub fn count_review_lines(reviews: &str) -> usize {
    reviews
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .count()
}
