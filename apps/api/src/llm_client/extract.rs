//! Tolerant JSON extraction from free-text model output.
//!
//! Models asked for "JSON only" still sometimes wrap the object in prose or
//! markdown fences. Extraction tries, in order: the whole text, the text with
//! code fences stripped, then every top-level `{...}` span found by a
//! balanced-brace scan that respects string literals and escapes.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no parseable JSON object found in model output")]
pub struct ExtractError;

/// Extracts the first well-formed JSON value from `text`.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    let unfenced = strip_json_fences(trimmed);
    if unfenced.len() != trimmed.len() {
        if let Ok(value) = serde_json::from_str(unfenced) {
            return Ok(value);
        }
    }

    object_spans(trimmed)
        .into_iter()
        .find_map(|span| serde_json::from_str(span).ok())
        .ok_or(ExtractError)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match stripped {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

/// Balanced `{...}` spans of `text`, in order, found in a single pass.
///
/// Braces inside string literals do not count toward depth; quotes outside
/// any object are plain text. A closing brace with no open object is skipped.
/// An object that never closes is dropped and its complete children take its
/// place. A span nested inside another complete span is never yielded alone.
fn object_spans(text: &str) -> Vec<&str> {
    let mut open: Vec<usize> = Vec::new();
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' if !open.is_empty() => in_string = true,
            '{' => open.push(idx),
            '}' => {
                if let Some(start) = open.pop() {
                    while spans.last().is_some_and(|&(inner, _)| inner > start) {
                        spans.pop();
                    }
                    spans.push((start, idx + 1));
                }
            }
            _ => {}
        }
    }

    spans
        .into_iter()
        .map(|(start, end)| &text[start..end])
        .collect()
}
