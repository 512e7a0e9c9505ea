// Cross-cutting prompt fragments shared by every chat-completion call.
// Feature prompts live in a prompts.rs next to the feature that uses them.

/// System instruction that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str =
    "Return only valid JSON. Do not wrap in markdown or add commentary.";
