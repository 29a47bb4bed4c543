// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt that enforces raw JSON output with no fences or commentary.
pub const JSON_ONLY_SYSTEM: &str = "You are an AI assistant that always responds in valid JSON format only. \
    Never use markdown formatting like ```json or ``` code blocks around your JSON. \
    Your entire response should be valid JSON only, with no additional text.";
