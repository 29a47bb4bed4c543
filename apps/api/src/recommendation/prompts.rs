// LLM prompt templates for essay-prompt recommendations.
// The system prompt is the shared JSON_ONLY_SYSTEM from llm_client::prompts.

use crate::recommendation::models::EssayPromptRequest;

/// Number of prompts requested from the model. The response is not checked against it.
pub const PROMPT_COUNT: usize = 4;

/// Recommendation prompt template.
/// Placeholders: {count}, {grade}, {education_level}, {guidance_clause}, {exclude_clause}, {topic}
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"Create {count} thoughtful argumentative essay prompts for {grade} students on the topic of "{topic}".
{guidance_clause}
{exclude_clause}

Each prompt should:
1. Have a specific, thought-provoking title that clearly presents an argumentative angle
2. Include a detailed description (3-4 sentences) that:
   - Clearly states what position students should take or what question they should answer
   - Provides context about why this is a debatable issue
   - Suggests specific aspects to address or arguments to consider
   - Is appropriately challenging for {grade} {education_level} students

Make each prompt genuinely argumentative (requiring students to take a position and defend it),
not merely informative or explanatory.

Format the response as a JSON object with this structure:
{
  "subtopics": [
    {
      "title": "Clear argumentative title that presents a position or question",
      "description": "Detailed description that gives context and guidance for writing an argumentative essay"
    }
  ]
}

VERY IMPORTANT: Return ONLY the JSON with NO markdown formatting, NO code blocks, and NO explanatory text."#;

pub fn guidance_clause(guidance: &str) -> String {
    format!("IMPORTANT: Use this additional guidance to focus the prompts: \"{guidance}\"")
}

pub fn exclude_clause(exclude: &[String]) -> String {
    format!(
        "DO NOT suggest any of these previously used prompts (avoid similar concepts too): {}",
        exclude.join(", ")
    )
}

/// Fills the recommendation template. Empty guidance and exclusion lists leave blank lines.
pub fn build_recommendation_prompt(request: &EssayPromptRequest) -> String {
    let guidance = request
        .guidance
        .as_deref()
        .map(guidance_clause)
        .unwrap_or_default();
    let exclude = if request.exclude.is_empty() {
        String::new()
    } else {
        exclude_clause(&request.exclude)
    };

    let count = PROMPT_COUNT.to_string();
    let grade = request.grade.display_name();
    fill_template(
        RECOMMEND_PROMPT_TEMPLATE,
        &[
            ("{count}", count.as_str()),
            ("{grade}", grade.as_str()),
            ("{education_level}", request.grade.education_level.label()),
            ("{guidance_clause}", guidance.as_str()),
            ("{exclude_clause}", exclude.as_str()),
            ("{topic}", request.topic.as_str()),
        ],
    )
}

/// Substitutes placeholders in one left-to-right pass over the template.
/// Inserted values are never scanned again, so user text survives as typed.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(*key)) {
            Some(&(key, value)) => {
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
