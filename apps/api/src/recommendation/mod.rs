// Essay-prompt recommendations: grade mapping, prompt construction, completion
// cleanup and the soft-fail parse path.
// All LLM calls go through llm_client; no direct OpenAI calls here.

pub mod grade;
pub mod handlers;
pub mod models;
pub mod prompts;
