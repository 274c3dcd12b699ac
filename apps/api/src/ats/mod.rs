// ATS Scanner
// Implements: PDF text extraction, embedding similarity scoring, keyword gaps, feedback.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod embedding;
pub mod extract;
pub mod feedback;
pub mod handlers;
pub mod prompts;
pub mod scoring;
