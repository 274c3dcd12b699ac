// Resume Drafting
// Implements: form validation, prompt assembly, LLM drafting, docx export.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod prompts;
