//! Scan feedback — turns a score and keyword gaps into concrete LLM advice.

use crate::ats::prompts::{FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM};
use crate::ats::scoring::ScoreResult;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, FEEDBACK_MODEL, FEEDBACK_TEMPERATURE};

/// Asks the feedback model for improvement advice given the scan results.
/// Returns the model's text as-is.
pub async fn generate_feedback(
    result: &ScoreResult,
    job_description: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = build_feedback_prompt(result, job_description);
    llm.call_text(FEEDBACK_MODEL, FEEDBACK_TEMPERATURE, &prompt, FEEDBACK_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Feedback generation failed: {e}")))
}

fn build_feedback_prompt(result: &ScoreResult, job_description: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE
        .replace("{ats_score}", &result.score.to_string())
        .replace("{missing_keywords}", &result.missing_keywords.join(", "))
        .replace("{job_description}", job_description)
}
