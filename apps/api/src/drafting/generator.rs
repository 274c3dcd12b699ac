//! Resume drafting — validates the form input, fills the prompt template,
//! and returns the model's markdown unmodified.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::drafting::prompts::{DRAFT_PROMPT_TEMPLATE, DRAFT_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, DRAFTING_MODEL, DRAFTING_TEMPERATURE};

/// Required form fields. Whitespace-only counts as empty.
const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "phone", "target_job"];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One field per form input. Optional fields default to empty strings and
/// flow into the prompt as-is; the model is instructed not to invent content
/// for them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub target_job: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub additional_info: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub special_instructions: String,
}

impl DraftRequest {
    /// Required-field check. Must pass before any remote call is made.
    pub fn validate(&self) -> Result<(), AppError> {
        let values = [&self.name, &self.email, &self.phone, &self.target_job];
        for (value, label) in values.into_iter().zip(REQUIRED_FIELDS) {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Required field '{label}' cannot be empty"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftResponse {
    pub resume_markdown: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Drafting pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Drafts a resume from the form input: validate → fill template → LLM call.
pub async fn draft_resume(request: &DraftRequest, llm: &LlmClient) -> Result<String, AppError> {
    request.validate()?;

    let prompt = build_draft_prompt(request);
    info!("Drafting resume targeting '{}'", request.target_job);

    llm.call_text(DRAFTING_MODEL, DRAFTING_TEMPERATURE, &prompt, DRAFT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume drafting failed: {e}")))
}

/// One replacement per named field. Values are inserted verbatim.
fn build_draft_prompt(request: &DraftRequest) -> String {
    DRAFT_PROMPT_TEMPLATE
        .replace("{name}", &request.name)
        .replace("{email}", &request.email)
        .replace("{phone}", &request.phone)
        .replace("{portfolio}", &request.portfolio)
        .replace("{target_job}", &request.target_job)
        .replace("{education}", &request.education)
        .replace("{experience}", &request.experience)
        .replace("{skills}", &request.skills)
        .replace("{additional_info}", &request.additional_info)
        .replace("{job_description}", &request.job_description)
        .replace("{special_instructions}", &request.special_instructions)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request() -> DraftRequest {
        DraftRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0958".to_string(),
            portfolio: "https://ada.dev".to_string(),
            target_job: "Staff Engineer".to_string(),
            education: "BSc Mathematics @ UCL (1840)".to_string(),
            experience: "Analyst @ Analytical Engines (1837-1843)".to_string(),
            skills: "Rust, algorithms, technical writing".to_string(),
            additional_info: "Published notes on computation".to_string(),
            job_description: "We need a staff engineer for compilers".to_string(),
            special_instructions: "Keep it to one page".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(make_request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_blank_required_field() {
        for field in REQUIRED_FIELDS {
            let mut request = make_request();
            match field {
                "name" => request.name = String::new(),
                "email" => request.email = String::new(),
                "phone" => request.phone = String::new(),
                "target_job" => request.target_job = String::new(),
                _ => unreachable!(),
            }

            let err = request.validate().unwrap_err();
            match err {
                AppError::Validation(message) => {
                    assert!(message.contains(field), "message {message:?} for {field}")
                }
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_treats_whitespace_as_empty() {
        let mut request = make_request();
        request.phone = "   \t".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_allows_blank_optional_fields() {
        let request = DraftRequest {
            name: "A".to_string(),
            email: "a@b.c".to_string(),
            phone: "1".to_string(),
            target_job: "Engineer".to_string(),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_draft_prompt_contains_every_field() {
        let request = make_request();
        let prompt = build_draft_prompt(&request);

        assert!(prompt.contains("Ada Lovelace"));
        assert!(prompt.contains("ada@example.com"));
        assert!(prompt.contains("+44 20 7946 0958"));
        assert!(prompt.contains("https://ada.dev"));
        assert!(prompt.contains("Staff Engineer"));
        assert!(prompt.contains("BSc Mathematics @ UCL (1840)"));
        assert!(prompt.contains("Analyst @ Analytical Engines (1837-1843)"));
        assert!(prompt.contains("Rust, algorithms, technical writing"));
        assert!(prompt.contains("Published notes on computation"));
        assert!(prompt.contains("We need a staff engineer for compilers"));
        assert!(prompt.contains("Keep it to one page"));
        assert!(!prompt.contains('{'), "unfilled placeholder in {prompt:?}");
    }

    #[test]
    fn test_missing_json_fields_deserialize_as_empty() {
        let request: DraftRequest =
            serde_json::from_str(r#"{"name": "A", "email": "a@b.c"}"#).unwrap();

        assert_eq!(request.name, "A");
        assert!(request.phone.is_empty());
        assert!(request.special_instructions.is_empty());
    }

    #[tokio::test]
    async fn test_draft_with_blank_required_field_never_calls_the_model() {
        // An unroutable client would hang or error if a call were attempted;
        // validation must reject first.
        let llm = LlmClient::new("test-key".to_string());
        let request = DraftRequest {
            email: "a@b.c".to_string(),
            phone: "1".to_string(),
            target_job: "Engineer".to_string(),
            ..Default::default()
        };

        let err = draft_resume(&request, &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }
}
