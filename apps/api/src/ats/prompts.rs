// All LLM prompt constants for the ATS scanner module.

/// System prompt for scan feedback. Plain-text advice, no follow-ups.
pub const FEEDBACK_SYSTEM: &str =
    "You are an expert in Applicant Tracking Systems (ATS) and resume optimization. \
    Your job is to give precise and practical advice to improve a resume's compatibility \
    with ATS software. You are provided with the resume's ATS score, missing keywords, \
    and the job description. Use these inputs to suggest improvements in a crisp, \
    professional tone. Do not ask any follow-up questions or request the resume — \
    just give the feedback and stop.";

/// Feedback prompt template.
/// Replace: `{ats_score}`, `{missing_keywords}`, `{job_description}`
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"ATS Score: {ats_score}

Missing Keywords: {missing_keywords}

Job Description:
{job_description}

Give feedback that improves the resume's ATS score by suggesting what sections to revise, which keywords to include, and what phrasing or achievements might help it better match the job description."#;
