//! ATS scoring: embedding cosine similarity plus keyword-gap extraction.
//!
//! The score is `floor(cosine × 100)` clamped into `[0, 100]`. Keyword gaps
//! are lowercase `\w+` tokens of the job description that never appear in the
//! resume, reported in first-occurrence order and capped at ten.

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::anyhow;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::embedding::Embedder;
use crate::errors::AppError;

/// Upper bound on reported missing keywords.
const MAX_MISSING_KEYWORDS: usize = 10;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word regex is valid"));

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Match score in `[0, 100]`.
    pub score: u8,
    /// Job-description tokens absent from the resume, first-occurrence order.
    pub missing_keywords: Vec<String>,
}

impl ScoreResult {
    fn zero() -> Self {
        Self {
            score: 0,
            missing_keywords: Vec::new(),
        }
    }
}

/// Scores a resume against a job description.
///
/// An empty or whitespace-only job description short-circuits to the zero
/// sentinel without touching the embedding backend. An empty resume is not
/// special-cased: it embeds to a zero-magnitude vector and scores 0 with the
/// job description's own tokens reported as missing.
pub async fn score(
    embedder: &dyn Embedder,
    resume_text: &str,
    job_description: &str,
) -> Result<ScoreResult, AppError> {
    if job_description.trim().is_empty() {
        return Ok(ScoreResult::zero());
    }

    let resume_embedding = embedder.embed(resume_text).await?;
    let jd_embedding = embedder.embed(job_description).await?;
    let similarity = cosine_similarity(&resume_embedding, &jd_embedding)?;
    let score = ((similarity * 100.0).floor() as i32).clamp(0, 100) as u8;

    Ok(ScoreResult {
        score,
        missing_keywords: missing_keywords(resume_text, job_description),
    })
}

/// Deduplicated job-description tokens missing from the resume, in the order
/// they first occur in the job description, capped at [`MAX_MISSING_KEYWORDS`].
fn missing_keywords(resume_text: &str, job_description: &str) -> Vec<String> {
    let resume_words: HashSet<String> = tokenize(resume_text).into_iter().collect();

    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for token in tokenize(job_description) {
        if resume_words.contains(&token) || !seen.insert(token.clone()) {
            continue;
        }
        missing.push(token);
        if missing.len() == MAX_MISSING_KEYWORDS {
            break;
        }
    }

    missing
}

/// Lowercase `\w+` tokens in document order.
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Cosine similarity with a zero-magnitude guard: either vector having zero
/// norm yields 0.0 rather than NaN. A dimension mismatch means the vectors
/// came from different models and is an internal error.
fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, AppError> {
    if a.len() != b.len() {
        return Err(AppError::Internal(anyhow!(
            "embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a * norm_b))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::embedding::testing::{HashEmbedder, UnreachableEmbedder};
    use async_trait::async_trait;

    /// Maps two marker texts to opposing 2-d vectors, everything else to zero.
    struct FixedEmbedder;

    #[async_trait]
    impl Embedder for FixedEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
            Ok(match text {
                "up" => vec![1.0, 0.0],
                "down" => vec![-1.0, 0.0],
                _ => vec![0.0, 0.0],
            })
        }
    }

    #[tokio::test]
    async fn test_empty_job_description_short_circuits_without_embedding() {
        let result = score(&UnreachableEmbedder, "a full resume text", "")
            .await
            .expect("empty job description must not reach the embedder");

        assert_eq!(result.score, 0);
        assert!(result.missing_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_job_description_short_circuits_without_embedding() {
        let result = score(&UnreachableEmbedder, "resume", "  \n\t  ")
            .await
            .expect("whitespace job description must not reach the embedder");

        assert_eq!(result.score, 0);
        assert!(result.missing_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_identical_texts_score_at_ceiling() {
        let text = "Senior Rust engineer building distributed backend services";
        let result = score(&HashEmbedder, text, text).await.unwrap();

        // Cosine of a vector with itself is 1.0 up to float rounding, so the
        // floored score is 99 or 100.
        assert!(result.score >= 99, "got score {}", result.score);
        assert!(result.missing_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_missing_keywords_only_reports_absent_tokens() {
        let result = score(
            &HashEmbedder,
            "I know Python and SQL",
            "Python SQL Docker",
        )
        .await
        .unwrap();

        assert_eq!(result.missing_keywords, vec!["docker"]);
    }

    #[tokio::test]
    async fn test_missing_keywords_keep_job_description_order() {
        let result = score(
            &HashEmbedder,
            "python",
            "kubernetes terraform aws python docker",
        )
        .await
        .unwrap();

        assert_eq!(
            result.missing_keywords,
            vec!["kubernetes", "terraform", "aws", "docker"]
        );
    }

    #[tokio::test]
    async fn test_missing_keywords_capped_at_ten() {
        let jd = "one two three four five six seven eight nine ten eleven twelve";
        let result = score(&HashEmbedder, "nothing matches", jd).await.unwrap();

        assert_eq!(result.missing_keywords.len(), 10);
        assert_eq!(
            result.missing_keywords,
            vec!["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"]
        );
    }

    #[tokio::test]
    async fn test_keyword_comparison_is_case_insensitive() {
        let result = score(&HashEmbedder, "docker aws", "Docker AWS").await.unwrap();
        assert!(result.missing_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_job_description_tokens_reported_once() {
        let result = score(&HashEmbedder, "plain text", "rust rust rust tokio")
            .await
            .unwrap();

        assert_eq!(result.missing_keywords, vec!["rust", "tokio"]);
    }

    #[tokio::test]
    async fn test_empty_resume_scores_zero_with_jd_tokens_missing() {
        let result = score(&HashEmbedder, "", "Rust backend engineer")
            .await
            .unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.missing_keywords, vec!["rust", "backend", "engineer"]);
    }

    #[tokio::test]
    async fn test_negative_similarity_clamps_to_zero() {
        let result = score(&FixedEmbedder, "up", "down").await.unwrap();
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation_and_lowercases() {
        assert_eq!(
            tokenize("CI/CD, Python! (v3.12)"),
            vec!["ci", "cd", "python", "v3", "12"]
        );
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.3, 0.5, 0.2];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-6, "got {sim}");
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-6, "got {sim}");
    }

    #[test]
    fn test_cosine_zero_vector_yields_zero_not_nan() {
        let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch_is_error() {
        assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
    }
}
