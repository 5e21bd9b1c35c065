//! HTTP scoring oracle over an OpenAI-compatible chat completions API.
//!
//! Each port operation is one prompt round-trip: the model is instructed to
//! answer with bare JSON, and the reply is defensively stripped of markdown
//! code fences before parsing. Transport and parse failures both surface as
//! [`OracleError`] so the application layer can take its fallback path.

use acumen_application::ports::scoring_oracle::{
    AnswerScores, InterviewDigest, OracleError, ScoreRequest, ScoringOracle, SummaryInsights,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Connection settings for the oracle endpoint.
#[derive(Debug, Clone)]
pub struct OracleSettings {
    /// Base URL of the chat completions endpoint, e.g.
    /// `https://api.groq.com/openai/v1`.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

const SYSTEM_INSTRUCTION: &str = "You are an expert technical interviewer. \
    Respond in plain text only, without HTML tags or markdown formatting.";

const JSON_INSTRUCTION: &str = "\n\nRespond with valid JSON only, no additional text.";

/// Scoring oracle backed by an OpenAI-compatible HTTP API.
pub struct HttpScoringOracle {
    client: reqwest::Client,
    settings: OracleSettings,
}

impl HttpScoringOracle {
    pub fn new(settings: OracleSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    /// One chat round-trip, returning the assistant's text.
    async fn complete(&self, prompt: &str) -> Result<String, OracleError> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let url = format!("{}/chat/completions", self.settings.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| OracleError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::RequestFailed(format!(
                "HTTP {} from oracle endpoint",
                status.as_u16()
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Malformed(e.to_string()))?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| OracleError::Malformed("empty choices in oracle reply".to_string()))?;
        debug!(bytes = content.len(), "oracle reply received");
        Ok(content)
    }

    /// One JSON round-trip: append the JSON-only instruction, strip any
    /// markdown fences the model wrapped the payload in, and deserialize.
    async fn complete_json<T: serde::de::DeserializeOwned>(
        &self,
        prompt: &str,
    ) -> Result<T, OracleError> {
        let full_prompt = format!("{prompt}{JSON_INSTRUCTION}");
        let text = self.complete(&full_prompt).await?;
        let cleaned = strip_code_fences(&text);
        serde_json::from_str(cleaned).map_err(|e| OracleError::Malformed(e.to_string()))
    }
}

/// Remove a surrounding ```json ... ``` (or bare ```) fence, if present.
fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

#[async_trait]
impl ScoringOracle for HttpScoringOracle {
    async fn score_answer(&self, request: &ScoreRequest) -> Result<AnswerScores, OracleError> {
        let expected = if request.expected_points.is_empty() {
            String::new()
        } else {
            format!("Expected answer points: {}\n", request.expected_points.join("; "))
        };
        let prompt = format!(
            "You are evaluating a candidate's response in a technical interview.\n\n\
             Question: {question}\n\
             Category: {category}\n\
             Difficulty: {difficulty}\n\
             {expected}\
             Candidate's Answer: {answer}\n\n\
             Evaluate this answer across four dimensions with scores 0-100:\n\
             1. Technical Accuracy (40% weight): How technically correct is the answer?\n\
             2. Depth of Knowledge (25% weight): Does the answer demonstrate deep understanding?\n\
             3. Problem-Solving Approach (20% weight): Is the approach logical and efficient?\n\
             4. Communication Clarity (15% weight): How clearly is the answer explained?\n\n\
             Provide your evaluation in the following JSON format:\n\
             {{\n\
                 \"technical_score\": <0-100>,\n\
                 \"depth_score\": <0-100>,\n\
                 \"problem_solving_score\": <0-100>,\n\
                 \"communication_score\": <0-100>,\n\
                 \"feedback\": \"Detailed feedback explaining the scores\",\n\
                 \"strengths\": [\"strength1\", \"strength2\"],\n\
                 \"improvements\": [\"improvement1\", \"improvement2\"],\n\
                 \"follow_up_questions\": [\"question1\", \"question2\"]\n\
             }}\n\n\
             Be fair but thorough. Consider the difficulty level when scoring.",
            question = request.question,
            category = request.category,
            difficulty = request.difficulty,
            answer = request.answer,
        );
        self.complete_json(&prompt).await
    }

    async fn classify_experience(&self, free_text: &str) -> Result<String, OracleError> {
        let prompt = format!(
            "A candidate described their experience level as follows:\n\n\
             \"{free_text}\"\n\n\
             Classify this into a single short experience label such as \
             \"beginner\", \"intermediate\", \"advanced\" or \"expert\". \
             Reply with the label only, on one line."
        );
        let label = self.complete(&prompt).await?;
        Ok(label.lines().next().unwrap_or("").trim().to_string())
    }

    async fn summarize_interview(
        &self,
        digest: &InterviewDigest,
    ) -> Result<SummaryInsights, OracleError> {
        let digest_json = serde_json::to_string_pretty(digest)
            .map_err(|e| OracleError::Malformed(e.to_string()))?;
        let prompt = format!(
            "You are providing a final assessment summary for a technical interview.\n\n\
             Interview Data:\n{digest_json}\n\n\
             Summarize the candidate's performance. Provide your assessment in the \
             following JSON format:\n\
             {{\n\
                 \"key_strengths\": [\"strength1\", \"strength2\", \"strength3\"],\n\
                 \"improvement_areas\": [\"area1\", \"area2\", \"area3\"],\n\
                 \"development_recommendations\": [\"rec1\", \"rec2\", \"rec3\"]\n\
             }}"
        );
        self.complete_json(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_json_fence() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(text), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_code_fences_bare_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(text), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_code_fences_no_fence() {
        let text = "  {\"a\": 1}  ";
        assert_eq!(strip_code_fences(text), "{\"a\": 1}");
    }

    #[test]
    fn test_answer_scores_parse_with_extra_fields() {
        // The model may echo an overall_score field; it is ignored, the
        // weighted overall is always recomputed locally.
        let raw = r#"{
            "technical_score": 82,
            "depth_score": 74.5,
            "problem_solving_score": 68,
            "communication_score": 90,
            "overall_score": 79.1,
            "feedback": "Solid answer",
            "strengths": ["formula knowledge"],
            "improvements": ["mention error handling"],
            "follow_up_questions": []
        }"#;
        let scores: AnswerScores = serde_json::from_str(raw).unwrap();
        assert!((scores.technical_score - 82.0).abs() < 1e-9);
        assert!((scores.depth_score - 74.5).abs() < 1e-9);
        assert_eq!(scores.strengths.len(), 1);
    }
}
