//! Chat-completion client that turns extracted text into a summary.
//!
//! Failures never escape as `Err`: a rejected request or a transport problem
//! comes back as a [`SummaryOutcome`] variant carrying a displayable message,
//! so the web page can render it in place of the summary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SummarizerConfig;

/// Length qualifier used when the caller doesn't provide one.
pub const DEFAULT_LENGTH: &str = "breve";

/// Build the instruction sent to the model. `length` is passed through as-is.
pub fn build_prompt(text: &str, length: &str) -> String {
    format!("Riassumi questo testo in modo {}:\n\n{}", length, text)
}

/// Result of one summarization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// Content of the first generated message.
    Summary(String),
    /// The endpoint answered with a non-success status.
    Rejected { status: u16, body: String },
    /// The request never produced a usable answer (network error, timeout,
    /// malformed response body).
    Transport { message: String },
}

impl SummaryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SummaryOutcome::Summary(_))
    }

    /// Human-readable text shown to the user: the summary itself, or an
    /// error description.
    pub fn display_text(&self) -> String {
        self.to_string()
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SummaryOutcome::Summary(_) => "summary",
            SummaryOutcome::Rejected { .. } => "rejected",
            SummaryOutcome::Transport { .. } => "transport",
        }
    }
}

impl fmt::Display for SummaryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryOutcome::Summary(text) => f.write_str(text),
            SummaryOutcome::Rejected { status, body } => {
                write!(f, "Errore API Cerebras: {} - {}", status, body)
            }
            SummaryOutcome::Transport { message } => {
                write!(f, "Errore durante la chiamata API: {}", message)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct SummaryClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
}

impl SummaryClient {
    pub fn new(config: &SummarizerConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the model for a summary of `text` at the requested `length`.
    ///
    /// Exactly one outbound request per call; no retries.
    pub async fn summarize(&self, text: &str, length: &str) -> SummaryOutcome {
        let prompt = build_prompt(text, length);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let outcome = self.send(&request).await;
        match &outcome {
            SummaryOutcome::Summary(summary) => {
                tracing::debug!(model = %self.model, chars = summary.len(), "summary received");
            }
            SummaryOutcome::Rejected { status, .. } => {
                tracing::warn!(model = %self.model, status, "summary request rejected");
            }
            SummaryOutcome::Transport { message } => {
                tracing::warn!(model = %self.model, error = %message, "summary request failed");
            }
        }
        outcome
    }

    async fn send(&self, request: &ChatRequest<'_>) -> SummaryOutcome {
        let resp = match self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                return SummaryOutcome::Transport {
                    message: e.to_string(),
                };
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return SummaryOutcome::Rejected {
                status: status.as_u16(),
                body,
            };
        }

        match resp.json::<ChatResponse>().await {
            Ok(data) => match data.choices.into_iter().next() {
                Some(choice) => SummaryOutcome::Summary(choice.message.content),
                None => SummaryOutcome::Transport {
                    message: "response contained no choices".to_string(),
                },
            },
            Err(e) => SummaryOutcome::Transport {
                message: e.to_string(),
            },
        }
    }
}
