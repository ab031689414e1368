//! The text-in, text-out seam between adapters and model backends.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by a [`TextAgent`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    /// The backend answered with an error or could not be reached.
    #[error("Process error (status {status_code:?}): {message}")]
    ProcessError {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// The request could not be built or the response held nothing usable.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// The response text did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl AgentError {
    pub fn process_error_with_retry_after(
        status_code: u16,
        message: impl Into<String>,
        is_retryable: bool,
        retry_after: Duration,
    ) -> Self {
        Self::ProcessError {
            status_code: Some(status_code),
            message: message.into(),
            is_retryable,
            retry_after: Some(retry_after),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ProcessError { is_retryable: true, .. })
    }
}

/// One prompt for a [`TextAgent`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    /// JSON schema the answer must follow; `None` asks for free text.
    pub response_schema: Option<serde_json::Value>,
}

impl AgentRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_response_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// A model backend that turns a prompt into raw text.
#[async_trait]
pub trait TextAgent: Send + Sync {
    /// Short human-readable description used in logs.
    fn expertise(&self) -> &str;

    async fn execute(&self, request: AgentRequest) -> Result<String, AgentError>;
}

/// Strips a surrounding Markdown code fence (```json ... ```), if any.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
