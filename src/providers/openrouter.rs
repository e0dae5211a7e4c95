use serde::{Deserialize, Serialize};
use std::time::Duration;
use log::{debug, trace, error};

use crate::config::RelayConfig;
use crate::error::Error;

// ===== Message Types =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   System
  , User
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: Role
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage { role: Role::User, content: content.into() }
    }
}

/// Chat completion payload sent to OpenRouter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest
{   pub messages: Vec<ChatMessage>
  , pub model: String
  , pub temperature: f32
  , pub max_tokens: u32
}

/// Only the pieces of the completion we read.
/// Missing fields are kept as None so an empty answer
/// is told apart from an undecodable one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse
{   #[serde(default)]
    pub choices: Option<Vec<Choice>>
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice
{   #[serde(default)]
    pub message: Option<ResponseMessage>
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub content: Option<String>
}

impl ChatResponse
{   /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str>
    {   self.choices.as_ref()?
          .first()?
          .message.as_ref()?
          .content.as_deref()
    }
}

// ===== OpenRouter Client =====

/// Issues one chat completion call per request
#[derive(Clone)]
pub struct OpenRouterClient
{   api_url: String
  , api_key: String
  , http_client: reqwest::Client
}

impl std::fmt::Debug for OpenRouterClient
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {   f.debug_struct("OpenRouterClient")
          .field("api_url", &self.api_url)
          .finish_non_exhaustive()
    }
}

impl OpenRouterClient
{   /// Build a client with the configured timeout
    pub fn new(config: &RelayConfig) -> Result<Self, Error>
    {   debug!(
          "Creating OpenRouterClient for {} (timeout {}s)"
        , config.api_url, config.timeout_secs
        );
        let http_client = reqwest::Client::builder()
          .timeout(Duration::from_secs(config.timeout_secs))
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(OpenRouterClient
        {   api_url: config.api_url.clone()
          , api_key: config.api_key.clone()
          , http_client
        })
    }

    /// POST the payload and decode the completion
    pub async fn send(
      &self
    , request: &ChatRequest
    ) -> Result<ChatResponse, Error>
    {   debug!("Sending chat request for model: {}", request.model);
        trace!("OpenRouter request: {:?}", request);

        let response = self.http_client
          .post(&self.api_url)
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::from(e)
          })?;

        let status = response.status();
        trace!("OpenRouter response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenRouter API error {}: {}", status, body);
            return Err(Error::ApiError
            {   status: status.as_u16()
              , body
            });
        }

        let body = response.text().await
          .map_err(|e| {
            error!("Failed to read response body: {}", e);
            Error::from(e)
          })?;
        trace!("OpenRouter response body: {}", body);

        serde_json::from_str(&body).map_err(|e| {
          error!("Parse error: {}", e);
          Error::ParseError(e.to_string())
        })
    }
}
