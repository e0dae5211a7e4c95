//! Request orchestration: payload, one outbound call, normalisation

use log::{debug, info, error};

use crate::adapter::build_payload;
use crate::config::RelayConfig;
use crate::error::Error;
use crate::normalize::{extract_comment, normalize};
use crate::providers::openrouter::OpenRouterClient;
use crate::request::{CommentRequest, CommentResult};

/// Owns the immutable relay configuration and the provider client
#[derive(Debug, Clone)]
pub struct CommentService
{   config: RelayConfig
  , client: OpenRouterClient
}

impl CommentService
{   /// Validate the configuration and build the provider client
    pub fn new(config: RelayConfig) -> Result<Self, Error>
    {   config.validate()?;
        let client = OpenRouterClient::new(&config)?;
        info!(
          "CommentService ready (model {}, endpoint {})"
        , config.model, config.api_url
        );
        Ok(CommentService { config, client })
    }

    pub fn config(&self) -> &RelayConfig
    {   &self.config
    }

    /// Typed variant: the comment or the reason there is none
    pub async fn try_generate_comment(
      &self
    , request: &CommentRequest
    ) -> crate::SendCommentReply
    {   let payload = build_payload(request, &self.config.model);
        let response = self.client.send(&payload).await?;
        extract_comment(Some(&response))
    }

    /// Never fails; every error becomes a `success: false` result
    pub async fn generate_comment(
      &self
    , request: &CommentRequest
    ) -> CommentResult
    {   debug!(
          "generate_comment for {} -> {}"
        , request.code_language, request.user_language
        );
        let payload = build_payload(request, &self.config.model);

        match self.client.send(&payload).await
        {   Ok(response) => normalize(Some(&response))
          , Err(e) => {
              error!("Provider call failed: {}", e);
              CommentResult::from(e)
            }
        }
    }
}
