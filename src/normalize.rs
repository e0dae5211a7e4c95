//! Turns a provider completion into a `CommentResult`

use log::{debug, error};

use crate::error::Error;
use crate::providers::openrouter::ChatResponse;
use crate::request::CommentResult;

/// Pull the first choice's content out of a completion
pub fn extract_comment(
  response: Option<&ChatResponse>
) -> Result<String, Error>
{   response
      .and_then(ChatResponse::first_content)
      .map(str::to_string)
      .ok_or_else(|| {
        error!("No usable choice in provider response");
        Error::NoChoicesInResponse
      })
}

/// Never fails; a missing or empty completion becomes a failure result
pub fn normalize(response: Option<&ChatResponse>) -> CommentResult
{   match extract_comment(response)
    {   Ok(comment) => {
          debug!("Comment generated ({} bytes)", comment.len());
          CommentResult::success(comment)
        }
      , Err(e) => CommentResult::from(e)
    }
}
