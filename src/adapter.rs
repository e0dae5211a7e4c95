//! Turns a comment request into a provider chat payload

use log::{debug, trace};

use crate::providers::openrouter::{ChatMessage, ChatRequest};
use crate::request::CommentRequest;
use crate::style::comment_style;

pub const USER_PROMPT_PREFIX: &str = "Comment the following code: ";
pub const TEMPERATURE: f32 = 0.2;
pub const MAX_TOKENS: u32 = 100;

/// System instruction for a language, style and output language
pub fn system_prompt(
  code_language: &str
, style: &str
, user_language: &str
) -> String
{   format!(
      "You are a {} documentation assistant. \
       Always return only the {} comment without any extra text. \
       Language: {}"
    , code_language, style, user_language
    )
}

/// Build the two-message payload: system then user.
/// Code and language strings pass through verbatim.
pub fn build_payload(
  request: &CommentRequest
, model: &str
) -> ChatRequest
{   let style = comment_style(&request.code_language);
    debug!(
      "Building payload for {} using {} style"
    , request.code_language, style
    );
    if let Some(description) = request.description.as_deref()
    {   trace!("Caller description (not forwarded): {}", description);
    }

    let messages = vec![
      ChatMessage::system(system_prompt(
        &request.code_language
      , style
      , &request.user_language
      ))
    , ChatMessage::user(
        format!("{}{}", USER_PROMPT_PREFIX, request.code)
      )
    ];

    ChatRequest
    {   messages
      , model: model.to_string()
      , temperature: TEMPERATURE
      , max_tokens: MAX_TOKENS
    }
}
