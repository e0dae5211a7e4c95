//! Inbound request and outbound result types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MSG_SUCCESS: &str = "comment generated successfully";
pub const MSG_INVALID_RESPONSE: &str = "invalid provider response";
pub const MSG_PROVIDER_ERROR_PREFIX: &str = "provider error: ";

/// One documentation request from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest
{   /// Code to comment
    #[schema(example = "public int sumar(int a, int b) { return a + b; }")]
    pub code: String
  , /// Additional information about the code
    #[serde(default)]
    #[schema(example = "")]
    pub description: Option<String>
  , /// The programming language
    #[schema(example = "Java")]
    pub code_language: String
  , /// The natural language to write the comment in
    #[schema(example = "English")]
    pub user_language: String
}

impl CommentRequest
{   pub fn new(
      code: impl Into<String>
    , code_language: impl Into<String>
    , user_language: impl Into<String>
    ) -> Self
    {   CommentRequest
        {   code: code.into()
          , description: None
          , code_language: code_language.into()
          , user_language: user_language.into()
        }
    }

    pub fn with_description(
      mut self
    , description: impl Into<String>
    ) -> Self
    {   self.description = Some(description.into());
        self
    }
}

/// Uniform result returned to the caller
///
/// `commented_code` is present only when `success` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResult
{   /// Generated comment, null on failure
    pub commented_code: Option<String>
  , /// Human readable status
    pub message: String
  , /// Whether a comment was generated
    pub success: bool
}

impl CommentResult
{   pub fn success(comment: String) -> Self
    {   CommentResult
        {   commented_code: Some(comment)
          , message: MSG_SUCCESS.to_string()
          , success: true
        }
    }

    pub fn failure(message: impl Into<String>) -> Self
    {   CommentResult
        {   commented_code: None
          , message: message.into()
          , success: false
        }
    }
}

impl From<crate::error::Error> for CommentResult
{   fn from(e: crate::error::Error) -> Self
    {   match e
        {   crate::error::Error::NoChoicesInResponse => {
              CommentResult::failure(MSG_INVALID_RESPONSE)
            }
          , e if e.is_transport() => {
              CommentResult::failure(
                format!("{}{}", MSG_PROVIDER_ERROR_PREFIX, e)
              )
            }
          , e => CommentResult::failure(e.to_string())
        }
    }
}
