use std::fmt;

/// Error type for the comment relay
/// Implements Clone so results can be logged and returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Required setting (endpoint URL, API key) is absent
    MissingConfiguration(String)
  , /// Setting present but unusable
    InvalidConfiguration(String)
  , /// Network level failure reaching the provider
    HttpError(String)
  , /// Provider answered with a non-success status
    ApiError
    {   status: u16
      , body: String
    }
  , /// Failed to decode the provider response body
    ParseError(String)
  , /// Outbound call exceeded the configured timeout
    Timeout
  , /// Provider answered 2xx without a usable choice
    NoChoicesInResponse
}

impl Error
{   /// True for failures of the outbound call itself
    pub fn is_transport(&self) -> bool
    {   matches!(
          self
        , Error::HttpError(_)
          | Error::ApiError { .. }
          | Error::ParseError(_)
          | Error::Timeout
        )
    }

    /// True for startup-time configuration failures
    pub fn is_configuration(&self) -> bool
    {   matches!(
          self
        , Error::MissingConfiguration(_)
          | Error::InvalidConfiguration(_)
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingConfiguration(name) => {
              write!(f, "Missing configuration: {}", name)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError { status, body } => {
              write!(f, "API error ({}): {}", status, body)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else if e.is_decode()
        {   Error::ParseError(e.to_string())
        } else if let Some(status) = e.status()
        {   Error::ApiError
            {   status: status.as_u16()
              , body: e.to_string()
            }
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}
