//! Configuration for the provider relay and the HTTP listener

use serde::{Deserialize, Serialize};
use std::fmt;
use log::debug;

use crate::error::Error;

pub const ENV_API_URL: &str = "OPENROUTER_API_URL";
pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_MODEL: &str = "OPENROUTER_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "OPENROUTER_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Provider relay configuration, read-only after startup
#[derive(Clone, Serialize, Deserialize)]
pub struct RelayConfig
{   /// Chat completion endpoint
    pub api_url: String
  , /// Bearer secret sent with every call
    pub api_key: String
  , /// Model identifier placed in every payload
    pub model: String
  , /// Outbound request timeout in seconds
    pub timeout_secs: u64
}

impl RelayConfig
{   /// Create a config with the default model and timeout
    pub fn new(
      api_url: impl Into<String>
    , api_key: impl Into<String>
    ) -> Self
    {   RelayConfig
        {   api_url: api_url.into()
          , api_key: api_key.into()
          , model: DEFAULT_MODEL.to_string()
          , timeout_secs: DEFAULT_TIMEOUT_SECS
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self
    {   self.model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self
    {   self.timeout_secs = timeout_secs;
        self
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, Error>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
      F: Fn(&str) -> Option<String>
    {   debug!("Loading relay configuration");
        let api_url = lookup(ENV_API_URL)
          .ok_or_else(|| {
            Error::MissingConfiguration(ENV_API_URL.to_string())
          })?;
        let api_key = lookup(ENV_API_KEY)
          .ok_or_else(|| {
            Error::MissingConfiguration(ENV_API_KEY.to_string())
          })?;

        let mut config = RelayConfig::new(api_url, api_key);

        if let Some(model) = lookup(ENV_MODEL)
        {   config.model = model;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS)
        {   config.timeout_secs = raw.trim().parse()
              .map_err(|_| {
                Error::InvalidConfiguration(format!(
                  "{} must be a whole number of seconds, got {:?}"
                , ENV_TIMEOUT_SECS, raw
                ))
              })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject blank or unusable values
    pub fn validate(&self) -> Result<(), Error>
    {   if self.api_url.trim().is_empty()
        {   return Err(Error::MissingConfiguration(
              ENV_API_URL.to_string()
            ));
        }
        if self.api_key.trim().is_empty()
        {   return Err(Error::MissingConfiguration(
              ENV_API_KEY.to_string()
            ));
        }
        if !(self.api_url.starts_with("http://")
          || self.api_url.starts_with("https://"))
        {   return Err(Error::InvalidConfiguration(format!(
              "{} must be an http(s) URL, got {:?}"
            , ENV_API_URL, self.api_url
            )));
        }
        if self.model.trim().is_empty()
        {   return Err(Error::InvalidConfiguration(format!(
              "{} must not be blank", ENV_MODEL
            )));
        }
        if self.timeout_secs == 0
        {   return Err(Error::InvalidConfiguration(format!(
              "{} must be greater than zero", ENV_TIMEOUT_SECS
            )));
        }
        Ok(())
    }
}

// The key stays out of logs.
impl fmt::Debug for RelayConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("RelayConfig")
          .field("api_url", &self.api_url)
          .field("api_key", &"<redacted>")
          .field("model", &self.model)
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig
{   pub host: String
  , pub port: u16
}

impl ServerConfig
{   pub fn bind_addr(&self) -> String
    {   format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig
{   fn default() -> Self
    {   ServerConfig
        {   host: "0.0.0.0".to_string()
          , port: 8080
        }
    }
}
