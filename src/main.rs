//! ai-commenter server binary
//!
//! Environment (each also available as a flag):
//! - `OPENROUTER_API_URL`: chat completion endpoint (required)
//! - `OPENROUTER_API_KEY`: bearer secret (required)
//! - `OPENROUTER_MODEL`: model identifier
//! - `OPENROUTER_TIMEOUT_SECS`: outbound timeout
//! - `AI_COMMENTER_HOST` / `AI_COMMENTER_PORT`: listener
//! - `RUST_LOG`: log filter (default `ai_commenter=info`)

use std::sync::Arc;

use clap::Parser;
use log::{error, info};

use ai_commenter::config::{
  DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_API_URL
};
use ai_commenter::{create_router, CommentService, RelayConfig, ServerConfig};

#[derive(Parser)]
#[command(name = "ai-commenter")]
#[command(version)]
#[command(about = "Generates documentation comments through OpenRouter", long_about = None)]
struct Args
{   /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "AI_COMMENTER_HOST")]
    host: String
  , /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "AI_COMMENTER_PORT")]
    port: u16
  , /// Chat completion endpoint
    #[arg(long, env = "OPENROUTER_API_URL")]
    api_url: Option<String>
  , /// Bearer secret for the provider
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>
  , /// Model identifier sent with every request
    #[arg(long, default_value = DEFAULT_MODEL, env = "OPENROUTER_MODEL")]
    model: String
  , /// Outbound request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "OPENROUTER_TIMEOUT_SECS")]
    timeout_secs: u64
}

impl Args
{   fn relay_config(&self) -> Result<RelayConfig, ai_commenter::Error>
    {   let api_url = self.api_url.clone()
          .ok_or_else(|| {
            ai_commenter::Error::MissingConfiguration(
              ENV_API_URL.to_string()
            )
          })?;
        let api_key = self.api_key.clone()
          .ok_or_else(|| {
            ai_commenter::Error::MissingConfiguration(
              ENV_API_KEY.to_string()
            )
          })?;
        Ok(RelayConfig::new(api_url, api_key)
          .with_model(self.model.clone())
          .with_timeout_secs(self.timeout_secs))
    }

    fn server_config(&self) -> ServerConfig
    {   ServerConfig
        {   host: self.host.clone()
          , port: self.port
        }
    }
}

#[tokio::main]
async fn main()
{   env_logger::Builder::from_env(
      env_logger::Env::default()
        .default_filter_or("ai_commenter=info")
    ).init();

    let args = Args::parse();

    if let Err(e) = run(args).await
    {   error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>>
{   let relay_config = args.relay_config()?;
    let service = Arc::new(CommentService::new(relay_config)?);
    let server_config = args.server_config();

    let listener = tokio::net::TcpListener::bind(
      server_config.bind_addr()
    ).await?;

    info!("ai-commenter listening on http://{}", listener.local_addr()?);
    info!("  POST /api/comment           - Generate a doc comment");
    info!("  GET  /health                - Health check");
    info!("  GET  /api-docs/openapi.json - OpenAPI document");

    axum::serve(listener, create_router(service)).await?;
    Ok(())
}
