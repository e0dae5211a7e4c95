//! Documentation-comment relay.
//!
//! A caller posts a code snippet with its programming language and the
//! natural language wanted for the comment. The relay builds a chat
//! completion payload for OpenRouter, makes one outbound call, and
//! returns the first choice as a `CommentResult`.
//!
//! ```text
//! CommentRequest ─> adapter::build_payload ─> OpenRouterClient::send
//!                                                   │
//! CommentResult  <─ normalize::normalize  <─────────┘
//! ```
//!
//! Every failure after startup is returned as `success: false`;
//! configuration errors surface from `CommentService::new`.

pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod style;
pub mod adapter;
pub mod normalize;
pub mod service;
pub mod server;

pub use config::{RelayConfig, ServerConfig};
pub use error::Error;
pub use request::{CommentRequest, CommentResult};
pub use service::CommentService;
pub use server::create_router;

/// Comment text, or the typed reason there is none
pub type SendCommentReply = Result<String, crate::error::Error>;
