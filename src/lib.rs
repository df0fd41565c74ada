//! ODE Relay
//!
//! Forwards an ordinary differential equation (and optional initial
//! conditions) to a chat-completion model and returns the model's
//! step-by-step solution text. Nothing is solved or checked locally.
//!
//! ## Module Structure
//!
//! - `config`: startup configuration (credential, upstream URL, bind address)
//! - `prompt`: system instruction and user-prompt templates
//! - `llm_client`: chat-completion wire types and client
//! - `error`: relay error taxonomy and its HTTP rendering
//! - `api`: handlers, router and server startup

pub mod api;
pub mod config;
pub mod error;
pub mod llm_client;
pub mod prompt;

pub use api::{create_router, run_server, RelayState, SolveRequest, SolveResponse};
pub use config::RelayConfig;
pub use error::{ErrorResponse, RelayError};
pub use llm_client::{ChatMessage, LlmClient};
pub use prompt::{build_messages, build_user_prompt, SYSTEM_PROMPT};
