//! brief_llms — provider-agnostic text-generation SDK.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                ProviderRegistry                │
//! │  ┌────────────────────────────────────────┐   │
//! │  │  HashMap<String, Arc<dyn Provider>>     │   │
//! │  └────────────────────────────────────────┘   │
//! │                     │                          │
//! │          ┌──────────┼──────────┐              │
//! │          ▼                     ▼              │
//! │   ┌───────────┐         ┌──────────┐         │
//! │   │  OpenAI    │         │ (future) │         │
//! │   │  Provider  │         │          │         │
//! │   └───────────┘         └──────────┘         │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brief_llms::{OpenAiProvider, Provider, ProviderRegistry};
//!
//! let provider = OpenAiProvider::from_env().unwrap();
//! let registry = ProviderRegistry::new().register("openai", provider);
//! ```

pub mod error;
pub mod provider;
pub mod providers;
pub mod types;


// Re-export core abstractions
pub use error::{Error, Result};
pub use provider::{Provider, ProviderRegistry};

// Re-export provider implementations
pub use providers::OpenAiProvider;

// Re-export commonly used types
pub use types::{GenerateOptions, GenerateRequest, GenerateResponse, Headers, Message, Role, Usage};
