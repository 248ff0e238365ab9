//! # carcare-core
//!
//! Domain types, traits, and error definitions for the carcare assistant.
//! This crate has no framework dependencies — it defines the contracts that
//! all other crates implement against.
//!
//! Every external boundary is a trait here: the LLM backend (`Provider`),
//! the embedding backend (`Embedder`), the catalog retrieval contract
//! (`Retriever`), and the agent tool interface (`Tool`). Implementations
//! live in their respective crates, which keeps the dependency graph
//! pointing inward and makes every seam mockable in tests.

pub mod error;
pub mod message;
pub mod provider;
pub mod retrieval;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{CatalogError, Error, ProviderError, Result, ToolError};
pub use message::{Conversation, ConversationId, Message, MessageToolCall, Role};
pub use provider::{
    EmbeddingRequest, EmbeddingResponse, Provider, ProviderRequest, ProviderResponse,
    ToolDefinition, Usage,
};
pub use retrieval::{Document, Embedder, Retriever};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult};
