//! LLM and embedding provider implementations for the carcare assistant.
//!
//! The chat side talks to Groq and the embedding side talks to the NVIDIA
//! API; both expose OpenAI-compatible endpoints, so a single provider type
//! covers them (and any other OpenAI-compatible backend).

pub mod embedder;
pub mod openai_compat;

pub use embedder::ProviderEmbedder;
pub use openai_compat::OpenAiCompatProvider;
