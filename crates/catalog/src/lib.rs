//! Catalog loading, indexing, and retrieval for the carcare assistant.
//!
//! Six JSON catalogs (problems, parts, diagnostics, cost estimates,
//! maintenance schedules, car models) are embedded and indexed once at
//! startup. Retrieval is cosine similarity over the stored embeddings with
//! a fixed top-k. The car-model catalog is additionally scanned directly
//! (no vector search) for exact make/model/year lookups.

pub mod car_models;
pub mod hash_embedder;
pub mod index;
pub mod loader;
pub mod set;
pub mod vector;

pub use car_models::{get_car_model_info, CarModel};
pub use hash_embedder::HashEmbedder;
pub use index::CatalogIndex;
pub use loader::load_catalog_documents;
pub use set::{CatalogKind, CatalogSet};
pub use vector::{cosine_similarity, rank_documents};
