//! The catalog-access context: six indexed collections behind one handle.
//!
//! `CatalogSet` is constructed once at startup and passed explicitly into
//! the tool layer and the coordinator — no module-level globals. Each named
//! retrieval operation returns the top-k hits; `render` produces the
//! tool-facing string form (a list of 200-character snippets).

use crate::car_models::{self, CarModel};
use crate::index::CatalogIndex;
use crate::loader::load_catalog_documents;
use carcare_core::error::CatalogError;
use carcare_core::retrieval::{Document, Embedder, Retriever};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The six catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Problems,
    Parts,
    Diagnostics,
    CostEstimates,
    Maintenance,
    CarModels,
}

impl CatalogKind {
    /// The catalog's file name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            CatalogKind::Problems => "problems.json",
            CatalogKind::Parts => "parts.json",
            CatalogKind::Diagnostics => "diagnostics.json",
            CatalogKind::CostEstimates => "cost_estimates.json",
            CatalogKind::Maintenance => "maintenance.json",
            CatalogKind::CarModels => "cars_models.json",
        }
    }

    pub const ALL: [CatalogKind; 6] = [
        CatalogKind::Problems,
        CatalogKind::Parts,
        CatalogKind::Diagnostics,
        CatalogKind::CostEstimates,
        CatalogKind::Maintenance,
        CatalogKind::CarModels,
    ];
}

/// All six catalog indices plus the direct car-model lookup.
#[derive(Debug)]
pub struct CatalogSet {
    problems: CatalogIndex,
    parts: CatalogIndex,
    diagnostics: CatalogIndex,
    cost_estimates: CatalogIndex,
    maintenance: CatalogIndex,
    car_models: CatalogIndex,
    car_models_path: PathBuf,
    snippet_chars: usize,
}

impl CatalogSet {
    /// Load and index all six catalogs from `dir`.
    ///
    /// One-shot batch operation; any missing or malformed file fails the
    /// whole build.
    pub async fn build(
        dir: &Path,
        embedder: Arc<dyn Embedder>,
        top_k: usize,
        snippet_chars: usize,
    ) -> Result<Self, CatalogError> {
        async fn build_index(
            dir: &Path,
            kind: CatalogKind,
            embedder: Arc<dyn Embedder>,
            top_k: usize,
        ) -> Result<CatalogIndex, CatalogError> {
            let documents = load_catalog_documents(&dir.join(kind.file_name()))?;
            let name = kind.file_name().trim_end_matches(".json");
            CatalogIndex::build(name, documents, embedder, top_k).await
        }

        Ok(Self {
            problems: build_index(dir, CatalogKind::Problems, embedder.clone(), top_k).await?,
            parts: build_index(dir, CatalogKind::Parts, embedder.clone(), top_k).await?,
            diagnostics: build_index(dir, CatalogKind::Diagnostics, embedder.clone(), top_k)
                .await?,
            cost_estimates: build_index(dir, CatalogKind::CostEstimates, embedder.clone(), top_k)
                .await?,
            maintenance: build_index(dir, CatalogKind::Maintenance, embedder.clone(), top_k)
                .await?,
            car_models: build_index(dir, CatalogKind::CarModels, embedder, top_k).await?,
            car_models_path: dir.join(CatalogKind::CarModels.file_name()),
            snippet_chars,
        })
    }

    fn index(&self, kind: CatalogKind) -> &CatalogIndex {
        match kind {
            CatalogKind::Problems => &self.problems,
            CatalogKind::Parts => &self.parts,
            CatalogKind::Diagnostics => &self.diagnostics,
            CatalogKind::CostEstimates => &self.cost_estimates,
            CatalogKind::Maintenance => &self.maintenance,
            CatalogKind::CarModels => &self.car_models,
        }
    }

    /// Raw retrieval against one collection: top-k documents, best first.
    pub async fn search(
        &self,
        kind: CatalogKind,
        query: &str,
    ) -> Result<Vec<Document>, CatalogError> {
        self.index(kind).retrieve(query).await
    }

    /// Snippets (first `snippet_chars` characters) of each document.
    pub fn snippets(&self, documents: &[Document]) -> Vec<String> {
        documents
            .iter()
            .map(|d| d.snippet(self.snippet_chars))
            .collect()
    }

    /// The tool-facing rendering of a result set: the snippet list in its
    /// `Debug` form, e.g. `["first hit…", "second hit…"]`.
    pub fn render(&self, documents: &[Document]) -> String {
        format!("{:?}", self.snippets(documents))
    }

    async fn retrieve_rendered(
        &self,
        kind: CatalogKind,
        query: &str,
    ) -> Result<String, CatalogError> {
        let docs = self.search(kind, query).await?;
        Ok(self.render(&docs))
    }

    /// Searches the problem catalog for relevant automotive problems.
    pub async fn retrieve_problems(&self, query: &str) -> Result<String, CatalogError> {
        self.retrieve_rendered(CatalogKind::Problems, query).await
    }

    /// Searches the parts catalog for relevant parts.
    pub async fn retrieve_parts(&self, query: &str) -> Result<String, CatalogError> {
        self.retrieve_rendered(CatalogKind::Parts, query).await
    }

    /// Finds potential causes for the given symptoms in the diagnostics
    /// catalog.
    pub async fn diagnose_car_problem(&self, symptoms: &str) -> Result<String, CatalogError> {
        self.retrieve_rendered(CatalogKind::Diagnostics, symptoms)
            .await
    }

    /// Finds cost estimates for a given problem or repair.
    pub async fn estimate_repair_cost(&self, problem: &str) -> Result<String, CatalogError> {
        self.retrieve_rendered(CatalogKind::CostEstimates, problem)
            .await
    }

    /// Retrieves the recommended maintenance schedule for a mileage.
    /// The mileage is queried in its string form.
    pub async fn get_maintenance_schedule(&self, mileage: u32) -> Result<String, CatalogError> {
        self.retrieve_rendered(CatalogKind::Maintenance, &mileage.to_string())
            .await
    }

    /// Searches the car-model catalog by free text.
    pub async fn search_car_models(&self, query: &str) -> Result<String, CatalogError> {
        self.retrieve_rendered(CatalogKind::CarModels, query).await
    }

    /// Exact car-model lookup (file scan, not vector search).
    ///
    /// Re-reads the catalog file on every call. `None` means no record
    /// matched.
    pub fn lookup_car_model(
        &self,
        mileage: u32,
        make: &str,
        model: &str,
        year: i32,
    ) -> Result<Option<CarModel>, CatalogError> {
        car_models::get_car_model_info(&self.car_models_path, mileage, make, model, year)
    }

    /// Document counts per collection, for health reporting.
    pub fn collection_sizes(&self) -> Vec<(&str, usize)> {
        CatalogKind::ALL
            .iter()
            .map(|kind| {
                let idx = self.index(*kind);
                (idx.name(), idx.len())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_embedder::HashEmbedder;

    async fn sample_set() -> (tempfile::TempDir, CatalogSet) {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            (
                "problems.json",
                r#"[{"problem": "Squealing brakes when stopping"}, {"problem": "Engine overheating in traffic"}]"#,
            ),
            (
                "parts.json",
                r#"[{"part": "Brake pad set", "price": 45}, {"part": "Radiator hose", "price": 20}]"#,
            ),
            (
                "diagnostics.json",
                r#"[{"symptom": "grinding noise", "cause": "Worn brake pads"}, {"symptom": "white smoke", "cause": "Coolant leak into cylinder"}]"#,
            ),
            (
                "cost_estimates.json",
                r#"[{"repair": "Brake pad replacement", "cost": "150-300 USD"}]"#,
            ),
            (
                "maintenance.json",
                r#"[{"mileage": 60000, "tasks": "Replace transmission fluid and inspect brakes"}]"#,
            ),
            (
                "cars_models.json",
                r#"[{"car_make": "Toyota", "car_model": "Corolla", "car_year": 2015, "common_issues": ["Brake wear", "Oil leak"], "estimated_time": "2 hours"}]"#,
            ),
        ];
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }

        let set = CatalogSet::build(dir.path(), Arc::new(HashEmbedder::new()), 5, 200)
            .await
            .unwrap();
        (dir, set)
    }

    #[tokio::test]
    async fn builds_all_six_collections() {
        let (_dir, set) = sample_set().await;
        let sizes = set.collection_sizes();
        assert_eq!(sizes.len(), 6);
        assert!(sizes.iter().all(|(_, n)| *n >= 1));
    }

    #[tokio::test]
    async fn rendered_output_is_a_debug_list_of_snippets() {
        let (_dir, set) = sample_set().await;
        let out = set.retrieve_problems("brake noise").await.unwrap();
        assert!(out.starts_with('['));
        assert!(out.ends_with(']'));
        assert!(out.contains("brakes"));
    }

    #[tokio::test]
    async fn snippets_truncate_long_documents() {
        let dir = tempfile::tempdir().unwrap();
        let long_field = "x".repeat(400);
        for kind in CatalogKind::ALL {
            std::fs::write(
                dir.path().join(kind.file_name()),
                format!(r#"[{{"text": "{long_field}"}}]"#),
            )
            .unwrap();
        }
        let set = CatalogSet::build(dir.path(), Arc::new(HashEmbedder::new()), 5, 200)
            .await
            .unwrap();

        let docs = set.search(CatalogKind::Problems, "x").await.unwrap();
        let snippets = set.snippets(&docs);
        assert_eq!(snippets[0].chars().count(), 200);
    }

    #[tokio::test]
    async fn maintenance_schedule_queries_by_mileage_string() {
        let (_dir, set) = sample_set().await;
        let out = set.get_maintenance_schedule(60000).await.unwrap();
        assert!(out.starts_with('['));
    }

    #[tokio::test]
    async fn lookup_goes_through_to_the_file() {
        let (_dir, set) = sample_set().await;
        let car = set
            .lookup_car_model(0, "toyota", "corolla", 2015)
            .unwrap()
            .unwrap();
        assert_eq!(car.estimated_time, "2 hours");
        assert!(set.lookup_car_model(0, "Mazda", "3", 2020).unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_catalog_file_fails_build() {
        let dir = tempfile::tempdir().unwrap();
        // Only one of the six files present
        std::fs::write(dir.path().join("problems.json"), "[]").unwrap();

        let err = CatalogSet::build(dir.path(), Arc::new(HashEmbedder::new()), 5, 200)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::FileRead { .. }));
    }
}
