//! `carcare doctor` — Diagnose configuration and catalog health.

use carcare_catalog::{CatalogKind, CatalogSet, HashEmbedder};
use carcare_config::AppConfig;
use std::sync::Arc;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("carcare doctor — system diagnostics");
    println!("===================================\n");

    let mut issues = 0;

    // Check config
    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  [ok]   Config loaded");
            Some(config)
        }
        Err(e) => {
            println!("  [fail] Config invalid: {e}");
            issues += 1;
            None
        }
    };

    if let Some(config) = &config {
        // Check API keys
        if config.chat_api_key.is_some() {
            println!("  [ok]   Chat API key configured");
        } else {
            println!("  [warn] No chat API key — set GROQ_API_KEY");
            issues += 1;
        }
        if config.embedding_api_key.is_some() {
            println!("  [ok]   Embedding API key configured");
        } else {
            println!("  [warn] No embedding API key — set NVIDIA_API_KEY");
            issues += 1;
        }

        // Check catalog files
        let dir = &config.catalog.dir;
        if dir.is_dir() {
            let mut missing = 0;
            for kind in CatalogKind::ALL {
                if !dir.join(kind.file_name()).is_file() {
                    println!("  [fail] Missing catalog file: {}", kind.file_name());
                    missing += 1;
                }
            }
            if missing == 0 {
                // Index with the offline embedder so no API key is needed
                match CatalogSet::build(
                    dir,
                    Arc::new(HashEmbedder::new()),
                    config.catalog.top_k,
                    config.catalog.snippet_chars,
                )
                .await
                {
                    Ok(set) => {
                        println!("  [ok]   All six catalogs parse and index:");
                        for (name, count) in set.collection_sizes() {
                            println!("           {name}: {count} record(s)");
                        }
                    }
                    Err(e) => {
                        println!("  [fail] Catalog indexing failed: {e}");
                        issues += 1;
                    }
                }
            } else {
                issues += missing;
            }
        } else {
            println!(
                "  [fail] Catalog directory not found: {}",
                dir.display()
            );
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  All checks passed.");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
