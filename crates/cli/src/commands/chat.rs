//! `carcare chat` — Interactive or single-message chat mode.

use carcare_agent::{AgentLoop, CAR_CARE_SYSTEM_PROMPT};
use carcare_catalog::CatalogSet;
use carcare_config::AppConfig;
use carcare_core::message::{Conversation, Message};
use carcare_providers::{OpenAiCompatProvider, ProviderEmbedder};
use carcare_tasks::CarCareCoordinator;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

pub async fn run(message: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Check for API keys early — give a clear error
    if !config.has_api_keys() {
        eprintln!();
        eprintln!("  ERROR: Missing API key(s)!");
        eprintln!();
        eprintln!("  Set these environment variables (or put them in a .env file):");
        eprintln!("    GROQ_API_KEY=gsk_...     (chat completions)");
        eprintln!("    NVIDIA_API_KEY=nvapi-... (embeddings)");
        eprintln!();
        eprintln!("  Or add them to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("Missing API keys. See above for setup instructions.".into());
    }

    let chat_key = config.chat_api_key.clone().unwrap_or_default();
    let embedding_key = config.embedding_api_key.clone().unwrap_or_default();

    let chat_provider: Arc<dyn carcare_core::provider::Provider> =
        Arc::new(OpenAiCompatProvider::groq(chat_key)?);
    let embedding_provider = Arc::new(OpenAiCompatProvider::nvidia(embedding_key)?);
    let embedder = Arc::new(ProviderEmbedder::new(
        embedding_provider,
        &config.embedding_model,
    ));

    info!(dir = %config.catalog.dir.display(), "Indexing catalogs");
    let catalogs = Arc::new(
        CatalogSet::build(
            &config.catalog.dir,
            embedder,
            config.catalog.top_k,
            config.catalog.snippet_chars,
        )
        .await
        .map_err(|e| format!("Failed to index catalogs: {e}"))?,
    );

    let coordinator = Arc::new(CarCareCoordinator::new(catalogs.clone()));
    let tools = Arc::new(carcare_tools::default_registry(catalogs, coordinator));

    let agent = AgentLoop::new(
        chat_provider,
        &config.chat_model,
        config.temperature,
        tools,
        CAR_CARE_SYSTEM_PROMPT,
    )
    .with_max_tokens(config.max_tokens)
    .with_max_iterations(config.agent.max_iterations);

    if let Some(msg) = message {
        // Single message mode
        let mut conv = Conversation::new();
        conv.push(Message::user(&msg));

        eprint!("  Thinking...");
        let response = agent.process(&mut conv).await?;
        eprint!("\r              \r");
        println!("{response}");
    } else {
        // Interactive mode
        println!();
        println!("  Car Care Assistant — Interactive Mode");
        println!();
        println!("  Model:     {}", config.chat_model);
        println!("  Catalogs:  {}", config.catalog.dir.display());
        println!();
        println!("  Describe your car trouble or ask about maintenance.");
        println!("  Type 'exit' or Ctrl+C to quit.");
        println!();

        let mut conv = Conversation::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        print!("  You > ");
        use std::io::Write;
        std::io::stdout().flush()?;

        while let Some(line) = lines.next_line().await? {
            let input = line.trim();
            if input.is_empty() {
                print!("  You > ");
                std::io::stdout().flush()?;
                continue;
            }
            if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
                break;
            }

            conv.push(Message::user(input));

            eprint!("  ...");
            match agent.process(&mut conv).await {
                Ok(response) => {
                    eprint!("\r     \r");
                    println!();
                    for line in response.lines() {
                        println!("  Assistant > {line}");
                    }
                    println!();
                }
                Err(e) => {
                    eprint!("\r     \r");
                    eprintln!("  [Error] {e}");
                    println!();
                }
            }

            print!("  You > ");
            std::io::stdout().flush()?;
        }

        println!();
        println!("  Goodbye!");
        println!();
    }

    Ok(())
}
